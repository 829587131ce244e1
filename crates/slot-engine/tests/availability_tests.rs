//! Tests for single-day slot generation.

use slot_engine::availability::{
    compute_available_slots, find_available_slots, sort_chronologically, AvailableSlot,
    SlotConfig, SlotRequest,
};
use slot_engine::conflict::OverlapPolicy;
use slot_engine::error::SlotError;
use slot_engine::interval::{Appointment, BlockingHours, BusinessHours};
use slot_engine::time::TimeOfDay;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn t(s: &str) -> TimeOfDay {
    TimeOfDay::parse(s).unwrap()
}

fn open(start: &str, end: &str, capacity: u32) -> BusinessHours {
    BusinessHours::new(t(start), t(end), capacity).unwrap()
}

fn block(start: &str, end: &str) -> BlockingHours {
    BlockingHours::new(t(start), t(end)).unwrap()
}

fn booked(start: &str, end: &str) -> Appointment {
    Appointment::new(t(start), t(end)).unwrap()
}

/// Render slots as `("HH:MM", "HH:MM")` pairs in 24-hour form for compact asserts.
fn spans(slots: &[AvailableSlot]) -> Vec<(String, String)> {
    let hm = |t: TimeOfDay| format!("{:02}:{:02}", t.minutes() / 60, t.minutes() % 60);
    slots
        .iter()
        .map(|s| (hm(s.start()), hm(s.end())))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

// ── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn open_window_yields_every_half_hour_start() {
    let hours = vec![open("09:00", "11:00", 2)];

    let slots = find_available_slots(60, 1, &hours, &[], &[]).unwrap();

    assert_eq!(
        spans(&slots),
        pairs(&[("09:00", "10:00"), ("09:30", "10:30"), ("10:00", "11:00")])
    );
}

#[test]
fn appointment_excludes_slots_with_an_endpoint_inside_it() {
    let hours = vec![open("09:00", "11:00", 2)];
    let appointments = vec![booked("09:00", "10:00")];

    let slots = find_available_slots(60, 1, &hours, &[], &appointments).unwrap();

    assert_eq!(spans(&slots), pairs(&[("10:00", "11:00")]));
}

#[test]
fn insufficient_capacity_yields_nothing() {
    let hours = vec![open("09:00", "10:00", 1)];

    let slots = find_available_slots(60, 2, &hours, &[], &[]).unwrap();

    assert!(slots.is_empty());
}

#[test]
fn blocking_window_rejects_candidates_starting_inside_it() {
    // Block 09:15-09:45. Candidates start at 09:00, 09:30, 10:00.
    // Only 09:30 starts inside the block.
    let hours = vec![open("09:00", "10:30", 1)];
    let blocks = vec![block("09:15", "09:45")];

    let slots = find_available_slots(30, 1, &hours, &blocks, &[]).unwrap();

    assert_eq!(
        spans(&slots),
        pairs(&[("09:00", "09:30"), ("10:00", "10:30")])
    );
}

// ── Edge cases ──────────────────────────────────────────────────────────────

#[test]
fn step_is_independent_of_duration() {
    let hours = vec![open("09:00", "12:00", 1)];

    let slots = find_available_slots(120, 1, &hours, &[], &[]).unwrap();

    assert_eq!(
        spans(&slots),
        pairs(&[("09:00", "11:00"), ("09:30", "11:30"), ("10:00", "12:00")])
    );
}

#[test]
fn window_shorter_than_duration_yields_nothing() {
    let hours = vec![open("09:00", "09:45", 5)];

    let slots = find_available_slots(60, 1, &hours, &[], &[]).unwrap();

    assert!(slots.is_empty());
}

#[test]
fn exact_fit_yields_one_slot() {
    let hours = vec![open("09:00", "10:00", 1)];

    let slots = find_available_slots(60, 1, &hours, &[], &[]).unwrap();

    assert_eq!(spans(&slots), pairs(&[("09:00", "10:00")]));
}

#[test]
fn no_business_hours_yields_nothing() {
    let slots = find_available_slots(30, 1, &[], &[block("09:00", "10:00")], &[]).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn windows_are_processed_in_input_order_without_sorting() {
    let hours = vec![open("02:00 pm", "03:00 pm", 1), open("09:00 am", "10:00 am", 1)];

    let slots = find_available_slots(60, 1, &hours, &[], &[]).unwrap();

    assert_eq!(spans(&slots), pairs(&[("14:00", "15:00"), ("09:00", "10:00")]));
}

#[test]
fn overlapping_windows_each_emit_their_own_candidates() {
    let hours = vec![open("09:00", "10:00", 1), open("09:00", "10:00", 3)];

    let slots = find_available_slots(60, 1, &hours, &[], &[]).unwrap();

    assert_eq!(
        spans(&slots),
        pairs(&[("09:00", "10:00"), ("09:00", "10:00")])
    );
}

#[test]
fn capacity_is_judged_per_window() {
    let hours = vec![open("09:00", "10:00", 1), open("09:00", "10:00", 3)];

    let slots = find_available_slots(60, 2, &hours, &[], &[]).unwrap();

    assert_eq!(spans(&slots), pairs(&[("09:00", "10:00")]));
}

#[test]
fn slot_ending_when_appointment_starts_is_rejected() {
    // The end point lies at the appointment's start, which is inside [start, end).
    let hours = vec![open("08:00", "09:00", 1)];
    let appointments = vec![booked("09:00", "10:00")];

    let slots = find_available_slots(60, 1, &hours, &[], &appointments).unwrap();

    assert!(slots.is_empty());
}

#[test]
fn slot_starting_when_appointment_ends_is_kept() {
    let hours = vec![open("10:00", "11:00", 1)];
    let appointments = vec![booked("09:00", "10:00")];

    let slots = find_available_slots(60, 1, &hours, &[], &appointments).unwrap();

    assert_eq!(spans(&slots), pairs(&[("10:00", "11:00")]));
}

#[test]
fn endpoint_policy_misses_appointment_strictly_inside_slot() {
    let hours = vec![open("09:00", "11:00", 1)];
    let appointments = vec![booked("09:15", "09:45")];

    let slots = find_available_slots(120, 1, &hours, &[], &appointments).unwrap();

    assert_eq!(spans(&slots), pairs(&[("09:00", "11:00")]));
}

#[test]
fn interval_policy_rejects_any_overlap() {
    let hours = vec![open("09:00", "11:00", 1)];
    let appointments = vec![booked("09:15", "09:45")];
    let config = SlotConfig {
        overlap: OverlapPolicy::Interval,
        ..SlotConfig::default()
    };
    let request = SlotRequest::new(60, 1).unwrap();

    let slots = compute_available_slots(&request, &hours, &[], &appointments, &config).unwrap();

    assert_eq!(spans(&slots), pairs(&[("10:00", "11:00")]));
}

#[test]
fn interval_policy_also_applies_to_blocking_hours() {
    let hours = vec![open("09:00", "10:30", 1)];
    let blocks = vec![block("09:15", "09:45")];
    let config = SlotConfig {
        overlap: OverlapPolicy::Interval,
        ..SlotConfig::default()
    };
    let request = SlotRequest::new(30, 1).unwrap();

    let slots = compute_available_slots(&request, &hours, &blocks, &[], &config).unwrap();

    assert_eq!(spans(&slots), pairs(&[("10:00", "10:30")]));
}

#[test]
fn custom_step_changes_candidate_spacing() {
    let hours = vec![open("09:00", "10:00", 1)];
    let config = SlotConfig {
        step_minutes: 15,
        ..SlotConfig::default()
    };
    let request = SlotRequest::new(30, 1).unwrap();

    let slots = compute_available_slots(&request, &hours, &[], &[], &config).unwrap();

    assert_eq!(
        spans(&slots),
        pairs(&[("09:00", "09:30"), ("09:15", "09:45"), ("09:30", "10:00")])
    );
}

#[test]
fn window_closing_at_midnight_offers_last_slot() {
    let hours = vec![BusinessHours::new(t("11:00 pm"), TimeOfDay::END_OF_DAY, 1).unwrap()];

    let slots = find_available_slots(60, 1, &hours, &[], &[]).unwrap();

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].end(), TimeOfDay::END_OF_DAY);
    assert_eq!(slots[0].to_record().end_time, "12:00 am");
}

#[test]
fn duration_longer_than_a_day_yields_nothing() {
    let hours = vec![open("09:00", "17:00", 1)];
    let slots = find_available_slots(i64::from(u32::MAX), 1, &hours, &[], &[]).unwrap();
    assert!(slots.is_empty());
}

// ── Validation ──────────────────────────────────────────────────────────────

#[test]
fn zero_or_negative_duration_is_rejected() {
    assert_eq!(SlotRequest::new(0, 1), Err(SlotError::InvalidDuration(0)));
    assert_eq!(SlotRequest::new(-30, 1), Err(SlotError::InvalidDuration(-30)));
}

#[test]
fn zero_or_negative_quantity_is_rejected() {
    assert_eq!(SlotRequest::new(30, 0), Err(SlotError::InvalidQuantity(0)));
    assert_eq!(SlotRequest::new(30, -2), Err(SlotError::InvalidQuantity(-2)));
}

#[test]
fn zero_step_is_rejected() {
    let hours = vec![open("09:00", "10:00", 1)];
    let config = SlotConfig {
        step_minutes: 0,
        ..SlotConfig::default()
    };
    let request = SlotRequest::new(30, 1).unwrap();

    let result = compute_available_slots(&request, &hours, &[], &[], &config);

    assert_eq!(result, Err(SlotError::InvalidStep(0)));
}

#[test]
fn empty_result_is_ok_not_an_error() {
    let result = find_available_slots(30, 1, &[], &[], &[]);
    assert_eq!(result, Ok(vec![]));
}

// ── Result assembly ─────────────────────────────────────────────────────────

#[test]
fn sort_chronologically_orders_across_windows() {
    let hours = vec![open("02:00 pm", "03:00 pm", 1), open("09:00 am", "10:00 am", 1)];
    let mut slots = find_available_slots(30, 1, &hours, &[], &[]).unwrap();

    sort_chronologically(&mut slots);

    assert_eq!(
        spans(&slots),
        pairs(&[
            ("09:00", "09:30"),
            ("09:30", "10:00"),
            ("14:00", "14:30"),
            ("14:30", "15:00"),
        ])
    );
}

#[test]
fn default_config_uses_thirty_minute_endpoint_scan() {
    let config = SlotConfig::default();
    assert_eq!(config.step_minutes, 30);
    assert_eq!(config.overlap, OverlapPolicy::Endpoint);
}

#[test]
fn config_deserializes_with_defaults_for_missing_fields() {
    let config: SlotConfig = serde_json::from_str(r#"{"overlap":"interval"}"#).unwrap();
    assert_eq!(config.step_minutes, 30);
    assert_eq!(config.overlap, OverlapPolicy::Interval);
}
