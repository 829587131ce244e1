//! Bookable slot generation for a single day.
//!
//! Each business-hour window is scanned on its own: a cursor starts at the
//! window's start and advances by a fixed step, and every `[cursor, cursor +
//! duration)` that fits inside the window becomes a candidate. Candidates that
//! start in a blackout, collide with an existing booking, or belong to a window
//! without enough capacity are dropped. Per-window results are concatenated in
//! the order the windows were given; nothing is sorted or deduplicated.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::conflict::{self, OverlapPolicy};
use crate::error::{Result, SlotError};
use crate::interval::{Appointment, BlockingHours, BusinessHours, Interval};
use crate::records::SlotRecord;
use crate::time::TimeOfDay;

/// Candidate start times are this many minutes apart unless configured otherwise.
pub const DEFAULT_STEP_MINUTES: u32 = 30;

/// Engine parameters that are not part of an individual request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Distance between consecutive candidate starts within a window.
    pub step_minutes: u32,
    /// How candidates are tested against blocking hours and appointments.
    pub overlap: OverlapPolicy,
}

impl Default for SlotConfig {
    fn default() -> Self {
        SlotConfig {
            step_minutes: DEFAULT_STEP_MINUTES,
            overlap: OverlapPolicy::default(),
        }
    }
}

impl SlotConfig {
    pub fn validate(&self) -> Result<()> {
        if self.step_minutes == 0 {
            return Err(SlotError::InvalidStep(self.step_minutes));
        }
        Ok(())
    }
}

/// What the caller wants to book: a slot length and how many units of
/// capacity it needs at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRequest {
    duration_minutes: u32,
    quantity: u32,
}

impl SlotRequest {
    /// Validate a caller-supplied duration and quantity.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidDuration` if `duration_minutes <= 0` and
    /// `SlotError::InvalidQuantity` if `quantity <= 0`.
    pub fn new(duration_minutes: i64, quantity: i64) -> Result<Self> {
        let duration_minutes = u32::try_from(duration_minutes)
            .ok()
            .filter(|&d| d > 0)
            .ok_or(SlotError::InvalidDuration(duration_minutes))?;
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|&q| q > 0)
            .ok_or(SlotError::InvalidQuantity(quantity))?;
        Ok(SlotRequest {
            duration_minutes,
            quantity,
        })
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// A bookable slot. Slots built by the engine span exactly the requested duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "SlotRecord", try_from = "SlotRecord")]
pub struct AvailableSlot {
    interval: Interval,
}

impl AvailableSlot {
    /// Returns `None` unless `start < end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Option<Self> {
        Interval::new(start, end).map(|interval| AvailableSlot { interval })
    }

    pub fn start(&self) -> TimeOfDay {
        self.interval.start()
    }

    pub fn end(&self) -> TimeOfDay {
        self.interval.end()
    }

    pub fn duration_minutes(&self) -> u32 {
        self.interval.duration_minutes()
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn to_record(&self) -> SlotRecord {
        SlotRecord::from(*self)
    }
}

/// Compute every bookable slot for one day.
///
/// # Arguments
///
/// * `request` — Slot length and required capacity.
/// * `business_hours` — Open windows, in any order. Output follows this order.
/// * `blocking_hours` — Blackout windows.
/// * `appointments` — Existing bookings.
/// * `config` — Step and overlap policy.
///
/// # Errors
/// Returns `SlotError::InvalidStep` if `config.step_minutes` is zero. Interval
/// validity is already guaranteed by the interval constructors.
pub fn compute_available_slots(
    request: &SlotRequest,
    business_hours: &[BusinessHours],
    blocking_hours: &[BlockingHours],
    appointments: &[Appointment],
    config: &SlotConfig,
) -> Result<Vec<AvailableSlot>> {
    config.validate()?;

    let slots: Vec<AvailableSlot> = business_hours
        .iter()
        .flat_map(|window| slots_in_window(window, request, blocking_hours, appointments, config))
        .collect();

    debug!(
        duration = request.duration_minutes(),
        quantity = request.quantity(),
        windows = business_hours.len(),
        slots = slots.len(),
        "computed available slots"
    );

    Ok(slots)
}

/// Convenience entry point with raw integers and the default [`SlotConfig`].
pub fn find_available_slots(
    duration_minutes: i64,
    quantity: i64,
    business_hours: &[BusinessHours],
    blocking_hours: &[BlockingHours],
    appointments: &[Appointment],
) -> Result<Vec<AvailableSlot>> {
    let request = SlotRequest::new(duration_minutes, quantity)?;
    compute_available_slots(
        &request,
        business_hours,
        blocking_hours,
        appointments,
        &SlotConfig::default(),
    )
}

/// Stable sort by `(start, end)`. Slots from different windows with the same
/// bounds keep their relative order.
pub fn sort_chronologically(slots: &mut [AvailableSlot]) {
    slots.sort_by_key(|slot| (slot.start(), slot.end()));
}

fn slots_in_window(
    window: &BusinessHours,
    request: &SlotRequest,
    blocking_hours: &[BlockingHours],
    appointments: &[Appointment],
    config: &SlotConfig,
) -> Vec<AvailableSlot> {
    let bounds = window.interval();

    if window.capacity() < request.quantity() {
        debug!(
            window = %bounds,
            capacity = window.capacity(),
            quantity = request.quantity(),
            "window lacks capacity"
        );
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut next_start = Some(bounds.start());

    while let Some(start) = next_start {
        let candidate = match start
            .checked_add_minutes(request.duration_minutes())
            .filter(|&end| end <= bounds.end())
            .and_then(|end| AvailableSlot::new(start, end))
        {
            Some(candidate) => candidate,
            None => break,
        };

        match conflict::find_rejection(
            candidate.interval(),
            blocking_hours,
            appointments,
            config.overlap,
        ) {
            Some(reason) => trace!(slot = %candidate.interval(), ?reason, "candidate rejected"),
            None => slots.push(candidate),
        }

        next_start = start.checked_add_minutes(config.step_minutes);
    }

    slots
}
