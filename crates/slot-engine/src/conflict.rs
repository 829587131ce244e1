//! Candidate rejection against blackout windows and existing bookings.
//!
//! Two policies are supported. [`OverlapPolicy::Endpoint`] tests single time
//! points for containment: a candidate is blocked when its start lies inside a
//! blocking window, and conflicts with an appointment when its start or its end
//! lies inside it. A candidate that strictly contains an appointment passes this
//! test. [`OverlapPolicy::Interval`] rejects on any half-open overlap instead.

use serde::{Deserialize, Serialize};

use crate::interval::{Appointment, BlockingHours, Interval};

/// How a candidate slot is tested against blocking hours and appointments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Point containment of the candidate's start (blocking hours) or of its
    /// start and end (appointments).
    #[default]
    Endpoint,
    /// Full interval overlap: `a.start < b.end && b.start < a.end`.
    Interval,
}

/// Why a candidate slot was not offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The candidate collides with the blocking window at this index.
    Blocked { index: usize },
    /// The candidate collides with the appointment at this index.
    Booked { index: usize },
}

/// Check one candidate against every blocking window, then every appointment.
///
/// Returns the first collision found, or `None` if the candidate is free.
pub fn find_rejection(
    candidate: &Interval,
    blocking_hours: &[BlockingHours],
    appointments: &[Appointment],
    policy: OverlapPolicy,
) -> Option<Rejection> {
    if let Some(index) = blocking_hours
        .iter()
        .position(|b| is_blocked(candidate, b.interval(), policy))
    {
        return Some(Rejection::Blocked { index });
    }

    appointments
        .iter()
        .position(|a| is_booked(candidate, a.interval(), policy))
        .map(|index| Rejection::Booked { index })
}

fn is_blocked(candidate: &Interval, blocking: &Interval, policy: OverlapPolicy) -> bool {
    match policy {
        OverlapPolicy::Endpoint => blocking.contains(candidate.start()),
        OverlapPolicy::Interval => blocking.overlaps(candidate),
    }
}

fn is_booked(candidate: &Interval, booking: &Interval, policy: OverlapPolicy) -> bool {
    match policy {
        OverlapPolicy::Endpoint => {
            booking.contains(candidate.start()) || booking.contains(candidate.end())
        }
        OverlapPolicy::Interval => booking.overlaps(candidate),
    }
}
