//! Half-open time intervals and the three interval kinds the engine consumes.
//!
//! Every constructor enforces `start < end`, so a malformed interval can never
//! reach the engine.

use std::fmt;

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

/// Which input collection an interval belongs to. Used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalKind {
    BusinessHours,
    BlockingHours,
    Appointment,
    Slot,
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntervalKind::BusinessHours => "business-hours",
            IntervalKind::BlockingHours => "blocking-hours",
            IntervalKind::Appointment => "appointment",
            IntervalKind::Slot => "slot",
        };
        f.write_str(name)
    }
}

/// A half-open range `[start, end)` within the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl Interval {
    /// Returns `None` unless `start < end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Option<Self> {
        (start < end).then_some(Interval { start, end })
    }

    fn checked(kind: IntervalKind, start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        Self::new(start, end).ok_or_else(|| SlotError::InvalidInterval {
            kind,
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }

    /// `start <= t < end`.
    pub fn contains(&self, t: TimeOfDay) -> bool {
        self.start <= t && t < self.end
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// Touching intervals do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// An open window and the number of simultaneous bookings it can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusinessHours {
    interval: Interval,
    capacity: u32,
}

impl BusinessHours {
    pub fn new(start: TimeOfDay, end: TimeOfDay, capacity: u32) -> Result<Self> {
        Ok(BusinessHours {
            interval: Interval::checked(IntervalKind::BusinessHours, start, end)?,
            capacity,
        })
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

/// A blackout window during which no booking may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockingHours {
    interval: Interval,
}

impl BlockingHours {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        Ok(BlockingHours {
            interval: Interval::checked(IntervalKind::BlockingHours, start, end)?,
        })
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }
}

/// An existing booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Appointment {
    interval: Interval,
}

impl Appointment {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        Ok(Appointment {
            interval: Interval::checked(IntervalKind::Appointment, start, end)?,
        })
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }
}
