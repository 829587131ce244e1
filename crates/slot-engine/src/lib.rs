//! # slot-engine
//!
//! Bookable appointment slot computation for a single calendar day.
//!
//! Given a business's open hours (each with a capacity), its blackout windows,
//! and the appointments already booked, the engine lists every slot of a
//! requested duration that a request for a given quantity could take. It is a
//! pure function: no I/O, no shared state, and identical inputs always give
//! identical output.
//!
//! ## Modules
//!
//! - [`time`] — Minute-precision time of day, parsed from and formatted to `hh:mm am`
//! - [`interval`] — Half-open intervals and the business/blocking/appointment kinds
//! - [`conflict`] — Candidate rejection against blackouts and bookings
//! - [`availability`] — Slot generation, request and engine configuration
//! - [`records`] — Wire records and their conversion to typed intervals
//! - [`error`] — Error types

pub mod availability;
pub mod conflict;
pub mod error;
pub mod interval;
pub mod records;
pub mod time;

pub use availability::{
    compute_available_slots, find_available_slots, sort_chronologically, AvailableSlot,
    SlotConfig, SlotRequest, DEFAULT_STEP_MINUTES,
};
pub use conflict::OverlapPolicy;
pub use error::SlotError;
pub use interval::{Appointment, BlockingHours, BusinessHours, Interval};
pub use records::{DayInput, DaySchedule, SlotRecord};
pub use time::TimeOfDay;
