//! Minute-precision time of day on a single implicit reference day.
//!
//! Times are stored as minutes since midnight. Strings are only parsed and
//! formatted at the boundary, through `chrono::NaiveTime`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, SlotError};

/// Number of minutes in the reference day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Accepted input layouts, tried in order.
const PARSE_FORMATS: [&str; 2] = ["%I:%M %p", "%H:%M"];

/// Output layout: `09:00 am`.
const DISPLAY_FORMAT: &str = "%I:%M %P";

/// A time of day, `00:00 ..= 24:00`.
///
/// `24:00` ([`TimeOfDay::END_OF_DAY`]) only ever appears as the end of an
/// interval or slot. It formats as `12:00 am`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY as u16);

    /// Build from minutes since midnight. Values past `24:00` are rejected.
    pub fn from_minutes(minutes: u32) -> Result<Self> {
        if minutes > MINUTES_PER_DAY {
            return Err(SlotError::InvalidTime(format!(
                "{} minutes is past the end of the day",
                minutes
            )));
        }
        Ok(TimeOfDay(minutes as u16))
    }

    /// Build from a 24-hour clock reading.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(format!(
                "{:02}:{:02} is not a valid time of day",
                hour, minute
            )));
        }
        Ok(TimeOfDay((hour * 60 + minute) as u16))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// `self + minutes`, or `None` if that runs past `24:00`.
    pub fn checked_add_minutes(self, minutes: u32) -> Option<Self> {
        let total = self.minutes().checked_add(minutes)?;
        (total <= MINUTES_PER_DAY).then_some(TimeOfDay(total as u16))
    }

    /// Parse a wall-clock string such as `"09:00 am"`, `"9:30PM"` or `"14:00"`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let time = PARSE_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
            .ok_or_else(|| {
                SlotError::InvalidTime(format!(
                    "'{}' (expected hh:mm am|pm or HH:MM)",
                    input
                ))
            })?;
        Self::from_hm(time.hour(), time.minute())
    }

    /// Parse the end bound of an interval. Midnight reads as end of day, so a
    /// window such as `06:00 pm`–`12:00 am` closes at `24:00`.
    pub fn parse_end(input: &str) -> Result<Self> {
        match Self::parse(input)? {
            TimeOfDay::MIDNIGHT => Ok(TimeOfDay::END_OF_DAY),
            other => Ok(other),
        }
    }

    fn to_naive(self) -> NaiveTime {
        let minutes = self.minutes() % MINUTES_PER_DAY;
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_naive().format(DISPLAY_FORMAT))
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

