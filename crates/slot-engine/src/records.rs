//! Wire records exchanged with callers, and their conversion to typed intervals.
//!
//! Records carry wall-clock strings such as `"09:00 am"`. Parsing happens here,
//! once; the engine only ever sees [`TimeOfDay`] values.

use serde::{Deserialize, Serialize};

use crate::availability::{compute_available_slots, AvailableSlot, SlotConfig, SlotRequest};
use crate::error::{Result, SlotError};
use crate::interval::{Appointment, BlockingHours, BusinessHours, IntervalKind};
use crate::time::TimeOfDay;

/// An open window as delivered by the business-hours source.
///
/// `quantity` is the window's capacity. When absent it is `0`, and the window
/// serves no request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHourRecord {
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub quantity: u32,
}

/// A blackout window or an existing booking. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRangeRecord {
    pub start_time: String,
    pub end_time: String,
}

/// A slot as handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub start_time: String,
    pub end_time: String,
}

/// One day's worth of fully fetched input. Missing collections are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInput {
    #[serde(default)]
    pub business_hours: Vec<BusinessHourRecord>,
    #[serde(default)]
    pub blocking_hours: Vec<TimeRangeRecord>,
    #[serde(default)]
    pub appointments: Vec<TimeRangeRecord>,
}

/// A validated [`DayInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule {
    pub business_hours: Vec<BusinessHours>,
    pub blocking_hours: Vec<BlockingHours>,
    pub appointments: Vec<Appointment>,
}

impl DayInput {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse and validate every record. Fails on the first bad one.
    pub fn to_schedule(&self) -> Result<DaySchedule> {
        DaySchedule::try_from(self)
    }

    /// Validate the whole day, then run the engine on it.
    pub fn compute(&self, request: &SlotRequest, config: &SlotConfig) -> Result<Vec<AvailableSlot>> {
        self.to_schedule()?.available_slots(request, config)
    }
}

impl DaySchedule {
    pub fn available_slots(
        &self,
        request: &SlotRequest,
        config: &SlotConfig,
    ) -> Result<Vec<AvailableSlot>> {
        compute_available_slots(
            request,
            &self.business_hours,
            &self.blocking_hours,
            &self.appointments,
            config,
        )
    }
}

fn parse_bounds(start_time: &str, end_time: &str) -> Result<(TimeOfDay, TimeOfDay)> {
    Ok((TimeOfDay::parse(start_time)?, TimeOfDay::parse_end(end_time)?))
}

impl TryFrom<&BusinessHourRecord> for BusinessHours {
    type Error = SlotError;

    fn try_from(record: &BusinessHourRecord) -> Result<Self> {
        let (start, end) = parse_bounds(&record.start_time, &record.end_time)?;
        BusinessHours::new(start, end, record.quantity)
    }
}

impl TryFrom<&TimeRangeRecord> for BlockingHours {
    type Error = SlotError;

    fn try_from(record: &TimeRangeRecord) -> Result<Self> {
        let (start, end) = parse_bounds(&record.start_time, &record.end_time)?;
        BlockingHours::new(start, end)
    }
}

impl TryFrom<&TimeRangeRecord> for Appointment {
    type Error = SlotError;

    fn try_from(record: &TimeRangeRecord) -> Result<Self> {
        let (start, end) = parse_bounds(&record.start_time, &record.end_time)?;
        Appointment::new(start, end)
    }
}

impl TryFrom<&DayInput> for DaySchedule {
    type Error = SlotError;

    fn try_from(input: &DayInput) -> Result<Self> {
        Ok(DaySchedule {
            business_hours: input
                .business_hours
                .iter()
                .map(BusinessHours::try_from)
                .collect::<Result<_>>()?,
            blocking_hours: input
                .blocking_hours
                .iter()
                .map(BlockingHours::try_from)
                .collect::<Result<_>>()?,
            appointments: input
                .appointments
                .iter()
                .map(Appointment::try_from)
                .collect::<Result<_>>()?,
        })
    }
}

impl From<AvailableSlot> for SlotRecord {
    fn from(slot: AvailableSlot) -> Self {
        SlotRecord {
            start_time: slot.start().to_string(),
            end_time: slot.end().to_string(),
        }
    }
}

impl TryFrom<SlotRecord> for AvailableSlot {
    type Error = SlotError;

    fn try_from(record: SlotRecord) -> Result<Self> {
        let (start, end) = parse_bounds(&record.start_time, &record.end_time)?;
        AvailableSlot::new(start, end).ok_or(SlotError::InvalidInterval {
            kind: IntervalKind::Slot,
            start: record.start_time,
            end: record.end_time,
        })
    }
}
