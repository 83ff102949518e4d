//! The 96-slot duty sequence backing one daily log, plus its
//! one-digit-per-slot string encoding.

use super::duty_status::DutyStatus;
use super::hour_totals::HourTotals;
use crate::errors::{AppError, AppResult};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Slots in a 24-hour log (one per 15 minutes)
pub const SLOT_COUNT: usize = 96;
pub const SLOTS_PER_HOUR: usize = 4;
pub const MINUTES_PER_SLOT: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSequence {
    slots: Vec<DutyStatus>,
}

impl Default for SlotSequence {
    /// All 96 slots off duty
    fn default() -> Self {
        Self {
            slots: vec![DutyStatus::OffDuty; SLOT_COUNT],
        }
    }
}

impl SlotSequence {
    /// Decode an encoded log string.
    ///
    /// - length != 96 → all-off-duty default (fallback, not an error)
    /// - length == 96 with a character outside '1'..'4' → `InvalidEncoding`
    pub fn decode(input: &str) -> AppResult<Self> {
        if input.chars().count() != SLOT_COUNT {
            return Ok(Self::default());
        }

        let slots = input
            .chars()
            .enumerate()
            .map(|(index, found)| {
                DutyStatus::from_code(found).ok_or(AppError::InvalidEncoding { index, found })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { slots })
    }

    /// Decode an optional input; `None` yields the default sequence.
    pub fn decode_optional(input: Option<&str>) -> AppResult<Self> {
        match input {
            Some(s) => Self::decode(s),
            None => Ok(Self::default()),
        }
    }

    pub fn encode(&self) -> String {
        self.slots.iter().map(DutyStatus::code).collect()
    }

    /// Paint `duty` over `[range.start, range.end)`, clamped to the log.
    /// Returns the number of slots written; 0 when the range is empty.
    pub fn set(&mut self, range: Range<usize>, duty: DutyStatus) -> usize {
        let end = range.end.min(self.slots.len());
        if range.start >= end {
            return 0;
        }

        for slot in &mut self.slots[range.start..end] {
            *slot = duty;
        }
        end - range.start
    }

    /// Hours per duty status, or `None` when there is no data.
    pub fn totals(&self) -> Option<HourTotals> {
        if self.slots.is_empty() {
            return None;
        }

        let mut counts = [0usize; 4];
        for duty in &self.slots {
            counts[(duty.ordinal() - 1) as usize] += 1;
        }
        Some(HourTotals::from_slot_counts(counts))
    }

    pub fn get(&self, index: usize) -> Option<DutyStatus> {
        self.slots.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = DutyStatus> + '_ {
        self.slots.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Display for SlotSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for SlotSequence {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::decode(s)
    }
}

impl Serialize for SlotSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
