use super::duty_status::DutyStatus;
use super::slot_sequence::SLOTS_PER_HOUR;
use serde::Serialize;

/// Hours spent in each duty status (slot count / 4).
/// Derived from a SlotSequence on demand, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HourTotals {
    pub off_duty: f64,
    pub sleeper_berth: f64,
    pub driving: f64,
    pub on_duty: f64,
}

impl HourTotals {
    pub fn get(&self, duty: DutyStatus) -> f64 {
        match duty {
            DutyStatus::OffDuty => self.off_duty,
            DutyStatus::SleeperBerth => self.sleeper_berth,
            DutyStatus::Driving => self.driving,
            DutyStatus::OnDuty => self.on_duty,
        }
    }

    /// Build from per-status slot counts, indexed by ordinal - 1.
    pub(crate) fn from_slot_counts(counts: [usize; 4]) -> Self {
        let hours = |n: usize| n as f64 / SLOTS_PER_HOUR as f64;
        Self {
            off_duty: hours(counts[0]),
            sleeper_berth: hours(counts[1]),
            driving: hours(counts[2]),
            on_duty: hours(counts[3]),
        }
    }

    /// (status, hours) pairs in grid order
    pub fn entries(&self) -> [(DutyStatus, f64); 4] {
        DutyStatus::ALL.map(|d| (d, self.get(d)))
    }

    pub fn total(&self) -> f64 {
        self.off_duty + self.sleeper_berth + self.driving + self.on_duty
    }
}
