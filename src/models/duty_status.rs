use serde::{Deserialize, Serialize};
use std::fmt;

/// The four duty statuses a log slot can carry, in grid order
/// (top band first). The ordinal drives both the encoding digit and
/// the vertical band on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DutyStatus {
    OffDuty,      // 1
    SleeperBerth, // 2
    Driving,      // 3
    OnDuty,       // 4
}

impl DutyStatus {
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    pub fn ordinal(&self) -> u8 {
        match self {
            DutyStatus::OffDuty => 1,
            DutyStatus::SleeperBerth => 2,
            DutyStatus::Driving => 3,
            DutyStatus::OnDuty => 4,
        }
    }

    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(DutyStatus::OffDuty),
            2 => Some(DutyStatus::SleeperBerth),
            3 => Some(DutyStatus::Driving),
            4 => Some(DutyStatus::OnDuty),
            _ => None,
        }
    }

    /// Ordinal clamped into 1..=4. Used for pointer math where a
    /// position above or below the surface still has to land in a band.
    pub fn from_ordinal_clamped(n: i64) -> Self {
        match n {
            i64::MIN..=1 => DutyStatus::OffDuty,
            2 => DutyStatus::SleeperBerth,
            3 => DutyStatus::Driving,
            _ => DutyStatus::OnDuty,
        }
    }

    /// Encoding digit ('1'..'4')
    pub fn code(&self) -> char {
        match self {
            DutyStatus::OffDuty => '1',
            DutyStatus::SleeperBerth => '2',
            DutyStatus::Driving => '3',
            DutyStatus::OnDuty => '4',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            '1' => Some(DutyStatus::OffDuty),
            '2' => Some(DutyStatus::SleeperBerth),
            '3' => Some(DutyStatus::Driving),
            '4' => Some(DutyStatus::OnDuty),
            _ => None,
        }
    }

    /// Helper: convert duty input from CLI (digit, short code or name, any case)
    pub fn from_cli(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "off" | "offduty" | "off-duty" => Some(DutyStatus::OffDuty),
            "2" | "sb" | "sleeper" | "sleeperberth" | "sleeper-berth" => {
                Some(DutyStatus::SleeperBerth)
            }
            "3" | "d" | "driving" => Some(DutyStatus::Driving),
            "4" | "on" | "onduty" | "on-duty" => Some(DutyStatus::OnDuty),
            _ => None,
        }
    }

    /// Canonical name, as used for totals keys
    pub fn name(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OffDuty",
            DutyStatus::SleeperBerth => "SleeperBerth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "OnDuty",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off duty",
            DutyStatus::SleeperBerth => "Sleeper berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "On duty",
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
