pub mod duty_status;
pub mod hour_totals;
pub mod slot_sequence;

pub use duty_status::DutyStatus;
pub use hour_totals::HourTotals;
pub use slot_sequence::{SLOT_COUNT, SlotSequence};
