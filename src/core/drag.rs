//! Drag-to-paint state machine.
//!
//! `Idle` → pointer down → `Dragging(range)` → pointer up → commit → `Idle`.
//! While dragging, every move replaces the pending range wholesale: the end
//! follows the pointer column and the duty follows the pointer band, so the
//! whole pending range is repainted with the latest duty.
//!
//! Pointer-leave commits early only when the drag has reached the last slots
//! of the day (end > leave threshold): the end snaps to 24:00. Otherwise the
//! drag stays armed until the next pointer up.

use crate::models::slot_sequence::SLOT_COUNT;
use crate::models::{DutyStatus, SlotSequence};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Default slot index beyond which pointer-leave snaps to end of day
pub const LEAVE_SNAP_THRESHOLD: usize = 93;

/// What to do when a drag ends left of where it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReverseDrag {
    /// Swap start and end so leftward drags paint like rightward ones
    #[default]
    Normalize,
    /// Commit nothing for leftward drags
    Ignore,
}

/// In-progress gesture. `end` is exclusive and may be below `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragRange {
    pub start: usize,
    pub end: usize,
    pub duty: DutyStatus,
}

impl DragRange {
    /// The half-open slot span this range paints under `policy`,
    /// or `None` when it paints nothing.
    pub fn to_edit(&self, policy: ReverseDrag) -> Option<SlotEdit> {
        let (start, end) = match policy {
            ReverseDrag::Normalize if self.end < self.start => (self.end, self.start),
            _ => (self.start, self.end),
        };
        let end = end.min(SLOT_COUNT);

        (start < end).then_some(SlotEdit {
            range: start..end,
            duty: self.duty,
        })
    }
}

/// A normalized, non-empty edit ready to be written into a SlotSequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEdit {
    pub range: Range<usize>,
    pub duty: DutyStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    PointerUp,
    PointerLeave,
}

/// Result of a gesture that wrote into the sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub edit: SlotEdit,
    pub trigger: CommitTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragRange),
}

#[derive(Debug, Clone)]
pub struct DragEditor {
    state: DragState,
    policy: ReverseDrag,
    leave_snap_threshold: usize,
}

impl Default for DragEditor {
    fn default() -> Self {
        Self::new(ReverseDrag::default())
    }
}

impl DragEditor {
    pub fn new(policy: ReverseDrag) -> Self {
        Self {
            state: DragState::Idle,
            policy,
            leave_snap_threshold: LEAVE_SNAP_THRESHOLD,
        }
    }

    /// Capped below the last column so a leave from it still commits.
    pub fn with_leave_threshold(mut self, threshold: usize) -> Self {
        self.leave_snap_threshold = threshold.min(SLOT_COUNT - 2);
        self
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn policy(&self) -> ReverseDrag {
        self.policy
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Start a gesture. A pointer down while already dragging restarts it.
    pub fn on_pointer_down(&mut self, slot: usize, duty: DutyStatus) {
        self.state = DragState::Dragging(DragRange {
            start: slot,
            end: slot,
            duty,
        });
    }

    /// Track the pointer. Returns true when the pending range changed.
    pub fn on_pointer_move(&mut self, slot: usize, duty: DutyStatus) -> bool {
        let DragState::Dragging(range) = self.state else {
            return false;
        };

        let next = DragRange {
            end: slot,
            duty,
            ..range
        };
        self.state = DragState::Dragging(next);
        next != range
    }

    /// End the gesture and write the pending range into `slots`.
    /// Returns the commit when something was painted.
    pub fn on_pointer_up(&mut self, slots: &mut SlotSequence) -> Option<Commit> {
        self.finish(slots, CommitTrigger::PointerUp)
    }

    /// Commit early when the drag is in the last slots of the day,
    /// otherwise keep dragging.
    pub fn on_pointer_leave(&mut self, slots: &mut SlotSequence) -> Option<Commit> {
        let DragState::Dragging(range) = self.state else {
            return None;
        };
        if range.end <= self.leave_snap_threshold {
            return None;
        }

        self.state = DragState::Dragging(DragRange {
            end: SLOT_COUNT,
            ..range
        });
        self.finish(slots, CommitTrigger::PointerLeave)
    }

    /// Read-only view of the in-progress gesture
    pub fn pending_range(&self) -> Option<DragRange> {
        match self.state {
            DragState::Dragging(range) => Some(range),
            DragState::Idle => None,
        }
    }

    /// The span a release right now would paint
    pub fn pending_edit(&self) -> Option<SlotEdit> {
        self.pending_range().and_then(|range| range.to_edit(self.policy))
    }

    /// Drop the gesture without committing
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    fn finish(&mut self, slots: &mut SlotSequence, trigger: CommitTrigger) -> Option<Commit> {
        let DragState::Dragging(range) = std::mem::take(&mut self.state) else {
            return None;
        };

        let edit = range.to_edit(self.policy)?;
        slots.set(edit.range.clone(), edit.duty);
        Some(Commit { edit, trigger })
    }
}
