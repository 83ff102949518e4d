//! The log grid as the host sees it: pointer callbacks in, encoded string,
//! hour totals and segment layers out, plus a change signal after each
//! committed edit.

use super::drag::{Commit, DragEditor, DragRange, LEAVE_SNAP_THRESHOLD, ReverseDrag};
use super::journal::EditJournal;
use super::mapper::{CoordinateMapper, Point};
use super::renderer::{self, DutyLine, LineStyle, Segment};
use crate::errors::AppResult;
use crate::models::{HourTotals, SlotSequence};
use std::fmt;

pub const DEFAULT_SURFACE_WIDTH: f64 = 960.0;
pub const DEFAULT_SURFACE_HEIGHT: f64 = 200.0;

/// One method per pointer event kind. Each returns true when the host
/// should redraw the duty line.
pub trait PointerHandler {
    fn on_pointer_down(&mut self, pos: Point) -> bool;
    fn on_pointer_move(&mut self, pos: Point) -> bool;
    fn on_pointer_up(&mut self, pos: Point) -> bool;
    fn on_pointer_leave(&mut self, pos: Point) -> bool;
}

/// Construction input for a LogGridController
#[derive(Debug, Clone)]
pub struct GridOptions {
    /// Encoded 96-digit log; `None` starts all off duty
    pub encoded: Option<String>,
    pub read_only: bool,
    pub width: f64,
    pub height: f64,
    pub reverse_drag: ReverseDrag,
    pub leave_snap_threshold: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            encoded: None,
            read_only: false,
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
            reverse_drag: ReverseDrag::default(),
            leave_snap_threshold: LEAVE_SNAP_THRESHOLD,
        }
    }
}

pub struct LogGridController {
    slots: SlotSequence,
    editor: DragEditor,
    mapper: CoordinateMapper,
    grid: Vec<Segment>,
    read_only: bool,
    journal: EditJournal,
    on_change: Option<Box<dyn FnMut()>>,
}

impl LogGridController {
    pub fn new(options: GridOptions) -> AppResult<Self> {
        let slots = SlotSequence::decode_optional(options.encoded.as_deref())?;
        let mapper = CoordinateMapper::new(options.width, options.height)?;

        Ok(Self {
            slots,
            editor: DragEditor::new(options.reverse_drag)
                .with_leave_threshold(options.leave_snap_threshold),
            grid: renderer::static_grid_lines(&mapper),
            mapper,
            read_only: options.read_only,
            journal: EditJournal::default(),
            on_change: None,
        })
    }

    /// Register the "something changed" callback. Fired once per
    /// committed edit, never while a drag is in progress.
    pub fn with_on_change(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn encoded_string(&self) -> String {
        self.slots.encode()
    }

    pub fn hour_totals(&self) -> Option<HourTotals> {
        self.slots.totals()
    }

    pub fn slots(&self) -> &SlotSequence {
        &self.slots
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn pending_range(&self) -> Option<DragRange> {
        self.editor.pending_range()
    }

    pub fn journal(&self) -> &EditJournal {
        &self.journal
    }

    /// New surface size from the host; rebuilds the background layer.
    pub fn resize(&mut self, width: f64, height: f64) -> AppResult<()> {
        self.mapper = CoordinateMapper::new(width, height)?;
        self.grid = renderer::static_grid_lines(&self.mapper);
        Ok(())
    }

    /// Background layer for the current surface size
    pub fn grid_lines(&self) -> &[Segment] {
        &self.grid
    }

    /// Foreground layer for the current state, including the drag preview
    pub fn duty_line(&self) -> DutyLine {
        let style = if self.read_only {
            LineStyle::ReadOnly
        } else {
            LineStyle::Editable
        };
        let pending = self.editor.pending_edit();
        renderer::duty_line(&self.mapper, &self.slots, pending.as_ref(), style)
    }

    fn apply(&mut self, commit: Option<Commit>) -> bool {
        let Some(commit) = commit else {
            return false;
        };

        self.journal.record(&commit);
        if let Some(callback) = self.on_change.as_mut() {
            callback();
        }
        true
    }
}

impl PointerHandler for LogGridController {
    fn on_pointer_down(&mut self, pos: Point) -> bool {
        if self.read_only {
            return false;
        }
        let (slot, duty) = self.mapper.pixel_to_slot(pos);
        self.editor.on_pointer_down(slot, duty);
        true
    }

    fn on_pointer_move(&mut self, pos: Point) -> bool {
        if self.read_only {
            return false;
        }
        let (slot, duty) = self.mapper.pixel_to_slot(pos);
        self.editor.on_pointer_move(slot, duty)
    }

    fn on_pointer_up(&mut self, _pos: Point) -> bool {
        if self.read_only || !self.editor.is_dragging() {
            return false;
        }
        let commit = self.editor.on_pointer_up(&mut self.slots);
        self.apply(commit);
        // the preview disappears even when nothing was painted
        true
    }

    fn on_pointer_leave(&mut self, _pos: Point) -> bool {
        if self.read_only {
            return false;
        }
        let commit = self.editor.on_pointer_leave(&mut self.slots);
        self.apply(commit)
    }
}

impl fmt::Display for LogGridController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.slots, f)
    }
}
