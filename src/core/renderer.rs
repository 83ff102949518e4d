//! Segment lists for the two drawing layers: the static background grid and
//! the duty line (plus the pending-drag overlay). Nothing here touches a
//! drawing API; the host strokes the segments with its own primitives.

use super::drag::SlotEdit;
use super::mapper::{CoordinateMapper, Point};
use crate::models::{DutyStatus, SlotSequence};
use serde::Serialize;

const HOURS: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stroke {
    /// Light vertical line at each half hour
    HalfHourTick,
    /// Dark vertical line at each hour boundary
    HourLine,
    /// Horizontal line between two duty bands
    BandDivider,
    /// Committed duty line, editable grid
    DutyLine,
    /// Committed duty line, read-only grid
    ReadOnlyLine,
    /// Tentative range of an in-progress drag
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

impl Segment {
    fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) -> Self {
        Self {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
            stroke,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }

    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Editable,
    ReadOnly,
}

impl LineStyle {
    fn stroke(self) -> Stroke {
        match self {
            LineStyle::Editable => Stroke::DutyLine,
            LineStyle::ReadOnly => Stroke::ReadOnlyLine,
        }
    }
}

/// Foreground layer: committed line, then the overlay drawn on top of it
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DutyLine {
    pub line: Vec<Segment>,
    pub overlay: Vec<Segment>,
}

/// Background layer. Depends only on the surface size.
pub fn static_grid_lines(mapper: &CoordinateMapper) -> Vec<Segment> {
    let height = mapper.height();
    let width = mapper.width();
    let mut out = Vec::with_capacity(HOURS * 2 + 3);

    for hour in 0..HOURS {
        let half = mapper.hour_to_pixel(hour as f64 + 0.5);
        out.push(Segment::new(half, 0.0, half, height, Stroke::HalfHourTick));
    }

    for hour in 0..HOURS {
        let x = mapper.hour_to_pixel(hour as f64);
        out.push(Segment::new(x, 0.0, x, height, Stroke::HourLine));
    }

    for band in 1..DutyStatus::ALL.len() {
        let y = mapper.band_height() * band as f64;
        out.push(Segment::new(0.0, y, width, y, Stroke::BandDivider));
    }

    out
}

/// Duty line for `slots`, with an overlay for `pending` when a drag is live.
pub fn duty_line(
    mapper: &CoordinateMapper,
    slots: &SlotSequence,
    pending: Option<&SlotEdit>,
    style: LineStyle,
) -> DutyLine {
    let stroke = style.stroke();
    let mut line = Vec::with_capacity(slots.len() * 2);
    let mut previous: Option<DutyStatus> = None;

    for (i, duty) in slots.iter().enumerate() {
        let x1 = mapper.slot_to_pixel(i);
        let x2 = mapper.slot_to_pixel(i + 1);
        let y = mapper.duty_to_pixel_y(duty);

        if let Some(prev) = previous
            && prev != duty
        {
            let y_prev = mapper.duty_to_pixel_y(prev);
            line.push(Segment::new(x1, y_prev, x1, y, stroke));
        }
        line.push(Segment::new(x1, y, x2, y, stroke));
        previous = Some(duty);
    }

    let overlay = pending
        .map(|edit| pending_overlay(mapper, slots, edit))
        .unwrap_or_default();

    DutyLine { line, overlay }
}

fn pending_overlay(
    mapper: &CoordinateMapper,
    slots: &SlotSequence,
    edit: &SlotEdit,
) -> Vec<Segment> {
    let end = edit.range.end.min(slots.len());
    let start = edit.range.start;
    if start >= end {
        return Vec::new();
    }
    let y = mapper.duty_to_pixel_y(edit.duty);
    let mut out = Vec::with_capacity(end - start + 2);

    // Connector from the committed line into the pending range
    if let Some(before) = start.checked_sub(1).and_then(|i| slots.get(i))
        && before != edit.duty
    {
        let x = mapper.slot_to_pixel(start);
        out.push(Segment::new(x, mapper.duty_to_pixel_y(before), x, y, Stroke::Pending));
    }

    for i in start..end {
        out.push(Segment::new(
            mapper.slot_to_pixel(i),
            y,
            mapper.slot_to_pixel(i + 1),
            y,
            Stroke::Pending,
        ));
    }

    // ...and back out of it
    if let Some(after) = slots.get(end)
        && after != edit.duty
    {
        let x = mapper.slot_to_pixel(end);
        out.push(Segment::new(x, y, x, mapper.duty_to_pixel_y(after), Stroke::Pending));
    }

    out
}

