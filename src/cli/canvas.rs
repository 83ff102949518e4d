//! Character-cell drawing surface. The terminal host strokes renderer
//! segments here: one column per slot, two rows per duty band.

use crate::core::renderer::{Segment, Stroke};
use crate::models::DutyStatus;
use crate::models::slot_sequence::{SLOT_COUNT, SLOTS_PER_HOUR};
use crate::utils::colors::{paint, style_for_stroke};
use crate::utils::formatting::pad_right;

pub const CANVAS_COLS: usize = SLOT_COUNT;
pub const CANVAS_ROWS: usize = 8;
const LABEL_WIDTH: usize = 14;

#[derive(Debug, Clone, Copy)]
struct Cell {
    ch: char,
    stroke: Option<Stroke>,
}

const BLANK: Cell = Cell {
    ch: ' ',
    stroke: None,
};

pub struct TextCanvas {
    cells: Vec<[Cell; CANVAS_COLS]>,
}

impl Default for TextCanvas {
    fn default() -> Self {
        Self {
            cells: vec![[BLANK; CANVAS_COLS]; CANVAS_ROWS],
        }
    }
}

fn glyph(stroke: Stroke, vertical: bool) -> char {
    match (stroke, vertical) {
        (Stroke::HalfHourTick, _) => '┊',
        (Stroke::HourLine, _) => '│',
        (Stroke::BandDivider, _) => '─',
        (Stroke::DutyLine, false) => '━',
        (Stroke::DutyLine, true) => '┃',
        (Stroke::ReadOnlyLine, false) => '═',
        (Stroke::ReadOnlyLine, true) => '║',
        (Stroke::Pending, false) => '▬',
        (Stroke::Pending, true) => '▮',
    }
}

fn is_grid(stroke: Option<Stroke>) -> bool {
    matches!(
        stroke,
        Some(Stroke::HalfHourTick | Stroke::HourLine | Stroke::BandDivider)
    )
}

fn col_of(x: f64) -> usize {
    (x.floor().max(0.0) as usize).min(CANVAS_COLS - 1)
}

fn row_of(y: f64) -> usize {
    (y.floor().max(0.0) as usize).min(CANVAS_ROWS - 1)
}

impl TextCanvas {
    /// Surface size the renderer should target for this canvas
    pub fn surface() -> (f64, f64) {
        (CANVAS_COLS as f64, CANVAS_ROWS as f64)
    }

    /// Stroke segments in order; later strokes cover earlier ones,
    /// except where two grid lines cross.
    pub fn draw(&mut self, segments: &[Segment]) {
        for seg in segments {
            if seg.is_vertical() {
                let col = col_of(seg.from.x);
                let (top, bottom) = if seg.from.y <= seg.to.y {
                    (seg.from.y, seg.to.y)
                } else {
                    (seg.to.y, seg.from.y)
                };
                for row in row_of(top)..=row_of(bottom) {
                    self.put(row, col, seg.stroke, true);
                }
            } else if seg.is_horizontal() {
                let row = row_of(seg.from.y);
                let last = (seg.to.x.ceil() as usize).saturating_sub(1);
                for col in col_of(seg.from.x)..=col_of(last as f64) {
                    self.put(row, col, seg.stroke, false);
                }
            }
        }
    }

    fn put(&mut self, row: usize, col: usize, stroke: Stroke, vertical: bool) {
        let cell = &mut self.cells[row][col];
        let ch = glyph(stroke, vertical);
        cell.ch = if is_grid(cell.stroke) && is_grid(Some(stroke)) && cell.ch != ch {
            '┼'
        } else {
            ch
        };
        cell.stroke = Some(stroke);
    }

    /// Band whose center sits on `row`, if any
    fn band_of(row: usize) -> Option<DutyStatus> {
        if row % 2 == 1 {
            DutyStatus::from_ordinal((row / 2 + 1) as u8)
        } else {
            None
        }
    }

    /// Hour ruler plus one labelled line per canvas row
    pub fn render(&self, color: bool) -> Vec<String> {
        let mut out = Vec::with_capacity(CANVAS_ROWS + 1);

        let mut ruler = " ".repeat(LABEL_WIDTH);
        for hour in 0..CANVAS_COLS / SLOTS_PER_HOUR {
            ruler.push_str(&pad_right(&hour.to_string(), SLOTS_PER_HOUR));
        }
        out.push(ruler.trim_end().to_string());

        for (row, cells) in self.cells.iter().enumerate() {
            let band = Self::band_of(row);
            let label = band.map(|d| d.label()).unwrap_or("");
            let mut line = pad_right(label, LABEL_WIDTH);

            for cell in cells {
                let text = cell.ch.to_string();
                match cell.stroke {
                    Some(stroke) => {
                        line.push_str(&paint(&text, style_for_stroke(stroke, band), color))
                    }
                    None => line.push_str(&text),
                }
            }
            out.push(line.trim_end().to_string());
        }
        out
    }
}
