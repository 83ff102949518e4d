//! Pixel <-> slot geometry for a drawing surface of known size.
//! Width spans the 24 hours (96 columns), height holds the 4 duty bands.

use crate::errors::{AppError, AppResult};
use crate::models::DutyStatus;
use crate::models::slot_sequence::{SLOT_COUNT, SLOTS_PER_HOUR};
use serde::Serialize;

const BANDS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    width: f64,
    height: f64,
}

impl CoordinateMapper {
    pub fn new(width: f64, height: f64) -> AppResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(AppError::InvalidSurface { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Pixel width of one 15-minute column
    pub fn column_width(&self) -> f64 {
        self.width / SLOT_COUNT as f64
    }

    /// Pixel height of one duty band
    pub fn band_height(&self) -> f64 {
        self.height / BANDS
    }

    /// Slot index and duty band under a pointer position.
    /// Positions off the surface are clamped onto the nearest slot and band.
    pub fn pixel_to_slot(&self, pos: Point) -> (usize, DutyStatus) {
        (self.slot_at(pos.x), self.duty_at(pos.y))
    }

    pub fn slot_at(&self, x: f64) -> usize {
        let raw = (x / self.column_width()).floor() as i64;
        raw.clamp(0, SLOT_COUNT as i64 - 1) as usize
    }

    pub fn duty_at(&self, y: f64) -> DutyStatus {
        let raw = (y / self.band_height()).floor() as i64 + 1;
        DutyStatus::from_ordinal_clamped(raw)
    }

    /// Left edge of a slot column; `SLOT_COUNT` maps to the right edge.
    pub fn slot_to_pixel(&self, slot: usize) -> f64 {
        slot as f64 * self.column_width()
    }

    /// Vertical center of a duty band
    pub fn duty_to_pixel_y(&self, duty: DutyStatus) -> f64 {
        self.band_height() * duty.ordinal() as f64 - self.height / (BANDS * 2.0)
    }

    /// Horizontal center of a slot column, handy for synthesizing pointer input
    pub fn slot_center(&self, slot: usize) -> f64 {
        self.slot_to_pixel(slot) + self.column_width() / 2.0
    }

    pub fn hour_to_pixel(&self, hour: f64) -> f64 {
        hour * SLOTS_PER_HOUR as f64 * self.column_width()
    }
}
