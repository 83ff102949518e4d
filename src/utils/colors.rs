//! Terminal colours for duty bands and grid strokes.

use crate::core::renderer::Stroke;
use crate::models::DutyStatus;
use ansi_term::{Colour, Style};

/// Band colour for a duty status:
/// off → green, sleeper → blue, driving → red, on duty → yellow
pub fn color_for_duty(duty: DutyStatus) -> Colour {
    match duty {
        DutyStatus::OffDuty => Colour::Green,
        DutyStatus::SleeperBerth => Colour::Blue,
        DutyStatus::Driving => Colour::Red,
        DutyStatus::OnDuty => Colour::Yellow,
    }
}

/// Style of a rasterized stroke; duty lines take the band colour of `band`
pub fn style_for_stroke(stroke: Stroke, band: Option<DutyStatus>) -> Style {
    match stroke {
        Stroke::HalfHourTick | Stroke::HourLine | Stroke::BandDivider => {
            Colour::Fixed(244).normal()
        }
        Stroke::DutyLine => band.map(color_for_duty).unwrap_or(Colour::White).bold(),
        Stroke::ReadOnlyLine => Colour::White.normal(),
        Stroke::Pending => Colour::Purple.bold(),
    }
}

/// `style` when colouring is enabled, the plain style otherwise.
/// A plain style paints without any escape sequence.
pub fn styled(style: Style, enabled: bool) -> Style {
    if enabled { style } else { Style::new() }
}

pub fn paint(value: &str, style: Style, enabled: bool) -> String {
    styled(style, enabled).paint(value).to_string()
}
