//! Textual pointer gestures: the terminal host's replacement for native
//! pointer events.

use crate::core::controller::PointerHandler;
use crate::core::mapper::{CoordinateMapper, Point};
use crate::errors::{AppError, AppResult};
use crate::models::DutyStatus;
use crate::models::slot_sequence::SLOT_COUNT;
use crate::utils::time::parse_slot_boundary;
use regex::Regex;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    Leave(Point),
}

/// Parse "x,y x,y ..." (spaces or ';' between points).
pub fn parse_points(input: &str) -> AppResult<Vec<Point>> {
    let re = Regex::new(r"^(-?\d+(?:\.\d+)?),(-?\d+(?:\.\d+)?)$")
        .map_err(|e| AppError::Other(e.to_string()))?;

    let points = input
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|p| !p.is_empty())
        .map(|p| -> AppResult<Point> {
            let caps = re
                .captures(p)
                .ok_or_else(|| AppError::InvalidGesture(format!("bad point '{p}'")))?;
            let coord = |i: usize| {
                caps[i]
                    .parse::<f64>()
                    .map_err(|_| AppError::InvalidGesture(format!("bad point '{p}'")))
            };
            Ok(Point::new(coord(1)?, coord(2)?))
        })
        .collect::<AppResult<Vec<_>>>()?;

    if points.is_empty() {
        return Err(AppError::InvalidGesture(format!("no points in '{input}'")));
    }
    Ok(points)
}

/// Down on the first point, move through the rest, then up (or leave).
pub fn drag_events(points: &[Point], end_with_leave: bool) -> Vec<PointerEvent> {
    let Some((first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut events = vec![PointerEvent::Down(*first)];
    events.extend(rest.iter().map(|p| PointerEvent::Move(*p)));

    let last = rest.last().unwrap_or(first);
    events.push(if end_with_leave {
        PointerEvent::Leave(*last)
    } else {
        PointerEvent::Up(*last)
    });
    events
}

/// Parse "A-B" slot indexes or "HH:MM-HH:MM" into a half-open slot span.
pub fn parse_slot_span(input: &str) -> AppResult<Range<usize>> {
    let bad = || AppError::InvalidRange(input.to_string());
    let (a, b) = input.split_once('-').ok_or_else(bad)?;

    let bound = |s: &str| -> AppResult<usize> {
        let s = s.trim();
        let v = if s.contains(':') {
            parse_slot_boundary(s)
        } else {
            s.parse::<usize>().ok()
        };
        v.filter(|v| *v <= SLOT_COUNT).ok_or_else(bad)
    };

    let (start, end) = (bound(a)?, bound(b)?);
    if start >= end {
        return Err(bad());
    }
    Ok(start..end)
}

/// Pointer gesture painting `span` with `duty` on `mapper`'s surface.
///
/// A span reaching 24:00 drags onto the last column and leaves the
/// surface, since the pointer can never sit on slot 96 itself.
pub fn span_events(
    mapper: &CoordinateMapper,
    span: &Range<usize>,
    duty: DutyStatus,
) -> Vec<PointerEvent> {
    let y = mapper.duty_to_pixel_y(duty);
    let down = Point::new(mapper.slot_center(span.start), y);

    if span.end >= SLOT_COUNT {
        let last = Point::new(mapper.slot_center(SLOT_COUNT - 1), y);
        vec![
            PointerEvent::Down(down),
            PointerEvent::Move(last),
            PointerEvent::Leave(last),
        ]
    } else {
        let end = Point::new(mapper.slot_center(span.end), y);
        vec![
            PointerEvent::Down(down),
            PointerEvent::Move(end),
            PointerEvent::Up(end),
        ]
    }
}

/// Feed events to a handler; returns how many asked for a redraw.
pub fn dispatch<H: PointerHandler>(handler: &mut H, events: &[PointerEvent]) -> usize {
    events
        .iter()
        .map(|ev| match *ev {
            PointerEvent::Down(p) => handler.on_pointer_down(p),
            PointerEvent::Move(p) => handler.on_pointer_move(p),
            PointerEvent::Up(p) => handler.on_pointer_up(p),
            PointerEvent::Leave(p) => handler.on_pointer_leave(p),
        })
        .filter(|redraw| *redraw)
        .count()
}
