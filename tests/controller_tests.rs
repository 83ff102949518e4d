mod common;
use common::{ALL_OFF, encoded_with};
use dutylog::core::mapper::Point;
use dutylog::core::renderer::Stroke;
use dutylog::core::ReverseDrag;
use dutylog::errors::AppError;
use dutylog::{DutyStatus, GridOptions, HourTotals, LogGridController, PointerHandler};
use std::cell::Cell;
use std::rc::Rc;

/// Controller on the default 960x200 surface with a change counter
fn grid(encoded: Option<&str>, read_only: bool) -> (LogGridController, Rc<Cell<usize>>) {
    let changes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&changes);
    let controller = LogGridController::new(GridOptions {
        encoded: encoded.map(str::to_string),
        read_only,
        ..GridOptions::default()
    })
    .expect("controller")
    .with_on_change(move || counter.set(counter.get() + 1));
    (controller, changes)
}

// band centers on a 200px surface
const DRIVING_Y: f64 = 125.0;
const ON_DUTY_Y: f64 = 175.0;

#[test]
fn test_fresh_grid_totals() {
    let (c, _) = grid(None, false);
    assert_eq!(c.encoded_string(), ALL_OFF);
    assert_eq!(c.to_string(), ALL_OFF);
    assert_eq!(
        c.hour_totals(),
        Some(HourTotals {
            off_duty: 24.0,
            sleeper_berth: 0.0,
            driving: 0.0,
            on_duty: 0.0,
        })
    );
}

#[test]
fn test_drag_commits_and_notifies_once() {
    let (mut c, changes) = grid(None, false);

    assert!(c.on_pointer_down(Point::new(105.0, DRIVING_Y)));
    assert!(c.on_pointer_move(Point::new(155.0, DRIVING_Y)));
    assert!(c.on_pointer_move(Point::new(205.0, DRIVING_Y)));
    assert_eq!(changes.get(), 0, "no notification while dragging");
    assert_eq!(c.encoded_string(), ALL_OFF);

    assert!(c.on_pointer_up(Point::new(205.0, DRIVING_Y)));
    assert_eq!(changes.get(), 1);
    assert_eq!(c.encoded_string(), encoded_with(&[(10, 20, '3')]));
    assert_eq!(c.hour_totals().map(|t| t.driving), Some(2.5));
    assert_eq!(c.pending_range(), None);
}

#[test]
fn test_leave_near_end_of_day_commits() {
    let (mut c, changes) = grid(None, false);

    c.on_pointer_down(Point::new(905.0, ON_DUTY_Y));
    c.on_pointer_move(Point::new(945.0, ON_DUTY_Y));
    assert!(c.on_pointer_leave(Point::new(965.0, ON_DUTY_Y)));

    assert_eq!(changes.get(), 1);
    assert_eq!(c.encoded_string(), encoded_with(&[(90, 96, '4')]));

    // a stray release afterwards does nothing
    assert!(!c.on_pointer_up(Point::new(965.0, ON_DUTY_Y)));
    assert_eq!(changes.get(), 1);
}

#[test]
fn test_leave_mid_day_keeps_drag_alive() {
    let (mut c, changes) = grid(None, false);

    c.on_pointer_down(Point::new(405.0, DRIVING_Y));
    c.on_pointer_move(Point::new(505.0, DRIVING_Y));
    assert!(!c.on_pointer_leave(Point::new(505.0, -5.0)));
    assert_eq!(changes.get(), 0);
    assert!(c.pending_range().is_some());

    c.on_pointer_up(Point::new(505.0, DRIVING_Y));
    assert_eq!(changes.get(), 1);
    assert_eq!(c.encoded_string(), encoded_with(&[(40, 50, '3')]));
}

#[test]
fn test_read_only_ignores_pointer_input() {
    let start = encoded_with(&[(0, 8, '2')]);
    let (mut c, changes) = grid(Some(&start), true);

    assert!(!c.on_pointer_down(Point::new(105.0, DRIVING_Y)));
    assert!(!c.on_pointer_move(Point::new(305.0, DRIVING_Y)));
    assert!(!c.on_pointer_up(Point::new(305.0, DRIVING_Y)));
    c.on_pointer_down(Point::new(905.0, DRIVING_Y));
    c.on_pointer_move(Point::new(955.0, DRIVING_Y));
    assert!(!c.on_pointer_leave(Point::new(965.0, DRIVING_Y)));

    assert_eq!(changes.get(), 0);
    assert_eq!(c.encoded_string(), start);
    assert!(c.journal().is_empty());
    assert!(c.duty_line().line.iter().all(|s| s.stroke == Stroke::ReadOnlyLine));
}

#[test]
fn test_preview_overlay_follows_drag() {
    let (mut c, _) = grid(None, false);
    assert!(c.duty_line().overlay.is_empty());

    c.on_pointer_down(Point::new(105.0, ON_DUTY_Y));
    c.on_pointer_move(Point::new(135.0, ON_DUTY_Y));
    let overlay = c.duty_line().overlay;
    assert_eq!(overlay.iter().filter(|s| s.is_horizontal()).count(), 3);
    assert!(overlay.iter().all(|s| s.stroke == Stroke::Pending));

    c.on_pointer_up(Point::new(135.0, ON_DUTY_Y));
    assert!(c.duty_line().overlay.is_empty());
}

#[test]
fn test_invalid_encoding_fails_construction() {
    let bad = encoded_with(&[(3, 4, 'x')]);
    let result = LogGridController::new(GridOptions {
        encoded: Some(bad),
        ..GridOptions::default()
    });
    assert!(matches!(result, Err(AppError::InvalidEncoding { index: 3, found: 'x' })));
}

#[test]
fn test_wrong_length_encoding_starts_all_off() {
    let (c, _) = grid(Some("3333"), false);
    assert_eq!(c.encoded_string(), ALL_OFF);
}

#[test]
fn test_reverse_drag_policy_from_options() {
    let mut c = LogGridController::new(GridOptions {
        reverse_drag: ReverseDrag::Ignore,
        ..GridOptions::default()
    })
    .expect("controller");

    c.on_pointer_down(Point::new(205.0, DRIVING_Y));
    c.on_pointer_move(Point::new(105.0, DRIVING_Y));
    c.on_pointer_up(Point::new(105.0, DRIVING_Y));
    assert_eq!(c.encoded_string(), ALL_OFF);

    let (mut c, changes) = grid(None, false);
    c.on_pointer_down(Point::new(205.0, DRIVING_Y));
    c.on_pointer_move(Point::new(105.0, DRIVING_Y));
    c.on_pointer_up(Point::new(105.0, DRIVING_Y));
    assert_eq!(c.encoded_string(), encoded_with(&[(10, 20, '3')]));
    assert_eq!(changes.get(), 1);
}

#[test]
fn test_resize_rebuilds_grid_and_mapping() {
    let (mut c, _) = grid(None, false);
    assert_eq!(c.grid_lines()[24].from.x, 0.0);
    assert_eq!(c.grid_lines()[25].from.x, 40.0);

    c.resize(480.0, 100.0).expect("resize");
    assert_eq!(c.grid_lines()[25].from.x, 20.0);
    assert_eq!(c.mapper().duty_to_pixel_y(DutyStatus::Driving), 62.5);

    assert!(matches!(c.resize(0.0, 100.0), Err(AppError::InvalidSurface { .. })));
}

#[test]
fn test_journal_records_commits() {
    let (mut c, _) = grid(None, false);

    c.on_pointer_down(Point::new(105.0, DRIVING_Y));
    c.on_pointer_move(Point::new(205.0, DRIVING_Y));
    c.on_pointer_up(Point::new(205.0, DRIVING_Y));

    c.on_pointer_down(Point::new(905.0, ON_DUTY_Y));
    c.on_pointer_move(Point::new(955.0, ON_DUTY_Y));
    c.on_pointer_leave(Point::new(965.0, ON_DUTY_Y));

    let entries = c.journal().entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].span(), "02:30-05:00");
    assert_eq!(entries[0].duty, DutyStatus::Driving);
    assert_eq!(entries[1].span(), "22:30-24:00");

    let text = c.journal().render(false);
    assert!(text.contains("commit (02:30-05:00)"));
    assert!(text.contains("leave-commit (22:30-24:00)"));
    assert!(text.contains("6 slot(s) set to On duty"));
}
