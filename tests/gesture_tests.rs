use dutylog::DutyStatus;
use dutylog::cli::gesture::{PointerEvent, drag_events, parse_points, parse_slot_span, span_events};
use dutylog::core::mapper::{CoordinateMapper, Point};

#[test]
fn test_parse_points_separators() {
    let pts = parse_points("10,20 30.5,40;  -5,7").expect("points");
    assert_eq!(
        pts,
        vec![Point::new(10.0, 20.0), Point::new(30.5, 40.0), Point::new(-5.0, 7.0)]
    );
    assert!(parse_points("").is_err());
    assert!(parse_points("10;20").is_err());
}

#[test]
fn test_drag_events_shape() {
    let pts = [Point::new(1.0, 1.0), Point::new(2.0, 1.0)];
    assert_eq!(
        drag_events(&pts, false),
        vec![
            PointerEvent::Down(pts[0]),
            PointerEvent::Move(pts[1]),
            PointerEvent::Up(pts[1]),
        ]
    );
    assert_eq!(
        drag_events(&pts[..1], true),
        vec![PointerEvent::Down(pts[0]), PointerEvent::Leave(pts[0])]
    );
}

#[test]
fn test_parse_slot_span() {
    assert_eq!(parse_slot_span("10-20").expect("span"), 10..20);
    assert_eq!(parse_slot_span("00:00-24:00").expect("span"), 0..96);
    assert_eq!(parse_slot_span("13:15-14:00").expect("span"), 53..56);
    assert!(parse_slot_span("13:10-14:00").is_err());
    assert!(parse_slot_span("5-97").is_err());
    assert!(parse_slot_span("8").is_err());
}

#[test]
fn test_span_events_to_end_of_day_leave() {
    let m = CoordinateMapper::new(960.0, 200.0).expect("surface");

    let events = span_events(&m, &(10..20), DutyStatus::Driving);
    assert_eq!(events[0], PointerEvent::Down(Point::new(105.0, 125.0)));
    assert_eq!(events[2], PointerEvent::Up(Point::new(205.0, 125.0)));

    let events = span_events(&m, &(90..96), DutyStatus::OnDuty);
    assert!(matches!(events.last(), Some(PointerEvent::Leave(p)) if p.x == 955.0));
}
