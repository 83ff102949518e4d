mod common;
use common::encoded_with;
use dutylog::core::drag::SlotEdit;
use dutylog::core::mapper::CoordinateMapper;
use dutylog::core::renderer::{LineStyle, Stroke, duty_line, static_grid_lines};
use dutylog::{DutyStatus, SlotSequence};

fn mapper() -> CoordinateMapper {
    CoordinateMapper::new(960.0, 200.0).expect("valid surface")
}

#[test]
fn test_static_grid_layout() {
    let grid = static_grid_lines(&mapper());
    assert_eq!(grid.len(), 51);

    let ticks: Vec<_> = grid.iter().filter(|s| s.stroke == Stroke::HalfHourTick).collect();
    let hours: Vec<_> = grid.iter().filter(|s| s.stroke == Stroke::HourLine).collect();
    let dividers: Vec<_> = grid.iter().filter(|s| s.stroke == Stroke::BandDivider).collect();
    assert_eq!((ticks.len(), hours.len(), dividers.len()), (24, 24, 3));

    for (h, seg) in hours.iter().enumerate() {
        assert!(seg.is_vertical());
        assert_eq!(seg.from.x, 40.0 * h as f64);
        assert_eq!((seg.from.y, seg.to.y), (0.0, 200.0));
    }
    for (h, seg) in ticks.iter().enumerate() {
        assert_eq!(seg.from.x, 40.0 * h as f64 + 20.0);
    }
    let ys: Vec<f64> = dividers.iter().map(|s| s.from.y).collect();
    assert_eq!(ys, vec![50.0, 100.0, 150.0]);
    assert!(dividers.iter().all(|s| s.is_horizontal() && s.to.x == 960.0));
}

#[test]
fn test_flat_line_for_default_log() {
    let layer = duty_line(&mapper(), &SlotSequence::default(), None, LineStyle::Editable);

    assert_eq!(layer.line.len(), 96);
    assert!(layer.overlay.is_empty());
    assert!(layer.line.iter().all(|s| s.is_horizontal() && s.from.y == 25.0));
    assert!(layer.line.iter().all(|s| s.stroke == Stroke::DutyLine));
    assert_eq!(layer.line[0].from.x, 0.0);
    assert_eq!(layer.line[95].to.x, 960.0);
}

#[test]
fn test_connectors_at_status_changes() {
    let slots = SlotSequence::decode(&encoded_with(&[(10, 20, '3')])).expect("decode");
    let layer = duty_line(&mapper(), &slots, None, LineStyle::Editable);

    let verticals: Vec<_> = layer.line.iter().filter(|s| !s.is_horizontal()).collect();
    assert_eq!(layer.line.len(), 98);
    assert_eq!(verticals.len(), 2);

    assert_eq!(verticals[0].from.x, 100.0);
    assert_eq!((verticals[0].from.y, verticals[0].to.y), (25.0, 125.0));
    assert_eq!(verticals[1].from.x, 200.0);
    assert_eq!((verticals[1].from.y, verticals[1].to.y), (125.0, 25.0));
}

#[test]
fn test_pending_overlay_is_separate_layer() {
    let slots = SlotSequence::default();
    let edit = SlotEdit {
        range: 30..40,
        duty: DutyStatus::OnDuty,
    };
    let layer = duty_line(&mapper(), &slots, Some(&edit), LineStyle::Editable);

    // committed line untouched by the preview
    assert_eq!(layer.line.len(), 96);
    assert!(layer.line.iter().all(|s| s.from.y == 25.0));

    assert_eq!(layer.overlay.len(), 12);
    assert!(layer.overlay.iter().all(|s| s.stroke == Stroke::Pending));
    let horizontals: Vec<_> = layer.overlay.iter().filter(|s| s.is_horizontal()).collect();
    assert_eq!(horizontals.len(), 10);
    assert!(horizontals.iter().all(|s| s.from.y == 175.0));
    assert_eq!(horizontals[0].from.x, 300.0);
    assert_eq!(horizontals[9].to.x, 400.0);
}

#[test]
fn test_overlay_to_end_of_day_has_no_trailing_connector() {
    let edit = SlotEdit {
        range: 90..96,
        duty: DutyStatus::Driving,
    };
    let layer = duty_line(&mapper(), &SlotSequence::default(), Some(&edit), LineStyle::Editable);
    assert_eq!(layer.overlay.len(), 7);
    assert!(layer.overlay[0].is_vertical());
}

#[test]
fn test_overlay_matching_neighbors_has_no_connectors() {
    let slots = SlotSequence::decode(&encoded_with(&[(0, 96, '3')])).expect("decode");
    let edit = SlotEdit {
        range: 10..12,
        duty: DutyStatus::Driving,
    };
    let layer = duty_line(&mapper(), &slots, Some(&edit), LineStyle::Editable);
    assert_eq!(layer.overlay.len(), 2);
}

#[test]
fn test_read_only_style() {
    let layer = duty_line(&mapper(), &SlotSequence::default(), None, LineStyle::ReadOnly);
    assert!(layer.line.iter().all(|s| s.stroke == Stroke::ReadOnlyLine));
}
