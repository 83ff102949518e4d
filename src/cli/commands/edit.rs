use super::{build_controller, draw_grid, totals_table};
use crate::cli::gesture::{self, PointerEvent};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::LogGridController;
use crate::errors::{AppError, AppResult};
use crate::models::DutyStatus;
use crate::ui::messages::{header, info, warning};
use std::cell::Cell;
use std::rc::Rc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        log,
        drag,
        slots,
        duty,
        leave,
        read_only,
        journal,
        show,
    } = cmd
    {
        let changes = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&changes);
        let mut controller = build_controller(cfg, log, *read_only)?
            .with_on_change(move || counter.set(counter.get() + 1));

        let events = gesture_events(
            &controller,
            drag,
            slots.as_deref(),
            duty.as_deref(),
            *leave,
        )?;
        if events.is_empty() {
            warning("No gesture given: log unchanged");
        }

        let redraws = gesture::dispatch(&mut controller, &events);

        if controller.is_read_only() {
            info("Read-only grid: pointer input ignored");
        }
        if controller.pending_range().is_some() {
            warning("Gesture still in progress: pending range not committed");
        }

        println!("{}", controller.encoded_string());
        info(format!(
            "{} change notification(s), {} redraw(s)",
            changes.get(),
            redraws
        ));

        if let Some(totals) = controller.hour_totals() {
            print!("{}", totals_table(&totals));
        }

        if *journal {
            header("Edit journal");
            if controller.journal().is_empty() {
                println!("(empty)");
            } else {
                print!("{}", controller.journal().render(cfg.color));
            }
        }

        if *show {
            draw_grid(&mut controller, cfg.color)?;
        }
    }
    Ok(())
}

/// Pointer events for either the pixel `--drag` gestures or a `--slots`/`--duty` span
fn gesture_events(
    controller: &LogGridController,
    drag: &[String],
    slots: Option<&str>,
    duty: Option<&str>,
    leave: bool,
) -> AppResult<Vec<PointerEvent>> {
    let mut events = Vec::new();

    for points in drag {
        let points = gesture::parse_points(points)?;
        events.extend(gesture::drag_events(&points, leave));
    }

    if let (Some(span), Some(duty)) = (slots, duty) {
        let span = gesture::parse_slot_span(span)?;
        let duty =
            DutyStatus::from_cli(duty).ok_or_else(|| AppError::InvalidDuty(duty.to_string()))?;
        events.extend(gesture::span_events(controller.mapper(), &span, duty));
    }

    Ok(events)
}
