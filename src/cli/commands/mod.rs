pub mod config;
pub mod edit;
pub mod init;
pub mod segments;
pub mod show;
pub mod totals;

use crate::cli::canvas::TextCanvas;
use crate::config::Config;
use crate::core::controller::LogGridController;
use crate::errors::AppResult;
use crate::models::HourTotals;
use crate::utils::formatting::{hours_decimal, hours2readable};
use crate::utils::table::{Align, Column, Table};

/// Controller for the `--log` input of a command
pub(crate) fn build_controller(
    cfg: &Config,
    log: &Option<String>,
    read_only: bool,
) -> AppResult<LogGridController> {
    LogGridController::new(cfg.grid_options(log.clone(), read_only))
}

/// Hours table shared by `show`, `edit` and `totals`
pub(crate) fn totals_table(totals: &HourTotals) -> String {
    let mut table = Table::new(vec![
        Column::new("Status", 14, Align::Left),
        Column::new("Hours", 6, Align::Right),
        Column::new("Time", 8, Align::Right),
    ]);

    for (duty, hours) in totals.entries() {
        table.add_row(vec![
            duty.label().to_string(),
            hours_decimal(hours),
            hours2readable(hours),
        ]);
    }
    table.add_row(vec![
        "Total".to_string(),
        hours_decimal(totals.total()),
        hours2readable(totals.total()),
    ]);
    table.render()
}

/// Rasterize the controller's layers onto a text canvas and print them.
/// The controller is resized to the canvas; callers that still need
/// pixel coordinates must resize it back.
pub(crate) fn draw_grid(controller: &mut LogGridController, color: bool) -> AppResult<()> {
    let (w, h) = TextCanvas::surface();
    controller.resize(w, h)?;

    let mut canvas = TextCanvas::default();
    canvas.draw(controller.grid_lines());
    let layer = controller.duty_line();
    canvas.draw(&layer.line);
    canvas.draw(&layer.overlay);

    for line in canvas.render(color) {
        println!("{line}");
    }
    Ok(())
}
