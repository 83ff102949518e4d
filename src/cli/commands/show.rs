use super::{build_controller, draw_grid, totals_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { log, read_only } = cmd {
        let mut controller = build_controller(cfg, log, *read_only)?;

        let mode = if controller.is_read_only() {
            " (read-only)"
        } else {
            ""
        };
        header(format!("Daily log{mode}"));
        draw_grid(&mut controller, cfg.color)?;
        println!();

        match controller.hour_totals() {
            Some(totals) => print!("{}", totals_table(&totals)),
            None => warning("No data"),
        }
        println!("\n{}", controller.encoded_string());
    }
    Ok(())
}
