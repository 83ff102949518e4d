use super::{build_controller, totals_table};
use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::HourTotals;
use crate::ui::messages::warning;
use csv::Writer;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Totals { log, format } = cmd {
        let controller = build_controller(cfg, log, true)?;

        let Some(totals) = controller.hour_totals() else {
            warning("No data");
            return Ok(());
        };

        match format {
            OutputFormat::Table => print!("{}", totals_table(&totals)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&totals)?),
            OutputFormat::Csv => print!("{}", to_csv(&totals)?),
        }
    }
    Ok(())
}

/// `status,hours` rows in grid order
pub fn to_csv(totals: &HourTotals) -> AppResult<String> {
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(["status", "hours"])?;

    for (duty, hours) in totals.entries() {
        wtr.write_record([duty.name().to_string(), hours.to_string()])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Other(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Other(e.to_string()))
}
