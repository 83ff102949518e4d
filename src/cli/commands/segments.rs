use super::build_controller;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::renderer::{DutyLine, Segment};
use crate::errors::AppResult;
use serde::Serialize;

/// Everything an external host needs to draw both layers
#[derive(Serialize)]
struct SegmentDump<'a> {
    encoded: String,
    width: f64,
    height: f64,
    read_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    grid: Option<&'a [Segment]>,
    duty_line: DutyLine,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Segments {
        log,
        grid,
        read_only,
    } = cmd
    {
        let controller = build_controller(cfg, log, *read_only)?;

        let dump = SegmentDump {
            encoded: controller.encoded_string(),
            width: controller.mapper().width(),
            height: controller.mapper().height(),
            read_only: controller.is_read_only(),
            grid: grid.then(|| controller.grid_lines()),
            duty_line: controller.duty_line(),
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
    }
    Ok(())
}
