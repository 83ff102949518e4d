use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes the default
/// configuration file. In test mode the file is left untouched.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    info("Initializing dutylog…");
    Config::init_all(&path, cli.test)?;

    if cli.test {
        info(format!("Test mode: config file not written ({})", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
