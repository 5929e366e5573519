pub use palette_core::config::*;

use crate::cli::{Cli, CliCommand};

/// Resolve the [`AppConfig`] for this invocation. Tui flags only apply to the explorer.
pub fn from_cli(cli: &Cli) -> anyhow::Result<AppConfig> {
    let config = AppConfig::discover(cli.data_dir.clone())?.with_shade_steps(cli.steps);
    let tui = match &cli.command {
        Some(CliCommand::Tui(args)) => args.clone(),
        None => Default::default(),
        Some(_) => return Ok(config),
    };
    Ok(config.with_seed(tui.seed).with_palette_size(tui.count))
}
