use anyhow::Result;
use clap::Parser;

use palette::logging::{init_tracing, LogTarget};

fn main() -> Result<()> {
    let cli = palette::cli::Cli::parse();
    let config = palette::config::from_cli(&cli)?;

    match cli.command.clone() {
        Some(palette::cli::CliCommand::Tui(_)) | None => {
            config.ensure_data_dir()?;
            init_tracing(
                cli.log_filter.as_deref(),
                LogTarget::File(config.log_path().to_path_buf()),
            )?;
            palette::tui::run(config)?;
        }
        Some(command) => {
            init_tracing(cli.log_filter.as_deref(), LogTarget::Stderr)?;
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            palette::commands::execute(&config, command, &mut handle)?;
        }
    }

    Ok(())
}
