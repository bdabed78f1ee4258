use std::process::ExitCode;

use clap::Parser;
use unsplash_details::cli::Cli;
use unsplash_details::config::Config;
use unsplash_details::logging::{init_tracing, log_path, LogTarget};
use unsplash_details::plain::{fetch_state, render_plain, PLAIN_WIDTH};
use unsplash_details::ui::runtime::{run, RunOptions};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run_cli(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;
    let photo_id = cli.photo_id();

    if cli.plain {
        init_tracing(LogTarget::Stderr)?;
        let state = fetch_state(&config, photo_id.as_deref())?;
        println!("{}", render_plain(&state, PLAIN_WIDTH));
        return Ok(if state.error_message().is_some() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    init_tracing(LogTarget::File(log_path()))?;
    tracing::info!(config = %config_path.display(), "Starting viewer");
    let show_images = config.ui.show_images && !cli.no_images;
    run(RunOptions {
        config,
        photo_id,
        show_images,
    })?;
    Ok(ExitCode::SUCCESS)
}
