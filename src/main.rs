use anyhow::Result;
use clap::Parser;
use std::fs::{self, File};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use workout_dialog::cli::Cli;
use workout_dialog::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // Put the terminal back before reporting, the dialog runs in raw mode
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        error!("Application panicked: {}", panic_info);
        eprintln!("workout-dialog panicked: {}", panic_info);
        std::process::exit(2);
    }));

    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match Config::init().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            return ExitCode::from(2);
        }
    };
    cli.apply_overrides(&mut config);

    if let Err(e) = init_logging(&config, cli.debug) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::from(2);
    }

    if let Err(e) = dotenv {
        // Don't error if .env file doesn't exist, just log it
        tracing::debug!("No .env file found or error loading it: {}", e);
    }
    info!(
        "Starting workout-dialog (locale {:?}, {:?})",
        config.locale, config.directionality
    );

    match cli.execute(&config).await {
        Ok(code) => code,
        Err(e) => {
            error!("Application error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(config: &Config, debug: bool) -> Result<()> {
    let default_filter = if debug {
        "workout_dialog=debug"
    } else {
        "workout_dialog=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry().with(env_filter);

    // The terminal belongs to the dialog, so logs go to a file when possible
    let log_file = fs::create_dir_all(&config.data_dir)
        .and_then(|_| File::options().create(true).append(true).open(config.log_file()));

    let result = match log_file {
        Ok(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init(),
        Err(_) => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}
