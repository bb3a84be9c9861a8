use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tokio::runtime::Runtime;

use minio_backup::cli::{Args, Commands};
use minio_backup::config::{default_config_path, load_or_init_config, BackupConfig, LoadOutcome};
use minio_backup::coordinator::run_backup;
use minio_backup::errors::BackupError;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    // Handle subcommands
    if let Some(cmd) = &args.command {
        return handle_subcommand(cmd);
    }

    let config_path = args.config.clone().unwrap_or_else(default_config_path);

    // Resolve configuration; bootstrap and incomplete-config cases are
    // operator problems, not failed runs, and exit cleanly.
    let config = match load_or_init_config(Some(&config_path)) {
        Ok(LoadOutcome::TemplateCreated(path)) => {
            info!("Created default config file");
            info!("Please edit the config file at {}", path.display());
            return Ok(());
        }
        Ok(LoadOutcome::Ready(config)) => config,
        Err(BackupError::Config(message)) => {
            error!("{}", message);
            error!("Please edit the config file at {}", config_path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    info!("Starting backup of {} sources", config.files.len());

    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;
    runtime.block_on(run_backup(&config, args.skip_upload))?;

    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Handle subcommands (init-config)
fn handle_subcommand(cmd: &Commands) -> Result<()> {
    match cmd {
        Commands::InitConfig { path } => {
            let path = path.clone().unwrap_or_else(default_config_path);
            BackupConfig::default().save_to_json_file(&path)?;
            info!("Configuration template created at {}", path.display());
            Ok(())
        }
    }
}
