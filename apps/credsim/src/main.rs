//! credsim - Batch credential-verification simulator
//!
//! CLI front end over the verifier crate: file I/O, configuration layering,
//! live event rendering and the final report all live here.

mod cli;
mod display;
mod error;
mod events;
mod logging;

use crate::cli::{Cli, Commands, GlobalArgs};
use crate::display::{CommandOutput, OutputRenderer};
use crate::error::CliError;
use crate::events::EventHandler;
use clap::Parser;
use credsim_config::Config;
use credsim_events::{EventEmitter, EventReceiver};
use credsim_types::{ColorChoice, OutputFormat};
use credsim_verifier::{
    format_working, sample_input, validate_intake, BatchVerifier, CancellationToken, EventSink,
};
use std::future::Future;
use std::path::Path;
use std::process;
use tokio::select;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Parse command line arguments first to check for JSON mode
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    init_tracing(json_mode, cli.global.debug);

    if let Err(e) = run(cli).await {
        error!("Application error: {}", e);
        if !json_mode {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting credsim v{}", env!("CARGO_PKG_VERSION"));

    // defaults, then file, then environment, then flags
    let mut config = Config::load_or_default(cli.global.config.as_deref()).await?;
    config.merge_env()?;
    apply_cli_config(&mut config, &cli.global, &cli.command);
    config.validate()?;

    let json_output = config.general.default_output == OutputFormat::Json;
    let color = if config.general.default_output == OutputFormat::Plain {
        ColorChoice::Never
    } else {
        config.general.color
    };
    let renderer = OutputRenderer::new(json_output, color);

    let colors_enabled = match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => console::Term::stderr().features().colors_supported(),
    };
    let mut event_handler = EventHandler::new(colors_enabled, json_output);

    let output = execute_command(cli.command, &config, &mut event_handler).await?;
    renderer.render_result(&output)?;

    if let CommandOutput::Report { report, .. } = &output {
        if !report.is_complete() {
            return Err(credsim_errors::Error::Cancelled.into());
        }
    }

    info!("Command completed successfully");
    Ok(())
}

/// Execute the specified command
async fn execute_command(
    command: Commands,
    config: &Config,
    event_handler: &mut EventHandler,
) -> Result<CommandOutput, CliError> {
    match command {
        Commands::Run {
            file, export, seed, ..
        } => {
            let input = read_input(&file).await?;
            let verifier = BatchVerifier::from_config(config, seed)?;

            let (event_sender, event_receiver) = credsim_events::channel();
            let cancel = CancellationToken::new();
            spawn_interrupt_handler(cancel.clone());

            event_sender.emit_operation_started("verify");
            let mut sink = EventSink::new(event_sender.clone());
            let batch = async {
                let report = verifier
                    .run_with_cancellation(&input, &mut sink, &cancel)
                    .await;
                event_sender.emit_operation_completed("verify", report.is_complete());
                if export.is_some() && report.summary.working == 0 {
                    event_sender.emit_warning("No working records; the export file will be empty");
                }
                report
            };
            let report = run_with_events(batch, event_receiver, event_handler).await;

            let exported = match export {
                Some(path) => {
                    write_output(&path, &format_working(&report.outcomes)).await?;
                    Some(path)
                }
                None => None,
            };
            Ok(CommandOutput::Report { report, exported })
        }

        Commands::Validate { file } => {
            let input = read_input(&file).await?;
            let accepted = validate_intake(&input)?;
            Ok(CommandOutput::Validated {
                path: file,
                accepted,
            })
        }

        Commands::Sample { output } => {
            let sample = sample_input();
            match output {
                Some(path) => {
                    write_output(&path, &sample).await?;
                    Ok(CommandOutput::Written {
                        path,
                        lines: sample.lines().count(),
                    })
                }
                None => Ok(CommandOutput::Sample(sample)),
            }
        }
    }
}

/// Drive `task` while rendering the events it emits
async fn run_with_events<F, T>(
    task: F,
    mut event_receiver: EventReceiver,
    event_handler: &mut EventHandler,
) -> T
where
    F: Future<Output = T>,
{
    let mut task = Box::pin(task);

    loop {
        select! {
            result = &mut task => {
                // Drain any remaining events
                while let Ok(event) = event_receiver.try_recv() {
                    event_handler.handle_event(event);
                }
                return result;
            }

            event = event_receiver.recv() => {
                match event {
                    Some(event) => event_handler.handle_event(event),
                    None => { /* Channel closed: keep waiting for the task to finish */ }
                }
            }
        }
    }
}

/// Cancel the batch on Ctrl-C; records already reported are kept
fn spawn_interrupt_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current record");
            cancel.cancel();
        }
    });
}

async fn read_input(path: &Path) -> Result<String, CliError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| credsim_errors::Error::io_with_path(&e, path).into())
}

async fn write_output(path: &Path, contents: &str) -> Result<(), CliError> {
    let mut contents = contents.to_string();
    if !contents.is_empty() {
        contents.push('\n');
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| credsim_errors::Error::io_with_path(&e, path).into())
}

/// Initialize tracing/logging
fn init_tracing(json_mode: bool, debug_enabled_flag: bool) {
    // Check if debug logging is enabled
    let debug_enabled = std::env::var("RUST_LOG").is_ok() || debug_enabled_flag;

    if debug_enabled {
        // Debug mode: structured JSON logs to file
        let log_dir = Config::logs_dir();
        if let Err(e) = std::fs::create_dir_all(&log_dir) {
            if !json_mode {
                eprintln!("Warning: Failed to create log directory: {e}");
            }
        }

        let log_file = log_dir.join(format!(
            "credsim-{}.log",
            chrono::Utc::now().format("%Y%m%d-%H%M%S")
        ));

        match std::fs::File::create(&log_file) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(file)
                    .with_env_filter(
                        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(
                            |_| {
                                tracing_subscriber::EnvFilter::new(
                                    "info,credsim=debug,credsim_verifier=debug",
                                )
                            },
                        ),
                    )
                    .init();

                if !json_mode {
                    eprintln!("Debug logging enabled: {}", log_file.display());
                }
                return;
            }
            Err(e) => {
                if !json_mode {
                    eprintln!("Warning: Failed to create log file: {e}");
                }
            }
        }
    }

    if json_mode {
        // JSON mode: suppress all console output to avoid contaminating JSON
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
    } else {
        // Normal mode: minimal logging to stderr
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("warn,credsim=warn,credsim_verifier=warn")
                }),
            )
            .init();
    }
}

/// Apply CLI configuration overrides (highest precedence)
fn apply_cli_config(config: &mut Config, global: &GlobalArgs, command: &Commands) {
    if let Some(color) = global.color {
        config.general.color = color;
    }
    if global.json {
        config.general.default_output = OutputFormat::Json;
    }

    if let Commands::Run { no_delay: true, .. } = command {
        config.pacing.disabled = true;
    }
}
