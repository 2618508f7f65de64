use std::{path::PathBuf, process::ExitCode};

use clap::{CommandFactory, Parser};
use qmtool::{
    cli::{AnsiStyles, OutputFormat, QmtoolArgs, QmtoolSubcommand},
    config::{self, ConfigOverrides, ExternalToolConfig, SystemEnvironment},
    QmtoolResult,
};
use tracing_subscriber::{fmt, EnvFilter};

//--------------------------------------------------------------------------------------------------
// Functions: main
//--------------------------------------------------------------------------------------------------

fn main() -> ExitCode {
    let args = QmtoolArgs::parse();

    // Initialize tracing subscriber with EnvFilter, falling back to the verbosity flag
    let default_level = if args.verbose { "debug" } else { "info" };
    fmt()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".error());
            ExitCode::FAILURE
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Functions: Handlers
//--------------------------------------------------------------------------------------------------

fn run(args: QmtoolArgs) -> QmtoolResult<()> {
    match args.subcommand {
        Some(QmtoolSubcommand::Show { config, format }) => {
            tracing::trace!("showing config: config={config:?}, format={format:?}");
            let config = resolve(config)?;
            let rendered = match format {
                OutputFormat::Toml => toml::to_string_pretty(&config)?,
                OutputFormat::Json => serde_json::to_string_pretty(&config)?,
            };
            println!("{}", rendered.trim_end());
        }
        Some(QmtoolSubcommand::Command { config }) => {
            tracing::trace!("printing launch command: config={config:?}");
            let config = resolve(config)?;
            println!("{}", config.launch_command().join(" "));
        }
        Some(QmtoolSubcommand::Scratch) => {
            let config = resolve(None)?;
            println!("{}", config.get_scratch_dir());
        }
        None => {
            QmtoolArgs::command().print_help()?;
        }
    }

    Ok(())
}

fn resolve(config_file: Option<PathBuf>) -> QmtoolResult<ExternalToolConfig> {
    let overrides = match config_file {
        Some(path) => ConfigOverrides::from_file(path)?,
        None => ConfigOverrides::default(),
    };

    config::load_with_overrides(&SystemEnvironment, overrides)
}
