use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use super::styles;

//-------------------------------------------------------------------------------------------------
// Types
//-------------------------------------------------------------------------------------------------

/// qmtool CLI - Inspect where the external QM solver, its scratch space and shared library live
#[derive(Debug, Parser)]
#[command(name = "qmtool", author, about, version, styles=styles::styles())]
pub struct QmtoolArgs {
    /// The subcommand to run
    #[command(subcommand)]
    pub subcommand: Option<QmtoolSubcommand>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for inspecting the configuration
#[derive(Debug, Parser)]
pub enum QmtoolSubcommand {
    /// Print the resolved configuration
    #[command(name = "show")]
    Show {
        /// TOML file with overrides for the literal defaults
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },

    /// Print the command line used to launch the solver
    #[command(name = "command")]
    Command {
        /// TOML file with overrides for the literal defaults
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the scratch directory for this process
    #[command(name = "scratch")]
    Scratch,
}

/// Output format for `qmtool show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// TOML, the same layout an overrides file uses
    Toml,

    /// Pretty-printed JSON
    Json,
}

//-------------------------------------------------------------------------------------------------
// Tests
//-------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_debug_assert() {
        QmtoolArgs::command().debug_assert();
    }

    #[test]
    fn test_args_parse_show() {
        let args =
            QmtoolArgs::try_parse_from(["qmtool", "show", "--config", "qm.toml", "-f", "json"])
                .unwrap();

        match args.subcommand {
            Some(QmtoolSubcommand::Show { config, format }) => {
                assert_eq!(config, Some(PathBuf::from("qm.toml")));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn test_args_parse_verbose_after_subcommand() {
        let args = QmtoolArgs::try_parse_from(["qmtool", "scratch", "-v"]).unwrap();
        assert!(args.verbose);
        assert!(matches!(args.subcommand, Some(QmtoolSubcommand::Scratch)));
    }
}
