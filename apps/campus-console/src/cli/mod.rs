//! # Campus Console CLI Module
//!
//! ## Available Commands
//!
//! - `serve` - Start the HTTP console
//! - `catalog` - List form options and pipeline stages
//! - `submit` - Submit an incident and watch the pipeline run
//!
//! Without a subcommand the idle console is printed.

mod commands;

use crate::config::ConsoleConfig;
use campus_core::{CampusError, IncidentDraft};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Campus Safety Console
///
/// Incident reporting console with a staged agent pipeline display.
#[derive(Parser, Debug)]
#[command(name = "campus-console")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP console
    Serve {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List incident types, locations, roles and pipeline stages
    Catalog,

    /// Submit an incident and run the pipeline
    Submit {
        /// Incident type
        #[arg(short = 't', long, default_value = "Fire")]
        incident_type: String,

        /// Campus location
        #[arg(short, long, default_value = "Girls Hostel A")]
        location: String,

        /// What happened
        #[arg(short, long, default_value = "")]
        description: String,

        /// Reporter role
        #[arg(short, long, default_value = "Student")]
        role: String,

        /// Flag the incident as an immediate threat
        #[arg(long)]
        panic: bool,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), CampusError> {
    let mut config = ConsoleConfig::load(cli.config.as_deref())?;
    let json_mode = cli.json_mode;

    if cli.verbose {
        tracing::info!(?config, "Loaded configuration");
    }

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            cmd_serve(&config).await
        }
        Some(Commands::Catalog) => cmd_catalog(json_mode),
        Some(Commands::Submit {
            incident_type,
            location,
            description,
            role,
            panic,
        }) => {
            let draft = IncidentDraft {
                incident_type,
                location,
                description,
                role,
                panic,
            };
            cmd_submit(&config, draft, json_mode, cli.quiet).await
        }
        None => cmd_idle(&config, json_mode).await,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_submit_with_defaults() {
        let cli = Cli::try_parse_from(["campus-console", "submit", "-d", "Smoke in corridor"])
            .expect("parse");
        assert!(matches!(
            cli.command,
            Some(Commands::Submit {
                ref incident_type,
                ref location,
                ref description,
                ref role,
                panic: false,
            }) if incident_type == "Fire"
                && location == "Girls Hostel A"
                && description == "Smoke in corridor"
                && role == "Student"
        ));
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["campus-console", "catalog", "--json-mode", "-q"])
            .expect("parse");
        assert!(cli.json_mode);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Catalog)));
    }

    #[test]
    fn serve_overrides_are_optional() {
        let cli = Cli::try_parse_from(["campus-console", "serve", "-p", "9090"]).expect("parse");
        assert!(matches!(
            cli.command,
            Some(Commands::Serve {
                host: None,
                port: Some(9090)
            })
        ));
    }

    #[tokio::test]
    async fn submit_with_empty_description_fails() {
        let cli = Cli::try_parse_from(["campus-console", "-q", "submit"]).expect("parse");
        assert_eq!(execute(cli).await, Err(CampusError::EmptyDescription));
    }
}
