//! # Campus Console
//!
//! The main binary for the campus safety console.
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP console
//! campus-console serve --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! campus-console catalog
//! campus-console submit -t Medical -l Cafeteria -d "Student fainted" --panic
//! ```

use campus_console::cli;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // CAMPUS_CONSOLE_LOG_FORMAT=json enables machine-parseable output.
    let log_format =
        std::env::var("CAMPUS_CONSOLE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "campus_console=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode && matches!(cli.command, Some(cli::Commands::Serve { .. })) {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  ┌─┐┌─┐┌┬┐┌─┐┬ ┬┌─┐  ┌─┐┌─┐┌┐┌┌─┐┌─┐┬  ┌─┐
  │  ├─┤│││├─┘│ │└─┐  │  │ ││││└─┐│ ││  ├┤
  └─┘┴ ┴┴ ┴┴  └─┘└─┘  └─┘└─┘┘└┘└─┘└─┘┴─┘└─┘

  Campus Safety Console v{}

  Config-Driven • Multi-Agent • Human-in-the-Loop
"#,
        env!("CARGO_PKG_VERSION")
    );
}
