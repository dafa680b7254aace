//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api;
use crate::config::ConsoleConfig;
use crate::console::Console;
use crate::render;
use campus_core::{CampusError, Catalog, IncidentDraft, ProgressView};
use tokio::sync::broadcast;

// =============================================================================
// SERVE COMMAND
// =============================================================================

/// Start the HTTP console.
pub async fn cmd_serve(config: &ConsoleConfig) -> Result<(), CampusError> {
    let addr = config.bind_addr();

    println!("Campus Safety Console Starting...");
    println!();
    println!("Configuration:");
    println!("  Campus:   {}", config.campus_name);
    println!("  Address:  {}", addr);
    println!("  Tick:     {} ms", config.tick_interval_ms);
    println!();
    println!("Endpoints:");
    println!("  GET  /health   - Health check");
    println!("  GET  /catalog  - Form options and stages");
    println!("  POST /submit   - Submit an incident draft");
    println!("  GET  /progress - Pipeline progress");
    println!("  GET  /snapshot - Snapshot and explanation");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(&addr, Console::new(config)).await
}

// =============================================================================
// CATALOG COMMAND
// =============================================================================

/// Print the catalogs.
pub fn cmd_catalog(json_mode: bool) -> Result<(), CampusError> {
    let catalog = Catalog::builtin();

    if json_mode {
        println!("{}", to_pretty_json(&catalog)?);
        return Ok(());
    }

    print_list("Incident Types", &catalog.incident_types);
    print_list("Locations", &catalog.locations);
    print_list("User Roles", &catalog.user_roles);
    print_list("Pipeline Stages", &catalog.stages);

    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    println!("{}", title);
    println!("{}", "=".repeat(title.chars().count()));
    for item in items {
        println!("  {}", item);
    }
    println!();
}

// =============================================================================
// SUBMIT COMMAND
// =============================================================================

/// Submit a draft and follow the pipeline until it completes.
pub async fn cmd_submit(
    config: &ConsoleConfig,
    draft: IncidentDraft,
    json_mode: bool,
    quiet: bool,
) -> Result<(), CampusError> {
    let mut console = Console::new(config);
    let mut frames = console.subscribe();
    let accepted = console.submit(draft).await?;

    if !json_mode {
        if !quiet {
            println!("{}", render::hero(console.campus()));
        }
        if let Some(draft) = console.submitted() {
            println!("{}", render::draft(draft));
        }
    }

    let view = follow_run(&mut frames, accepted.run, |view| {
        if !json_mode {
            println!("{}", render::pipeline(view));
        }
    })
    .await?;

    if json_mode {
        let output = serde_json::json!({
            "campus": console.campus(),
            "run": accepted.run,
            "snapshot": accepted.snapshot,
            "progress": view,
            "explanation": console.explanation(),
            "emergency_contacts": console.emergency_contacts(),
        });
        println!("{}", to_pretty_json(&output)?);
        return Ok(());
    }

    println!("{}", render::snapshot(&console.snapshot()));
    if let Some(contacts) = console.emergency_contacts() {
        println!("{}", render::emergency_contacts(contacts));
    }
    if let Some(text) = console.explanation() {
        println!("{}", render::explanation(text));
    }

    Ok(())
}

/// Hand every frame of `run` to `draw`, returning the final one.
async fn follow_run(
    frames: &mut broadcast::Receiver<ProgressView>,
    run: u64,
    mut draw: impl FnMut(&ProgressView),
) -> Result<ProgressView, CampusError> {
    loop {
        match frames.recv().await {
            Ok(view) => {
                if view.run != run {
                    continue;
                }
                draw(&view);
                if view.is_complete() {
                    return Ok(view);
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Pipeline display skipped frames");
            }
            Err(broadcast::error::RecvError::Closed) => {
                return Err(CampusError::IoError(
                    "Progress feed closed before the run completed".to_string(),
                ));
            }
        }
    }
}

// =============================================================================
// IDLE COMMAND
// =============================================================================

/// Print the console as it looks before any submission.
pub async fn cmd_idle(config: &ConsoleConfig, json_mode: bool) -> Result<(), CampusError> {
    let console = Console::new(config);
    let view = console.progress().await;
    let draft = IncidentDraft::default();

    if json_mode {
        let output = serde_json::json!({
            "campus": console.campus(),
            "draft": draft,
            "snapshot": console.snapshot(),
            "progress": view,
        });
        println!("{}", to_pretty_json(&output)?);
        return Ok(());
    }

    println!("{}", render::hero(console.campus()));
    println!("{}", render::draft(&draft));
    println!("{}", render::snapshot(&console.snapshot()));
    println!("{}", render::pipeline(&view));

    Ok(())
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, CampusError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CampusError::IoError(format!("JSON output: {}", e)))
}

// =============================================================================
// TESTS
// =============================================================================
