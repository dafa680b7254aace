//! # campus-core
//!
//! The deterministic logic behind the campus safety console - THE LOGIC.
//!
//! This crate holds everything the console needs that does not depend on a
//! clock, a runtime or a network:
//! - `catalog` → static form options and pipeline stage labels
//! - `draft` → the incident draft, its one validation rule, the snapshot panel
//! - `progress` → the staged progress state machine and its render view
//! - `types` → the shared error type
//!
//! ## Architectural Constraints
//!
//! - Has NO async, NO network dependencies (pure Rust)
//! - Never initiates anything; the tracker only moves on explicit ticks
//! - Integer arithmetic only: progress is an integer percent

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod draft;
pub mod progress;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use catalog::{Catalog, INCIDENT_TYPES, LOCATIONS, PIPELINE_STAGES, USER_ROLES};
pub use draft::{EXPLANATION, IncidentDraft, MONITORING_MESSAGE, SituationSnapshot, ThreatStatus};
pub use progress::{
    DEFAULT_TICK_INTERVAL_MS, ProgressState, ProgressView, StageList, StageStatus, StageTracker,
};
pub use types::CampusError;
