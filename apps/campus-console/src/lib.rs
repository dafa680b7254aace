//! # Campus Console
//!
//! Library half of the `campus-console` binary. Exposed so integration tests
//! can build the router and console directly.
//!
//! ```text
//!   CLI (clap) ──┐
//!                ├──► Console ──► ProgressSimulator ──► campus-core
//!   HTTP (axum) ─┘        │           (tokio timer)     (StageTracker)
//!                         └──► render (terminal panels)
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod console;
pub mod render;
pub mod simulator;

pub use config::ConsoleConfig;
pub use console::{Accepted, Console};
pub use simulator::ProgressSimulator;
