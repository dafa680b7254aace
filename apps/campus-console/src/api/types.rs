//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP console.
//! `POST /submit` takes an [`campus_core::IncidentDraft`] as its body and
//! `GET /progress` returns a [`campus_core::ProgressView`] as is.

use crate::config::EmergencyContacts;
use campus_core::SituationSnapshot;
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// SUBMIT RESPONSE
// =============================================================================

/// Incident submission response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub accepted: bool,
    pub run: Option<u64>,
    pub snapshot: Option<SituationSnapshot>,
    pub error: Option<String>,
}

impl SubmitResponse {
    pub fn accepted(run: u64, snapshot: SituationSnapshot) -> Self {
        Self {
            accepted: true,
            run: Some(run),
            snapshot: Some(snapshot),
            error: None,
        }
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self {
            accepted: false,
            run: None,
            snapshot: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// SNAPSHOT RESPONSE
// =============================================================================

/// Snapshot, explanation and emergency contact panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub campus: String,
    pub snapshot: SituationSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub emergency_contacts: Option<EmergencyContacts>,
}
