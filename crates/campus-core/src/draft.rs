//! # Incident Draft
//!
//! The user-entered form payload and the panels derived from it.
//!
//! The draft is free-form: fields are not checked against the catalogs.
//! The single rule is that the description must contain something other
//! than whitespace before a submission is accepted.

use crate::CampusError;
use crate::catalog::{INCIDENT_TYPES, LOCATIONS, USER_ROLES};
use serde::{Deserialize, Serialize};

/// Text shown in the snapshot panel before anything was submitted.
pub const MONITORING_MESSAGE: &str = "System monitoring campus activity.";

/// Body of the "Why this decision?" panel.
pub const EXPLANATION: &str = "Decision derived from campus risk zones, incident type, \
operating hours, and institutional safety policies.";

// =============================================================================
// INCIDENT DRAFT
// =============================================================================

/// Incident form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentDraft {
    pub incident_type: String,
    pub location: String,
    pub description: String,
    pub role: String,
    pub panic: bool,
}

impl Default for IncidentDraft {
    /// Form defaults: first entry of each catalog, empty description.
    fn default() -> Self {
        Self {
            incident_type: INCIDENT_TYPES.first().copied().unwrap_or_default().to_string(),
            location: LOCATIONS.first().copied().unwrap_or_default().to_string(),
            description: String::new(),
            role: USER_ROLES.first().copied().unwrap_or_default().to_string(),
            panic: false,
        }
    }
}

impl IncidentDraft {
    /// Check the draft can be submitted.
    pub fn validate(&self) -> Result<(), CampusError> {
        if self.description.trim().is_empty() {
            return Err(CampusError::EmptyDescription);
        }
        Ok(())
    }

    /// Status line shown in the snapshot panel.
    #[must_use]
    pub fn status(&self) -> ThreatStatus {
        if self.panic {
            ThreatStatus::ImmediateThreat
        } else {
            ThreatStatus::UnderReview
        }
    }
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Threat status displayed for a reported incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatStatus {
    #[serde(rename = "Immediate Threat")]
    ImmediateThreat,
    #[serde(rename = "Under Review")]
    UnderReview,
}

impl ThreatStatus {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ThreatStatus::ImmediateThreat => "Immediate Threat",
            ThreatStatus::UnderReview => "Under Review",
        }
    }
}

impl std::fmt::Display for ThreatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Content of the "Situation Snapshot" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SituationSnapshot {
    /// Nothing has been submitted yet.
    Monitoring,
    /// The last accepted submission.
    Reported {
        incident_type: String,
        location: String,
        status: ThreatStatus,
    },
}

impl SituationSnapshot {
    /// Snapshot for an accepted draft.
    #[must_use]
    pub fn reported(draft: &IncidentDraft) -> Self {
        SituationSnapshot::Reported {
            incident_type: draft.incident_type.clone(),
            location: draft.location.clone(),
            status: draft.status(),
        }
    }

    /// Whether a submission has been accepted.
    #[must_use]
    pub fn is_reported(&self) -> bool {
        matches!(self, SituationSnapshot::Reported { .. })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(description: &str) -> IncidentDraft {
        IncidentDraft {
            description: description.to_string(),
            ..IncidentDraft::default()
        }
    }

    #[test]
    fn defaults_match_form() {
        let draft = IncidentDraft::default();
        assert_eq!(draft.incident_type, "Fire");
        assert_eq!(draft.location, "Girls Hostel A");
        assert_eq!(draft.role, "Student");
        assert!(draft.description.is_empty());
        assert!(!draft.panic);
    }

    #[test]
    fn empty_description_rejected() {
        assert_eq!(draft_with("").validate(), Err(CampusError::EmptyDescription));
    }

    #[test]
    fn whitespace_description_rejected() {
        assert_eq!(
            draft_with("  \n\t ").validate(),
            Err(CampusError::EmptyDescription)
        );
    }

    #[test]
    fn non_empty_description_accepted() {
        assert!(draft_with("Smoke near the cafeteria").validate().is_ok());
    }

    #[test]
    fn free_form_fields_are_not_checked() {
        let draft = IncidentDraft {
            incident_type: "Flooding".into(),
            location: "Rooftop".into(),
            role: "Visitor".into(),
            ..draft_with("Water everywhere")
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn panic_flag_drives_status() {
        let mut draft = draft_with("x");
        assert_eq!(draft.status(), ThreatStatus::UnderReview);
        draft.panic = true;
        assert_eq!(draft.status(), ThreatStatus::ImmediateThreat);
        assert_eq!(draft.status().to_string(), "Immediate Threat");
    }

    #[test]
    fn reported_snapshot_copies_draft() {
        let draft = IncidentDraft {
            incident_type: "Theft".into(),
            location: "Central Library".into(),
            ..draft_with("Laptop stolen")
        };
        let snapshot = SituationSnapshot::reported(&draft);
        assert!(snapshot.is_reported());
        assert_eq!(
            snapshot,
            SituationSnapshot::Reported {
                incident_type: "Theft".into(),
                location: "Central Library".into(),
                status: ThreatStatus::UnderReview,
            }
        );
    }

    #[test]
    fn snapshot_serializes_with_kind_tag() {
        let json = serde_json::to_string(&SituationSnapshot::Monitoring).expect("serialize");
        assert_eq!(json, r#"{"kind":"monitoring"}"#);

        let draft = IncidentDraft {
            panic: true,
            ..draft_with("Fire alarm")
        };
        let json = serde_json::to_string(&SituationSnapshot::reported(&draft)).expect("serialize");
        assert!(json.contains(r#""kind":"reported""#));
        assert!(json.contains(r#""status":"Immediate Threat""#));
    }

    #[test]
    fn partial_json_draft_uses_defaults() {
        let draft: IncidentDraft =
            serde_json::from_str(r#"{"description":"Chemical spill"}"#).expect("parse");
        assert_eq!(draft.incident_type, "Fire");
        assert_eq!(draft.description, "Chemical spill");
    }
}
