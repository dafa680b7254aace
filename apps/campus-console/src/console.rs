//! # Console Session
//!
//! The single console: one submitted draft slot and one progress simulator.
//!
//! Submissions are gated on the draft's description. A rejected submission
//! changes nothing: the previous snapshot and the running pipeline are left
//! exactly as they were.

use crate::config::{ConsoleConfig, EmergencyContacts};
use crate::simulator::ProgressSimulator;
use campus_core::{
    CampusError, EXPLANATION, IncidentDraft, ProgressView, SituationSnapshot, StageList,
};
use tokio::sync::broadcast;

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub run: u64,
    pub snapshot: SituationSnapshot,
}

/// Console session state.
pub struct Console {
    campus: String,
    contacts: EmergencyContacts,
    submitted: Option<IncidentDraft>,
    simulator: ProgressSimulator,
}

impl Console {
    /// Create a console with the four-stage pipeline.
    #[must_use]
    pub fn new(config: &ConsoleConfig) -> Self {
        Self::with_stages(config, StageList::pipeline())
    }

    /// Create a console with a custom stage list.
    #[must_use]
    pub fn with_stages(config: &ConsoleConfig, stages: StageList) -> Self {
        Self {
            campus: config.campus_name.clone(),
            contacts: config.emergency_contacts.clone(),
            submitted: None,
            simulator: ProgressSimulator::new(stages, config.tick_interval()),
        }
    }

    /// Submit a draft and restart the pipeline.
    pub async fn submit(&mut self, draft: IncidentDraft) -> Result<Accepted, CampusError> {
        if let Err(e) = draft.validate() {
            tracing::warn!(
                event = "submission_rejected",
                incident_type = %draft.incident_type,
                "{}",
                e
            );
            return Err(e);
        }

        tracing::info!(
            event = "submission_accepted",
            incident_type = %draft.incident_type,
            location = %draft.location,
            role = %draft.role,
            panic = draft.panic,
            "Incident submitted"
        );

        let snapshot = SituationSnapshot::reported(&draft);
        self.submitted = Some(draft);
        let run = self.simulator.start().await;

        Ok(Accepted { run, snapshot })
    }

    /// Snapshot panel content.
    #[must_use]
    pub fn snapshot(&self) -> SituationSnapshot {
        self.submitted
            .as_ref()
            .map(SituationSnapshot::reported)
            .unwrap_or(SituationSnapshot::Monitoring)
    }

    /// Explanation panel content, only once something was submitted.
    #[must_use]
    pub fn explanation(&self) -> Option<&'static str> {
        self.submitted.as_ref().map(|_| EXPLANATION)
    }

    /// Last accepted draft.
    #[must_use]
    pub fn submitted(&self) -> Option<&IncidentDraft> {
        self.submitted.as_ref()
    }

    /// Emergency contacts panel, only once something was submitted.
    #[must_use]
    pub fn emergency_contacts(&self) -> Option<&EmergencyContacts> {
        self.submitted
            .as_ref()
            .filter(|_| !self.contacts.is_empty())
            .map(|_| &self.contacts)
    }

    pub async fn progress(&self) -> ProgressView {
        self.simulator.view().await
    }

    /// Pipeline frames, one per start and per completed stage.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressView> {
        self.simulator.subscribe()
    }

    #[must_use]
    pub fn campus(&self) -> &str {
        &self.campus
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.simulator.is_ticking()
    }

    #[must_use]
    pub fn tick_interval(&self) -> std::time::Duration {
        self.simulator.period()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::ThreatStatus;
    use std::time::Duration;
    use tokio::time::{Instant, sleep_until};

    fn draft(description: &str) -> IncidentDraft {
        IncidentDraft {
            description: description.to_string(),
            ..IncidentDraft::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fresh_console_is_monitoring() {
        let console = Console::new(&ConsoleConfig::default());
        assert_eq!(console.snapshot(), SituationSnapshot::Monitoring);
        assert!(console.explanation().is_none());
        assert_eq!(console.progress().await.state, "idle");
        assert_eq!(console.campus(), "GLA University");
    }

    #[tokio::test(start_paused = true)]
    async fn accepted_submission_starts_pipeline() {
        let mut console = Console::new(&ConsoleConfig::default());
        let accepted = console
            .submit(IncidentDraft {
                panic: true,
                ..draft("Smoke in the AI Lab")
            })
            .await
            .expect("accepted");

        assert_eq!(accepted.run, 1);
        assert_eq!(
            accepted.snapshot,
            SituationSnapshot::Reported {
                incident_type: "Fire".into(),
                location: "Girls Hostel A".into(),
                status: ThreatStatus::ImmediateThreat,
            }
        );
        assert_eq!(console.snapshot(), accepted.snapshot);
        assert!(console.explanation().is_some());
        assert_eq!(console.progress().await.state, "running");
        assert!(console.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_description_changes_nothing() {
        let mut console = Console::new(&ConsoleConfig::default());

        let err = console.submit(draft("   ")).await.expect_err("rejected");
        assert_eq!(err, CampusError::EmptyDescription);
        assert_eq!(console.snapshot(), SituationSnapshot::Monitoring);
        assert_eq!(console.progress().await.run, 0);
        assert!(!console.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_submission_leaves_running_pipeline_alone() {
        let mut console = Console::new(&ConsoleConfig::default());
        let t0 = Instant::now();
        console.submit(draft("Fight near parking")).await.expect("accepted");

        sleep_until(t0 + Duration::from_millis(900)).await;
        let before = console.progress().await;
        assert_eq!(before.cursor, 2);

        assert!(console.submit(draft("")).await.is_err());
        let after = console.progress().await;
        assert_eq!(after.run, before.run);
        assert_eq!(after.cursor, 2);
        assert_eq!(
            console.submitted().map(|d| d.description.as_str()),
            Some("Fight near parking")
        );

        sleep_until(t0 + Duration::from_millis(1700)).await;
        assert!(console.progress().await.is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn contacts_appear_after_submission() {
        let mut config = ConsoleConfig::default();
        config.emergency_contacts.insert(
            "external".into(),
            [("police".to_string(), "100".to_string())].into(),
        );
        let mut console = Console::new(&config);
        assert!(console.emergency_contacts().is_none());

        console.submit(draft("Bag snatched")).await.expect("accepted");
        let contacts = console.emergency_contacts().expect("contacts");
        assert_eq!(
            contacts["external"].get("police").map(String::as_str),
            Some("100")
        );

        let mut unconfigured = Console::new(&ConsoleConfig::default());
        unconfigured.submit(draft("Bag snatched")).await.expect("accepted");
        assert!(unconfigured.emergency_contacts().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn configured_tick_interval_is_used() {
        let config = ConsoleConfig {
            tick_interval_ms: 100,
            ..ConsoleConfig::default()
        };
        let mut console = Console::new(&config);
        assert_eq!(console.tick_interval(), Duration::from_millis(100));

        let t0 = Instant::now();
        console.submit(draft("Phone stolen")).await.expect("accepted");
        sleep_until(t0 + Duration::from_millis(450)).await;
        assert!(console.progress().await.is_complete());
    }
}
