//! # Terminal Rendering
//!
//! Plain-text panels for the CLI. Each function returns a `String` so the
//! CLI decides where it goes.

use crate::config::EmergencyContacts;
use campus_core::{IncidentDraft, MONITORING_MESSAGE, ProgressView, SituationSnapshot};

/// Width of the progress bar in cells.
pub const BAR_WIDTH: usize = 20;

/// Hero banner with the campus name.
#[must_use]
pub fn hero(campus: &str) -> String {
    format!(
        "Autonomous Campus Safety Intelligence – {}\n\
         Config-Driven • Multi-Agent • Human-in-the-Loop\n",
        campus
    )
}

/// Proportional bar, e.g. `[██████████··········]  50%`.
#[must_use]
pub fn progress_bar(view: &ProgressView) -> String {
    let filled = if view.total > 0 {
        (view.cursor.min(view.total) * BAR_WIDTH) / view.total
    } else {
        BAR_WIDTH
    };

    format!(
        "[{}{}] {:>3}%",
        "█".repeat(filled),
        "·".repeat(BAR_WIDTH - filled),
        view.percent
    )
}

/// "AI Agent Pipeline" panel: bar, summary, one line per stage.
#[must_use]
pub fn pipeline(view: &ProgressView) -> String {
    let mut out = String::from("AI Agent Pipeline\n");
    out.push_str(&progress_bar(view));
    out.push('\n');
    out.push_str(&view.summary());
    out.push('\n');
    for stage in &view.stages {
        let mark = if stage.complete { "✔" } else { "○" };
        out.push_str(&format!("  {} {}\n", mark, stage.label));
    }
    out
}

/// "Incident Reporting" panel showing the draft fields.
#[must_use]
pub fn draft(draft: &IncidentDraft) -> String {
    let description = if draft.description.trim().is_empty() {
        "(empty)"
    } else {
        draft.description.as_str()
    };

    format!(
        "Incident Reporting\n\
         \x20 Incident Type: {}\n\
         \x20 Location:      {}\n\
         \x20 Description:   {}\n\
         \x20 User Role:     {}\n\
         \x20 Panic Mode:    {}\n",
        draft.incident_type,
        draft.location,
        description,
        draft.role,
        if draft.panic { "on" } else { "off" }
    )
}

/// "Situation Snapshot" panel.
#[must_use]
pub fn snapshot(snapshot: &SituationSnapshot) -> String {
    match snapshot {
        SituationSnapshot::Monitoring => {
            format!("Situation Snapshot\n  {}\n", MONITORING_MESSAGE)
        }
        SituationSnapshot::Reported {
            incident_type,
            location,
            status,
        } => format!(
            "Situation Snapshot\n  Incident: {}\n  Location: {}\n  Status:   {}\n",
            incident_type, location, status
        ),
    }
}

/// "Why this decision?" panel.
#[must_use]
pub fn explanation(text: &str) -> String {
    format!("Why this decision?\n  {}\n", text)
}

/// "Emergency Contacts" panel, one line per service.
#[must_use]
pub fn emergency_contacts(contacts: &EmergencyContacts) -> String {
    let mut out = String::from("Emergency Contacts\n");
    for (group, services) in contacts {
        out.push_str(&format!("  [{}]\n", group));
        for (service, number) in services {
            out.push_str(&format!("    {}: {}\n", service, number));
        }
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
