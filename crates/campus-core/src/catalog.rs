//! # Catalog
//!
//! Static form options for the incident console.
//!
//! These are plain enumerations with no behavior attached. They are compiled
//! into the binary and immutable at runtime.

use serde::{Deserialize, Serialize};

/// Incident categories offered by the form.
pub const INCIDENT_TYPES: &[&str] = &[
    "Fire",
    "Harassment",
    "Medical",
    "Theft",
    "Lab Hazard",
    "Cyberbullying",
];

/// Campus locations offered by the form.
pub const LOCATIONS: &[&str] = &[
    "Girls Hostel A",
    "Girls Hostel B",
    "Boys Hostel A",
    "Boys Hostel B",
    "Yamuna Hostel",
    "Ganga Hostel",
    "KC Hostel",
    "Main Academic Block",
    "Engineering Block",
    "Management Block",
    "Computer Lab",
    "AI Lab",
    "Cyber Security Lab",
    "Central Library",
    "Cafeteria",
    "Student Parking",
    "Faculty Parking",
    "GD Subway",
];

/// Reporter roles offered by the form.
pub const USER_ROLES: &[&str] = &["Student", "Faculty", "Staff", "Security"];

/// Labels of the cosmetic agent pipeline, in display order.
pub const PIPELINE_STAGES: &[&str] = &[
    "Incident Intake",
    "Risk Evaluation",
    "Response Planning",
    "Audit & Governance",
];

/// All catalogs bundled for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub incident_types: Vec<String>,
    pub locations: Vec<String>,
    pub user_roles: Vec<String>,
    pub stages: Vec<String>,
}

impl Catalog {
    /// The built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| (*s).to_string()).collect()
        }

        Self {
            incident_types: owned(INCIDENT_TYPES),
            locations: owned(LOCATIONS),
            user_roles: owned(USER_ROLES),
            stages: owned(PIPELINE_STAGES),
        }
    }
}
