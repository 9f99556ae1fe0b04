//! Predefined step templates
//!
//! Catalog of common hiring steps with sensible default descriptions and
//! durations, used for quick-add flows in clients.

/// A predefined pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTemplate {
    /// Stable key used to reference the template (e.g. `phone_screen`)
    pub key: &'static str,
    /// Human-readable step name
    pub label: &'static str,
    pub description: &'static str,
    /// Default expected duration in days
    pub default_duration_days: i32,
}

const CATALOG: &[StepTemplate] = &[
    StepTemplate {
        key: "application_review",
        label: "Application Review",
        description: "Initial review of candidate application and resume",
        default_duration_days: 1,
    },
    StepTemplate {
        key: "recruiter_screening",
        label: "Recruiter Screening",
        description: "Phone or video call with recruiter to assess basic fit",
        default_duration_days: 2,
    },
    StepTemplate {
        key: "phone_screen",
        label: "Phone Screen",
        description: "Initial phone interview with hiring manager",
        default_duration_days: 3,
    },
    StepTemplate {
        key: "technical_assessment",
        label: "Technical Assessment",
        description: "Online coding test or technical evaluation",
        default_duration_days: 5,
    },
    StepTemplate {
        key: "technical_interview",
        label: "Technical Interview",
        description: "In-depth technical interview with team members",
        default_duration_days: 3,
    },
    StepTemplate {
        key: "behavioral_interview",
        label: "Behavioral Interview",
        description: "Interview focusing on cultural fit and soft skills",
        default_duration_days: 2,
    },
    StepTemplate {
        key: "panel_interview",
        label: "Panel Interview",
        description: "Interview with multiple team members or stakeholders",
        default_duration_days: 3,
    },
    StepTemplate {
        key: "reference_check",
        label: "Reference Check",
        description: "Contact previous employers and references",
        default_duration_days: 5,
    },
    StepTemplate {
        key: "final_interview",
        label: "Final Interview",
        description: "Final interview with senior leadership or decision makers",
        default_duration_days: 2,
    },
    StepTemplate {
        key: "background_check",
        label: "Background Check",
        description: "Verify employment history and conduct background screening",
        default_duration_days: 7,
    },
    StepTemplate {
        key: "offer_preparation",
        label: "Offer Preparation",
        description: "Prepare and review job offer details",
        default_duration_days: 2,
    },
    StepTemplate {
        key: "offer_extended",
        label: "Offer Extended",
        description: "Formal job offer sent to candidate",
        default_duration_days: 3,
    },
];

/// All predefined step templates, in suggested pipeline order.
pub fn catalog() -> &'static [StepTemplate] {
    CATALOG
}

/// Look up a template by its key.
pub fn find(key: &str) -> Option<&'static StepTemplate> {
    CATALOG.iter().find(|t| t.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keys_are_unique() {
        let mut keys: Vec<&str> = catalog().iter().map(|t| t.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), catalog().len());
    }

    #[test]
    fn test_find_known_template() {
        let template = find("phone_screen").unwrap();
        assert_eq!(template.label, "Phone Screen");
        assert_eq!(template.default_duration_days, 3);
    }

    #[test]
    fn test_find_unknown_template() {
        assert!(find("coffee_chat").is_none());
    }

    #[test]
    fn test_durations_are_positive() {
        assert!(catalog().iter().all(|t| t.default_duration_days > 0));
    }
}
