//! Owner display resolution
//!
//! Denormalizes a step's `task_owner_id` into a display record using the
//! locally known member roster, so no round trip is needed to render an owner
//! name after an optimistic mutation.

use hireline_core::domain::member::OrgMember;
use hireline_core::domain::pipeline::{PipelineStep, TaskOwner};

/// Resolve a step's owner display record against the roster.
///
/// Deterministic in (step, roster): a set `task_owner_id` resolves to the
/// matching roster entry, an id absent from the roster (or no id at all)
/// resolves to no display record. Called after every optimistic mutation.
pub fn resolve_display_fields(step: &mut PipelineStep, roster: &[OrgMember]) {
    step.task_owner = step
        .task_owner_id
        .and_then(|owner_id| roster.iter().find(|m| m.id == owner_id))
        .map(TaskOwner::from);
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn member(name: &str) -> OrgMember {
        OrgMember {
            id: Uuid::new_v4(),
            name: Some(name.to_string()),
            email: None,
            created_at: chrono::Utc::now(),
        }
    }

    fn step_owned_by(owner_id: Option<Uuid>) -> PipelineStep {
        PipelineStep {
            id: Uuid::new_v4(),
            pipeline_id: Uuid::nil(),
            name: "Phone Screen".to_string(),
            description: None,
            step_order: 1,
            duration_days: None,
            task_owner_id: owner_id,
            task_owner: None,
        }
    }

    #[test]
    fn test_resolves_known_owner() {
        let roster = vec![member("Dana"), member("Riley")];
        let mut step = step_owned_by(Some(roster[1].id));

        resolve_display_fields(&mut step, &roster);

        let owner = step.task_owner.unwrap();
        assert_eq!(owner.id, roster[1].id);
        assert_eq!(owner.name.as_deref(), Some("Riley"));
    }

    #[test]
    fn test_unknown_owner_resolves_to_none() {
        let roster = vec![member("Dana")];
        let mut step = step_owned_by(Some(Uuid::new_v4()));
        step.task_owner = Some(TaskOwner::from(&roster[0]));

        resolve_display_fields(&mut step, &roster);
        assert!(step.task_owner.is_none());
    }

    #[test]
    fn test_cleared_owner_resolves_to_none() {
        let roster = vec![member("Dana")];
        let mut step = step_owned_by(None);
        step.task_owner = Some(TaskOwner::from(&roster[0]));

        resolve_display_fields(&mut step, &roster);
        assert!(step.task_owner.is_none());
    }
}
