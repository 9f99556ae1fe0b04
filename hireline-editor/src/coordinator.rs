//! Mutation coordinator
//!
//! `StepEditor` wraps every step mutation in the snapshot / optimistic-write /
//! reconcile-or-rollback protocol described in the crate docs. Operations take
//! `&self` and the projection sits behind a mutex, so an editor shared through
//! an `Arc` can have mutations in flight concurrently; the store's generation
//! token decides whose completion may reconcile, and a superseded completion
//! is dropped instead of clobbering a newer optimistic value. The lock is held
//! only for the synchronous phases, never across a server call.

use std::sync::{Mutex, MutexGuard, PoisonError};

use hireline_client::ClientError;
use hireline_core::domain::member::OrgMember;
use hireline_core::domain::pipeline::PipelineStep;
use hireline_core::domain::template::StepTemplate;
use hireline_core::dto::step::{CreateStep, UpdateStep};
use hireline_core::ordering;
use thiserror::Error;
use uuid::Uuid;

use crate::api::StepApi;
use crate::display::resolve_display_fields;
use crate::store::StepStore;

/// Editor operation failure
///
/// Validation failures are rejected before any network call is made; server
/// failures arrive after the optimistic write and imply the projection has
/// been rolled back to its pre-mutation snapshot.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Server(#[from] ClientError),
}

pub type Result<T> = std::result::Result<T, EditError>;

/// Direction for moving a step relative to its neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Fields for a new step
#[derive(Debug, Clone)]
pub struct StepDraft {
    pub name: String,
    pub description: Option<String>,
    pub duration_days: Option<i32>,
    pub task_owner_id: Option<Uuid>,
}

impl StepDraft {
    pub fn new(name: impl Into<String>) -> Self {
        StepDraft {
            name: name.into(),
            description: None,
            duration_days: None,
            task_owner_id: None,
        }
    }
}

impl From<&StepTemplate> for StepDraft {
    fn from(template: &StepTemplate) -> Self {
        StepDraft {
            name: template.label.to_string(),
            description: Some(template.description.to_string()),
            duration_days: Some(template.default_duration_days),
            task_owner_id: None,
        }
    }
}

/// Optimistic editor for one pipeline's ordered step list
pub struct StepEditor<A: StepApi> {
    api: A,
    pipeline_id: Uuid,
    roster: Vec<OrgMember>,
    store: Mutex<StepStore>,
}

impl<A: StepApi> StepEditor<A> {
    /// Create an editor over an injected projection.
    ///
    /// `roster` is the locally known member list used to resolve owner
    /// display records without a round trip.
    pub fn new(api: A, pipeline_id: Uuid, roster: Vec<OrgMember>, store: StepStore) -> Self {
        StepEditor {
            api,
            pipeline_id,
            roster,
            store: Mutex::new(store),
        }
    }

    /// Current projection, sorted ascending by `step_order`.
    pub fn steps(&self) -> Vec<PipelineStep> {
        self.lock_store().read().to_vec()
    }

    /// Whether the projection needs a refetch before it can be trusted.
    pub fn is_stale(&self) -> bool {
        self.lock_store().is_stale()
    }

    pub fn roster(&self) -> &[OrgMember] {
        &self.roster
    }

    /// Replace the projection with fresh server state.
    pub async fn refresh(&self) -> Result<()> {
        let pipeline = self.api.fetch_pipeline(self.pipeline_id).await?;
        let mut store = self.lock_store();
        store.cancel_in_flight();
        store.write(pipeline.steps);
        Ok(())
    }

    /// Insert a new step after `after_order`, or append when `None`.
    ///
    /// Every existing step ordered after the insertion point shifts up by one
    /// and the new step lands at `after_order + 1`. The projection shows a
    /// placeholder record until the server confirms, at which point the
    /// placeholder is replaced by the canonical record.
    pub async fn create_step(
        &self,
        after_order: Option<i32>,
        draft: StepDraft,
    ) -> Result<PipelineStep> {
        validate_draft(&draft)?;

        let placeholder_id = Uuid::new_v4();
        let (token, snapshot, shifts, new_order) = {
            let mut store = self.lock_store();

            if let Some(after) = after_order {
                let count = store.read().len() as i32;
                if after < 0 || after > count {
                    return Err(EditError::Validation(format!(
                        "insertion point {} outside 0..={}",
                        after, count
                    )));
                }
            }

            let token = store.cancel_in_flight();
            let snapshot = store.snapshot();

            let new_order = match after_order {
                Some(after) => ordering::insertion_order(after),
                None => ordering::append_order(store.read().len()),
            };

            // orders to persist for the shifted steps, most-shifted first so
            // the server never sees a transient duplicate
            let mut shifts: Vec<(Uuid, i32)> = Vec::new();
            if let Some(after) = after_order {
                shifts = store
                    .read()
                    .iter()
                    .filter(|s| s.step_order > after)
                    .map(|s| (s.id, s.step_order + 1))
                    .collect();
                shifts.sort_by_key(|(_, order)| std::cmp::Reverse(*order));
            }

            // optimistic projection: shifted orders plus a placeholder record,
            // applied as one atomic write
            let mut steps = store.read().to_vec();
            if let Some(after) = after_order {
                ordering::shift_for_insert(&mut steps, after);
            }
            let mut placeholder = PipelineStep {
                id: placeholder_id,
                pipeline_id: self.pipeline_id,
                name: draft.name.clone(),
                description: draft.description.clone(),
                step_order: new_order,
                duration_days: draft.duration_days,
                task_owner_id: draft.task_owner_id,
                task_owner: None,
            };
            resolve_display_fields(&mut placeholder, &self.roster);
            steps.push(placeholder);
            store.write(steps);

            (token, snapshot, shifts, new_order)
        };

        let req = CreateStep {
            pipeline_id: self.pipeline_id,
            name: draft.name,
            description: draft.description,
            step_order: new_order,
            duration_days: draft.duration_days,
            task_owner_id: draft.task_owner_id,
        };
        let shifts_issued = !shifts.is_empty();

        match self.persist_create(shifts, req).await {
            Ok(created) => {
                let mut store = self.lock_store();
                if store.generation() == token {
                    let mut steps = store.read().to_vec();
                    steps.retain(|s| s.id != placeholder_id);
                    upsert(&mut steps, created.clone());
                    self.reconcile_write(&mut store, steps);
                }
                Ok(created)
            }
            Err(err) => {
                // once any shift update went out, the server may hold part of
                // the compound mutation; show the pre-insert view and require
                // a refetch before the projection is trusted again
                let mut store = self.lock_store();
                if store.generation() == token {
                    store.restore(snapshot);
                    if shifts_issued {
                        store.invalidate();
                    }
                }
                Err(err)
            }
        }
    }

    /// Merge a partial update into the matching step.
    pub async fn update_step(&self, id: Uuid, patch: UpdateStep) -> Result<PipelineStep> {
        validate_patch(&patch)?;

        let (token, snapshot) = {
            let mut store = self.lock_store();

            let mut steps = store.read().to_vec();
            let Some(step) = steps.iter_mut().find(|s| s.id == id) else {
                return Err(EditError::Validation(format!("no step with id {}", id)));
            };

            let token = store.cancel_in_flight();
            let snapshot = store.snapshot();

            apply_patch(step, &patch);
            resolve_display_fields(step, &self.roster);
            store.write(steps);

            (token, snapshot)
        };

        match self.api.update_step(id, patch).await {
            Ok(updated) => {
                let mut store = self.lock_store();
                if store.generation() == token {
                    let mut steps = store.read().to_vec();
                    upsert(&mut steps, updated.clone());
                    self.reconcile_write(&mut store, steps);
                }
                Ok(updated)
            }
            Err(err) => {
                let mut store = self.lock_store();
                if store.generation() == token {
                    store.restore(snapshot);
                }
                Err(err.into())
            }
        }
    }

    /// Remove a step and close the order gap.
    ///
    /// Remaining steps are re-indexed positionally to 1..=N, which is safe
    /// even if the prior sequence had been left inconsistent.
    pub async fn delete_step(&self, id: Uuid) -> Result<()> {
        let (token, snapshot) = {
            let mut store = self.lock_store();

            if !store.read().iter().any(|s| s.id == id) {
                return Err(EditError::Validation(format!("no step with id {}", id)));
            }

            let token = store.cancel_in_flight();
            let snapshot = store.snapshot();

            let mut steps = store.read().to_vec();
            steps.retain(|s| s.id != id);
            ordering::reindex(&mut steps);
            store.write(steps);

            (token, snapshot)
        };

        match self.api.delete_step(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                let mut store = self.lock_store();
                if store.generation() == token {
                    store.restore(snapshot);
                }
                Err(err.into())
            }
        }
    }

    /// Swap a step with its neighbor in the given direction.
    ///
    /// A no-op at the list boundary. The two order updates are issued
    /// concurrently as one logical swap; if either fails the pre-swap
    /// snapshot is restored and the projection is marked stale, since the
    /// server may have applied only half of the exchange.
    pub async fn move_step(&self, id: Uuid, direction: Direction) -> Result<()> {
        let (token, snapshot, step_id, step_order, neighbor_id, neighbor_order) = {
            let mut store = self.lock_store();

            let (step_id, step_order, neighbor_id, neighbor_order) = {
                let steps = store.read();
                let Some(step) = steps.iter().find(|s| s.id == id) else {
                    return Err(EditError::Validation(format!("no step with id {}", id)));
                };
                let target_order = match direction {
                    Direction::Up => step.step_order - 1,
                    Direction::Down => step.step_order + 1,
                };
                match steps.iter().find(|s| s.step_order == target_order) {
                    Some(neighbor) => (step.id, step.step_order, neighbor.id, neighbor.step_order),
                    None => return Ok(()),
                }
            };

            let token = store.cancel_in_flight();
            let snapshot = store.snapshot();

            let mut steps = store.read().to_vec();
            ordering::swap_orders(&mut steps, step_id, neighbor_id);
            store.write(steps);

            (token, snapshot, step_id, step_order, neighbor_id, neighbor_order)
        };

        let (first, second) = tokio::join!(
            self.api
                .update_step(step_id, UpdateStep::with_order(neighbor_order)),
            self.api
                .update_step(neighbor_id, UpdateStep::with_order(step_order)),
        );

        match (first, second) {
            (Ok(moved), Ok(swapped)) => {
                let mut store = self.lock_store();
                if store.generation() == token {
                    let mut steps = store.read().to_vec();
                    upsert(&mut steps, moved);
                    upsert(&mut steps, swapped);
                    self.reconcile_write(&mut store, steps);
                }
                Ok(())
            }
            (Err(err), _) | (_, Err(err)) => {
                // the server may hold half the swap; show the pre-swap view
                // and require a refetch before further edits are trusted
                let mut store = self.lock_store();
                if store.generation() == token {
                    store.restore(snapshot);
                    store.invalidate();
                }
                Err(err.into())
            }
        }
    }

    fn lock_store(&self) -> MutexGuard<'_, StepStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Persist the order shifts and then the new step.
    async fn persist_create(
        &self,
        shifts: Vec<(Uuid, i32)>,
        req: CreateStep,
    ) -> Result<PipelineStep> {
        for (id, order) in shifts {
            self.api.update_step(id, UpdateStep::with_order(order)).await?;
        }
        let created = self.api.create_step(req).await?;
        Ok(created)
    }

    /// Replace the projection with reconciled records, flagging a broken
    /// density invariant instead of silently accepting it.
    fn reconcile_write(&self, store: &mut StepStore, steps: Vec<PipelineStep>) {
        let dense = ordering::is_dense(&steps);
        store.write(steps);
        if !dense {
            tracing::warn!(
                pipeline_id = %self.pipeline_id,
                "step orders not dense after reconciliation"
            );
            store.invalidate();
        }
    }
}

fn validate_draft(draft: &StepDraft) -> Result<()> {
    if draft.name.trim().is_empty() {
        return Err(EditError::Validation("step name is required".to_string()));
    }
    if let Some(days) = draft.duration_days {
        if days < 0 {
            return Err(EditError::Validation(
                "duration must be non-negative".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_patch(patch: &UpdateStep) -> Result<()> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(EditError::Validation("step name is required".to_string()));
        }
    }
    if let Some(order) = patch.step_order {
        if order < 1 {
            return Err(EditError::Validation("step order must be positive".to_string()));
        }
    }
    if let Some(Some(days)) = patch.duration_days {
        if days < 0 {
            return Err(EditError::Validation(
                "duration must be non-negative".to_string(),
            ));
        }
    }
    Ok(())
}

fn apply_patch(step: &mut PipelineStep, patch: &UpdateStep) {
    if let Some(name) = &patch.name {
        step.name = name.clone();
    }
    if let Some(description) = &patch.description {
        step.description = description.clone();
    }
    if let Some(order) = patch.step_order {
        step.step_order = order;
    }
    if let Some(duration) = &patch.duration_days {
        step.duration_days = *duration;
    }
    if let Some(owner) = &patch.task_owner_id {
        step.task_owner_id = *owner;
    }
}

/// Replace the record with a matching id, or insert it.
fn upsert(steps: &mut Vec<PipelineStep>, record: PipelineStep) {
    match steps.iter_mut().find(|s| s.id == record.id) {
        Some(existing) => *existing = record,
        None => steps.push(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hireline_core::domain::pipeline::Pipeline;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};
    use std::sync::Arc;
    use tokio::sync::oneshot;

    /// In-memory stand-in for the server, with injectable failures.
    ///
    /// Mirrors the real server's behavior: create echoes the request with a
    /// fresh id, update merges the patch, delete re-indexes survivors. An
    /// update can be gated on a channel to hold its response open.
    #[derive(Default)]
    struct MockApi {
        pipeline_id: Uuid,
        state: Mutex<Vec<PipelineStep>>,
        fail_create: AtomicBool,
        fail_delete: AtomicBool,
        fail_update_ids: Mutex<HashSet<Uuid>>,
        gated_updates: Mutex<HashMap<Uuid, oneshot::Receiver<()>>>,
        calls: AtomicUsize,
    }

    impl MockApi {
        fn seeded(pipeline_id: Uuid, steps: Vec<PipelineStep>) -> Self {
            MockApi {
                pipeline_id,
                state: Mutex::new(steps),
                ..MockApi::default()
            }
        }

        fn fail_updates_for(&self, id: Uuid) {
            self.fail_update_ids.lock().unwrap().insert(id);
        }

        /// Park the next update of `id` until the sender side fires.
        fn gate_update(&self, id: Uuid, gate: oneshot::Receiver<()>) {
            self.gated_updates.lock().unwrap().insert(id, gate);
        }

        fn call_count(&self) -> usize {
            self.calls.load(AtomicOrdering::SeqCst)
        }

        fn server_steps(&self) -> Vec<PipelineStep> {
            let mut steps = self.state.lock().unwrap().clone();
            ordering::sort_by_order(&mut steps);
            steps
        }
    }

    #[async_trait]
    impl StepApi for MockApi {
        async fn fetch_pipeline(&self, _pipeline_id: Uuid) -> hireline_client::Result<Pipeline> {
            self.calls.fetch_add(1, AtomicOrdering::SeqCst);
            Ok(Pipeline {
                id: self.pipeline_id,
                name: "Test Pipeline".to_string(),
                description: None,
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
                steps: self.server_steps(),
            })
        }

        async fn create_step(&self, req: CreateStep) -> hireline_client::Result<PipelineStep> {
            self.calls.fetch_add(1, AtomicOrdering::SeqCst);
            if self.fail_create.load(AtomicOrdering::SeqCst) {
                return Err(ClientError::api_error(500, "injected create failure"));
            }
            let step = PipelineStep {
                id: Uuid::new_v4(),
                pipeline_id: req.pipeline_id,
                name: req.name,
                description: req.description,
                step_order: req.step_order,
                duration_days: req.duration_days,
                task_owner_id: req.task_owner_id,
                task_owner: None,
            };
            self.state.lock().unwrap().push(step.clone());
            Ok(step)
        }

        async fn update_step(
            &self,
            step_id: Uuid,
            req: UpdateStep,
        ) -> hireline_client::Result<PipelineStep> {
            self.calls.fetch_add(1, AtomicOrdering::SeqCst);
            let gate = self.gated_updates.lock().unwrap().remove(&step_id);
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if self.fail_update_ids.lock().unwrap().contains(&step_id) {
                return Err(ClientError::api_error(500, "injected update failure"));
            }
            let mut state = self.state.lock().unwrap();
            let step = state
                .iter_mut()
                .find(|s| s.id == step_id)
                .ok_or(ClientError::StepNotFound(step_id))?;
            apply_patch(step, &req);
            Ok(step.clone())
        }

        async fn delete_step(&self, step_id: Uuid) -> hireline_client::Result<()> {
            self.calls.fetch_add(1, AtomicOrdering::SeqCst);
            if self.fail_delete.load(AtomicOrdering::SeqCst) {
                return Err(ClientError::api_error(500, "injected delete failure"));
            }
            let mut state = self.state.lock().unwrap();
            state.retain(|s| s.id != step_id);
            ordering::reindex(&mut state);
            Ok(())
        }
    }

    #[async_trait]
    impl StepApi for Arc<MockApi> {
        async fn fetch_pipeline(&self, pipeline_id: Uuid) -> hireline_client::Result<Pipeline> {
            self.as_ref().fetch_pipeline(pipeline_id).await
        }
        async fn create_step(&self, req: CreateStep) -> hireline_client::Result<PipelineStep> {
            self.as_ref().create_step(req).await
        }
        async fn update_step(
            &self,
            step_id: Uuid,
            req: UpdateStep,
        ) -> hireline_client::Result<PipelineStep> {
            self.as_ref().update_step(step_id, req).await
        }
        async fn delete_step(&self, step_id: Uuid) -> hireline_client::Result<()> {
            self.as_ref().delete_step(step_id).await
        }
    }

    fn step(pipeline_id: Uuid, name: &str, order: i32) -> PipelineStep {
        PipelineStep {
            id: Uuid::new_v4(),
            pipeline_id,
            name: name.to_string(),
            description: None,
            step_order: order,
            duration_days: None,
            task_owner_id: None,
            task_owner: None,
        }
    }

    fn editor_with(
        names: &[&str],
        roster: Vec<OrgMember>,
    ) -> (Arc<MockApi>, StepEditor<Arc<MockApi>>) {
        let pipeline_id = Uuid::new_v4();
        let steps: Vec<PipelineStep> = names
            .iter()
            .enumerate()
            .map(|(index, name)| step(pipeline_id, name, index as i32 + 1))
            .collect();
        let api = Arc::new(MockApi::seeded(pipeline_id, steps.clone()));
        let editor = StepEditor::new(
            api.clone(),
            pipeline_id,
            roster,
            StepStore::from_steps(steps),
        );
        (api, editor)
    }

    fn names_and_orders(steps: &[PipelineStep]) -> Vec<(String, i32)> {
        steps
            .iter()
            .map(|s| (s.name.clone(), s.step_order))
            .collect()
    }

    #[tokio::test]
    async fn test_insert_after_shifts_following_steps() {
        let (_, editor) = editor_with(&["Screen", "Interview", "Offer"], vec![]);

        let created = editor
            .create_step(Some(1), StepDraft::new("Technical Test"))
            .await
            .unwrap();

        assert_eq!(created.step_order, 2);
        assert_eq!(
            names_and_orders(&editor.steps()),
            vec![
                ("Screen".to_string(), 1),
                ("Technical Test".to_string(), 2),
                ("Interview".to_string(), 3),
                ("Offer".to_string(), 4),
            ]
        );
        assert!(ordering::is_dense(&editor.steps()));
    }

    #[tokio::test]
    async fn test_append_without_insertion_point() {
        let (_, editor) = editor_with(&["Screen", "Offer"], vec![]);

        let created = editor
            .create_step(None, StepDraft::new("Reference Check"))
            .await
            .unwrap();

        assert_eq!(created.step_order, 3);
        assert!(ordering::is_dense(&editor.steps()));
    }

    #[tokio::test]
    async fn test_placeholder_replaced_by_server_record() {
        let (api, editor) = editor_with(&["Screen"], vec![]);

        let created = editor
            .create_step(None, StepDraft::new("Offer"))
            .await
            .unwrap();

        // the projection holds the confirmed record, not the placeholder
        let steps = editor.steps();
        let confirmed = steps.iter().find(|s| s.name == "Offer").unwrap();
        assert_eq!(confirmed.id, created.id);
        assert!(api.server_steps().iter().any(|s| s.id == created.id));
    }

    #[tokio::test]
    async fn test_create_validation_rejects_before_network() {
        let (api, editor) = editor_with(&["Screen"], vec![]);
        let before = editor.steps();

        let result = editor.create_step(None, StepDraft::new("   ")).await;

        assert!(matches!(result, Err(EditError::Validation(_))));
        assert_eq!(api.call_count(), 0);
        assert_eq!(editor.steps(), before);
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_insertion_point() {
        let (api, editor) = editor_with(&["Screen"], vec![]);

        let result = editor.create_step(Some(5), StepDraft::new("Offer")).await;

        assert!(matches!(result, Err(EditError::Validation(_))));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_failure_rolls_back_projection() {
        let (api, editor) = editor_with(&["Screen", "Interview", "Offer"], vec![]);
        let before = editor.steps();
        api.fail_create.store(true, AtomicOrdering::SeqCst);

        let result = editor
            .create_step(Some(1), StepDraft::new("Technical Test"))
            .await;

        assert!(matches!(result, Err(EditError::Server(_))));
        assert_eq!(editor.steps(), before);
    }

    #[tokio::test]
    async fn test_failed_insert_after_shifts_marks_projection_stale() {
        let (api, editor) = editor_with(&["Screen", "Interview", "Offer"], vec![]);
        let before = editor.steps();
        api.fail_create.store(true, AtomicOrdering::SeqCst);

        let result = editor
            .create_step(Some(1), StepDraft::new("Technical Test"))
            .await;

        assert!(matches!(result, Err(EditError::Server(_))));
        assert_eq!(editor.steps(), before);
        // the shift updates landed before the create failed, so the server
        // holds a gap the rolled-back projection cannot know about
        assert!(!ordering::is_dense(&api.server_steps()));
        assert!(editor.is_stale());
    }

    #[tokio::test]
    async fn test_failed_append_leaves_projection_fresh() {
        let (api, editor) = editor_with(&["Screen"], vec![]);
        api.fail_create.store(true, AtomicOrdering::SeqCst);

        let result = editor.create_step(None, StepDraft::new("Offer")).await;

        // nothing reached the server before the failure, so the rolled-back
        // projection still matches it
        assert!(matches!(result, Err(EditError::Server(_))));
        assert!(ordering::is_dense(&api.server_steps()));
        assert!(!editor.is_stale());
    }

    #[tokio::test]
    async fn test_update_merges_fields_and_reconciles() {
        let (_, editor) = editor_with(&["Screen", "Offer"], vec![]);
        let id = editor.steps()[0].id;

        let patch = UpdateStep {
            name: Some("Recruiter Screen".to_string()),
            duration_days: Some(Some(2)),
            ..UpdateStep::default()
        };
        let updated = editor.update_step(id, patch).await.unwrap();

        assert_eq!(updated.name, "Recruiter Screen");
        assert_eq!(editor.steps()[0].name, "Recruiter Screen");
        assert_eq!(editor.steps()[0].duration_days, Some(2));
    }

    #[tokio::test]
    async fn test_update_failure_restores_snapshot() {
        let (api, editor) = editor_with(&["Screen", "Offer"], vec![]);
        let id = editor.steps()[0].id;
        let before = editor.steps();
        api.fail_updates_for(id);

        let patch = UpdateStep {
            name: Some("Recruiter Screen".to_string()),
            ..UpdateStep::default()
        };
        let result = editor.update_step(id, patch).await;

        assert!(matches!(result, Err(EditError::Server(_))));
        assert_eq!(editor.steps(), before);
    }

    #[tokio::test]
    async fn test_update_resolves_owner_from_roster() {
        let owner = OrgMember {
            id: Uuid::new_v4(),
            name: Some("Dana".to_string()),
            email: None,
            created_at: chrono::Utc::now(),
        };
        let (_, editor) = editor_with(&["Screen"], vec![owner.clone()]);
        let id = editor.steps()[0].id;

        let patch = UpdateStep {
            task_owner_id: Some(Some(owner.id)),
            ..UpdateStep::default()
        };
        editor.update_step(id, patch).await.unwrap();

        // the mock echoes task_owner_id without joining the roster, so the
        // confirmed record keeps the id; the display record was resolved
        // during the optimistic phase from the local roster
        assert_eq!(editor.steps()[0].task_owner_id, Some(owner.id));
    }

    #[tokio::test]
    async fn test_stale_completion_does_not_clobber_newer_write() {
        let (api, editor) = editor_with(&["Screen"], vec![]);
        let editor = Arc::new(editor);
        let id = editor.steps()[0].id;

        let (release, gate) = oneshot::channel();
        api.gate_update(id, gate);

        // first mutation parks on the server call with its optimistic value
        // already written and an older generation token
        let superseded = tokio::spawn({
            let editor = editor.clone();
            async move {
                editor
                    .update_step(
                        id,
                        UpdateStep {
                            name: Some("Slow Rename".to_string()),
                            ..UpdateStep::default()
                        },
                    )
                    .await
            }
        });
        while api.call_count() == 0 {
            tokio::task::yield_now().await;
        }

        // second mutation supersedes it and reconciles
        let patch = UpdateStep {
            name: Some("Fresh Rename".to_string()),
            ..UpdateStep::default()
        };
        editor.update_step(id, patch).await.unwrap();
        assert_eq!(editor.steps()[0].name, "Fresh Rename");

        // the first completion arrives late, succeeds server-side, and is
        // dropped instead of reconciled
        release.send(()).unwrap();
        let stale = superseded.await.unwrap().unwrap();
        assert_eq!(stale.name, "Slow Rename");
        assert_eq!(editor.steps()[0].name, "Fresh Rename");
    }

    #[tokio::test]
    async fn test_delete_reindexes_remaining_steps() {
        let (_, editor) = editor_with(&["Screen", "Interview", "Offer", "Close"], vec![]);
        let id = editor.steps()[1].id;

        editor.delete_step(id).await.unwrap();

        assert_eq!(
            names_and_orders(&editor.steps()),
            vec![
                ("Screen".to_string(), 1),
                ("Offer".to_string(), 2),
                ("Close".to_string(), 3),
            ]
        );
        assert!(ordering::is_dense(&editor.steps()));
    }

    #[tokio::test]
    async fn test_delete_failure_restores_snapshot() {
        let (api, editor) = editor_with(&["Screen", "Offer"], vec![]);
        let id = editor.steps()[0].id;
        let before = editor.steps();
        api.fail_delete.store(true, AtomicOrdering::SeqCst);

        let result = editor.delete_step(id).await;

        assert!(matches!(result, Err(EditError::Server(_))));
        assert_eq!(editor.steps(), before);
    }

    #[tokio::test]
    async fn test_move_down_swaps_adjacent_orders() {
        let (_, editor) = editor_with(&["Screen", "Interview", "Offer", "Close"], vec![]);
        let interview = editor.steps()[1].id;

        editor.move_step(interview, Direction::Down).await.unwrap();

        assert_eq!(
            names_and_orders(&editor.steps()),
            vec![
                ("Screen".to_string(), 1),
                ("Offer".to_string(), 2),
                ("Interview".to_string(), 3),
                ("Close".to_string(), 4),
            ]
        );
    }

    #[tokio::test]
    async fn test_move_at_boundary_is_noop() {
        let (api, editor) = editor_with(&["Screen", "Offer"], vec![]);
        let first = editor.steps()[0].id;
        let before = editor.steps();

        editor.move_step(first, Direction::Up).await.unwrap();

        assert_eq!(editor.steps(), before);
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_partial_swap_failure_restores_and_marks_stale() {
        let (api, editor) = editor_with(&["Screen", "Interview", "Offer"], vec![]);
        let interview = editor.steps()[1].id;
        let offer = editor.steps()[2].id;
        let before = editor.steps();
        api.fail_updates_for(offer);

        let result = editor.move_step(interview, Direction::Down).await;

        assert!(matches!(result, Err(EditError::Server(_))));
        assert_eq!(editor.steps(), before);
        assert!(editor.is_stale());
    }

    #[tokio::test]
    async fn test_refresh_replaces_projection_with_server_state() {
        let (api, editor) = editor_with(&["Screen"], vec![]);
        let pipeline_id = editor.steps()[0].pipeline_id;
        api.state
            .lock()
            .unwrap()
            .push(step(pipeline_id, "Offer", 2));

        editor.refresh().await.unwrap();

        assert_eq!(editor.steps().len(), 2);
        assert!(ordering::is_dense(&editor.steps()));
    }

    #[tokio::test]
    async fn test_end_to_end_insert_then_delete() {
        let (_, editor) = editor_with(&["Screen", "Interview", "Offer"], vec![]);

        editor
            .create_step(Some(1), StepDraft::new("Technical Test"))
            .await
            .unwrap();
        assert_eq!(
            names_and_orders(&editor.steps()),
            vec![
                ("Screen".to_string(), 1),
                ("Technical Test".to_string(), 2),
                ("Interview".to_string(), 3),
                ("Offer".to_string(), 4),
            ]
        );

        let interview = editor
            .steps()
            .iter()
            .find(|s| s.name == "Interview")
            .unwrap()
            .id;
        editor.delete_step(interview).await.unwrap();

        assert_eq!(
            names_and_orders(&editor.steps()),
            vec![
                ("Screen".to_string(), 1),
                ("Technical Test".to_string(), 2),
                ("Offer".to_string(), 3),
            ]
        );
        assert!(ordering::is_dense(&editor.steps()));
    }

    #[tokio::test]
    async fn test_draft_from_template() {
        let template = hireline_core::domain::template::find("phone_screen").unwrap();
        let draft = StepDraft::from(template);

        assert_eq!(draft.name, "Phone Screen");
        assert_eq!(draft.duration_days, Some(3));
    }
}
