//! Local cache projection
//!
//! `StepStore` mirrors the server's view of one pipeline's steps and is the
//! single shared mutable resource of the editor. All mutation paths replace
//! its contents with a single assignment, so readers never observe a
//! half-applied update.

use hireline_core::domain::pipeline::PipelineStep;
use hireline_core::ordering;

/// Snapshot of the projection, captured before an optimistic mutation.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    steps: Vec<PipelineStep>,
}

/// In-memory mirror of a pipeline's steps, kept sorted by `step_order`.
#[derive(Debug, Default)]
pub struct StepStore {
    steps: Vec<PipelineStep>,
    generation: u64,
    stale: bool,
}

impl StepStore {
    /// Empty projection; seed it via [`StepStore::write`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Projection seeded from fetched server state.
    pub fn from_steps(mut steps: Vec<PipelineStep>) -> Self {
        ordering::sort_by_order(&mut steps);
        Self {
            steps,
            generation: 0,
            stale: false,
        }
    }

    /// Current projection, sorted ascending by `step_order`.
    pub fn read(&self) -> &[PipelineStep] {
        &self.steps
    }

    /// Replace the projection atomically.
    pub fn write(&mut self, mut steps: Vec<PipelineStep>) {
        ordering::sort_by_order(&mut steps);
        self.steps = steps;
        self.stale = false;
    }

    /// Capture the current state for rollback.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            steps: self.steps.clone(),
        }
    }

    /// Restore a previously captured snapshot verbatim.
    pub fn restore(&mut self, snapshot: StoreSnapshot) {
        self.steps = snapshot.steps;
    }

    /// Supersede any in-flight mutation and return the new generation token.
    ///
    /// Called before every optimistic write. A mutation holding an older token
    /// must drop its server response instead of applying it, so a slow
    /// completion never clobbers a newer optimistic value.
    pub fn cancel_in_flight(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Token identifying the latest optimistic write.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mark the projection out of sync with the server.
    ///
    /// Set when a partially-failed compound mutation leaves the server state
    /// unknown; callers should refetch before trusting the projection.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Whether the projection needs a refetch.
    pub fn is_stale(&self) -> bool {
        self.stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn step(name: &str, order: i32) -> PipelineStep {
        PipelineStep {
            id: Uuid::new_v4(),
            pipeline_id: Uuid::nil(),
            name: name.to_string(),
            description: None,
            step_order: order,
            duration_days: None,
            task_owner_id: None,
            task_owner: None,
        }
    }

    #[test]
    fn test_write_sorts_by_order() {
        let mut store = StepStore::new();
        store.write(vec![step("c", 3), step("a", 1), step("b", 2)]);

        let names: Vec<&str> = store.read().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_read_is_idempotent() {
        let store = StepStore::from_steps(vec![step("a", 1), step("b", 2)]);

        let first = store.read().to_vec();
        let second = store.read().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut store = StepStore::from_steps(vec![step("a", 1), step("b", 2)]);
        let before = store.read().to_vec();
        let snapshot = store.snapshot();

        store.write(vec![step("x", 1)]);
        assert_ne!(store.read().to_vec(), before);

        store.restore(snapshot);
        assert_eq!(store.read().to_vec(), before);
    }

    #[test]
    fn test_cancel_in_flight_is_monotonic() {
        let mut store = StepStore::new();
        let first = store.cancel_in_flight();
        let second = store.cancel_in_flight();

        assert!(second > first);
        assert_eq!(store.generation(), second);
    }

    #[test]
    fn test_write_clears_stale_flag() {
        let mut store = StepStore::new();
        store.invalidate();
        assert!(store.is_stale());

        store.write(vec![step("a", 1)]);
        assert!(!store.is_stale());
    }
}
