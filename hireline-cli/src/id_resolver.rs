//! ID resolver module
//!
//! Handles resolution of UUID prefixes to full UUIDs, so users can specify
//! short, unambiguous prefixes instead of full UUIDs. Steps can additionally
//! be referenced by their order number within a pipeline.

use anyhow::{Context, Result, anyhow};
use uuid::Uuid;

use crate::types::{IdOrPrefix, StepRef};
use hireline_client::PipelineClient;
use hireline_core::domain::pipeline::PipelineStep;

/// Resolve a pipeline ID or prefix to a full UUID
///
/// If the input is already a full UUID, returns it immediately. Otherwise,
/// fetches all pipelines and finds the one matching the prefix.
///
/// # Errors
/// Returns an error if no pipeline matches the prefix, if the prefix is
/// ambiguous, or if the API call fails.
pub async fn resolve_pipeline_id(
    client: &PipelineClient,
    id_or_prefix: &IdOrPrefix,
) -> Result<Uuid> {
    // If it's already a full UUID, return it
    if let Some(uuid) = id_or_prefix.as_uuid() {
        return Ok(uuid);
    }

    let prefix = id_or_prefix.as_str().to_lowercase();

    let pipelines = client
        .list_pipelines()
        .await
        .context("Failed to fetch pipelines for ID resolution")?;

    let matches: Vec<_> = pipelines
        .iter()
        .filter(|p| p.id.to_string().to_lowercase().starts_with(&prefix))
        .collect();

    match matches.len() {
        0 => Err(anyhow!(
            "No pipeline found with ID starting with '{}'",
            prefix
        )),
        1 => Ok(matches[0].id),
        _ => {
            let ids: Vec<String> = matches.iter().map(|p| p.id.to_string()).collect();
            Err(anyhow!(
                "Ambiguous prefix '{}' matches multiple pipelines: {}",
                prefix,
                ids.join(", ")
            ))
        }
    }
}

/// Resolve a step reference within an already-fetched step list
///
/// A reference is either the step's order number (as shown in listings) or a
/// UUID/prefix.
pub fn resolve_step_id(steps: &[PipelineStep], reference: &str) -> Result<Uuid> {
    match StepRef::parse(reference) {
        StepRef::Order(order) => steps
            .iter()
            .find(|s| s.step_order == order)
            .map(|s| s.id)
            .ok_or_else(|| anyhow!("No step at order {}", order)),
        StepRef::Id(id_or_prefix) => {
            if let Some(uuid) = id_or_prefix.as_uuid() {
                return steps
                    .iter()
                    .find(|s| s.id == uuid)
                    .map(|s| s.id)
                    .ok_or_else(|| anyhow!("No step with id {}", uuid));
            }

            let prefix = id_or_prefix.as_str().to_lowercase();
            let matches: Vec<_> = steps
                .iter()
                .filter(|s| s.id.to_string().to_lowercase().starts_with(&prefix))
                .collect();

            match matches.len() {
                0 => Err(anyhow!("No step found with ID starting with '{}'", prefix)),
                1 => Ok(matches[0].id),
                _ => {
                    let ids: Vec<String> = matches.iter().map(|s| s.id.to_string()).collect();
                    Err(anyhow!(
                        "Ambiguous prefix '{}' matches multiple steps: {}",
                        prefix,
                        ids.join(", ")
                    ))
                }
            }
        }
    }
}
