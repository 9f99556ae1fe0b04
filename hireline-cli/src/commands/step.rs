//! Step command handlers
//!
//! Edits a pipeline's step list through the optimistic editor: each command
//! fetches the pipeline and roster, seeds a projection, runs the mutation,
//! and prints the reconciled list.

use anyhow::{Result, anyhow};
use clap::{Subcommand, ValueEnum};
use colored::*;
use hireline_core::domain::pipeline::PipelineStep;
use hireline_core::domain::template;
use uuid::Uuid;

use crate::config::Config;
use crate::id_resolver::{resolve_pipeline_id, resolve_step_id};
use crate::types::IdOrPrefix;
use hireline_client::PipelineClient;
use hireline_core::dto::step::UpdateStep;
use hireline_editor::{Direction, StepDraft, StepEditor, StepStore};

/// Step subcommands
#[derive(Subcommand)]
pub enum StepCommands {
    /// Add a step to a pipeline
    Add {
        /// Pipeline ID or unambiguous prefix
        pipeline: String,

        /// Step name (defaults to the template label)
        #[arg(short, long)]
        name: Option<String>,

        /// Predefined template key (see `step templates`)
        #[arg(short, long)]
        template: Option<String>,

        /// Insert after this order number (omit to append)
        #[arg(short, long)]
        after: Option<i32>,

        /// Step description
        #[arg(short, long)]
        description: Option<String>,

        /// Expected duration in days
        #[arg(long)]
        duration: Option<i32>,

        /// Member UUID responsible for the step
        #[arg(long)]
        owner: Option<Uuid>,
    },
    /// Edit a step
    Edit {
        /// Pipeline ID or unambiguous prefix
        pipeline: String,

        /// Step order number or ID prefix
        step: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Clear the description
        #[arg(long, conflicts_with = "description")]
        no_description: bool,

        /// Expected duration in days
        #[arg(long)]
        duration: Option<i32>,

        /// Clear the duration
        #[arg(long, conflicts_with = "duration")]
        no_duration: bool,

        /// Member UUID responsible for the step
        #[arg(long)]
        owner: Option<Uuid>,

        /// Clear the assigned owner
        #[arg(long, conflicts_with = "owner")]
        no_owner: bool,
    },
    /// Remove a step; following steps close the gap
    Rm {
        /// Pipeline ID or unambiguous prefix
        pipeline: String,

        /// Step order number or ID prefix
        step: String,
    },
    /// Swap a step with its neighbor
    Move {
        /// Pipeline ID or unambiguous prefix
        pipeline: String,

        /// Step order number or ID prefix
        step: String,

        /// Direction to move
        direction: MoveDirection,
    },
    /// List the predefined step templates
    Templates,
}

/// Direction argument for `step move`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MoveDirection {
    Up,
    Down,
}

impl From<MoveDirection> for Direction {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Up => Direction::Up,
            MoveDirection::Down => Direction::Down,
        }
    }
}

/// Handle step commands
pub async fn handle_step_command(command: StepCommands, config: &Config) -> Result<()> {
    let client = PipelineClient::new(&config.server_url);

    match command {
        StepCommands::Add {
            pipeline,
            name,
            template,
            after,
            description,
            duration,
            owner,
        } => add_step(&client, &pipeline, name, template, after, description, duration, owner).await,
        StepCommands::Edit {
            pipeline,
            step,
            name,
            description,
            no_description,
            duration,
            no_duration,
            owner,
            no_owner,
        } => {
            let patch = build_patch(
                name,
                description,
                no_description,
                duration,
                no_duration,
                owner,
                no_owner,
            );
            edit_step(&client, &pipeline, &step, patch).await
        }
        StepCommands::Rm { pipeline, step } => remove_step(&client, &pipeline, &step).await,
        StepCommands::Move {
            pipeline,
            step,
            direction,
        } => move_step(&client, &pipeline, &step, direction).await,
        StepCommands::Templates => {
            list_templates();
            Ok(())
        }
    }
}

/// Fetch a pipeline and its roster and seed an editor over them
async fn open_editor(
    client: &PipelineClient,
    pipeline_ref: &str,
) -> Result<StepEditor<PipelineClient>> {
    let id_or_prefix = IdOrPrefix::parse(pipeline_ref);
    let pipeline_id = resolve_pipeline_id(client, &id_or_prefix).await?;

    let pipeline = client.get_pipeline(pipeline_id).await?;
    let roster = client.list_members().await?;
    let store = StepStore::from_steps(pipeline.steps);

    Ok(StepEditor::new(client.clone(), pipeline_id, roster, store))
}

/// Assemble the wire patch from the edit flags.
///
/// A `--no-*` flag maps to an explicit null so the server clears the field;
/// an absent flag leaves the field untouched.
fn build_patch(
    name: Option<String>,
    description: Option<String>,
    no_description: bool,
    duration: Option<i32>,
    no_duration: bool,
    owner: Option<Uuid>,
    no_owner: bool,
) -> UpdateStep {
    UpdateStep {
        name,
        description: if no_description {
            Some(None)
        } else {
            description.map(Some)
        },
        step_order: None,
        duration_days: if no_duration {
            Some(None)
        } else {
            duration.map(Some)
        },
        task_owner_id: if no_owner { Some(None) } else { owner.map(Some) },
    }
}

#[allow(clippy::too_many_arguments)]
async fn add_step(
    client: &PipelineClient,
    pipeline_ref: &str,
    name: Option<String>,
    template_key: Option<String>,
    after: Option<i32>,
    description: Option<String>,
    duration: Option<i32>,
    owner: Option<Uuid>,
) -> Result<()> {
    let mut draft = match template_key {
        Some(key) => {
            let template = template::find(&key)
                .ok_or_else(|| anyhow!("Unknown template '{}'; see `step templates`", key))?;
            StepDraft::from(template)
        }
        None => {
            let name = name
                .clone()
                .ok_or_else(|| anyhow!("Either --name or --template is required"))?;
            StepDraft::new(name)
        }
    };

    // Explicit flags override template defaults
    if let Some(name) = name {
        draft.name = name;
    }
    if description.is_some() {
        draft.description = description;
    }
    if duration.is_some() {
        draft.duration_days = duration;
    }
    draft.task_owner_id = owner;

    let editor = open_editor(client, pipeline_ref).await?;
    let created = editor.create_step(after, draft).await?;

    println!(
        "{}",
        format!("✓ Step '{}' added at order {}!", created.name, created.step_order)
            .green()
            .bold()
    );
    println!();
    print_steps(&editor.steps());

    Ok(())
}

async fn edit_step(
    client: &PipelineClient,
    pipeline_ref: &str,
    step_ref: &str,
    patch: UpdateStep,
) -> Result<()> {
    let editor = open_editor(client, pipeline_ref).await?;
    let step_id = resolve_step_id(&editor.steps(), step_ref)?;

    let updated = editor.update_step(step_id, patch).await?;

    println!(
        "{}",
        format!("✓ Step '{}' updated!", updated.name).green().bold()
    );
    println!();
    print_steps(&editor.steps());

    Ok(())
}

async fn remove_step(client: &PipelineClient, pipeline_ref: &str, step_ref: &str) -> Result<()> {
    let editor = open_editor(client, pipeline_ref).await?;
    let step_id = resolve_step_id(&editor.steps(), step_ref)?;

    editor.delete_step(step_id).await?;

    println!("{}", "✓ Step removed!".green().bold());
    println!();
    print_steps(&editor.steps());

    Ok(())
}

async fn move_step(
    client: &PipelineClient,
    pipeline_ref: &str,
    step_ref: &str,
    direction: MoveDirection,
) -> Result<()> {
    let editor = open_editor(client, pipeline_ref).await?;
    let step_id = resolve_step_id(&editor.steps(), step_ref)?;

    editor.move_step(step_id, direction.into()).await?;

    println!("{}", "✓ Step moved!".green().bold());
    println!();
    print_steps(&editor.steps());

    Ok(())
}

fn list_templates() {
    println!("{}", "Predefined step templates:".bold());
    println!();
    for template in template::catalog() {
        println!("  {} {}", "▸".cyan(), template.label.bold());
        println!("    Key:      {}", template.key.cyan());
        println!(
            "    Duration: {} day(s)",
            template.default_duration_days.to_string().dimmed()
        );
        println!("    {}", template.description.dimmed());
        println!();
    }
}

/// Print a pipeline's steps in order
pub fn print_steps(steps: &[PipelineStep]) {
    for step in steps {
        let order = format!("[{}]", step.step_order);
        print!("  {} {}", order.cyan(), step.name.bold());
        if let Some(days) = step.duration_days {
            print!("  {}", format!("{} day(s)", days).dimmed());
        }
        if let Some(owner) = &step.task_owner {
            if let Some(label) = owner.display_label() {
                print!("  {}", format!("@{}", label).dimmed());
            }
        }
        println!();
        if let Some(desc) = &step.description {
            println!("      {}", desc.dimmed());
        }
    }
}
