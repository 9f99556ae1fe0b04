//! Pipeline command handlers
//!
//! Handles all pipeline-related CLI commands including creation, listing,
//! viewing, and deletion.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use hireline_core::domain::pipeline::Pipeline;
use hireline_core::dto::pipeline::{CreatePipeline, PipelineSummary};

use crate::commands::step::print_steps;
use crate::config::Config;
use crate::id_resolver::resolve_pipeline_id;
use crate::types::IdOrPrefix;
use hireline_client::PipelineClient;

/// Pipeline subcommands
#[derive(Subcommand)]
pub enum PipelineCommands {
    /// Create a new pipeline
    Create {
        /// Pipeline name
        #[arg(short, long)]
        name: String,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List all pipelines
    List,
    /// Get pipeline details including its steps
    Get {
        /// Pipeline ID or unambiguous prefix
        id: String,
    },
    /// Delete a pipeline and its steps
    Delete {
        /// Pipeline ID or unambiguous prefix
        id: String,
    },
}

/// Handle pipeline commands
///
/// Routes pipeline subcommands to their respective handlers.
pub async fn handle_pipeline_command(command: PipelineCommands, config: &Config) -> Result<()> {
    let client = PipelineClient::new(&config.server_url);

    match command {
        PipelineCommands::Create { name, description } => {
            create_pipeline(&client, name, description).await
        }
        PipelineCommands::List => list_pipelines(&client).await,
        PipelineCommands::Get { id } => get_pipeline(&client, &id).await,
        PipelineCommands::Delete { id } => delete_pipeline(&client, &id).await,
    }
}

/// Create a new pipeline
async fn create_pipeline(
    client: &PipelineClient,
    name: String,
    description: Option<String>,
) -> Result<()> {
    let pipeline = client
        .create_pipeline(CreatePipeline { name, description })
        .await?;

    println!("{}", "✓ Pipeline created successfully!".green().bold());
    println!("  ID:   {}", pipeline.id.to_string().cyan());
    println!("  Name: {}", pipeline.name.bold());
    if let Some(desc) = &pipeline.description {
        println!("  Description: {}", desc.dimmed());
    }

    Ok(())
}

/// List all pipelines
async fn list_pipelines(client: &PipelineClient) -> Result<()> {
    let pipelines = client.list_pipelines().await?;

    if pipelines.is_empty() {
        println!("{}", "No pipelines found.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} pipeline(s):", pipelines.len()).bold()
        );
        println!();
        for pipeline in pipelines {
            print_pipeline_summary(&pipeline);
        }
    }

    Ok(())
}

/// Get and display a single pipeline
async fn get_pipeline(client: &PipelineClient, id: &str) -> Result<()> {
    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_pipeline_id(client, &id_or_prefix).await?;

    let pipeline = client.get_pipeline(uuid).await?;

    print_pipeline_details(&pipeline);

    Ok(())
}

/// Delete a pipeline
async fn delete_pipeline(client: &PipelineClient, id: &str) -> Result<()> {
    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_pipeline_id(client, &id_or_prefix).await?;

    client.delete_pipeline(uuid).await?;

    println!(
        "{}",
        format!("✓ Pipeline {} deleted successfully!", uuid)
            .green()
            .bold()
    );

    Ok(())
}

/// Print a pipeline summary
fn print_pipeline_summary(pipeline: &PipelineSummary) {
    println!("  {} {}", "▸".cyan(), pipeline.name.bold());
    println!("    ID:      {}", pipeline.id.to_string().dimmed());
    println!("    Steps:   {}", pipeline.step_count.to_string().dimmed());
    println!(
        "    Created: {}",
        pipeline
            .created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    if let Some(desc) = &pipeline.description {
        println!("    Description: {}", desc.dimmed());
    }
    println!();
}

/// Print detailed pipeline information
fn print_pipeline_details(pipeline: &Pipeline) {
    println!("{}", "Pipeline Details:".bold());
    println!("  ID:          {}", pipeline.id.to_string().cyan());
    println!("  Name:        {}", pipeline.name.bold());
    if let Some(desc) = &pipeline.description {
        println!("  Description: {}", desc);
    }
    println!(
        "  Created:     {}",
        pipeline.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "  Updated:     {}",
        pipeline.updated_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!();

    if pipeline.steps.is_empty() {
        println!("{}", "No steps yet.".yellow());
    } else {
        println!("{}", "Steps:".bold());
        print_steps(&pipeline.steps);
    }
}
