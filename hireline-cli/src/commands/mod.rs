//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod member;
mod pipeline;
mod step;

pub use member::MemberCommands;
pub use pipeline::PipelineCommands;
pub use step::StepCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Pipeline management
    Pipeline {
        #[command(subcommand)]
        command: PipelineCommands,
    },
    /// Pipeline step editing
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Organization member roster
    Member {
        #[command(subcommand)]
        command: MemberCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Pipeline { command } => pipeline::handle_pipeline_command(command, config).await,
        Commands::Step { command } => step::handle_step_command(command, config).await,
        Commands::Member { command } => member::handle_member_command(command, config).await,
    }
}
