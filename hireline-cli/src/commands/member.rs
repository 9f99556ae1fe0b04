//! Member command handlers
//!
//! Manages the organization member roster used for step ownership.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use hireline_core::dto::member::CreateMember;

use crate::config::Config;
use hireline_client::PipelineClient;

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Register an organization member
    Add {
        /// Member name
        #[arg(short, long)]
        name: Option<String>,

        /// Member email
        #[arg(short, long)]
        email: Option<String>,
    },
    /// List the organization's members
    List,
}

/// Handle member commands
pub async fn handle_member_command(command: MemberCommands, config: &Config) -> Result<()> {
    let client = PipelineClient::new(&config.server_url);

    match command {
        MemberCommands::Add { name, email } => add_member(&client, name, email).await,
        MemberCommands::List => list_members(&client).await,
    }
}

async fn add_member(
    client: &PipelineClient,
    name: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let member = client.create_member(CreateMember { name, email }).await?;

    println!("{}", "✓ Member registered!".green().bold());
    println!("  ID:    {}", member.id.to_string().cyan());
    if let Some(name) = &member.name {
        println!("  Name:  {}", name.bold());
    }
    if let Some(email) = &member.email {
        println!("  Email: {}", email.dimmed());
    }

    Ok(())
}

async fn list_members(client: &PipelineClient) -> Result<()> {
    let members = client.list_members().await?;

    if members.is_empty() {
        println!("{}", "No members found.".yellow());
    } else {
        println!("{}", format!("Found {} member(s):", members.len()).bold());
        println!();
        for member in members {
            let label = member.display_label().unwrap_or("(unnamed)");
            println!("  {} {}", "▸".cyan(), label.bold());
            println!("    ID: {}", member.id.to_string().dimmed());
            if let (Some(_), Some(email)) = (&member.name, &member.email) {
                println!("    Email: {}", email.dimmed());
            }
        }
    }

    Ok(())
}
