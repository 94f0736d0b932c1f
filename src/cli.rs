//! # Command Line Interface
//!
//! Each subcommand maps onto a single `jira-v3` service call and prints the
//! decoded response as pretty JSON.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use jira_v3::JiraClient;
use jira_v3::connect::connect_from_env;
use jira_v3::models::ProjectSearchOptionsScheme;
use serde::Serialize;
use tokio::runtime::Runtime;
use tracing::info;

/// Top-level CLI command for the jira tool
#[derive(Parser)]
#[command(name = "jira")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Query a Jira Cloud site from the command line")]
#[command(
  long_about = "Query a Jira Cloud site from the command line.\n\n\
        The site is read from JIRA_HOST or `host` in the config file. Credentials\n\
        come from JIRA_USER and JIRA_API_TOKEN, or from a .netrc entry for the host."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
  /// Show the user the credentials belong to
  Myself,

  /// Show version and deployment details of the site
  ServerInfo,

  /// Show a single issue
  Issue {
    /// The issue key (e.g., PROJ-123)
    #[arg(index = 1)]
    key: String,

    /// Only return these fields
    #[arg(long, short = 'f', value_delimiter = ',')]
    fields: Vec<String>,
  },

  /// Search projects visible to the user
  Projects {
    /// Match against project key or name
    #[arg(long, short = 'q')]
    query: Option<String>,

    #[arg(long, default_value_t = 50)]
    max_results: i32,
  },

  /// List dashboards visible to the user
  Dashboards {
    /// `favourite` or `my`
    #[arg(long)]
    filter: Option<String>,

    #[arg(long, default_value_t = 20)]
    max_results: i32,
  },
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = connect_from_env()?;

  rt.block_on(run(&client, cli.command))
}

async fn run(client: &JiraClient, command: Commands) -> Result<()> {
  match command {
    Commands::Myself => {
      let (user, _) = client.myself().details(&[]).await?;
      print_json(&user)
    }
    Commands::ServerInfo => {
      let (info, _) = client.server_info().get().await?;
      print_json(&info)
    }
    Commands::Issue { key, fields } => {
      let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
      let (issue, _) = client
        .issues()
        .get(&key, &fields, &[])
        .await
        .with_context(|| format!("Failed to fetch issue {key}"))?;
      print_json(&issue)
    }
    Commands::Projects { query, max_results } => {
      let options = ProjectSearchOptionsScheme {
        query,
        ..Default::default()
      };
      let (page, _) = client.projects().search(&options, 0, max_results).await?;
      info!(total = page.total, "Fetched projects");
      print_json(&page)
    }
    Commands::Dashboards { filter, max_results } => {
      let (page, _) = client.dashboards().gets(0, max_results, filter.as_deref()).await?;
      info!(total = page.total, "Fetched dashboards");
      print_json(&page)
    }
  }
}

#[allow(clippy::print_stdout)]
fn print_json<T: Serialize>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
