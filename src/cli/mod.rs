//! Command-line interface and the post orchestration flow.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{AppError, Result};
use crate::ocm::{self, ClassifiedResponse, Connection, HttpConnection};
use crate::params;
use crate::source;
use crate::template::{self, SupportReason};

/// supportctl -- post limited support reasons to managed clusters.
#[derive(Parser, Debug)]
#[command(name = "supportctl", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send a limited support reason to a given cluster
    Post {
        /// Internal cluster identifier
        cluster_id: String,

        /// Message template file or URL
        #[arg(short = 't', long)]
        template: String,

        /// Key-value pair (eg. -p FOO=BAR) to set a parameter value in the template
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,

        /// Print the limited support reason about to be sent but don't send it
        #[arg(short = 'd', long)]
        dry_run: bool,
    },
}

/// Dispatch the parsed command line.
pub async fn run(cli: Cli, settings: &Settings) -> Result<()> {
    match cli.command {
        Commands::Post {
            cluster_id,
            template,
            params,
            dry_run,
        } => post(settings, &cluster_id, &template, &params, dry_run).await,
    }
}

#[tracing::instrument(name = "post_support_reason", skip_all, fields(cluster_id = %cluster_id))]
async fn post(
    settings: &Settings,
    cluster_id: &str,
    template: &str,
    raw_params: &[String],
    dry_run: bool,
) -> Result<()> {
    let raw = source::load(template).await?;
    let mut reason = SupportReason::parse(&raw)?;
    let params = params::parse(raw_params)?;

    ocm::validate_cluster_key(cluster_id)?;

    template::apply(&mut reason, &params)?;

    let leftover = reason.unresolved_placeholders();
    if !leftover.is_empty() {
        warn!(
            placeholders = ?leftover,
            "template still contains unresolved placeholders, they will be sent as-is"
        );
    }

    println!("The following limited support reason will be sent to {cluster_id}:");
    println!("{}", reason.to_pretty()?);

    if dry_run {
        return Ok(());
    }

    if !confirm()? {
        return Ok(());
    }

    let request = ocm::compose(cluster_id, &reason)?;
    let connection = HttpConnection::new(&settings.api)?;
    let response = connection.post(&request).await?;

    debug!(status = response.status, "response received");

    match ocm::classify(response.status, &response.body)? {
        ClassifiedResponse::Created(reply) => {
            debug!(id = %reply.id, "reason created");
            println!("Limited support reason has been sent successfully");
            Ok(())
        }
        ClassifiedResponse::Rejected(err) => Err(AppError::Rejected(err.reason)),
    }
}

/// Ask the operator to confirm before sending. Defaults to no.
fn confirm() -> Result<bool> {
    print!("Continue? (y/N): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
