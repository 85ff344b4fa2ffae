//! GitHub Org Client - command line entry point
//!
//! Prints the public repositories of an organization as a JSON array,
//! optionally restricted to one license key.

use anyhow::{Context, Result};
use clap::Parser;
use github_org_client::{Config, OrgClient};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// List an organization's public repositories.
#[derive(Debug, Parser)]
#[command(name = "github-org-client", version, about)]
struct Cli {
    /// Organization login (e.g. "google")
    org: String,

    /// Only list repositories with this license key (e.g. "apache-2.0")
    #[arg(short, long)]
    license: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr so stdout stays machine readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using GitHub API at {}", config.github_api_url);

    let client = OrgClient::from_config(&cli.org, &config);
    let result = match cli.license.as_deref() {
        Some(license) => client.public_repos_with_license(license),
        None => client.public_repos(),
    };

    let names = match result {
        Ok(names) => names,
        Err(e) => {
            error!("Failed to list repositories for {}: {}", cli.org, e);
            return Err(e).with_context(|| format!("listing repositories for {}", cli.org));
        }
    };

    println!("{}", serde_json::to_string_pretty(&names)?);

    let stats = client.metrics().snapshot();
    info!(
        "{} repositories listed ({} filtered out) over {} requests",
        stats.repos_listed,
        stats.repos_filtered_out,
        stats.total_requests()
    );

    Ok(())
}
