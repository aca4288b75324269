use anyhow::{bail, Context, Result};
use std::env;
use tracing_subscriber::EnvFilter;

use jps_lookup::{Category, JpsClient, LookupConfig};

const USAGE: &str = "usage: jps-lookup [uri] <person|place|organization|title|rs> <text...>";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("uri") {
        // URI mode: print the request without sending it
        run_uri(&args[1..])
    } else {
        run_lookup(&args).await
    }
}

fn parse_args(args: &[String]) -> Result<(Category, String)> {
    if args.len() < 2 {
        bail!(USAGE);
    }

    let category: Category = args[0].parse()?;
    let text = args[1..].join(" ");
    Ok((category, text))
}

fn run_uri(args: &[String]) -> Result<()> {
    let (category, text) = parse_args(args)?;
    let config = LookupConfig::from_env().context("Failed to read configuration")?;

    println!("{}", jps_lookup::build_query_uri_for(&config.endpoint, category, &text));
    Ok(())
}

async fn run_lookup(args: &[String]) -> Result<()> {
    let (category, text) = parse_args(args)?;
    let config = LookupConfig::from_env().context("Failed to read configuration")?;
    let client = JpsClient::with_config(config)?;
    tracing::debug!(
        endpoint = %client.config().endpoint,
        timeout = ?client.config().timeout,
        "client ready"
    );

    let results = client
        .lookup(category, &text)
        .await
        .with_context(|| format!("{} lookup for '{}' failed", category, text))?;

    println!("{}", serde_json::to_string_pretty(&results)?);
    eprintln!("{} result(s)", results.len());
    Ok(())
}
