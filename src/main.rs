use anyhow::Context;
use clap::Parser;
use osrm_route_fetch::{
    sdk::config::RouterConfig,
    sdk::fetch::{fetch_and_save, FetchOutcome, DEFAULT_OUTPUT_PATH},
    sdk::routing::OsrmProvider,
    sdk::util::log::init_logging,
    sdk::waypoints::{load_from_csv, DEFAULT_WAYPOINTS},
};
use std::{path::PathBuf, time::Duration};

/// Fetch a driving route through a loop of waypoints and save it for the map
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Where to write the route JSON
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// [Optional] CSV file of `lat,lon` waypoints (with header) to use instead of the built-in loop
    #[arg(short, long)]
    waypoints: Option<PathBuf>,

    /// [Optional] OSRM server, overrides OSRM_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// [Optional] Routing profile, overrides OSRM_PROFILE
    #[arg(long)]
    profile: Option<String>,

    /// [Optional] Request timeout in seconds, overrides OSRM_TIMEOUT_SECS
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    init_logging(cli.verbose);

    // --- 1. Configuration ---
    let mut config = RouterConfig::from_env()?;
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url);
    }
    if let Some(profile) = cli.profile {
        config.profile = profile;
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout = Some(Duration::from_secs(secs));
    }
    log::debug!("Router config: {:?}", config);

    let waypoints = match &cli.waypoints {
        Some(path) => load_from_csv(path)
            .with_context(|| format!("Failed to load waypoints from {}", path.display()))?,
        None => DEFAULT_WAYPOINTS.to_vec(),
    };

    // --- 2. Fetch and persist ---
    let provider = OsrmProvider::new(&config)?;
    let outcome = fetch_and_save(&provider, &waypoints, &cli.output)
        .with_context(|| format!("Failed to fetch route from {}", config.base_url))?;

    // --- 3. Report ---
    match outcome {
        FetchOutcome::Saved { path, .. } => println!("Route saved to '{}'", path.display()),
        FetchOutcome::NoRoute => println!("Could not fetch the route."),
    }

    Ok(())
}
