use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use metro_planner::domain::{Point, Preference, StationId};
use metro_planner::network::Network;
use metro_planner::planner::{Algorithm, Planner, SearchConfig, SearchOutcome, SearchRequest};

/// Overrides the walking speed used by coordinate search.
const WALKING_SPEED_VAR: &str = "METRO_WALKING_SPEED";

/// Exit code for usage, load or request errors.
const FAILURE_EXIT: u8 = 1;

/// Exit code when the destination cannot be reached.
const UNREACHABLE_EXIT: u8 = 2;

#[derive(Parser)]
#[command(author, version, about = "Find routes through a metro network", long_about = None)]
struct Cli {
    /// Network description (JSON)
    network: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Route between two stations
    Route {
        origin: u32,
        destination: u32,

        /// dfs, bfs, ucs or astar
        #[arg(short, long, default_value = "astar")]
        algorithm: Algorithm,

        /// hops, time, distance or transfers
        #[arg(short, long, default_value = "time")]
        preference: Preference,
    },
    /// Fastest route between the stations nearest to two points
    #[command(allow_negative_numbers = true)]
    Coords { x1: f64, y1: f64, x2: f64, y2: f64 },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            return Ok(ExitCode::from(parse_failure_exit(err.kind())));
        }
    };

    let network = Network::load(&cli.network)
        .with_context(|| format!("failed to load {}", cli.network.display()))?;
    info!(stations = network.len(), "Network ready");

    let config = config_from_env()?;
    let planner = Planner::new(&network, &config);

    let outcome = match cli.command {
        Commands::Route {
            origin,
            destination,
            algorithm,
            preference,
        } => {
            let request = SearchRequest::new(StationId(origin), StationId(destination), algorithm)
                .with_preference(preference);
            let result = planner.search(&request)?;
            info!(paths_expanded = result.paths_expanded, "Search finished");
            result.outcome
        }
        Commands::Coords { x1, y1, x2, y2 } => {
            let route = planner.search_from_coordinates(Point::new(x1, y1), Point::new(x2, y2))?;
            println!(
                "Walk {:.2} to station {}, then from station {} walk {:.2}",
                route.walk_to_origin,
                route.origin_station,
                route.destination_station,
                route.walk_from_destination
            );
            if let Some(total) = route.total_time() {
                println!("Door to door: {total:.2}");
            }
            route.result.outcome
        }
    };

    print_outcome(&network, &outcome);

    Ok(if outcome.is_found() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(UNREACHABLE_EXIT)
    })
}

/// Help and version requests succeed; any other parse failure is a usage error.
fn parse_failure_exit(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => FAILURE_EXIT,
    }
}

fn config_from_env() -> anyhow::Result<SearchConfig> {
    let mut config = SearchConfig::default();
    if let Ok(raw) = std::env::var(WALKING_SPEED_VAR) {
        let speed: f64 = raw
            .parse()
            .with_context(|| format!("{WALKING_SPEED_VAR} is not a number: {raw:?}"))?;
        anyhow::ensure!(
            speed.is_finite() && speed > 0.0,
            "{WALKING_SPEED_VAR} must be positive, got {speed}"
        );
        config = config.with_walking_speed(speed);
    }
    Ok(config)
}

fn print_outcome(network: &Network, outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Found(_) => println!("Route found:"),
        SearchOutcome::Unreachable { .. } => println!("No route exists. Last explored path:"),
    }

    let path = outcome.path();
    for station_id in path.route() {
        match network.station(*station_id) {
            Some(station) => println!("  {:>5}  {} ({})", station_id, station.name, station.line),
            None => println!("  {:>5}  ?", station_id),
        }
    }
    println!("Cost: {:.2}", path.g());
}
