//! Bitemap CLI
//!
//! Command-line interface for address resolution, route previews,
//! directions hand-off, and the discovery backend.

#![allow(clippy::print_stdout)]

mod launcher;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{MapService, NavigationService};
use clap::{Parser, Subcommand};
use domain::{GeoPoint, Restaurant};
use infrastructure::{AppConfig, RouteAdapter, init_telemetry};
use integration_discovery::{DiscoveryClient, HttpDiscoveryClient};
use secrecy::ExposeSecret;

use crate::launcher::DesktopLauncher;

/// Bitemap CLI
#[derive(Parser)]
#[command(name = "bitemap-cli")]
#[command(author, version, about = "Bitemap restaurant discovery CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a configuration file (default: ./config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an address to a coordinate
    Geocode {
        /// Address text, e.g. "290 Bremner Blvd, Toronto"
        address: String,
    },

    /// Plan a driving route between two addresses
    Route {
        /// Starting address
        from: String,

        /// Destination address
        to: String,

        /// Use the configured directions provider instead of the local planner
        #[arg(long)]
        via_api: bool,
    },

    /// Open directions to a destination in an external application
    Navigate {
        /// Destination address
        destination: String,

        /// Current location as "lat,lon", enables turn-by-turn navigation
        #[arg(long)]
        at: Option<String>,
    },

    /// Search restaurants
    Search {
        /// Search terms
        query: String,

        /// Optional location filter
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Show trending restaurants
    Trending,

    /// List saved favorites
    Favorites {
        /// Access token from a login command
        #[arg(long, env = "BITEMAP_TOKEN")]
        token: String,
    },

    /// Start an anonymous guest session
    LoginGuest {
        /// Device identifier (generated when omitted)
        #[arg(long)]
        device_id: Option<String>,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Parse a "lat,lon" argument
fn parse_coordinate(arg: &str) -> anyhow::Result<GeoPoint> {
    let (lat, lon) = arg
        .split_once(',')
        .context("expected coordinates as \"lat,lon\"")?;
    let latitude: f64 = lat.trim().parse().context("latitude is not a number")?;
    let longitude: f64 = lon.trim().parse().context("longitude is not a number")?;
    Ok(GeoPoint::new(latitude, longitude)?)
}

fn print_restaurants(restaurants: &[Restaurant]) {
    for restaurant in restaurants {
        println!(
            "🍽️  {} — {} (⭐ {:.1})",
            restaurant.name, restaurant.cuisine, restaurant.rating
        );
        println!("    {}", restaurant.address);
    }
}

#[tokio::main]
#[allow(clippy::too_many_lines)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    config.validate().map_err(anyhow::Error::msg)?;

    // RUST_LOG still wins inside init_telemetry
    if cli.verbose > 0 {
        config.telemetry.log_filter = Some(log_filter_from_verbosity(cli.verbose).to_string());
    }
    init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Geocode { address } => {
            let resolution = MapService::locate_address(&address);
            println!("📍 {} ({})", resolution.point, resolution.tier);
        }

        Commands::Route { from, to, via_api } => {
            let origin = MapService::locate_address(&from);
            let destination = MapService::locate_address(&to);

            let adapter = if via_api {
                RouteAdapter::from_config(&config.directions)?
            } else {
                RouteAdapter::synthetic()
            };
            let service = MapService::new(Arc::new(adapter));

            let route = service
                .route_preview(origin.point, destination.point)
                .await?;

            println!("🗺️  {from} → {to}");
            println!("    Distance: {}", route.distance_label());
            println!("    Duration: {}", route.duration_label());
            println!("    Waypoints:");
            for point in &route.points {
                println!("      {point}");
            }
        }

        Commands::Navigate { destination, at } => {
            let current_location = at.as_deref().map(parse_coordinate).transpose()?;

            let service = NavigationService::new(Arc::new(DesktopLauncher));
            match service.open_directions(&destination, current_location) {
                Ok(approach) => println!("✅ Directions opened via {approach}"),
                Err(e) => {
                    println!("❌ {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Search { query, location } => {
            let client = HttpDiscoveryClient::new(&config.discovery)?;
            let page = client
                .search_restaurants(&query, location.as_deref())
                .await?;

            println!("🔎 {} result(s) for \"{query}\"", page.count);
            print_restaurants(&page.restaurants);
        }

        Commands::Trending => {
            let client = HttpDiscoveryClient::new(&config.discovery)?;
            let page = client.trending_restaurants().await?;

            println!("🔥 Trending now:");
            print_restaurants(&page.restaurants);
        }

        Commands::Favorites { token } => {
            let client = HttpDiscoveryClient::new(&config.discovery)?;
            let page = client.favorites(&token).await?;

            println!("⭐ {} favorite(s):", page.count);
            for item in &page.favorites {
                println!(
                    "🍽️  {} — saved {}",
                    item.restaurant.name,
                    item.created_at.format("%Y-%m-%d")
                );
                println!("    {}", item.restaurant.address);
            }
        }

        Commands::LoginGuest { device_id } => {
            let device_id = device_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

            let client = HttpDiscoveryClient::new(&config.discovery)?;
            let session = client.login_as_guest(&device_id).await?;

            println!("👤 Signed in as guest {}", session.user.id);
            if let Some(name) = &session.user.name {
                println!("    Name: {name}");
            }
            println!("🔑 Access token: {}", session.access_token.expose_secret());
            println!("    Pass it via --token or BITEMAP_TOKEN to the favorites command.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_zero() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
    }

    #[test]
    fn log_filter_verbosity_one() {
        assert_eq!(log_filter_from_verbosity(1), "info");
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), "debug");
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn parse_coordinate_accepts_lat_lon() {
        let point = parse_coordinate("43.6426,-79.3871").unwrap();
        assert!((point.latitude() - 43.6426).abs() < 1e-9);
        assert!((point.longitude() - (-79.3871)).abs() < 1e-9);
    }

    #[test]
    fn parse_coordinate_tolerates_spaces() {
        let point = parse_coordinate(" 43.6426 , -79.3871 ").unwrap();
        assert!((point.latitude() - 43.6426).abs() < 1e-9);
    }

    #[test]
    fn parse_coordinate_rejects_missing_comma() {
        assert!(parse_coordinate("43.6426 -79.3871").is_err());
    }

    #[test]
    fn parse_coordinate_rejects_non_numbers() {
        assert!(parse_coordinate("here,there").is_err());
    }

    #[test]
    fn parse_coordinate_rejects_out_of_range() {
        assert!(parse_coordinate("95.0,-79.3871").is_err());
    }
}
