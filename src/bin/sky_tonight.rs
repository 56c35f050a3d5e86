//! What's up tonight
//!
//! Draws the sky chart for a location and time in the terminal and lists the
//! bodies above the horizon.
//!
//! Usage:
//!   cargo run --bin sky_tonight -- --lat 51.48 --lon 0.0 --time 2024-03-01T21:00:00Z

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser};
use log::info;
use serde::Serialize;

use skychart::config::Layer;
use skychart::events::SkyEvent;
use skychart::interaction::BodyInfo;
use skychart::observer::{FixedObserver, ObserverContext};
use skychart::render::AsciiCanvas;
use skychart::{Catalog, ChartConfig, GeoLocation, SkyChart};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Sky chart for the terminal
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Draws the visible sky for an observer as an ASCII chart",
    long_about = None
)]
struct Args {
    /// Observer latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Observer longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Instant to render (RFC 3339), defaults to now
    #[arg(long)]
    time: Option<DateTime<Utc>>,

    /// Chart width in characters, defaults to the terminal width
    #[arg(long)]
    width: Option<usize>,

    /// Chart height in characters, defaults to the terminal height
    #[arg(long)]
    height: Option<usize>,

    #[arg(long, action = ArgAction::SetTrue)]
    no_stars: bool,

    #[arg(long, action = ArgAction::SetTrue)]
    no_constellations: bool,

    #[arg(long, action = ArgAction::SetTrue)]
    no_planets: bool,

    /// JSON chart configuration
    #[arg(long)]
    config: Option<String>,

    /// JSON catalog to draw instead of the built-in bright stars
    #[arg(long)]
    catalog: Option<String>,

    /// JSON list of events ({title, datetime}) for the "near this instant" list
    #[arg(long)]
    events: Option<String>,

    /// Print visible bodies as JSON instead of drawing
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    observer: &'a ObserverContext,
    bodies: Vec<BodyInfo>,
    events: Vec<&'a SkyEvent>,
}

/// Chart size in cells: explicit flags, else the terminal, else 80x24
fn chart_size(args: &Args) -> (usize, usize) {
    let (term_w, term_h) = term_size::dimensions().unwrap_or((80, 24));
    let width = args.width.unwrap_or(term_w).max(10);
    // Leave room for the prompt
    let height = args.height.unwrap_or(term_h.saturating_sub(2)).max(5);
    (width, height)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ChartConfig::from_json_file(path)?,
        None => ChartConfig::default(),
    };

    let location = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(GeoLocation::new(lat, lon)),
        (None, None) => None,
        _ => return Err("--lat and --lon must be given together".into()),
    };

    let mut chart = match &args.catalog {
        Some(path) => SkyChart::with_catalog(config, Catalog::from_json_file(path)?)?,
        None => SkyChart::new(config)?,
    };
    chart.update_observer(&FixedObserver {
        location,
        instant: args.time,
    });
    chart.set_layer(Layer::Stars, !args.no_stars);
    chart.set_layer(Layer::Constellations, !args.no_constellations);
    chart.set_layer(Layer::Planets, !args.no_planets);

    if let Some(path) = &args.events {
        let events: Vec<SkyEvent> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        chart.set_events(&events);
    }

    let (width, height) = chart_size(&args);
    let mut canvas = AsciiCanvas::new(width, height);
    chart.render(Some(&mut canvas));

    let observer = *chart.observer();
    info!(
        "Rendered {}x{} chart for ({:.2}, {:.2}) at {}",
        width,
        height,
        observer.latitude(),
        observer.longitude(),
        observer.instant
    );

    let mut bodies = chart.visible_bodies();
    bodies.sort_by(|a, b| b.altitude.total_cmp(&a.altitude));

    if args.json {
        let report = Report {
            observer: &observer,
            bodies,
            events: chart.visible_events(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", canvas);
    println!();
    println!(
        "Sky at {} for lat {:.2}, lon {:.2}",
        observer.instant.format("%Y-%m-%d %H:%M UTC"),
        observer.latitude(),
        observer.longitude()
    );
    println!("-------------------------------------------------------");
    for body in &bodies {
        let magnitude = body
            .magnitude
            .map(|m| format!("mag {:>5.2}", m))
            .unwrap_or_default();
        println!(
            "{:<12} alt {:>5.1}  az {:>5.1} {:<2}  {}",
            body.name,
            body.altitude,
            body.azimuth,
            skychart::render::overlay::compass_point(body.azimuth),
            magnitude
        );
    }

    let events = chart.visible_events();
    if !events.is_empty() {
        println!("\nNear this time:");
        for event in events {
            println!("  {}  {}", event.datetime.format("%Y-%m-%d %H:%M"), event.title);
        }
    }

    Ok(())
}
