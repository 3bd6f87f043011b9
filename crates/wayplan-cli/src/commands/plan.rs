use chrono::{DateTime, NaiveDateTime, Utc};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use wayplan_core::export;
use wayplan_core::{Config, TripPlanner, TripWindow};

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Xml,
}

#[derive(Args)]
pub struct PlanArgs {
    /// Catalog JSON file
    #[arg(long)]
    catalog: PathBuf,
    /// Where the trip starts from
    #[arg(long)]
    origin: String,
    /// Destination city
    #[arg(long)]
    destination: String,
    /// Departure instant (RFC 3339, or "YYYY-MM-DD HH:MM" in UTC)
    #[arg(long)]
    start: String,
    /// Return instant
    #[arg(long)]
    end: String,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(&args.catalog)?;
    let config = Config::load_or_default();

    let trip = TripWindow::try_new(
        args.origin,
        args.destination,
        parse_instant(&args.start)?,
        parse_instant(&args.end)?,
    )?;

    let items = catalog.items(config.packing.default_venue_minutes);
    let hotels = catalog.hotels();
    let legs = catalog.legs();

    let plan = TripPlanner::new(trip, &items, &hotels, &legs)
        .with_stay_times(config.stay_times())
        .plan()?;

    if !plan.unresolved.is_empty() {
        eprintln!(
            "warning: {} event(s) could not be ordered by dependencies: {}",
            plan.unresolved.len(),
            plan.unresolved.join(", ")
        );
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        OutputFormat::Xml => print!("{}", export::to_xml(&plan)),
    }
    Ok(())
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(format!("unrecognized instant '{value}': expected RFC 3339 or YYYY-MM-DD HH:MM").into())
}
