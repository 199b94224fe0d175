mod api;
mod cli;
mod freshness;
mod prelude;
mod quantity;
mod tables;
mod telemetry;
mod timelabel;

use chrono::{DateTime, Local};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{Api, DayData},
    cli::{Args, Command, SiteArgs},
    freshness::Freshness,
    prelude::*,
    telemetry::{Corrections, DayEnergy, Sample, accumulate},
    timelabel::TimeLabel,
};

#[tokio::main]
async fn main() -> Result {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let api = Api::try_new(args.host, &args.token)?;
    let corrections = Corrections::from(args.corrections);

    match args.command {
        Command::Day(day_args) => {
            let day = api.get_day(&day_args.site.site, day_args.date).await?;
            report(&day, &day_args.site, corrections)?;
        }

        Command::Live(live_args) => {
            let day = api.get_live(&live_args.site.site, live_args.site.interval).await?;
            report(&day, &live_args.site, corrections)?;

            let last_label =
                day.charts.last().and_then(|point| TimeLabel::from_json_value(&point.time));
            match Freshness::classify(last_label, Local::now()) {
                Freshness::Fresh => info!("The site is reporting"),
                Freshness::Stale => {
                    warn!(last_sample = ?last_label, "No recent data from the site");
                }
            }
            if let Some(snapshot) = &day.snapshot {
                if let Some(updated_at) = DateTime::from_timestamp(snapshot.updated_at, 0) {
                    info!(at = %updated_at.with_timezone(&Local), "Last snapshot");
                }
                info!(
                    v1 = snapshot.battery_voltage,
                    v2 = snapshot.battery_voltage_2,
                    v3 = snapshot.battery_voltage_3,
                    v4 = snapshot.battery_voltage_4,
                    current = snapshot.battery_current,
                    "Battery snapshot",
                );
            }
        }
    }

    Ok(())
}

fn report(day: &DayData, site: &SiteArgs, corrections: Corrections) -> Result<DayEnergy> {
    let samples: Vec<Sample> = day.charts.iter().map(Sample::from).collect();
    let energy = accumulate(&samples, site.interval, corrections)?;
    info!(
        n_samples = energy.series.len(),
        solar = %energy.solar,
        grid = %energy.grid,
        load = %energy.inverter,
        "Accumulated",
    );
    if let Some(peak) = energy.peak_solar() {
        info!(power = %peak.solar_power, at = ?peak.time, "Peak solar");
    }
    println!("{}", tables::build_totals_table(&energy, day));
    if site.series {
        println!("{}", tables::build_series_table(&energy.series));
        println!("{}", tables::build_battery_table(&energy.series));
    }
    Ok(energy)
}
