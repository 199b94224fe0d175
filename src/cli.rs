use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use reqwest::Url;

use crate::{
    quantity::{minutes::Minutes, voltage::Volts},
    telemetry::Corrections,
    timelabel::{NightWindow, TimeLabel},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Base URL of the telemetry backend.
    #[clap(long, env = "SOLWATT_HOST")]
    pub host: Url,

    /// Bearer token for the backend.
    #[clap(long, env = "SOLWATT_TOKEN", hide_env_values = true)]
    pub token: String,

    #[clap(flatten)]
    pub corrections: CorrectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch a stored day's series and accumulate its energy.
    Day(DayArgs),

    /// Fetch today's live series, accumulate it, and check freshness.
    Live(LiveArgs),
}

#[derive(Copy, Clone, Parser)]
pub struct CorrectionArgs {
    /// Evening start of the solar night suppression window.
    #[clap(long = "night-start", default_value = "19:00", env = "NIGHT_START")]
    pub night_start: TimeLabel,

    /// Morning end of the solar night suppression window.
    #[clap(long = "morning-end", default_value = "05:30", env = "MORNING_END")]
    pub morning_end: TimeLabel,

    /// AC channels strictly below this voltage count as disconnected.
    #[clap(long = "min-ac-voltage", default_value = "50", env = "MIN_AC_VOLTAGE")]
    pub min_ac_voltage: Volts,

    /// Solar voltages within this band around zero also zero the current.
    #[clap(long = "solar-voltage-epsilon", default_value = "0", env = "SOLAR_VOLTAGE_EPSILON")]
    pub solar_voltage_epsilon: Volts,
}

impl From<CorrectionArgs> for Corrections {
    fn from(args: CorrectionArgs) -> Self {
        Self::builder()
            .night(NightWindow { start: args.night_start, morning_end: args.morning_end })
            .min_ac_voltage(args.min_ac_voltage)
            .solar_voltage_epsilon(args.solar_voltage_epsilon)
            .build()
    }
}

#[derive(Parser)]
pub struct SiteArgs {
    /// Site path identifier, as used by the backend.
    #[clap(long, env = "SOLWATT_SITE")]
    pub site: String,

    /// Spacing between samples, in minutes.
    #[clap(long = "interval-minutes", default_value = "5", env = "INTERVAL_MINUTES")]
    pub interval: Minutes,

    /// Also print the corrected per-sample series.
    #[clap(long)]
    pub series: bool,
}

#[derive(Parser)]
pub struct DayArgs {
    #[clap(flatten)]
    pub site: SiteArgs,

    /// Calendar day to fetch, `YYYY-MM-DD`.
    #[clap(long)]
    pub date: NaiveDate,
}

#[derive(Parser)]
pub struct LiveArgs {
    #[clap(flatten)]
    pub site: SiteArgs,
}
