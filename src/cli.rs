use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use almanako::Holiday;

/// Almanako: dates in many calendars, moon phases and holidays.
#[derive(Parser)]
#[command(
    name = "almanako",
    version,
    about = "Dates in many calendars, moon phases and holidays"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Report on this date (YYYY-MM-DD) instead of today.
    #[arg(short, long, global = true)]
    pub date: Option<NaiveDate>,

    /// Path to TOML configuration file [default: almanako.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run; `today` if omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the date in every calendar, followed by the lunar report.
    Today,
    /// Print the lunar phase and the quarters of the current lunation.
    Moon,
    /// Print the dates of holidays in a Gregorian year.
    Holidays(HolidaysArgs),
    /// Print the equinoxes and solstices of a Gregorian year.
    Seasons(SeasonsArgs),
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Gregorian year; overrides [holidays].year from config.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Holidays to list, e.g. `easter "yom kippur"`; overrides
    /// [holidays].list from config.
    pub holidays: Vec<Holiday>,
}

/// Arguments for the `seasons` subcommand.
#[derive(clap::Args)]
pub struct SeasonsArgs {
    /// Gregorian year [default: year of --date or today].
    #[arg(short, long)]
    pub year: Option<i32>,
}
