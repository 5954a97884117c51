mod cli;
mod config;
mod logging;
mod report;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use almanako::{Date, JulianDay};

use crate::cli::{Cli, Command, HolidaysArgs, SeasonsArgs};
use crate::config::AlmanakoConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    // The lunar phase is taken at noon of an explicit date, otherwise now.
    let (date, jd) = match cli.date {
        Some(naive) => {
            let date = Date::from_naive(naive)
                .with_context(|| format!("date out of supported range: {naive}"))?;
            (date, JulianDay::from_date(date).at_noon())
        }
        None => (Date::today(), JulianDay::now()),
    };
    debug!(%date, jd = jd.0, "reporting");

    let lines = match cli.command.unwrap_or(Command::Today) {
        Command::Today => {
            info!(%date, "today report");
            report::today_report(date, jd, config.utc_offset_minutes, config.leap_rule()?)
        }
        Command::Moon => {
            info!(%date, "lunar report");
            report::lunar_report(date, jd, config.utc_offset_minutes)
        }
        Command::Holidays(args) => holidays(args, date, &config)?,
        Command::Seasons(SeasonsArgs { year }) => {
            let year = year.unwrap_or(date.gregorian().0);
            info!(year, "season report");
            report::season_report(year)?
        }
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn holidays(args: HolidaysArgs, date: Date, config: &AlmanakoConfig) -> Result<Vec<String>> {
    let year = args
        .year
        .or(config.holidays.year)
        .unwrap_or(date.gregorian().0);
    let list = if args.holidays.is_empty() {
        config.holiday_list()?
    } else {
        args.holidays
    };
    info!(year, count = list.len(), "holiday report");
    report::holiday_report(year, &list, config.leap_rule()?)
}
