// SPDX-FileCopyrightText: 2026 festa contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use festa_core::{Agenda, Month, load_agenda};
use tracing_subscriber::EnvFilter;

/// Run the festa command-line interface.
pub fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli.execute() {
        println!("{} {}", "Error:".red(), e);
    }
    Ok(())
}

/// Command-line interface
#[derive(Debug, Parser)]
#[command(name = "festa", about = "A month-indexed festival agenda", version)]
pub struct Cli {
    /// Reference date for lifecycle queries; defaults to the current day
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands over a delimited agenda file.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the full agenda, months in calendar order
    Show {
        /// Agenda file, one `name:venue:dd-MM-yyyy:duration:style...` per line
        file: PathBuf,
    },

    /// Count the festivals tracked for one month
    Count {
        /// Agenda file
        file: PathBuf,

        /// Month to count
        #[arg(long)]
        month: Month,
    },

    /// Group festival names by their exact style set
    Styles {
        /// Agenda file
        file: PathBuf,
    },

    /// Cancel unconcluded festivals matching a venue set in one month
    Cancel {
        /// Agenda file
        file: PathBuf,

        /// Month to cancel in
        #[arg(long)]
        month: Month,

        /// Venue to cancel; repeatable
        #[arg(long = "venue", value_name = "VENUE", required = true)]
        venues: Vec<String>,
    },
}

impl Cli {
    /// Execute the parsed command.
    pub fn execute(self) -> Result<(), Box<dyn Error>> {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        tracing::debug!(%today, "running against reference date");

        match self.command {
            Commands::Show { file } => {
                let agenda = load(&file)?;
                print!("{}", agenda.render(today));
            }
            Commands::Count { file, month } => {
                let agenda = load(&file)?;
                match agenda.festivals_in(month) {
                    Some(festivals) => println!("{month}: {} festival(s)", festivals.len()),
                    None => println!("{month}: not tracked"),
                }
            }
            Commands::Styles { file } => {
                let agenda = load(&file)?;
                for (label, names) in agenda.group_by_style() {
                    println!("{label}: {}", names.join(", "));
                }
            }
            Commands::Cancel {
                file,
                month,
                venues,
            } => {
                let mut agenda = load(&file)?;
                let venues: HashSet<String> = venues.into_iter().collect();
                match agenda.cancel_in(&venues, month, today) {
                    Some(removed) => {
                        println!("cancelled {removed} festival(s) in {month}");
                        print!("{}", agenda.render(today));
                    }
                    None => println!("{month}: not tracked"),
                }
            }
        }
        Ok(())
    }
}

fn load(file: &Path) -> Result<Agenda, Box<dyn Error>> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("failed to read {}: {e}", file.display()))?;

    let mut agenda = Agenda::new();
    let summary = load_agenda(&content, &mut agenda);
    if summary.skipped > 0 {
        tracing::warn!(
            skipped = summary.skipped,
            added = summary.added,
            "some agenda records were skipped"
        );
    }
    Ok(agenda)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_cancel_with_repeated_venues() {
        let cli = Cli::try_parse_from([
            "festa", "cancel", "agenda.txt", "--month", "june", "--venue", "MADRID", "--venue",
            "BILBAO", "--today", "2024-06-01",
        ])
        .unwrap();

        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 6, 1));
        match cli.command {
            Commands::Cancel { month, venues, .. } => {
                assert_eq!(month, Month::June);
                assert_eq!(venues, ["MADRID", "BILBAO"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
