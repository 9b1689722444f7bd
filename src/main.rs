// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Phaseline-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Phaseline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Phaseline CLI entrypoint.
//!
//! Loads a portfolio JSON file (or the built-in demo with `--demo`) and runs
//! the dual-pane timeline viewer.

use std::error::Error;

use chrono::{Local, NaiveDate};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <portfolio.json> [--today <YYYY-MM-DD>] [--anchor <YYYY-MM-DD>]\n  {program} --demo [--today <YYYY-MM-DD>] [--anchor <YYYY-MM-DD>]\n\nThe portfolio file holds an array of projects with phases.\n--demo uses a built-in portfolio and cannot be combined with a file.\n--today overrides the current date used for the marker and initial focus.\n--anchor pins the timeline origin; default is the month of the earliest phase."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    portfolio: Option<String>,
    today: Option<NaiveDate>,
    anchor: Option<NaiveDate>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--today" => {
                if options.today.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let today: NaiveDate = raw.parse().map_err(|_| ())?;
                options.today = Some(today);
            }
            "--anchor" => {
                if options.anchor.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let anchor: NaiveDate = raw.parse().map_err(|_| ())?;
                options.anchor = Some(anchor);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.portfolio.is_some() {
                    return Err(());
                }
                options.portfolio = Some(arg);
            }
        }
    }

    if options.demo && options.portfolio.is_some() {
        return Err(());
    }

    if !options.demo && options.portfolio.is_none() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "phaseline".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let records = if options.demo {
            phaseline::tui::demo_portfolio()
        } else {
            let path = options.portfolio.as_deref().unwrap_or(".");
            phaseline::store::load_portfolio(path)?
        };
        let projects = phaseline::model::decode_portfolio(&records);

        let today = options.today.unwrap_or_else(|| Local::now().date_naive());
        let anchor = options
            .anchor
            .unwrap_or_else(|| phaseline::tui::default_anchor(&projects, today));
        let config = phaseline::config::TimelineConfig::terminal_cells(anchor);

        phaseline::tui::run(projects, config, today)?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("phaseline: {err}");
        std::process::exit(1);
    }
}
