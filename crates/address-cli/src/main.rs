//! Address validator command line
//!
//! Validates a single address (`--address`) or one address per line from a
//! file or stdin, printing one JSON report per address.

mod batch;

use address_core::{AddressInput, RuleBasedValidator, ValidatorConfig};
use anyhow::{Context, Result};
use batch::BatchRunner;
use clap::{Arg, ArgAction, Command};
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("address-validator")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rule-based postal address validator")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file path"),
        )
        .arg(
            Arg::new("country")
                .long("country")
                .value_name("COUNTRY")
                .help("Country code or name (ZA, KZ, south-africa, kazakhstan)"),
        )
        .arg(
            Arg::new("reference-data")
                .long("reference-data")
                .value_name("FILE")
                .help("Custom reference tables in JSON"),
        )
        .arg(
            Arg::new("address")
                .long("address")
                .short('a')
                .value_name("ADDRESS")
                .help("Validate a single address")
                .conflicts_with("input"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .help("File with one address per line, '-' for stdin (default)"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print JSON output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => {
            let config = ValidatorConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path))?;
            log::info!("Loaded configuration from {}", path);
            config
        }
        None => ValidatorConfig::default(),
    };

    if let Some(country) = matches.get_one::<String>("country") {
        config.country = country.parse()?;
    }
    if let Some(path) = matches.get_one::<String>("reference-data") {
        config.reference_data = Some(PathBuf::from(path));
    }
    if matches.get_flag("pretty") {
        config.pretty = true;
    }
    config.validate()?;

    let reference = config.load_reference_data()?;
    let validator = RuleBasedValidator::new(reference)?;
    log::info!("Validating addresses for {}", validator.country());

    if let Some(address) = matches.get_one::<String>("address") {
        let input = AddressInput::new(address)?;
        let report = validator.report(&input);
        println!("{}", to_json(&report, config.pretty)?);
        return Ok(());
    }

    let lines = match matches.get_one::<String>("input").map(String::as_str) {
        None | Some("-") => io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read addresses from stdin")?,
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read addresses from {}", path))?
            .lines()
            .map(str::to_string)
            .collect(),
    };

    let outcome = BatchRunner::new(&validator).run(&lines);
    for report in &outcome.reports {
        println!("{}", to_json(report, config.pretty)?);
    }
    eprintln!("{}", to_json(&outcome.summary, config.pretty)?);

    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
