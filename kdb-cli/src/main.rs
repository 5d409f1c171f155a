//! Command-line interface for kdb
//! This binary runs the schedule engines over raw catalog fields and prints the results.
//!
//! Usage:
//!   kdb term `<raw>`                      - Canonical term groups, one per line
//!   kdb period `<raw>`                    - Rendered period tokens
//!   kdb grid `<raw>`                      - Occupancy chart for each period clause
//!   kdb course -F `<label>=<value>` ...   - Assemble a course from catalog fields
//!
//! Configuration: `kdb.toml` in the working directory is read when present, then
//! `--config <file>` is layered over it and `--lang <ja|en>` picks the name column.
//! `RUST_LOG` overrides the configured log level.
mod output;

use clap::{Arg, ArgAction, ArgMatches, Command};
use kdb_config::{KdbConfig, Loader};
use kdb_schedule::schedule::period::{parse_periods, render_chart};
use kdb_schedule::schedule::vocab::GROUP_SEPARATOR;
use kdb_schedule::schedule::{periods, terms, Course};
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "kdb.toml";

fn main() {
    let matches = Command::new("kdb")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse term and period fields of a course catalog")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .global(true)
                .value_parser(["ja", "en"])
                .help("Name column to read course names from"),
        )
        .subcommand(
            Command::new("term")
                .about("Normalize a term field (e.g. '春AB 秋C')")
                .arg(raw_arg("Raw term field")),
        )
        .subcommand(
            Command::new("period")
                .about("Render a weekday/period field (e.g. '月1,2 集中')")
                .arg(raw_arg("Raw weekday/period field")),
        )
        .subcommand(
            Command::new("grid")
                .about("Show the occupancy chart of each period clause")
                .arg(raw_arg("Raw weekday/period field")),
        )
        .subcommand(
            Command::new("course")
                .about("Assemble a course from catalog fields")
                .arg(
                    Arg::new("field")
                        .long("field")
                        .short('F')
                        .value_name("LABEL=VALUE")
                        .help("Catalog field, e.g. -F 実施学期=春AB (repeatable)")
                        .action(ArgAction::Append)
                        .required(true),
                ),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_logging(&config.logging.level);

    match matches.subcommand() {
        Some(("term", sub)) => handle_term_command(raw_value(sub)),
        Some(("period", sub)) => handle_period_command(raw_value(sub)),
        Some(("grid", sub)) => handle_grid_command(raw_value(sub)),
        Some(("course", sub)) => {
            let fields: Vec<&String> = sub
                .get_many::<String>("field")
                .into_iter()
                .flatten()
                .collect();
            handle_course_command(&fields, &config);
        }
        _ => unreachable!(),
    }
}

fn raw_arg(help: &'static str) -> Arg {
    // Empty fields are meaningful: an empty term field is year-round.
    Arg::new("raw").help(help).required(true).index(1)
}

fn raw_value(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("raw")
        .map(String::as_str)
        .unwrap_or_default()
}

fn load_config(matches: &ArgMatches) -> Result<KdbConfig, kdb_config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(lang) = matches.get_one::<String>("lang") {
        loader = loader.set_override("catalog.lang", lang.as_str())?;
    }
    loader.build()
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn fail(context: &str, error: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, error);
    std::process::exit(1);
}

/// Handle the term command
fn handle_term_command(raw: &str) {
    let groups = terms(raw).unwrap_or_else(|e| fail("Term error", e));
    println!("{}", output::term_lines(&groups));
}

/// Handle the period command
fn handle_period_command(raw: &str) {
    let tokens = periods(raw).unwrap_or_else(|e| fail("Period error", e));
    println!("{}", output::period_line(&tokens));
}

/// Handle the grid command
fn handle_grid_command(raw: &str) {
    let blocks = parse_periods(raw).unwrap_or_else(|e| fail("Period error", e));
    for (clause, block) in raw.split(GROUP_SEPARATOR).zip(&blocks) {
        println!("clause: {}", clause);
        print!("{}", render_chart(block));
    }
}

/// Handle the course command
fn handle_course_command(fields: &[&String], config: &KdbConfig) {
    let mut record = BTreeMap::new();
    for field in fields {
        let Some((label, value)) = field.split_once('=') else {
            fail("Invalid field", format!("'{}' is not LABEL=VALUE", field));
        };
        record.insert(label.to_string(), value.to_string());
    }

    let options = config.catalog.record_options();
    match Course::from_record(&record, &options) {
        Ok(Some(course)) => println!("{}", output::course_lines(&course)),
        Ok(None) => println!("skipped: incomplete catalog row"),
        Err(e) => fail("Course error", e),
    }
}
