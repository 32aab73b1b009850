use std::fmt::Display;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::debug;
use making_change::{ChangeCounter, CountConfig, Error};
use num_bigint::BigUint;
use tracing_subscriber::filter::LevelFilter;

/// Integer width used for counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Width {
    /// Arbitrary precision, never overflows
    Big,
    /// 64-bit, fails on overflow
    U64,
    /// 128-bit, fails on overflow
    U128,
}

#[derive(Parser, Debug)]
#[command(
    name = "making-change",
    version,
    about = "Count the ways to make an amount from an unlimited supply of coins"
)]
struct Cli {
    /// Target amount
    #[arg(allow_negative_numbers = true)]
    amount: i64,

    /// Comma-separated denominations, e.g. 1,5,10,25
    #[arg(allow_hyphen_values = true, default_value = "")]
    denominations: String,

    /// Integer width for the count
    #[arg(long, value_enum, default_value_t = Width::Big)]
    width: Width,

    /// Reject amounts above this value
    #[arg(long)]
    max_amount: Option<usize>,

    /// Print the count for every partial amount up to AMOUNT
    #[arg(long, conflicts_with = "list")]
    table: bool,

    /// Also print up to this many combinations
    #[arg(long, value_name = "LIMIT")]
    list: Option<usize>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

const EXIT_INVALID_INPUT: u8 = 2;
const EXIT_OVERFLOW: u8 = 3;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_overflow() {
                ExitCode::from(EXIT_OVERFLOW)
            } else {
                ExitCode::from(EXIT_INVALID_INPUT)
            }
        }
    }
}

fn run(cli: &Cli) -> Result<Vec<String>, Error> {
    let denominations = parse_denominations(&cli.denominations)?;
    debug!("parsed denominations {denominations:?}");

    let mut config = CountConfig::default();
    if let Some(limit) = cli.max_amount {
        config = config.with_max_amount(limit);
    }
    let counter = ChangeCounter::new(config);

    if cli.table {
        return match cli.width {
            Width::Big => counter
                .table_checked::<BigUint>(cli.amount, &denominations)
                .map(render_table),
            Width::U64 => counter
                .table_checked::<u64>(cli.amount, &denominations)
                .map(render_table),
            Width::U128 => counter
                .table_checked::<u128>(cli.amount, &denominations)
                .map(render_table),
        };
    }

    let count = match cli.width {
        Width::Big => counter.count(cli.amount, &denominations)?.to_string(),
        Width::U64 => counter
            .count_checked::<u64>(cli.amount, &denominations)?
            .to_string(),
        Width::U128 => counter
            .count_checked::<u128>(cli.amount, &denominations)?
            .to_string(),
    };

    let mut lines = vec![count];
    if let Some(limit) = cli.list {
        for combination in counter.combinations(cli.amount, &denominations, limit)? {
            lines.push(render_combination(&combination));
        }
    }
    Ok(lines)
}

/// Splits `1,2,5` into values. Empty input is an empty set.
fn parse_denominations(raw: &str) -> Result<Vec<i64>, Error> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i64>()
                .map_err(|err| Error::InvalidInput(format!("denomination {part:?}: {err}")))
        })
        .collect()
}

fn render_table<T: Display>(table: Vec<T>) -> Vec<String> {
    table
        .iter()
        .enumerate()
        .map(|(amount, ways)| format!("{amount}: {ways}"))
        .collect()
}

fn render_combination(combination: &[u64]) -> String {
    if combination.is_empty() {
        return "(no coins)".to_string();
    }
    combination
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join("+")
}
