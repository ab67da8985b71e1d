use std::{ffi::OsString, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use sorted_abs_unique::{
    count_unique_absolute_values, count_unique_distances,
    input::{prepare, InputError},
    summary, Count, Integer,
};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use util::read_input_as_string;

const EXIT_USAGE: u8 = 64;
const EXIT_IO: u8 = 74;

/// Count the distinct absolute values in a sorted sequence of integers.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Count distinct distances from this value instead of from zero.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pivot: Integer,

    /// Also read whitespace-separated integers from standard input.
    #[arg(long)]
    stdin: bool,

    /// Integers in non-decreasing order.
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
}

#[derive(Debug)]
enum Failure {
    Usage(clap::Error),
    Stdin(anyhow::Error),
    Input(InputError),
}

impl Failure {
    fn exit_code(&self) -> u8 {
        match self {
            // --help and --version come through here too
            Failure::Usage(e) if !e.use_stderr() => 0,
            Failure::Usage(_) => EXIT_USAGE,
            Failure::Stdin(_) => EXIT_IO,
            Failure::Input(e) => e.exit_code(),
        }
    }

    fn report(&self) {
        match self {
            Failure::Usage(e) => {
                if let Err(print_err) = e.print() {
                    eprintln!("{print_err}");
                }
            }
            Failure::Stdin(e) => eprintln!("{e:#}"),
            Failure::Input(e) => {
                eprintln!("{e}");
                if let InputError::NotIntegers(failure) = e {
                    eprintln!("{}", failure.report);
                }
            }
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("ABS_UNIQUE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn collect_tokens<F>(cli: &Cli, read_stdin: F) -> Result<Vec<String>>
where
    F: FnOnce() -> Result<String>,
{
    let mut tokens = cli.values.clone();
    if cli.stdin {
        let input = read_stdin()?;
        tokens.extend(input.split_whitespace().map(str::to_string));
    }

    Ok(tokens)
}

fn count(cli: &Cli, values: &[Integer]) -> Count {
    match cli.pivot {
        0 => count_unique_absolute_values(values),
        pivot => count_unique_distances(values, pivot),
    }
}

fn run<I, T, F>(args: I, read_stdin: F) -> Result<Count, Failure>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce() -> Result<String>,
{
    let cli = Cli::try_parse_from(args).map_err(Failure::Usage)?;
    debug!(?cli, "parsed arguments");

    let tokens = collect_tokens(&cli, read_stdin).map_err(Failure::Stdin)?;
    let values = prepare(&tokens).map_err(Failure::Input)?;

    Ok(count(&cli, &values))
}

fn main() -> ExitCode {
    init_tracing();

    match run(std::env::args_os(), read_input_as_string) {
        Ok(count) => {
            println!("{}", summary(count));
            ExitCode::SUCCESS
        }
        Err(failure) => {
            failure.report();
            ExitCode::from(failure.exit_code())
        }
    }
}
