#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # canteen
//!
//! Simulates a lunch of programmers sharing spoons around a table and
//! prints who ate how much.

use std::time::Duration;

use anyhow::Result;
use bpaf::*;
use canteen::{Lunch, LunchConfig};
use dotenvy::dotenv;
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Options for the `run` command.
#[derive(Debug, Clone)]
struct RunOpts {
    /// Seats at the table.
    seats:      usize,
    /// Portions served over the whole lunch.
    portions:   usize,
    /// Milliseconds a seat holds its spoons, if overridden.
    eat_ms:     Option<u64>,
    /// Milliseconds a seat discusses between portions, if overridden.
    discuss_ms: Option<u64>,
    /// Waiter slots at the serving counter, if overridden.
    waiters:    Option<usize>,
    /// Print the report as JSON instead of a table.
    json:       bool,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Simulate one lunch.
    Run(RunOpts),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the number of seats at the table
    fn seats() -> impl Parser<usize> {
        short('s')
            .long("seats")
            .help("Number of programmers at the table")
            .argument::<usize>("SEATS")
            .fallback(5)
    }

    /// parses the number of portions served over the lunch
    fn portions() -> impl Parser<usize> {
        short('p')
            .long("portions")
            .help("Portions served over the whole lunch")
            .argument::<usize>("PORTIONS")
            .fallback(64)
    }

    /// parses the eating pause override
    fn eat_ms() -> impl Parser<Option<u64>> {
        long("eat-ms")
            .help("Milliseconds a seat holds its spoons")
            .argument::<u64>("MS")
            .optional()
    }

    /// parses the discussion pause override
    fn discuss_ms() -> impl Parser<Option<u64>> {
        long("discuss-ms")
            .help("Milliseconds a seat discusses between portions")
            .argument::<u64>("MS")
            .optional()
    }

    /// parses the waiter slot override
    fn waiters() -> impl Parser<Option<usize>> {
        long("waiters")
            .help("Concurrent orders the serving counter accepts")
            .argument::<usize>("SLOTS")
            .optional()
    }

    /// parses the JSON output switch
    fn json() -> impl Parser<bool> {
        long("json").help("Print the report as JSON").switch()
    }

    let run = construct!(RunOpts {
        seats(),
        portions(),
        eat_ms(),
        discuss_ms(),
        waiters(),
        json()
    })
    .map(Cmd::Run)
    .to_options()
    .command("run")
    .help("Simulate one lunch and print the distribution");

    let cmd = construct!([run]);

    cmd.to_options()
        .descr("A deadlock-free dining simulation")
        .run()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();

    match cmd {
        Cmd::Run(opts) => {
            let defaults = LunchConfig::from_env_defaults();
            let config = LunchConfig::builder()
                .seats(opts.seats)
                .portions(opts.portions)
                .eat_for(
                    opts.eat_ms
                        .map(Duration::from_millis)
                        .unwrap_or(defaults.eat_for),
                )
                .discuss_for(
                    opts.discuss_ms
                        .map(Duration::from_millis)
                        .unwrap_or(defaults.discuss_for),
                )
                .waiter_slots(opts.waiters.unwrap_or(defaults.waiter_slots))
                .build();

            let report = Lunch::new(config)?.serve().await?;
            if opts.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.render());
            }
        }
    };

    Ok(())
}
