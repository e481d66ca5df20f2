//! Ordered Linked Set - fixture runner
//!
//! Runs the `LinkedListTest` cases (`setUp` before each) against a
//! configurable fixture and exits non-zero if any case fails.

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use ordered_linked_set::{FixtureConfig, LinkedListTest, Suite, CONTRACT_NAME};

#[derive(Parser, Debug)]
#[command(name = "ordered-linked-set", version, about = "Run the LinkedListTest fixture cases")]
struct Cli {
    /// Fixture values loaded by setUp
    #[arg(long, value_delimiter = ',', default_values_t = [1u64, 2, 3])]
    values: Vec<u64>,

    /// Value removed by testRemove
    #[arg(long = "remove", default_value_t = 2)]
    remove_target: u64,

    /// Run only these cases (repeatable); all cases when omitted
    #[arg(long = "case")]
    cases: Vec<String>,

    /// Log filter, e.g. `info` or `ordered_set=debug`
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json);

    let config = FixtureConfig::default()
        .with_values(cli.values)
        .with_remove_target(cli.remove_target);
    let mut test = LinkedListTest::new(config)?;

    let suite = Suite::standard().filter(&cli.cases);
    if suite.is_empty() {
        bail!("no case matches {:?}", cli.cases);
    }

    println!("{CONTRACT_NAME}");
    let report = suite.run(&mut test);
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(()) => println!("  PASS  {}", outcome.name),
            Err(err) => println!("  FAIL  {}: {err}", outcome.name),
        }
    }
    println!();
    println!("  {} passing, {} failing", report.passed(), report.failed());
    println!("  State root: {}", test.set().state_root_hex());

    if !report.is_success() {
        bail!("{} of {} cases failed", report.failed(), report.outcomes.len());
    }
    Ok(())
}
