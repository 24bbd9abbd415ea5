//! Checks whether every number in a fixed list is even.
//!
//! Run with: cargo run --bin all_match

use std::io;

use anyhow::Context;
use fp_common::logging::init_logging;
use streams::all_match::DEFAULT_NUMBERS;
use streams::print_all_even;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    init_logging();
    debug!(count = DEFAULT_NUMBERS.len(), "checking numbers");

    print_all_even(&mut io::stdout().lock(), &DEFAULT_NUMBERS)
        .context("failed to write result to stdout")?;
    Ok(())
}
