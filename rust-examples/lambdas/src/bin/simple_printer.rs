//! Prints each name in a fixed list using a closure.
//!
//! Run with: cargo run --bin simple_printer

use std::io;

use anyhow::Context;
use fp_common::logging::init_logging;
use lambdas::print_names;
use lambdas::simple_printer::DEFAULT_NAMES;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    init_logging();
    debug!(count = DEFAULT_NAMES.len(), "printing names");

    print_names(&mut io::stdout().lock(), &DEFAULT_NAMES)
        .context("failed to write names to stdout")?;
    Ok(())
}
