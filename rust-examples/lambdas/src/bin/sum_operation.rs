//! Adds two numbers through a function value stored in a variable.
//!
//! Run with: cargo run --bin sum_operation

use std::io;

use anyhow::Context;
use fp_common::logging::init_logging;
use lambdas::print_sum;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    init_logging();
    debug!("adding through a stored closure");

    let sum = |a: i64, b: i64| a + b;
    print_sum(&mut io::stdout().lock(), &sum, 5, 10).context("failed to write sum to stdout")?;
    Ok(())
}
