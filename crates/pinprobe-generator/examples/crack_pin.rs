//! Example demonstrating PIN candidate generation.
//!
//! This example shows how to:
//! - Configure a `PinCracker` and pick an enumeration strategy
//! - Stream candidates lazily, stopping after a limit
//! - Observe the advisory notifications through a `LogSink`
//!
//! # Usage
//!
//! Sequence-preserving expansion of a target PIN:
//!
//! ```sh
//! cargo run --example crack_pin -- 2580
//! ```
//!
//! Full brute force over the in-play digit set:
//!
//! ```sh
//! cargo run --example crack_pin -- 2580 --brute-force
//! ```
//!
//! Brute force restricted to the PIN's own digits:
//!
//! ```sh
//! cargo run --example crack_pin -- 2580 --brute-force --no-adjacent
//! ```
//!
//! Stop after the first 20 candidates (advisory messages appear with
//! `RUST_LOG=info`):
//!
//! ```sh
//! RUST_LOG=info cargo run --example crack_pin -- 2580 --brute-force --limit 20
//! ```

use std::process;

use clap::Parser;
use pinprobe_generator::{LogSink, Pin, PinCracker};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Target PIN to generate candidates for.
    pin: String,

    /// Enumerate the full Cartesian product of the in-play digits instead of
    /// position-aligned neighbor substitution.
    #[arg(long)]
    brute_force: bool,

    /// Do not widen the brute-force in-play set with keypad neighbors.
    #[arg(long)]
    no_adjacent: bool,

    /// Print at most this many candidates.
    #[arg(long, value_name = "COUNT")]
    limit: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let pin: Pin = match args.pin.parse() {
        Ok(pin) => pin,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let cracker = PinCracker::new()
        .with_sequence(!args.brute_force)
        .with_adjacent_digits(!args.no_adjacent)
        .with_progress_sink(Box::new(LogSink));

    let candidates = match cracker.crack_pin(&pin) {
        Ok(candidates) => candidates,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let limit = args.limit.unwrap_or(usize::MAX);
    for candidate in candidates.take(limit) {
        println!("{candidate}");
    }
}
