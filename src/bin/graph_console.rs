//! Interactive menu over one graph store.
//!
//! Usage:
//!   graph-console --representation matrix --mode undirected
//!   graph-console --log debug --timings < script.txt

use std::io;
use std::process;

use clap::Parser;
use graphstore::{Directedness, Representation, console, tracing_support};

/// Build a graph interactively from a text menu.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Storage layout: list, edges or matrix
    #[arg(long, short, default_value_t = Representation::AdjacencyList)]
    representation: Representation,

    /// Edge mode: directed or undirected (asked interactively if omitted)
    #[arg(long, short)]
    mode: Option<Directedness>,

    /// Log filter directive, e.g. `debug` or `graphstore=trace`
    #[arg(long)]
    log: Option<String>,

    /// Print per-span timings to stderr on exit
    #[arg(long)]
    timings: bool,
}

fn main() {
    let args = Args::parse();
    tracing_support::init_tracing(args.log.as_deref(), args.timings);

    let result = console::run(
        io::stdin().lock(),
        io::stdout().lock(),
        args.representation,
        args.mode,
    );

    if args.timings {
        tracing_support::dump_span_timings();
    }
    if let Err(err) = result {
        eprintln!("graph-console: {err}");
        process::exit(1);
    }
}
