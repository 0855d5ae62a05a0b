//! Notefleet - in-memory notebook and delivery order tracker
//!
//! A CLI tool with two interactive consoles: a note manager and an
//! order/vehicle tracker. Nothing is kept between runs.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
