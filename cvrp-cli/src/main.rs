//! A command line interface to *Capacitated Vehicle Routing Problem* guided local search solver.
//!

mod commands;

use crate::commands::create_file_writer;
use crate::commands::solve::{get_solve_app, run_solve};
use std::process;

fn main() {
    let matches = get_solve_app().get_matches();

    if let Err(err) = run_solve(&matches, create_file_writer) {
        eprintln!("{err}");
        process::exit(1);
    }
}
