mod blueprint;
mod cli;
mod config;
mod knowledge;
mod model;
mod seed;
mod studio;
mod toolsim;
mod tui;

use std::process;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
