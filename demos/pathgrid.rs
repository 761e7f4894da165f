//! Run grid searches in the terminal.
//!
//! Run: cargo run --bin pathgrid -- --all --animate

use std::time::Duration;

use clap::Parser;
use pathgrid_demos::{Args, TerminalView, run_one};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.search_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");

    let mut view = TerminalView::new(args.animate, Duration::from_millis(args.delay_ms));
    for algorithm in args.selected() {
        log::info!("running {algorithm}");
        let outcome = run_one(&config, algorithm, seed, &mut view, args.max_steps)?;
        if !outcome.is_terminal() {
            log::info!("{algorithm} stopped after {} steps", args.max_steps.unwrap_or_default());
        }
    }
    Ok(())
}
