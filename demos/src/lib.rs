//! Terminal collaborator for pathgrid: argument parsing, config loading and
//! an ASCII [`Observer`] that prints search snapshots.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use crossterm::{cursor::MoveTo, execute, terminal::{Clear, ClearType}};
use pathgrid_core::SearchConfig;
use pathgrid_paths::{Algorithm, Marker, Observer, Outcome, Snapshot, StepDriver};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Watch grid search strategies explore a grid whose walls can appear
/// mid-search.
#[derive(Debug, Parser)]
#[command(name = "pathgrid", version)]
pub struct Args {
    /// Algorithms to run, comma separated: bfs, dfs, ucs, dls, iddfs, bidirectional.
    #[arg(short, long, value_delimiter = ',', default_value = "bfs")]
    pub algorithms: Vec<Algorithm>,

    /// Run every algorithm in turn.
    #[arg(long)]
    pub all: bool,

    /// JSON file with a search config; flags below override its fields.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Grid side length.
    #[arg(short = 'n', long)]
    pub side: Option<i32>,

    /// Per-step probability of a dynamic wall.
    #[arg(short, long)]
    pub probability: Option<f64>,

    /// Depth bound for DLS and IDDFS.
    #[arg(short, long)]
    pub depth_limit: Option<usize>,

    /// Drop the static wall segment.
    #[arg(long)]
    pub no_wall: bool,

    /// RNG seed for reproducible obstacle rolls.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Redraw the grid after every step.
    #[arg(long)]
    pub animate: bool,

    /// Pause between animated frames, in milliseconds.
    #[arg(long, default_value_t = 30)]
    pub delay_ms: u64,

    /// Stop a run after this many steps.
    #[arg(long)]
    pub max_steps: Option<usize>,
}

impl Args {
    /// Algorithms selected on the command line, in run order.
    pub fn selected(&self) -> Vec<Algorithm> {
        if self.all {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms.clone()
        }
    }

    /// Load the config file (if any), apply overrides and validate.
    pub fn search_config(&self) -> Result<SearchConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)?;
                let config: SearchConfig = serde_json::from_str(&text)?;
                log::info!("loaded config from {}", path.display());
                config
            }
            None => SearchConfig::default(),
        };
        if let Some(side) = self.side {
            config.side = side;
        }
        if let Some(p) = self.probability {
            config.obstacle_probability = p;
        }
        if let Some(limit) = self.depth_limit {
            config.depth_limit = limit;
        }
        if self.no_wall {
            config.static_wall = None;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Character used for each marker.
pub fn glyph(marker: Marker) -> char {
    match marker {
        Marker::Empty => '.',
        Marker::Wall => '#',
        Marker::DynamicWall => '%',
        Marker::Start => 'S',
        Marker::Goal => 'G',
        Marker::Frontier => 'o',
        Marker::BackwardFrontier => 'x',
        Marker::Explored => '+',
        Marker::Path => '*',
    }
}

/// Render a snapshot as one line per grid row followed by the status line.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for row in snapshot.rows() {
        out.extend(row.iter().map(|&m| glyph(m)));
        out.push('\n');
    }
    out.push_str(snapshot.status());
    out.push('\n');
    out
}

/// Prints snapshots to stdout, optionally redrawing in place.
pub struct TerminalView {
    animate: bool,
    delay: Duration,
}

impl TerminalView {
    pub fn new(animate: bool, delay: Duration) -> Self {
        Self { animate, delay }
    }

    fn draw(&self, snapshot: &Snapshot) -> io::Result<()> {
        let mut stdout = io::stdout();
        if self.animate {
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        stdout.write_all(render(snapshot).as_bytes())?;
        stdout.flush()
    }
}

impl Observer for TerminalView {
    fn on_step(&mut self, snapshot: &Snapshot) {
        if !self.animate {
            return;
        }
        if let Err(e) = self.draw(snapshot) {
            log::warn!("failed to draw frame: {e}");
        }
        thread::sleep(self.delay);
    }

    fn on_finished(&mut self, outcome: &Outcome, snapshot: &Snapshot) {
        if let Err(e) = self.draw(snapshot) {
            log::warn!("failed to draw final frame: {e}");
        }
        match outcome {
            Outcome::Found { route, steps } => log::info!(
                "{} steps, route of {} moves, cost {:.3}",
                steps,
                route.moves(),
                route.cost()
            ),
            Outcome::NoPath { steps } => log::info!("no path after {steps} steps"),
            Outcome::Searching => {}
        }
    }
}

/// Run one algorithm to completion (or the step cap) and return its
/// outcome.
pub fn run_one(
    config: &SearchConfig,
    algorithm: Algorithm,
    seed: u64,
    view: &mut impl Observer,
    max_steps: Option<usize>,
) -> Result<Outcome, Box<dyn Error>> {
    let mut driver = StepDriver::with_rng(config.clone(), algorithm, StdRng::seed_from_u64(seed))?;
    Ok(driver.run(view, max_steps).clone())
}
