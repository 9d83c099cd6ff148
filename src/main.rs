//! CLI harness for the simulation kernel: loads a config, runs N steps
//! headless, and prints a summary. Grounded on the teacher's config-driven
//! `main.rs` startup (env_logger + clap + `Config::load`), minus the
//! Bevy/ECS/audio machinery that belonged to the game shell rather than the
//! kernel itself.

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use ca_kernel::{step, KernelConfig, SeedSource};

/// Run the cellular-automaton kernel headless for a fixed number of steps.
#[derive(Parser, Debug)]
#[command(name = "ca-kernel", version, about)]
struct Cli {
    /// Path to a TOML config file (defaults to "kernel.toml" if present).
    #[arg(short, long)]
    config: Option<String>,

    /// Number of steps to run.
    #[arg(short, long, default_value_t = 100)]
    steps: u64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = KernelConfig::load(cli.config.as_deref());
    log::info!("starting kernel: {}x{} grid, {} steps", config.cols, config.rows, cli.steps);

    let rule = match config.rule_spec() {
        Ok(rule) => rule,
        Err(err) => {
            log::error!("invalid rule configuration: {err}");
            std::process::exit(1);
        }
    };
    let vitality = match config.vitality_table() {
        Ok(table) => table,
        Err(err) => {
            log::error!("invalid vitality configuration: {err}");
            std::process::exit(1);
        }
    };

    let (cols, rows) = match config.grid_dimensions() {
        Ok(dims) => dims,
        Err(err) => {
            log::error!("invalid grid configuration: {err}");
            std::process::exit(1);
        }
    };
    let mut grid = match ca_kernel::CaGrid::new(cols, rows) {
        Ok(grid) => grid,
        Err(err) => {
            log::error!("invalid grid configuration: {err}");
            std::process::exit(1);
        }
    };
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let seed_source = SeedSource::RandomDensity {
        density: config.density,
        include_decay: config.num_states > 2,
        num_states: config.num_states,
    };
    if let Err(err) = ca_kernel::apply_seed(&mut grid, &seed_source, &mut rng) {
        log::error!("failed to seed grid: {err}");
        std::process::exit(1);
    }

    for gen in 0..cli.steps {
        step(&mut grid, &rule, &vitality);
        if gen % 10 == 0 {
            log::debug!("generation {gen}: {} live cells", grid.alive_count());
        }
    }

    println!(
        "ran {} steps, final generation {}, {} live cells",
        cli.steps,
        grid.generation(),
        grid.alive_count()
    );
}
