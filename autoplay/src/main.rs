mod config;
mod runner;

use clap::Parser;
use snake_common::config::Validate;
use snake_common::{log, logger};

use config::{get_config_manager, Config, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "snake_autoplay", about = "Runs self-playing snake sessions without a display")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    columns: Option<usize>,
    #[arg(long)]
    games: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    tick_interval_ms: Option<u64>,
    #[arg(long)]
    max_ticks: Option<u64>,
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(rows) = self.rows {
            config.grid.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.grid.columns = columns;
        }
        if let Some(games) = self.games {
            config.session.games = games;
        }
        if let Some(seed) = self.seed {
            config.session.seed = Some(seed);
        }
        if let Some(tick_interval_ms) = self.tick_interval_ms {
            config.session.tick_interval_ms = tick_interval_ms;
        }
        if let Some(max_ticks) = self.max_ticks {
            config.session.max_ticks = max_ticks;
        }
        if self.verbose {
            config.log.verbose = true;
        }
        if self.use_log_prefix && config.log.prefix.is_none() {
            config.log.prefix = Some("Autoplay".to_string());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    args.apply(&mut config);
    config.validate()?;

    logger::init_logger(config.log.prefix.clone(), config.log.verbose);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to {}", args.config);
    }

    log!(
        "Running {} game(s) on a {}x{} board",
        config.session.games,
        config.grid.rows,
        config.grid.columns
    );

    let summary = runner::run_all(&config)?;

    log!(
        "Finished {} game(s): best score {}, mean score {:.2}, boards filled {}",
        summary.games.len(),
        summary.best_score(),
        summary.mean_score(),
        summary.boards_filled()
    );

    Ok(())
}
