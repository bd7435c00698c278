use std::thread;
use std::time::Duration;

use snake_common::games::SessionRng;
use snake_common::games::snake::{GameEndReason, SnakeSession, TickOutcome};
use snake_common::{debug_log, log};

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnd {
    Finished(GameEndReason),
    TickLimit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameSummary {
    pub seed: u64,
    pub score: u32,
    pub ticks: u64,
    pub end: GameEnd,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct RunSummary {
    pub games: Vec<GameSummary>,
}

impl RunSummary {
    pub fn best_score(&self) -> u32 {
        self.games.iter().map(|g| g.score).max().unwrap_or(0)
    }

    pub fn mean_score(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        let total: u64 = self.games.iter().map(|g| g.score as u64).sum();
        total as f64 / self.games.len() as f64
    }

    pub fn boards_filled(&self) -> usize {
        self.games
            .iter()
            .filter(|g| g.end == GameEnd::Finished(GameEndReason::BoardFilled))
            .count()
    }
}

pub fn run_all(config: &Config) -> Result<RunSummary, String> {
    let mut summary = RunSummary::default();

    for game_number in 0..config.session.games {
        let rng = match config.session.seed {
            Some(seed) => SessionRng::new(seed.wrapping_add(game_number as u64)),
            None => SessionRng::from_random(),
        };
        let game = run_game(config, rng)?;
        log!(
            "Game {} over: score {}, {} ticks, {:?} (seed {})",
            game_number + 1,
            game.score,
            game.ticks,
            game.end,
            game.seed
        );
        summary.games.push(game);
    }

    Ok(summary)
}

pub fn run_game(config: &Config, rng: SessionRng) -> Result<GameSummary, String> {
    let seed = rng.seed();
    let mut session = SnakeSession::new_auto_pilot(config.grid.rows, config.grid.columns, rng)?;
    let tick_interval = Duration::from_millis(config.session.tick_interval_ms);

    debug_log!(
        "Starting {}x{} game, head at ({}, {}), food at ({}, {})",
        config.grid.rows,
        config.grid.columns,
        session.head().x,
        session.head().y,
        session.food().x,
        session.food().y
    );

    let mut end = GameEnd::TickLimit;
    for _ in 0..config.session.max_ticks {
        if session.tick()? == TickOutcome::Terminate {
            if let Some(reason) = session.state().end_reason() {
                end = GameEnd::Finished(reason);
            }
            break;
        }
        if !tick_interval.is_zero() {
            thread::sleep(tick_interval);
        }
    }

    let snapshot = session.snapshot();
    Ok(GameSummary {
        seed,
        score: snapshot.score,
        ticks: snapshot.ticks,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rows: usize, columns: usize, games: u32, max_ticks: u64) -> Config {
        let mut config = Config::default();
        config.grid.rows = rows;
        config.grid.columns = columns;
        config.session.games = games;
        config.session.max_ticks = max_ticks;
        config.session.seed = Some(42);
        config
    }

    #[test]
    fn test_tick_limit_stops_the_game() {
        let config = config(10, 10, 1, 5);
        let game = run_game(&config, SessionRng::new(42)).unwrap();
        assert!(game.ticks <= 5);
        assert_eq!(game.seed, 42);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = config(8, 8, 3, 500);
        let first = run_all(&config).unwrap();
        let second = run_all(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.games.len(), 3);
        let seeds: Vec<u64> = first.games.iter().map(|g| g.seed).collect();
        assert_eq!(seeds, vec![42, 43, 44]);
    }

    #[test]
    fn test_summary_statistics() {
        let summary = RunSummary {
            games: vec![
                GameSummary {
                    seed: 1,
                    score: 4,
                    ticks: 40,
                    end: GameEnd::Finished(GameEndReason::SelfCollision),
                },
                GameSummary {
                    seed: 2,
                    score: 15,
                    ticks: 90,
                    end: GameEnd::Finished(GameEndReason::BoardFilled),
                },
                GameSummary {
                    seed: 3,
                    score: 2,
                    ticks: 10,
                    end: GameEnd::TickLimit,
                },
            ],
        };
        assert_eq!(summary.best_score(), 15);
        assert!((summary.mean_score() - 7.0).abs() < f64::EPSILON);
        assert_eq!(summary.boards_filled(), 1);
        assert_eq!(RunSummary::default().mean_score(), 0.0);
    }
}
