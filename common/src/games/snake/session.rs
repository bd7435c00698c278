use serde::Serialize;

use crate::games::SessionRng;
use super::autopilot::AutoPilot;
use super::game_state::SnakeGameState;
use super::grid::Grid;
use super::types::{GameEndReason, Orientation, Point, TickOutcome};

/// Read-only copy of everything a driver needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SnakeSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub head: Point,
    pub body: Vec<Point>,
    pub food: Point,
    pub orientation: Orientation,
    pub score: u32,
    pub ticks: u64,
    pub end_reason: Option<GameEndReason>,
}

impl SnakeSnapshot {
    fn of(state: &SnakeGameState) -> Self {
        Self {
            rows: state.grid().rows(),
            columns: state.grid().columns(),
            head: state.head(),
            body: state.body().to_vec(),
            food: state.food(),
            orientation: state.snake().orientation(),
            score: state.score(),
            ticks: state.ticks(),
            end_reason: state.end_reason(),
        }
    }
}

/// A player-driven or self-playing session behind one query/command surface.
pub enum SnakeSession {
    Manual(SnakeGameState),
    AutoPilot(AutoPilot),
}

impl SnakeSession {
    pub fn new_game(rows: usize, columns: usize, rng: SessionRng) -> Result<Self, String> {
        Ok(SnakeSession::Manual(SnakeGameState::new(Grid::new(rows, columns), rng)?))
    }

    pub fn new_auto_pilot(rows: usize, columns: usize, rng: SessionRng) -> Result<Self, String> {
        Ok(SnakeSession::AutoPilot(AutoPilot::new(Grid::new(rows, columns), rng)?))
    }

    pub fn state(&self) -> &SnakeGameState {
        match self {
            SnakeSession::Manual(state) => state,
            SnakeSession::AutoPilot(pilot) => pilot.game(),
        }
    }

    pub fn head(&self) -> Point {
        self.state().head()
    }

    pub fn body(&self) -> &[Point] {
        self.state().body()
    }

    pub fn food(&self) -> Point {
        self.state().food()
    }

    pub fn score(&self) -> u32 {
        self.state().score()
    }

    pub fn is_over(&self) -> bool {
        self.state().is_over()
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot::of(self.state())
    }

    /// Direction intent from a player. Ignored for self-playing sessions.
    pub fn turn(&mut self, orientation: Orientation) -> bool {
        match self {
            SnakeSession::Manual(state) => state.turn(orientation),
            SnakeSession::AutoPilot(_) => false,
        }
    }

    pub fn tick(&mut self) -> Result<TickOutcome, String> {
        match self {
            SnakeSession::Manual(state) => Ok(state.update()),
            SnakeSession::AutoPilot(pilot) => pilot.step(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sessions_start_clean() {
        for session in [
            SnakeSession::new_game(10, 12, SessionRng::new(5)).unwrap(),
            SnakeSession::new_auto_pilot(10, 12, SessionRng::new(5)).unwrap(),
        ] {
            let snapshot = session.snapshot();
            assert_eq!((snapshot.rows, snapshot.columns), (10, 12));
            assert_eq!(snapshot.score, 0);
            assert_eq!(snapshot.ticks, 0);
            assert!(snapshot.body.is_empty());
            assert_ne!(snapshot.head, snapshot.food);
            assert!(!session.is_over());
        }
    }

    #[test]
    fn test_same_seed_gives_same_auto_pilot_game() {
        let mut a = SnakeSession::new_auto_pilot(8, 8, SessionRng::new(11)).unwrap();
        let mut b = SnakeSession::new_auto_pilot(8, 8, SessionRng::new(11)).unwrap();
        for _ in 0..200 {
            assert_eq!(a.tick(), b.tick());
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }

    #[test]
    fn test_auto_pilot_ignores_player_turns() {
        let mut session = SnakeSession::new_auto_pilot(8, 8, SessionRng::new(3)).unwrap();
        assert!(!session.turn(Orientation::North));
    }

    #[test]
    fn test_manual_tick_advances_one_cell() {
        let mut session = SnakeSession::new_game(20, 20, SessionRng::new(8)).unwrap();
        let head = session.head();
        let orientation = session.snapshot().orientation;

        // Spawn leaves more than a quarter of the board ahead of the head.
        assert_eq!(session.tick(), Ok(TickOutcome::Continue));
        assert_eq!(session.head(), head.step(orientation));
        assert_eq!(session.snapshot().ticks, 1);
    }

    #[test]
    fn test_manual_session_turn_rules() {
        let mut session = SnakeSession::new_game(20, 20, SessionRng::new(8)).unwrap();
        session.tick().unwrap();
        let moving = session.snapshot().orientation;
        assert!(!session.turn(moving.opposite()));
        assert!(session.turn(moving));
        assert_eq!(session.snapshot().orientation, moving);
    }
}
