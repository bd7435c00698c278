use std::collections::VecDeque;

use crate::debug_log;
use crate::games::SessionRng;
use super::game_state::SnakeGameState;
use super::grid::Grid;
use super::shortest_path::find_path;
use super::types::{Orientation, Point, TickOutcome};

/// Plays a session on its own: plans a path with the shortest-path search and
/// feeds it to the game one waypoint per tick.
pub struct AutoPilot {
    game: SnakeGameState,
    path_queue: VecDeque<Point>,
}

impl AutoPilot {
    pub fn new(grid: Grid, rng: SessionRng) -> Result<Self, String> {
        Ok(Self::from_game(SnakeGameState::new(grid, rng)?))
    }

    pub fn from_game(game: SnakeGameState) -> Self {
        Self {
            game,
            path_queue: VecDeque::new(),
        }
    }

    pub fn game(&self) -> &SnakeGameState {
        &self.game
    }

    pub fn path_queue(&self) -> &VecDeque<Point> {
        &self.path_queue
    }

    /// Refills the plan when it ran out, turns toward the next waypoint, then ticks.
    /// Errors only when a waypoint is not a unit step away from the head.
    pub fn step(&mut self) -> Result<TickOutcome, String> {
        if self.game.is_over() {
            return Ok(TickOutcome::Terminate);
        }

        if self.path_queue.is_empty() {
            self.path_queue = self.determine_path_to_take().into();
        }

        if let Some(target) = self.path_queue.pop_front() {
            let orientation = self.determine_next_move(target)?;
            if !self.game.turn(orientation) {
                debug_log!("Turn {:?} rejected, dropping the current plan", orientation);
                self.path_queue.clear();
            }
        }

        Ok(self.game.update())
    }

    /// Orientation that moves the head onto `target`.
    pub fn determine_next_move(&self, target: Point) -> Result<Orientation, String> {
        let head = self.game.head();
        let (dx, dy) = target.delta(head);
        Orientation::from_vector(dx, dy).ok_or_else(|| {
            format!(
                "Waypoint ({}, {}) is not adjacent to head ({}, {})",
                target.x, target.y, head.x, head.y
            )
        })
    }

    pub fn determine_path_to_take(&self) -> Vec<Point> {
        let head = self.game.head();
        let food = self.game.food();
        let grid = self.game.grid();
        let snake = self.game.snake();
        let snake_length = snake.length();

        let blocked = self.currently_blocked_cells();
        let path_to_food = find_path(grid, head, food, &blocked);

        if !path_to_food.is_empty() {
            // A single cell cannot box itself in.
            if snake_length < 2 {
                debug_log!("Heading for food, {} steps", path_to_food.len());
                return path_to_food;
            }

            let Some(tail) = snake.tail() else {
                return path_to_food;
            };
            let blocked_at_food = self.blocked_cells_after_reaching_food(&path_to_food);
            if !find_path(grid, food, tail, &blocked_at_food).is_empty() {
                debug_log!("Heading for food, {} steps", path_to_food.len());
                return path_to_food;
            }

            debug_log!("Food at ({}, {}) would trap the snake, following tail", food.x, food.y);
            return self.path_to_tail(tail, &blocked);
        }

        if snake_length > 2
            && let Some(tail) = snake.tail()
        {
            debug_log!("Food at ({}, {}) unreachable, following tail", food.x, food.y);
            return self.path_to_tail(tail, &blocked);
        }

        debug_log!("No path found, keeping course");
        Vec::new()
    }

    /// The body, plus the cell behind the head so no plan starts with a reversal.
    fn currently_blocked_cells(&self) -> Vec<Point> {
        let snake = self.game.snake();
        let behind = snake.head().step(snake.orientation().opposite());

        let mut blocked = Vec::with_capacity(snake.length());
        blocked.push(behind);
        blocked.extend_from_slice(snake.body());
        blocked
    }

    /// The tail entry is dropped since the tail moves away as the head advances.
    /// The cell behind the head stays blocked even when it is the tail.
    fn path_to_tail(&self, tail: Point, blocked: &[Point]) -> Vec<Point> {
        let without_tail = &blocked[..blocked.len() - 1];
        find_path(self.game.grid(), self.game.head(), tail, without_tail)
    }

    /// Body positions once the head has walked `path` to the food, head excluded.
    fn blocked_cells_after_reaching_food(&self, path: &[Point]) -> Vec<Point> {
        let snake = self.game.snake();
        let body_length = snake.length() - 1;

        // Cells walked before the food, most recent first.
        let walked = path[..path.len() - 1].iter().rev().copied();

        if snake.length() <= path.len() {
            return walked.take(body_length).collect();
        }

        let remaining = snake.length() - path.len();
        walked
            .chain(std::iter::once(snake.head()))
            .chain(snake.body().iter().take(remaining - 1).copied())
            .collect()
    }
}
