use crate::debug_log;
use crate::games::SessionRng;
use super::food::Food;
use super::grid::Grid;
use super::snake::Snake;
use super::types::{GameEndReason, Orientation, Point, TickOutcome};

pub struct SnakeGameState {
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    ticks: u64,
    end_reason: Option<GameEndReason>,
    rng: SessionRng,
}

impl SnakeGameState {
    /// Fresh session: random head, random feasible orientation, random food.
    pub fn new(grid: Grid, mut rng: SessionRng) -> Result<Self, String> {
        Self::check_grid(&grid)?;

        let snake = Self::spawn_snake(&grid, &mut rng)?;
        let mut state = Self {
            grid,
            snake,
            food: Food::new(Point::new(0, 0)),
            score: 0,
            ticks: 0,
            end_reason: None,
            rng,
        };
        if !state.respawn_food() {
            return Err("No empty cell left to place food".to_string());
        }
        Ok(state)
    }

    /// Session from explicit positions, used for scripted scenarios.
    pub fn from_parts(grid: Grid, snake: Snake, food: Point, rng: SessionRng) -> Result<Self, String> {
        Self::check_grid(&grid)?;

        if !grid.contains(snake.head()) {
            return Err(format!("Snake head {:?} is outside the grid", snake.head()));
        }
        if let Some(segment) = snake.body().iter().find(|p| !grid.contains(**p)) {
            return Err(format!("Snake segment {:?} is outside the grid", segment));
        }
        if !grid.contains(food) {
            return Err(format!("Food {:?} is outside the grid", food));
        }
        if snake.occupies(food) {
            return Err(format!("Food {:?} overlaps the snake", food));
        }

        Ok(Self {
            grid,
            snake,
            food: Food::new(food),
            score: 0,
            ticks: 0,
            end_reason: None,
            rng,
        })
    }

    fn check_grid(grid: &Grid) -> Result<(), String> {
        if grid.rows() < Grid::MIN_SIZE || grid.columns() < Grid::MIN_SIZE {
            return Err(format!(
                "Grid must be at least {}x{}, got {}x{}",
                Grid::MIN_SIZE,
                Grid::MIN_SIZE,
                grid.rows(),
                grid.columns()
            ));
        }
        Ok(())
    }

    fn spawn_snake(grid: &Grid, rng: &mut SessionRng) -> Result<Snake, String> {
        let cells: Vec<Point> = grid.cells().collect();
        let head = *rng
            .choose(&cells)
            .ok_or_else(|| "No empty cell to spawn the snake".to_string())?;

        let orientations = Self::starting_orientations(grid, head);
        let orientation = *rng.choose(&orientations).ok_or_else(|| {
            format!("No starting orientation has enough clearance from {:?}", head)
        })?;

        Ok(Snake::new(head, orientation))
    }

    /// Orientations leaving more than a quarter of the grid between the head and
    /// the wall it faces. Compared as `4 * distance > size` to stay in integers.
    pub fn starting_orientations(grid: &Grid, head: Point) -> Vec<Orientation> {
        let columns = grid.columns() as i64;
        let rows = grid.rows() as i64;
        let x = head.x as i64;
        let y = head.y as i64;

        let mut orientations = Vec::with_capacity(4);
        if 4 * x > columns {
            orientations.push(Orientation::West);
        }
        if 4 * (columns - x) > columns {
            orientations.push(Orientation::East);
        }
        if 4 * y > rows {
            orientations.push(Orientation::North);
        }
        if 4 * (rows - y) > rows {
            orientations.push(Orientation::South);
        }
        orientations
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Point {
        self.snake.head()
    }

    pub fn body(&self) -> &[Point] {
        self.snake.body()
    }

    pub fn food(&self) -> Point {
        self.food.position()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn end_reason(&self) -> Option<GameEndReason> {
        self.end_reason
    }

    pub fn is_over(&self) -> bool {
        self.end_reason.is_some()
    }

    pub fn is_cell_empty(&self, point: Point) -> bool {
        !self.snake.occupies(point) && point != self.food.position()
    }

    pub fn empty_cells(&self) -> Vec<Point> {
        self.grid.cells().filter(|p| self.is_cell_empty(*p)).collect()
    }

    /// Moves the food to a random empty cell. Returns `false` when the board is full.
    /// The current food cell is either under the head or not yet placed, so only
    /// the snake counts as occupied here.
    pub fn respawn_food(&mut self) -> bool {
        let empty_cells: Vec<Point> = self
            .grid
            .cells()
            .filter(|p| !self.snake.occupies(*p))
            .collect();
        match self.rng.choose(&empty_cells) {
            Some(&cell) => {
                self.food.set_position(cell);
                true
            }
            None => false,
        }
    }

    /// Applies a turn unless it points straight back along the last actual move.
    pub fn turn(&mut self, orientation: Orientation) -> bool {
        if self.snake.movement() == orientation.opposite().vector() {
            return false;
        }
        self.snake.set_orientation(orientation);
        true
    }

    pub fn go_north(&mut self) -> bool {
        self.turn(Orientation::North)
    }

    pub fn go_east(&mut self) -> bool {
        self.turn(Orientation::East)
    }

    pub fn go_south(&mut self) -> bool {
        self.turn(Orientation::South)
    }

    pub fn go_west(&mut self) -> bool {
        self.turn(Orientation::West)
    }

    pub fn check_collision(&self) -> bool {
        let head = self.snake.head();
        self.snake.body().contains(&head) || !self.grid.contains(head)
    }

    /// One tick: grow if pending, move, eat, then collide.
    pub fn update(&mut self) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Terminate;
        }
        self.ticks += 1;

        if self.snake.has_eaten_food() {
            self.snake.grow();
        }
        self.snake.update_position();

        let head = self.snake.head();
        if head == self.food.position() {
            self.snake.eat_food();
            self.score += 1;
            debug_log!("Food eaten at ({}, {}). Score: {}", head.x, head.y, self.score);

            if !self.respawn_food() {
                return self.end(GameEndReason::BoardFilled);
            }
        }

        if self.check_collision() {
            let reason = if self.grid.contains(head) {
                GameEndReason::SelfCollision
            } else {
                GameEndReason::WallCollision
            };
            return self.end(reason);
        }

        TickOutcome::Continue
    }

    fn end(&mut self, reason: GameEndReason) -> TickOutcome {
        debug_log!(
            "Game over after {} ticks: {:?}, score {}",
            self.ticks,
            reason,
            self.score
        );
        self.end_reason = Some(reason);
        TickOutcome::Terminate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(snake: Snake, food: Point, size: usize) -> SnakeGameState {
        SnakeGameState::from_parts(Grid::new(size, size), snake, food, SessionRng::new(42)).unwrap()
    }

    #[test]
    fn test_new_places_snake_and_food_apart() {
        for seed in 0..50 {
            let grid = Grid::new(20, 20);
            let state = SnakeGameState::new(grid, SessionRng::new(seed)).unwrap();
            assert!(grid.contains(state.head()));
            assert!(grid.contains(state.food()));
            assert_ne!(state.head(), state.food());
            assert!(state.body().is_empty());
            assert!(SnakeGameState::starting_orientations(&grid, state.head())
                .contains(&state.snake().orientation()));
        }
    }

    #[test]
    fn test_same_seed_spawns_same_session() {
        let a = SnakeGameState::new(Grid::new(12, 15), SessionRng::new(99)).unwrap();
        let b = SnakeGameState::new(Grid::new(12, 15), SessionRng::new(99)).unwrap();
        assert_eq!(a.head(), b.head());
        assert_eq!(a.food(), b.food());
        assert_eq!(a.snake().orientation(), b.snake().orientation());
        assert_eq!(a.seed(), 99);
    }

    #[test]
    fn test_too_small_grid_is_rejected() {
        let result = SnakeGameState::new(Grid::new(3, 10), SessionRng::new(1));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_parts_rejects_food_on_snake() {
        let snake = Snake::with_body(Point::new(2, 2), vec![Point::new(1, 2)], Orientation::East);
        let result =
            SnakeGameState::from_parts(Grid::new(6, 6), snake, Point::new(1, 2), SessionRng::new(1));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_cells_exclude_snake_and_food() {
        let snake = Snake::with_body(Point::new(2, 2), vec![Point::new(1, 2)], Orientation::East);
        let state = state_with(snake, Point::new(3, 3), 4);
        let empty = state.empty_cells();
        assert_eq!(empty.len(), 13);
        assert!(!state.is_cell_empty(Point::new(2, 2)));
        assert!(!state.is_cell_empty(Point::new(1, 2)));
        assert!(!state.is_cell_empty(Point::new(3, 3)));
        assert!(empty.contains(&Point::new(0, 0)));
    }

    #[test]
    fn test_starting_orientations_need_quarter_clearance() {
        let grid = Grid::new(20, 20);
        let corner = SnakeGameState::starting_orientations(&grid, Point::new(0, 0));
        assert_eq!(corner, vec![Orientation::East, Orientation::South]);

        let centre = SnakeGameState::starting_orientations(&grid, Point::new(10, 10));
        assert_eq!(centre.len(), 4);

        let near_edge = SnakeGameState::starting_orientations(&grid, Point::new(5, 19));
        assert_eq!(near_edge, vec![Orientation::East, Orientation::North]);
    }

    #[test]
    fn test_any_turn_allowed_before_first_move() {
        let mut state = state_with(Snake::new(Point::new(3, 3), Orientation::North), Point::new(0, 0), 8);
        assert!(state.go_south());
        assert_eq!(state.snake().orientation(), Orientation::South);
    }

    #[test]
    fn test_reverse_turn_rejected_while_moving() {
        let mut state = state_with(Snake::new(Point::new(3, 3), Orientation::North), Point::new(0, 0), 8);
        assert_eq!(state.update(), TickOutcome::Continue);

        assert!(!state.go_south());
        assert_eq!(state.snake().orientation(), Orientation::North);

        assert!(state.go_east());
        assert_eq!(state.snake().orientation(), Orientation::East);
        // Still moving north until the next tick, so south stays blocked.
        assert!(!state.go_south());
        assert!(state.go_west());
    }

    #[test]
    fn test_eating_scores_and_grows_next_tick() {
        let mut state = state_with(Snake::new(Point::new(1, 1), Orientation::East), Point::new(2, 1), 6);

        assert_eq!(state.update(), TickOutcome::Continue);
        assert_eq!(state.score(), 1);
        assert!(state.snake().has_eaten_food());
        assert!(state.body().is_empty());
        assert!(!state.snake().occupies(state.food()));

        state.update();
        assert_eq!(state.body(), &[Point::new(2, 1)]);
        assert_eq!(state.head(), Point::new(3, 1));
    }

    #[test]
    fn test_wall_collision_terminates() {
        let mut state = state_with(Snake::new(Point::new(0, 2), Orientation::West), Point::new(4, 4), 6);
        assert_eq!(state.update(), TickOutcome::Terminate);
        assert!(state.check_collision());
        assert_eq!(state.end_reason(), Some(GameEndReason::WallCollision));
        assert_eq!(state.update(), TickOutcome::Terminate);
        assert_eq!(state.ticks(), 1);
    }

    #[test]
    fn test_self_collision_terminates() {
        let snake = Snake::with_body(
            Point::new(2, 2),
            vec![
                Point::new(3, 2),
                Point::new(3, 3),
                Point::new(2, 3),
                Point::new(1, 3),
                Point::new(1, 2),
            ],
            Orientation::South,
        );
        let mut state = state_with(snake, Point::new(0, 0), 6);
        assert_eq!(state.update(), TickOutcome::Terminate);
        assert_eq!(state.end_reason(), Some(GameEndReason::SelfCollision));
    }

    #[test]
    fn test_moving_into_vacated_tail_is_safe() {
        let snake = Snake::with_body(
            Point::new(1, 1),
            vec![Point::new(2, 1), Point::new(2, 2), Point::new(1, 2)],
            Orientation::South,
        );
        let mut state = state_with(snake, Point::new(5, 5), 6);
        assert_eq!(state.update(), TickOutcome::Continue);
        assert_eq!(state.head(), Point::new(1, 2));
    }

    #[test]
    fn test_filling_the_board_ends_the_game() {
        // Snake of length 15 on a 4x4 board following a Hamiltonian cycle.
        let head = Point::new(1, 1);
        let body = vec![
            Point::new(2, 1),
            Point::new(2, 2),
            Point::new(1, 2),
            Point::new(0, 2),
            Point::new(0, 3),
            Point::new(1, 3),
            Point::new(2, 3),
            Point::new(3, 3),
            Point::new(3, 2),
            Point::new(3, 1),
            Point::new(3, 0),
            Point::new(2, 0),
            Point::new(1, 0),
            Point::new(0, 0),
        ];
        let snake = Snake::with_body(head, body, Orientation::West);
        let mut state = state_with(snake, Point::new(0, 1), 4);

        assert_eq!(state.update(), TickOutcome::Continue);
        assert_eq!(state.score(), 1);
        assert_eq!(state.food(), Point::new(0, 0));

        assert!(state.go_north());
        assert_eq!(state.update(), TickOutcome::Terminate);
        assert_eq!(state.score(), 2);
        assert_eq!(state.snake().length(), 16);
        assert_eq!(state.end_reason(), Some(GameEndReason::BoardFilled));
    }
}
