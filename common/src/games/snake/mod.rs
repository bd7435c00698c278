mod autopilot;
mod food;
mod game_state;
mod grid;
mod session;
mod shortest_path;
mod snake;
mod types;

pub use autopilot::AutoPilot;
pub use food::Food;
pub use game_state::SnakeGameState;
pub use grid::Grid;
pub use session::{SnakeSession, SnakeSnapshot};
pub use shortest_path::{find_path, SearchResult, ShortestPathSearch};
pub use snake::Snake;
pub use types::{GameEndReason, Orientation, Point, TickOutcome};
