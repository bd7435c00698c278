use serde::Serialize;

/// Grid coordinate as (column, row). Signed so a head that left the board is still representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn step(self, orientation: Orientation) -> Self {
        let (dx, dy) = orientation.vector();
        self.offset(dx, dy)
    }

    /// Component-wise `self - other`.
    pub fn delta(self, other: Point) -> (i32, i32) {
        (self.x - other.x, self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// Neighbor priority used everywhere a fixed order matters.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    pub fn vector(self) -> (i32, i32) {
        match self {
            Orientation::North => (0, -1),
            Orientation::East => (1, 0),
            Orientation::South => (0, 1),
            Orientation::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Orientation {
        match self {
            Orientation::North => Orientation::South,
            Orientation::East => Orientation::West,
            Orientation::South => Orientation::North,
            Orientation::West => Orientation::East,
        }
    }

    pub fn from_vector(dx: i32, dy: i32) -> Option<Orientation> {
        Self::ALL.into_iter().find(|o| o.vector() == (dx, dy))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Terminate,
}

impl TickOutcome {
    pub fn is_continue(self) -> bool {
        self == TickOutcome::Continue
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameEndReason {
    WallCollision,
    SelfCollision,
    /// No empty cell was left for the next food.
    BoardFilled,
}
