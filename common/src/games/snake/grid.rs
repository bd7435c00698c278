use super::types::{Orientation, Point};

/// Board dimensions. Playable cells are `[0, columns) x [0, rows)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
}

impl Grid {
    pub const MIN_SIZE: usize = 4;

    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.columns
            && (point.y as usize) < self.rows
    }

    /// Row-major index. Callers must pass an in-bounds point.
    pub fn coordinate_to_index(&self, point: Point) -> usize {
        point.y as usize * self.columns + point.x as usize
    }

    pub fn index_to_coordinate(&self, index: usize) -> Point {
        Point::new((index % self.columns) as i32, (index / self.columns) as i32)
    }

    pub fn index_of(&self, point: Point) -> Option<usize> {
        self.contains(point).then(|| self.coordinate_to_index(point))
    }

    /// In-bounds 4-neighbors in North, East, South, West order.
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        Orientation::ALL
            .into_iter()
            .map(move |o| point.step(o))
            .filter(|p| self.contains(*p))
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.cell_count()).map(|i| self.index_to_coordinate(i))
    }
}
