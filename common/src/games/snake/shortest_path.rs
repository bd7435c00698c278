use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::grid::Grid;
use super::types::{Orientation, Point};

/// Distance field and one extracted shortest path for a single search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    grid: Grid,
    distances: Vec<usize>,
    path: Vec<Point>,
}

impl SearchResult {
    /// Distance value meaning "not reached", equal to the number of cells.
    pub fn unreachable_value(&self) -> usize {
        self.grid.cell_count()
    }

    /// `None` for cells outside the grid.
    pub fn distance(&self, point: Point) -> Option<usize> {
        self.grid.index_of(point).map(|index| self.distances[index])
    }

    pub fn distances(&self) -> &[usize] {
        &self.distances
    }

    /// Cells after the start up to and including the goal; empty when unreachable.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Point> {
        self.path
    }
}

/// Unit-weight Dijkstra search over the 4-connected grid.
pub struct ShortestPathSearch<'a> {
    grid: &'a Grid,
    blocked: Vec<bool>,
}

impl<'a> ShortestPathSearch<'a> {
    /// Blocked cells outside the grid are ignored.
    pub fn new(grid: &'a Grid, blocked: &[Point]) -> Self {
        let mut mask = vec![false; grid.cell_count()];
        for index in blocked.iter().filter_map(|p| grid.index_of(*p)) {
            mask[index] = true;
        }
        Self {
            grid,
            blocked: mask,
        }
    }

    pub fn is_blocked(&self, point: Point) -> bool {
        self.grid
            .index_of(point)
            .is_some_and(|index| self.blocked[index])
    }

    pub fn run(&self, start: Point, goal: Point) -> SearchResult {
        let unreachable = self.grid.cell_count();
        let mut distances = vec![unreachable; unreachable];

        let (Some(start_index), Some(goal_index)) =
            (self.grid.index_of(start), self.grid.index_of(goal))
        else {
            return SearchResult {
                grid: *self.grid,
                distances,
                path: Vec::new(),
            };
        };

        self.compute_distances(start_index, goal_index, &mut distances);
        let path = self.extract_path(start, goal, &distances);

        SearchResult {
            grid: *self.grid,
            distances,
            path,
        }
    }

    fn compute_distances(&self, start_index: usize, goal_index: usize, distances: &mut [usize]) {
        let mut visited = vec![false; distances.len()];
        let mut frontier = BinaryHeap::new();

        distances[start_index] = 0;
        frontier.push(Reverse((0usize, start_index)));

        while let Some(Reverse((distance, index))) = frontier.pop() {
            if visited[index] {
                continue;
            }
            visited[index] = true;
            if index == goal_index {
                break;
            }

            let current = self.grid.index_to_coordinate(index);
            for neighbor in self.grid.neighbors(current) {
                let neighbor_index = self.grid.coordinate_to_index(neighbor);
                // Blocked cells keep the unreachable value and are never expanded.
                if visited[neighbor_index] || self.blocked[neighbor_index] {
                    continue;
                }
                if distance + 1 < distances[neighbor_index] {
                    distances[neighbor_index] = distance + 1;
                    frontier.push(Reverse((distance + 1, neighbor_index)));
                }
            }
        }
    }

    /// Walks back from the goal, always taking the first strictly closer neighbor
    /// in North, East, South, West order. The fixed order keeps paths straight
    /// instead of zig-zagging between equally short alternatives.
    fn extract_path(&self, start: Point, goal: Point, distances: &[usize]) -> Vec<Point> {
        let goal_distance = distances[self.grid.coordinate_to_index(goal)];
        if goal_distance >= self.grid.cell_count() {
            return Vec::new();
        }

        let mut path = Vec::with_capacity(goal_distance);
        let mut current = goal;
        while current != start {
            path.push(current);
            let current_distance = distances[self.grid.coordinate_to_index(current)];
            let previous = Orientation::ALL
                .into_iter()
                .map(|o| current.step(o))
                .find(|p| {
                    self.grid
                        .index_of(*p)
                        .is_some_and(|i| distances[i] < current_distance)
                });
            match previous {
                Some(point) => current = point,
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}

/// Shorthand for a one-off search.
pub fn find_path(grid: &Grid, start: Point, goal: Point, blocked: &[Point]) -> Vec<Point> {
    ShortestPathSearch::new(grid, blocked).run(start, goal).into_path()
}
