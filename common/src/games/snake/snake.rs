use super::types::{Orientation, Point};

/// Head plus body segments ordered head-to-tail.
///
/// `previous_head` / `previous_body` are the positions before the last
/// `update_position`. Each move builds the next body from the current one
/// and swaps both snapshots in whole, so no segment is read half-shifted.
#[derive(Clone, Debug)]
pub struct Snake {
    head: Point,
    body: Vec<Point>,
    previous_head: Point,
    previous_body: Vec<Point>,
    orientation: Orientation,
    has_eaten_food: bool,
}

impl Snake {
    pub fn new(head: Point, orientation: Orientation) -> Self {
        Self::with_body(head, Vec::new(), orientation)
    }

    /// Builds a snake that has not moved yet, so every turn is still allowed.
    pub fn with_body(head: Point, body: Vec<Point>, orientation: Orientation) -> Self {
        Self {
            head,
            previous_head: head,
            previous_body: body.clone(),
            body,
            orientation,
            has_eaten_food: false,
        }
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn tail(&self) -> Option<Point> {
        self.body.last().copied()
    }

    pub fn previous_head(&self) -> Point {
        self.previous_head
    }

    /// Head plus body.
    pub fn length(&self) -> usize {
        self.body.len() + 1
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn has_eaten_food(&self) -> bool {
        self.has_eaten_food
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.head == point || self.body.contains(&point)
    }

    /// Direction of the last actual move; `(0, 0)` before the first one.
    pub fn movement(&self) -> (i32, i32) {
        self.head.delta(self.previous_head)
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn update_position(&mut self) {
        let next_head = self.head.step(self.orientation);
        let next_body: Vec<Point> = std::iter::once(self.head)
            .chain(self.body.iter().copied())
            .take(self.body.len())
            .collect();

        self.previous_head = std::mem::replace(&mut self.head, next_head);
        self.previous_body = std::mem::replace(&mut self.body, next_body);
    }

    pub fn eat_food(&mut self) {
        self.has_eaten_food = true;
    }

    /// Appends the cell vacated by the last move. Must run before `update_position`
    /// in the same tick so the segment comes from pre-move positions.
    pub fn grow(&mut self) {
        let segment = self
            .previous_body
            .last()
            .copied()
            .unwrap_or(self.previous_head);
        self.body.push(segment);
        self.has_eaten_food = false;
    }
}
