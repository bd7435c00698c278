use super::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    position: Point,
}

impl Food {
    pub fn new(position: Point) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}
