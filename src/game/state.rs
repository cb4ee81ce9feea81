use super::action::Direction;

/// A position on the board, in pixels, aligned to the cell grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move one cell in a direction, wrapping toroidally around the board
    ///
    /// Each axis is taken modulo the board's pixel size, so the snake exits
    /// one edge and re-enters the opposite edge.
    pub fn stepped(&self, direction: Direction, cell_size: i32, width: i32, height: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx * cell_size).rem_euclid(width),
            y: (self.y + dy * cell_size).rem_euclid(height),
        }
    }
}

/// The snake: body segments in order, head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Position>,
}

impl Snake {
    pub fn new(body: Vec<Position>) -> Self {
        debug_assert!(!body.is_empty());
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Insert a new head at the front
    pub fn push_head(&mut self, head: Position) {
        self.body.insert(0, head);
    }

    /// Remove the tail segment
    pub fn pop_tail(&mut self) {
        self.body.pop();
    }

    /// Check if a position coincides with a body segment (head excluded)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body[1..].contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
