use super::direction::Direction;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// A snake: its body and the way it is heading
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The positions of all of the cells in the snake, head first and tail
    /// last
    pub(super) segments: VecDeque<Position>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a snake of `len` cells with its head at `head`, facing in
    /// `direction`, with the rest of its body trailing straight behind it
    pub(super) fn new(head: Position, direction: Direction, len: usize) -> Snake {
        let behind = direction.reverse();
        Snake {
            segments: std::iter::successors(Some(head), |&p| behind.advance(p))
                .take(len)
                .collect(),
            direction,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        // A snake is never empty
        self.segments.front().copied().unwrap_or_default()
    }

    /// Return the positions of the cells in the snake, head first
    pub(crate) fn segments(&self) -> &VecDeque<Position> {
        &self.segments
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    #[cfg(test)]
    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Change the snake's direction to `direction`.  Turning back onto the
    /// snake's own neck is refused; returns `false` in that case.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Return the cell the head would move into on the next step, or `None`
    /// if the coordinates would underflow
    pub(super) fn next_head(&self) -> Option<Position> {
        self.direction.advance(self.head())
    }

    /// Add a new head cell.  The snake is one cell longer afterwards.
    pub(super) fn push_head(&mut self, pos: Position) {
        self.segments.push_front(pos);
    }

    /// Remove the tail cell
    pub(super) fn trim_tail(&mut self) {
        let _ = self.segments.pop_back();
    }
}
