use enum_map::Enum;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the change in `(row, column)` produced by one step in this
    /// direction
    pub(super) fn delta(self) -> (i16, i16) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Return the position one step from `pos` in this direction, or `None`
    /// if that would leave the range of representable coordinates
    pub(super) fn advance(self, pos: Position) -> Option<Position> {
        let (dy, dx) = self.delta();
        Some(Position {
            x: pos.x.checked_add_signed(dx)?,
            y: pos.y.checked_add_signed(dy)?,
        })
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}
