use super::direction::Direction;
use super::snake::Snake;
use crate::consts;
use ratatui::layout::{Position, Positions, Rect, Size};

/// Dimensions of the playing field.
///
/// Positions on the board are screen coordinates: the border frame occupies
/// row 0, column 0, row `height + 1`, and column `width + 1`, and the
/// playable cells are everything strictly inside it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    /// Number of playable rows
    pub(crate) height: u16,

    /// Number of playable columns
    pub(crate) width: u16,
}

impl Board {
    /// Compute the playing field for a terminal screen of the given size,
    /// leaving room for the border and the lines below it
    pub(crate) fn for_screen(screen: Size) -> Board {
        Board {
            height: screen.height.saturating_sub(consts::RESERVED_ROWS),
            width: screen.width.saturating_sub(consts::RESERVED_COLUMNS),
        }
    }

    /// The rectangle of playable cells
    pub(crate) fn interior(self) -> Rect {
        Rect::new(1, 1, self.width, self.height)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        self.interior().contains(pos)
    }

    pub(crate) fn positions(self) -> Positions {
        self.interior().positions()
    }

    /// Total number of playable cells
    pub(crate) fn cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Create a snake of the initial length, centered on the board and facing
    /// east
    pub(super) fn new_snake(self) -> Snake {
        let head = Position::new(self.width / 2, self.height / 2);
        Snake::new(head, Direction::East, consts::INITIAL_SNAKE_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn for_minimum_screen() {
        let board = Board::for_screen(consts::MIN_SCREEN_SIZE);
        assert_eq!(
            board,
            Board {
                height: 6,
                width: 38
            }
        );
        assert_eq!(board.cells(), 228);
    }

    #[rstest]
    #[case(Position::new(1, 1), true)]
    #[case(Position::new(38, 6), true)]
    #[case(Position::new(0, 3), false)]
    #[case(Position::new(3, 0), false)]
    #[case(Position::new(39, 3), false)]
    #[case(Position::new(3, 7), false)]
    fn test_contains(#[case] pos: Position, #[case] inside: bool) {
        let board = Board {
            height: 6,
            width: 38,
        };
        assert_eq!(board.contains(pos), inside);
    }

    #[test]
    fn positions_cover_interior() {
        let board = Board {
            height: 2,
            width: 3,
        };
        let positions = board.positions().collect::<Vec<_>>();
        assert_eq!(
            positions,
            [
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(3, 1),
                Position::new(1, 2),
                Position::new(2, 2),
                Position::new(3, 2),
            ]
        );
    }

    #[test]
    fn new_snake_is_centered() {
        let board = Board {
            height: 20,
            width: 78,
        };
        let snake = board.new_snake();
        assert_eq!(
            snake.segments().iter().copied().collect::<Vec<_>>(),
            [
                Position::new(39, 10),
                Position::new(38, 10),
                Position::new(37, 10)
            ]
        );
        assert_eq!(snake.direction(), Direction::East);
    }
}
