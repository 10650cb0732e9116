//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// How long to wait for a keypress before advancing the snake anyway
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(150);

/// Pause after each redraw.  Together with [`TICK_PERIOD`], this sets the
/// speed of the game.
pub(crate) const FRAME_PAUSE: Duration = Duration::from_millis(10);

/// The smallest terminal the game will agree to run in
pub(crate) const MIN_SCREEN_SIZE: Size = Size {
    width: 40,
    height: 10,
};

/// Rows of the screen not available to the playing field: the top & bottom
/// borders, the score line, and the instructions line
pub(crate) const RESERVED_ROWS: u16 = 4;

/// Columns of the screen not available to the playing field: the left & right
/// borders
pub(crate) const RESERVED_COLUMNS: u16 = 2;

/// Length of a newly-created snake
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Points awarded for each piece of food eaten
pub(crate) const FOOD_REWARD: u32 = 10;

/// Number of random cells to try when placing food before falling back to a
/// scan of all free cells
pub(crate) const FOOD_PLACEMENT_ATTEMPTS: usize = 64;

/// Terminals reporting fewer colors than this are drawn in monochrome
pub(crate) const MIN_COLORS: u16 = 8;

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: char = '█';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '▓';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

pub(crate) const BORDER_HORIZONTAL_SYMBOL: char = '═';
pub(crate) const BORDER_VERTICAL_SYMBOL: char = '║';
pub(crate) const BORDER_TOP_LEFT_SYMBOL: char = '╔';
pub(crate) const BORDER_TOP_RIGHT_SYMBOL: char = '╗';
pub(crate) const BORDER_BOTTOM_LEFT_SYMBOL: char = '╚';
pub(crate) const BORDER_BOTTOM_RIGHT_SYMBOL: char = '╝';

/// Static help line shown below the score
pub(crate) const INSTRUCTIONS: &str = "Arrow keys: Move | 'p': Pause | 'q': Quit | 'r': Restart";

pub(crate) const PAUSE_TEXT: &str = "PAUSED - Press 'p' to continue";

pub(crate) const RESTART_HINT: &str = "Press 'r' to restart or 'q' to quit";

pub(crate) const WELCOME_TEXT: &str = "Welcome to Snake! Press any key to start...";

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the snake's body
pub(crate) const SNAKE_BODY_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Style for the frame around the playing field
pub(crate) const BORDER_STYLE: Style = Style::new().fg(Color::White);

/// Style for the score line and other informational text
pub(crate) const SCORE_STYLE: Style = Style::new().fg(Color::Yellow);

pub(crate) const PAUSE_BANNER_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::REVERSED)
    .add_modifier(Modifier::BOLD);

pub(crate) const GAME_OVER_BANNER_STYLE: Style = Style::new()
    .fg(Color::Red)
    .add_modifier(Modifier::REVERSED)
    .add_modifier(Modifier::BOLD);
