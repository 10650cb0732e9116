use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything a keypress can ask the game to do.  Keys that don't map to a
/// `Command` are ignored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    /// Ctrl-C; treated like an interrupt signal
    Interrupt,
    Up,
    Down,
    Left,
    Right,
    Pause,
    Restart,
    Quit,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Interrupt),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE, KeyCode::Char('p')) => Some(Command::Pause),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::Restart),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            _ => None,
        }
    }

    /// The direction a movement command steers the snake in
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::North),
            Command::Down => Some(Direction::South),
            Command::Left => Some(Direction::West),
            Command::Right => Some(Direction::East),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyEvent::from(KeyCode::Up), Some(Command::Up))]
    #[case(KeyEvent::from(KeyCode::Down), Some(Command::Down))]
    #[case(KeyEvent::from(KeyCode::Left), Some(Command::Left))]
    #[case(KeyEvent::from(KeyCode::Right), Some(Command::Right))]
    #[case(KeyEvent::from(KeyCode::Char('k')), Some(Command::Up))]
    #[case(KeyEvent::from(KeyCode::Char('s')), Some(Command::Down))]
    #[case(KeyEvent::from(KeyCode::Char('h')), Some(Command::Left))]
    #[case(KeyEvent::from(KeyCode::Char('d')), Some(Command::Right))]
    #[case(KeyEvent::from(KeyCode::Char('p')), Some(Command::Pause))]
    #[case(KeyEvent::from(KeyCode::Char('r')), Some(Command::Restart))]
    #[case(KeyEvent::from(KeyCode::Char('q')), Some(Command::Quit))]
    #[case(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        Some(Command::Interrupt)
    )]
    #[case(KeyEvent::from(KeyCode::Char('c')), None)]
    #[case(KeyEvent::from(KeyCode::Char('x')), None)]
    #[case(KeyEvent::from(KeyCode::Enter), None)]
    #[case(KeyEvent::from(KeyCode::Esc), None)]
    #[case(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT), None)]
    #[case(KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT), None)]
    fn test_from_key_event(#[case] ev: KeyEvent, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key_event(ev), cmd);
    }

    #[rstest]
    #[case(Command::Up, Some(Direction::North))]
    #[case(Command::Down, Some(Direction::South))]
    #[case(Command::Left, Some(Direction::West))]
    #[case(Command::Right, Some(Direction::East))]
    #[case(Command::Pause, None)]
    #[case(Command::Quit, None)]
    fn test_direction(#[case] cmd: Command, #[case] dir: Option<Direction>) {
        assert_eq!(cmd.direction(), dir);
    }
}
