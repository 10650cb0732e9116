//! Checking that the terminal is big enough to play in, and telling the user
//! when it isn't
use crate::app::Outcome;
use crate::command::Command;
use crate::consts;
use crate::error::RunError;
use crate::input::Keyboard;
use crate::util::center_rect;
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Rect, Size},
    text::{Line, Text},
    widgets::Widget,
    Terminal,
};
use unicode_width::UnicodeWidthStr;

static TOO_SMALL_TEXT: &str = "Terminal too small! Need at least 40x10 characters.";

static EXIT_PROMPT: &str = "Press any key to exit...";

/// Is a terminal of the given size big enough to play in?
pub(crate) fn fits(size: Size) -> bool {
    size.width >= consts::MIN_SCREEN_SIZE.width && size.height >= consts::MIN_SCREEN_SIZE.height
}

/// Show the "terminal too small" notice and wait for the user to dismiss it
pub(crate) fn refuse<B: Backend, K: Keyboard>(
    terminal: &mut Terminal<B>,
    keyboard: &mut K,
    size: Size,
) -> Result<Outcome, RunError> {
    terminal
        .draw(|frame| frame.render_widget(TooSmall { size }, frame.area()))
        .map_err(RunError::Draw)?;
    let key = keyboard.wait_key().map_err(RunError::Input)?;
    if Command::from_key_event(key) == Some(Command::Interrupt) {
        Ok(Outcome::Interrupted)
    } else {
        Ok(Outcome::TooSmall(size))
    }
}

/// The notice shown in place of the game when the terminal is too small.  The
/// text is word-wrapped to fit and centered on the screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct TooSmall {
    size: Size,
}

impl Widget for TooSmall {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size_line = format!("Current size: {}x{}", self.size.width, self.size.height);
        let width = usize::from(area.width).max(1);
        let lines = [TOO_SMALL_TEXT, size_line.as_str(), EXIT_PROMPT]
            .into_iter()
            .flat_map(|s| textwrap::wrap(s, width))
            .collect::<Vec<_>>();
        let text_size = Size {
            width: lines
                .iter()
                .map(|ln| u16::try_from(ln.width()).unwrap_or(u16::MAX))
                .max()
                .unwrap_or_default(),
            height: u16::try_from(lines.len()).unwrap_or(u16::MAX),
        };
        Text::from_iter(lines.into_iter().map(Line::raw)).render(center_rect(area, text_size), buf);
    }
}
