use super::{Board, Game};
use crate::consts;
use crate::surface::{Canvas, Palette, StyleTag};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// A widget that paints the whole game screen: the bordered playing field,
/// the snake and its food, the score & instructions lines, and whichever
/// banner the game's state calls for.
///
/// Every render is a full repaint.  `area` should be the whole terminal that
/// the game's board was sized for.
#[derive(Debug)]
pub(crate) struct GameView<'a, R> {
    game: &'a Game<R>,
    palette: &'a Palette,
    welcome: bool,
}

impl<'a, R> GameView<'a, R> {
    pub(crate) fn new(game: &'a Game<R>, palette: &'a Palette) -> Self {
        GameView {
            game,
            palette,
            welcome: false,
        }
    }

    /// Overlay the "press any key" greeting shown before play begins
    pub(crate) fn welcome(mut self, welcome: bool) -> Self {
        self.welcome = welcome;
        self
    }
}

impl<R> Widget for GameView<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board = self.game.board();
        let mut screen = Canvas::new(area, buf, self.palette);
        draw_border(&mut screen, board);
        let mut segments = self.game.snake().segments().iter();
        let head = segments.next();
        for &p in segments {
            screen.draw_cell(p, consts::SNAKE_BODY_SYMBOL, StyleTag::SnakeBody);
        }
        if let Some(pos) = self.game.food() {
            screen.draw_cell(pos, consts::FOOD_SYMBOL, StyleTag::Food);
        }
        if let Some(&pos) = head {
            screen.draw_cell(pos, consts::SNAKE_HEAD_SYMBOL, StyleTag::SnakeHead);
        }

        let hud_row = board.height.saturating_add(2);
        screen.draw_text(
            Position::new(2, hud_row),
            &format!("Score: {}", self.game.score()),
            StyleTag::Score,
        );
        if consts::INSTRUCTIONS.width() < usize::from(area.width.saturating_sub(2)) {
            screen.draw_text(
                Position::new(2, hud_row.saturating_add(1)),
                consts::INSTRUCTIONS,
                StyleTag::Plain,
            );
        }

        let interior = board.interior();
        let field_area = Rect {
            x: area.x.saturating_add(interior.x),
            y: area.y.saturating_add(interior.y),
            ..interior
        };
        let mut field = Canvas::new(field_area, buf, self.palette);
        let middle = field.area().height.saturating_sub(1) / 2;
        if self.game.paused() {
            field.draw_centered(middle, consts::PAUSE_TEXT, StyleTag::PauseBanner);
        } else if self.game.over() {
            field.draw_centered(
                middle,
                &format!("GAME OVER! Final Score: {}", self.game.score()),
                StyleTag::GameOverBanner,
            );
            field.draw_centered(
                middle.saturating_add(1),
                consts::RESTART_HINT,
                StyleTag::Score,
            );
        } else if self.welcome {
            field.draw_centered(middle, consts::WELCOME_TEXT, StyleTag::Score);
        }
    }
}

fn draw_border(canvas: &mut Canvas<'_>, board: Board) {
    let right = board.width.saturating_add(1);
    let bottom = board.height.saturating_add(1);
    for x in 1..right {
        canvas.draw_cell(
            Position::new(x, 0),
            consts::BORDER_HORIZONTAL_SYMBOL,
            StyleTag::Border,
        );
        canvas.draw_cell(
            Position::new(x, bottom),
            consts::BORDER_HORIZONTAL_SYMBOL,
            StyleTag::Border,
        );
    }
    for y in 1..bottom {
        canvas.draw_cell(
            Position::new(0, y),
            consts::BORDER_VERTICAL_SYMBOL,
            StyleTag::Border,
        );
        canvas.draw_cell(
            Position::new(right, y),
            consts::BORDER_VERTICAL_SYMBOL,
            StyleTag::Border,
        );
    }
    canvas.draw_cell(
        Position::ORIGIN,
        consts::BORDER_TOP_LEFT_SYMBOL,
        StyleTag::Border,
    );
    canvas.draw_cell(
        Position::new(right, 0),
        consts::BORDER_TOP_RIGHT_SYMBOL,
        StyleTag::Border,
    );
    canvas.draw_cell(
        Position::new(0, bottom),
        consts::BORDER_BOTTOM_LEFT_SYMBOL,
        StyleTag::Border,
    );
    canvas.draw_cell(
        Position::new(right, bottom),
        consts::BORDER_BOTTOM_RIGHT_SYMBOL,
        StyleTag::Border,
    );
}
