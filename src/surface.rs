//! Styled drawing onto a terminal buffer.
//!
//! Game code talks in terms of [`StyleTag`]s; a [`Palette`] decides what each
//! tag actually looks like on the current terminal.
use crate::consts;
use enum_map::{enum_map, Enum, EnumMap};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};
use tracing::warn;
use unicode_width::UnicodeWidthStr;

/// The role a drawn glyph plays on screen
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum StyleTag {
    SnakeHead,
    SnakeBody,
    Food,
    Border,
    Score,
    PauseBanner,
    GameOverBanner,
    Plain,
}

/// Mapping from [`StyleTag`]s to terminal styles
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Palette(EnumMap<StyleTag, Style>);

impl Palette {
    /// The full-color palette
    pub(crate) fn color() -> Palette {
        Palette(enum_map! {
            StyleTag::SnakeHead => consts::SNAKE_HEAD_STYLE,
            StyleTag::SnakeBody => consts::SNAKE_BODY_STYLE,
            StyleTag::Food => consts::FOOD_STYLE,
            StyleTag::Border => consts::BORDER_STYLE,
            StyleTag::Score => consts::SCORE_STYLE,
            StyleTag::PauseBanner => consts::PAUSE_BANNER_STYLE,
            StyleTag::GameOverBanner => consts::GAME_OVER_BANNER_STYLE,
            StyleTag::Plain => Style::new(),
        })
    }

    /// A palette for terminals without color: text attributes are kept, colors
    /// are dropped
    pub(crate) fn monochrome() -> Palette {
        let Palette(color) = Palette::color();
        Palette(color.map(|_, style| Style::new().add_modifier(style.add_modifier)))
    }

    /// Pick a palette according to how many colors the terminal claims to
    /// support
    pub(crate) fn detect() -> Palette {
        Palette::for_color_count(crossterm::style::available_color_count())
    }

    pub(crate) fn for_color_count(colors: u16) -> Palette {
        if colors >= consts::MIN_COLORS {
            Palette::color()
        } else {
            warn!(colors, "terminal lacks color support; drawing in monochrome");
            Palette::monochrome()
        }
    }

    pub(crate) fn style(&self, tag: StyleTag) -> Style {
        self.0[tag]
    }
}

/// A region of a [`Buffer`] addressed relative to its top-left corner.
/// Anything drawn outside the region is silently dropped.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    palette: &'a Palette,
}

impl<'a> Canvas<'a> {
    pub(crate) fn new(area: Rect, buf: &'a mut Buffer, palette: &'a Palette) -> Canvas<'a> {
        let area = area.intersection(buf.area);
        Canvas { area, buf, palette }
    }
}

impl Canvas<'_> {
    pub(crate) fn area(&self) -> Rect {
        self.area
    }

    /// The style to give a freshly-drawn cell, replacing whatever styling was
    /// there before
    fn ink(&self, tag: StyleTag) -> Style {
        Style::reset().patch(self.palette.style(tag))
    }

    /// Convert a position relative to the canvas into an absolute position in
    /// the buffer, if it lies on the canvas
    fn locate(&self, pos: Position) -> Option<Position> {
        (pos.x < self.area.width && pos.y < self.area.height).then(|| Position {
            x: self.area.x + pos.x,
            y: self.area.y + pos.y,
        })
    }

    pub(crate) fn draw_cell(&mut self, pos: Position, symbol: char, tag: StyleTag) {
        let Some(at) = self.locate(pos) else {
            return;
        };
        let style = self.ink(tag);
        if let Some(cell) = self.buf.cell_mut(at) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }

    /// Draw a run of text starting at `pos`, cut off at the canvas's right
    /// edge
    pub(crate) fn draw_text(&mut self, pos: Position, text: &str, tag: StyleTag) {
        let Some(at) = self.locate(pos) else {
            return;
        };
        let room = self.area.width - pos.x;
        let style = self.ink(tag);
        let _ = self
            .buf
            .set_stringn(at.x, at.y, text, usize::from(room), style);
    }

    /// Draw `text` on row `y`, horizontally centered on the canvas
    pub(crate) fn draw_centered(&mut self, y: u16, text: &str, tag: StyleTag) {
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let x = self.area.width.saturating_sub(width) / 2;
        self.draw_text(Position { x, y }, text, tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};
    use rstest::rstest;

    fn has_modifier(style: Style, modifier: Modifier) -> bool {
        style.add_modifier.contains(modifier)
    }

    #[test]
    fn monochrome_drops_colors() {
        let palette = Palette::monochrome();
        for (tag, style) in &Palette::color().0 {
            let mono = palette.style(tag);
            assert_eq!(mono.fg, None);
            assert_eq!(mono.bg, None);
            assert_eq!(mono.add_modifier, style.add_modifier);
        }
        assert!(has_modifier(
            palette.style(StyleTag::PauseBanner),
            Modifier::REVERSED
        ));
        assert!(has_modifier(
            palette.style(StyleTag::SnakeHead),
            Modifier::BOLD
        ));
    }

    #[rstest]
    #[case(0, false)]
    #[case(7, false)]
    #[case(8, true)]
    #[case(256, true)]
    fn palette_for_color_count(#[case] colors: u16, #[case] color: bool) {
        let expected = if color {
            Palette::color()
        } else {
            Palette::monochrome()
        };
        assert_eq!(Palette::for_color_count(colors), expected);
    }

    #[test]
    fn head_distinct_from_body() {
        let palette = Palette::color();
        assert_ne!(
            palette.style(StyleTag::SnakeHead),
            palette.style(StyleTag::SnakeBody)
        );
        assert_eq!(palette.style(StyleTag::Food).fg, Some(Color::Red));
    }

    #[test]
    fn draw_cell_relative_to_area() {
        let palette = Palette::color();
        let mut buffer = Buffer::empty(Rect::new(0, 0, 5, 3));
        let mut canvas = Canvas::new(Rect::new(1, 1, 3, 2), &mut buffer, &palette);
        canvas.draw_cell(Position::new(0, 0), 'a', StyleTag::Food);
        canvas.draw_cell(Position::new(2, 1), 'b', StyleTag::Plain);
        canvas.draw_cell(Position::new(3, 1), 'c', StyleTag::Plain);
        canvas.draw_cell(Position::new(0, 2), 'd', StyleTag::Plain);
        let mut expected = Buffer::with_lines(["     ", " a   ", "   b "]);
        expected.set_style(Rect::new(1, 1, 1, 1), consts::FOOD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn draw_cell_replaces_style() {
        let palette = Palette::color();
        let mut buffer = Buffer::empty(Rect::new(0, 0, 2, 1));
        let mut canvas = Canvas::new(Rect::new(0, 0, 2, 1), &mut buffer, &palette);
        canvas.draw_cell(Position::new(0, 0), '█', StyleTag::SnakeHead);
        canvas.draw_cell(Position::new(1, 0), '●', StyleTag::Food);
        canvas.draw_cell(Position::new(0, 0), 'x', StyleTag::Plain);
        let mut expected = Buffer::with_lines(["x●"]);
        expected.set_style(Rect::new(1, 0, 1, 1), consts::FOOD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn draw_text_clipped() {
        let palette = Palette::color();
        let mut buffer = Buffer::empty(Rect::new(0, 0, 8, 2));
        let mut canvas = Canvas::new(Rect::new(0, 0, 6, 2), &mut buffer, &palette);
        canvas.draw_text(Position::new(2, 1), "Score: 10", StyleTag::Score);
        canvas.draw_text(Position::new(6, 0), "nope", StyleTag::Score);
        let mut expected = Buffer::with_lines(["        ", "  Scor  "]);
        expected.set_style(Rect::new(2, 1, 4, 1), consts::SCORE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn draw_centered_text() {
        let palette = Palette::color();
        let mut buffer = Buffer::empty(Rect::new(0, 0, 10, 1));
        let mut canvas = Canvas::new(Rect::new(0, 0, 10, 1), &mut buffer, &palette);
        canvas.draw_centered(0, "abcd", StyleTag::Plain);
        pretty_assertions::assert_eq!(buffer, Buffer::with_lines(["   abcd   "]));
    }

    #[test]
    fn draw_centered_too_wide() {
        let palette = Palette::color();
        let mut buffer = Buffer::empty(Rect::new(0, 0, 6, 1));
        let mut canvas = Canvas::new(Rect::new(1, 0, 4, 1), &mut buffer, &palette);
        canvas.draw_centered(0, "abcdefgh", StyleTag::Plain);
        pretty_assertions::assert_eq!(buffer, Buffer::with_lines([" abcd "]));
    }

    #[test]
    fn canvas_clipped_to_buffer() {
        let palette = Palette::color();
        let mut buffer = Buffer::empty(Rect::new(0, 0, 4, 2));
        let mut canvas = Canvas::new(Rect::new(2, 0, 10, 10), &mut buffer, &palette);
        assert_eq!(canvas.area(), Rect::new(2, 0, 2, 2));
        canvas.draw_cell(Position::new(1, 1), 'x', StyleTag::Plain);
        canvas.draw_cell(Position::new(2, 1), 'y', StyleTag::Plain);
        pretty_assertions::assert_eq!(buffer, Buffer::with_lines(["    ", "   x"]));
    }
}
