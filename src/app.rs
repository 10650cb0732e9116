use crate::command::Command;
use crate::consts;
use crate::error::RunError;
use crate::game::{Game, GameView};
use crate::input::Keyboard;
use crate::surface::Palette;
use rand::{rngs::ThreadRng, Rng};
use ratatui::{backend::Backend, layout::Size, Terminal};
use std::thread::sleep;

/// How a session came to an end
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The user quit with `q`
    Quit,
    /// The user pressed Ctrl-C
    Interrupted,
    /// The terminal was too small to play in, and the user acknowledged the
    /// notice
    TooSmall(Size),
}

#[derive(Clone, Debug)]
pub(crate) struct App<R = ThreadRng> {
    game: Game<R>,
    /// The terminal size captured at startup; restarts reuse it
    screen: Size,
    palette: Palette,
}

impl App<ThreadRng> {
    pub(crate) fn new(screen: Size, palette: Palette) -> App<ThreadRng> {
        App {
            game: Game::new(screen),
            screen,
            palette,
        }
    }
}

impl<R: Rng> App<R> {
    /// Show the welcome screen, wait for a key, then play until the user
    /// quits or interrupts
    pub(crate) fn run<B: Backend, K: Keyboard>(
        &mut self,
        terminal: &mut Terminal<B>,
        keyboard: &mut K,
    ) -> Result<Outcome, RunError> {
        self.draw(terminal, true)?;
        let key = keyboard.wait_key().map_err(RunError::Input)?;
        if Command::from_key_event(key) == Some(Command::Interrupt) {
            return Ok(Outcome::Interrupted);
        }
        loop {
            let cmd = keyboard
                .poll_key(consts::TICK_PERIOD)
                .map_err(RunError::Input)?
                .and_then(Command::from_key_event);
            match cmd {
                Some(Command::Quit) => return Ok(Outcome::Quit),
                Some(Command::Interrupt) => return Ok(Outcome::Interrupted),
                Some(Command::Pause) => self.game.toggle_pause(),
                Some(Command::Restart) => self.game.reset(self.screen),
                Some(c) => {
                    if let Some(direction) = c.direction() {
                        self.game.set_direction(direction);
                    }
                }
                None => (),
            }
            self.game.advance();
            self.draw(terminal, false)?;
            sleep(consts::FRAME_PAUSE);
        }
    }
}

impl<R> App<R> {
    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>, welcome: bool) -> Result<(), RunError> {
        terminal
            .draw(|frame| {
                frame.render_widget(
                    GameView::new(&self.game, &self.palette).welcome(welcome),
                    frame.area(),
                );
            })
            .map_err(RunError::Draw)?;
        Ok(())
    }
}
