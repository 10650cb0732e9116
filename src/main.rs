mod app;
mod command;
mod consts;
mod error;
mod game;
mod input;
mod startup;
mod surface;
mod util;
use crate::app::{App, Outcome};
use crate::input::CrosstermKeyboard;
use crate::surface::Palette;
use anyhow::Context;
use ratatui::DefaultTerminal;
use std::io::{self, ErrorKind};
use std::process::ExitCode;
use tracing::{warn, Level, Subscriber};
use tracing_subscriber::{fmt::MakeWriter, util::SubscriberInitExt};

fn main() -> ExitCode {
    log_subscriber(io::stderr).init();
    let palette = Palette::detect();
    let keyboard = CrosstermKeyboard::default();
    if let Err(e) = keyboard.catch_interrupts() {
        warn!(error = %e, "failed to install interrupt handler");
    }
    let mut terminal = ratatui::init();
    let r = run(&mut terminal, palette, keyboard);
    ratatui::restore();
    report(r)
}

/// Log events go to `make_writer` and only at WARN or above, so nothing is
/// written to the screen while the game is drawn
fn log_subscriber<W>(make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(make_writer)
        .with_max_level(Level::WARN)
        .finish()
}

fn run(
    terminal: &mut DefaultTerminal,
    palette: Palette,
    mut keyboard: CrosstermKeyboard,
) -> anyhow::Result<Outcome> {
    let screen = terminal.size().context("failed to query terminal size")?;
    let outcome = if startup::fits(screen) {
        App::new(screen, palette).run(terminal, &mut keyboard)?
    } else {
        startup::refuse(terminal, &mut keyboard, screen)?
    };
    Ok(outcome)
}

fn report(r: anyhow::Result<Outcome>) -> ExitCode {
    match r {
        Ok(Outcome::Quit) => ExitCode::SUCCESS,
        Ok(Outcome::Interrupted) => {
            println!("Game interrupted. Thanks for playing!");
            ExitCode::SUCCESS
        }
        Ok(Outcome::TooSmall(size)) => {
            warn!(
                width = size.width,
                height = size.height,
                "terminal too small to play in"
            );
            ExitCode::SUCCESS
        }
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("An error occurred: {e:#}");
            eprintln!("Make sure your terminal supports color and is large enough (at least 40x10 characters).");
            ExitCode::from(2)
        }
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|ioerr| ioerr.kind() == ErrorKind::BrokenPipe)
}
