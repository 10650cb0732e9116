use crate::consts;
use crossterm::event::{poll, read, KeyCode, KeyEvent, KeyModifiers};
use std::io;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

/// A source of keypresses
pub(crate) trait Keyboard {
    /// Wait up to `timeout` for a keypress.  Returns `None` if nothing
    /// arrived in time or if the event that arrived wasn't a keypress.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>>;

    /// Block until a key is pressed
    fn wait_key(&mut self) -> io::Result<KeyEvent>;
}

/// Keypresses read from the terminal via crossterm.
///
/// In raw mode Ctrl-C arrives as an ordinary key event, but the process can
/// still be sent `SIGINT` from outside.  Once [`CrosstermKeyboard::catch_interrupts`]
/// has installed a handler, such a signal is reported as a Ctrl-C keypress
/// within one poll period.
#[derive(Clone, Debug, Default)]
pub(crate) struct CrosstermKeyboard {
    interrupted: Arc<AtomicBool>,
}

impl CrosstermKeyboard {
    /// Install a `SIGINT` handler that feeds this keyboard
    pub(crate) fn catch_interrupts(&self) -> Result<(), ctrlc::Error> {
        let interrupted = Arc::clone(&self.interrupted);
        ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst))
    }

    fn take_interrupt(&self) -> Option<KeyEvent> {
        self.interrupted
            .swap(false, Ordering::SeqCst)
            .then(|| KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
    }
}

impl Keyboard for CrosstermKeyboard {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if let Some(ev) = self.take_interrupt() {
            return Ok(Some(ev));
        }
        if poll(timeout)? {
            Ok(read()?.as_key_press_event())
        } else {
            Ok(self.take_interrupt())
        }
    }

    fn wait_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Some(ev) = self.poll_key(consts::TICK_PERIOD)? {
                return Ok(ev);
            }
        }
    }
}

/// A keyboard that plays back a fixed script.  Each entry is the result of
/// one poll; `None` entries stand for ticks with no keypress.  Running off the
/// end of the script is an error.
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ScriptedKeyboard(std::collections::VecDeque<Option<KeyEvent>>);

#[cfg(test)]
impl ScriptedKeyboard {
    pub(crate) fn new<I: IntoIterator<Item = Option<KeyEvent>>>(script: I) -> Self {
        ScriptedKeyboard(script.into_iter().collect())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn exhausted() -> io::Error {
        io::Error::new(io::ErrorKind::UnexpectedEof, "keyboard script exhausted")
    }
}

#[cfg(test)]
impl Keyboard for ScriptedKeyboard {
    fn poll_key(&mut self, _timeout: Duration) -> io::Result<Option<KeyEvent>> {
        self.0.pop_front().ok_or_else(ScriptedKeyboard::exhausted)
    }

    fn wait_key(&mut self) -> io::Result<KeyEvent> {
        while let Some(entry) = self.0.pop_front() {
            if let Some(ev) = entry {
                return Ok(ev);
            }
        }
        Err(ScriptedKeyboard::exhausted())
    }
}
