// src/utils/terminal.rs
use crate::error::Result;
use crossterm::tty::IsTty;
use std::ffi::OsString;
use std::io;

/// Width used when stdout is not a terminal or does not report one.
pub const DEFAULT_WIDTH: usize = 80;

/// Width of the terminal behind stdout. Redirected output always gets
/// [`DEFAULT_WIDTH`], whatever console the process is attached to.
pub fn terminal_width() -> usize {
    width_for(io::stdout().is_tty(), crossterm::terminal::size)
}

fn width_for<F>(stdout_is_tty: bool, query: F) -> usize
where
    F: FnOnce() -> io::Result<(u16, u16)>,
{
    if !stdout_is_tty {
        return DEFAULT_WIDTH;
    }
    match query() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        Ok(_) => DEFAULT_WIDTH,
        Err(e) => {
            log::debug!("terminal size unavailable, using {} columns: {}", DEFAULT_WIDTH, e);
            DEFAULT_WIDTH
        }
    }
}

/// Makes decoration unconditional, piped output included. A non-empty
/// `NO_COLOR` leaves `colored`'s own detection in charge.
pub fn force_colors() {
    if colors_forced(std::env::var_os("NO_COLOR")) {
        colored::control::set_override(true);
    }
}

fn colors_forced(no_color: Option<OsString>) -> bool {
    no_color.map_or(true, |value| value.is_empty())
}

/// Turns on virtual terminal processing so the console interprets ANSI
/// color sequences. Callers treat failure as a no-op.
#[cfg(windows)]
pub fn enable_ansi() -> Result<()> {
    colored::control::set_virtual_terminal(true).map_err(|_| crate::error::Error::ConsoleMode)
}

#[cfg(not(windows))]
pub fn enable_ansi() -> Result<()> {
    Ok(())
}

/// Best-effort wrapper around [`enable_ansi`].
pub fn try_enable_ansi() {
    if let Err(e) = enable_ansi() {
        log::debug!("{}", e);
    }
}
