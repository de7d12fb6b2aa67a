use crate::utils::error::{DashboardError, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::tty::IsTty;

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Terminal column count, or `DEFAULT_TERMINAL_WIDTH` when it cannot be queried.
pub fn terminal_width() -> usize {
    width_or_default(crossterm::terminal::size())
}

fn width_or_default(size: std::io::Result<(u16, u16)>) -> usize {
    match size {
        Ok((columns, _)) if columns > 0 => columns as usize,
        Ok(_) => DEFAULT_TERMINAL_WIDTH,
        Err(e) => {
            tracing::debug!("Terminal size unavailable ({}), using {}", e, DEFAULT_TERMINAL_WIDTH);
            DEFAULT_TERMINAL_WIDTH
        }
    }
}

/// Blocks until one key is pressed. Returns immediately when stdin is not a TTY.
pub fn wait_for_keypress() -> Result<()> {
    if !std::io::stdin().is_tty() {
        tracing::debug!("stdin is not a terminal, not waiting for a key");
        return Ok(());
    }

    enable_raw_mode().map_err(|e| DashboardError::TerminalError {
        message: format!("cannot enable raw mode: {}", e),
    })?;

    let read = read_key_press();

    // 無論讀取是否成功都要還原終端機
    finish_key_wait(read, disable_raw_mode())
}

/// Reports the restore failure first; a read failure hidden behind it is logged.
fn finish_key_wait(read: Result<()>, restore: std::io::Result<()>) -> Result<()> {
    match restore {
        Ok(()) => read,
        Err(e) => {
            if let Err(read_err) = &read {
                tracing::error!("Reading key press failed: {}", read_err);
            }
            Err(DashboardError::TerminalError {
                message: format!("cannot restore terminal: {}", e),
            })
        }
    }
}

fn read_key_press() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
