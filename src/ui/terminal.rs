use crossterm::{execute, terminal::*};
use ratatui::prelude::*;
use std::io;

use super::Term;

/// Alternate-screen session for the full-screen pickers. Raw mode and the
/// main screen are restored on drop, including the early-return paths.
pub struct FullScreen {
    terminal: Term,
}

impl FullScreen {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for FullScreen {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
