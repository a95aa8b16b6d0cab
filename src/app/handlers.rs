use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, HeaderMode};

impl App {
    /// Returns true when the app should exit.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('v') => self.cycle_header_mode(),
            KeyCode::Up | KeyCode::BackTab => self.select_previous(),
            KeyCode::Down | KeyCode::Tab => self.select_next(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::Esc => self.clear_selection(),
            _ => {}
        }
        Ok(false)
    }

    fn cycle_header_mode(&mut self) {
        self.header_mode = match self.header_mode {
            HeaderMode::Help => HeaderMode::Logs,
            HeaderMode::Logs => HeaderMode::Off,
            HeaderMode::Off => HeaderMode::Help,
        };
    }
}
