use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::constants::STATUS_COMMAND_PALETTE;

use super::{App, InputMode};

#[derive(Debug, Clone, Copy)]
pub(crate) enum NormalAction {
    Quit,
    Move { d_col: isize, d_row: isize },
    OpenSelected,
    OpenSearch,
    EnterCommand,
    ShowHelp,
    Reshuffle,
}

impl NormalAction {
    fn from_event(key: &KeyEvent) -> Option<Self> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('h') | KeyCode::Left => Some(Self::Move { d_col: -1, d_row: 0 }),
            KeyCode::Char('l') | KeyCode::Right => Some(Self::Move { d_col: 1, d_row: 0 }),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::Move { d_col: 0, d_row: -1 }),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::Move { d_col: 0, d_row: 1 }),
            KeyCode::Enter => Some(Self::OpenSelected),
            KeyCode::Char('/') | KeyCode::Char('s') => Some(Self::OpenSearch),
            KeyCode::Char(':') => Some(Self::EnterCommand),
            KeyCode::Char('?') => Some(Self::ShowHelp),
            KeyCode::Char('r') => Some(Self::Reshuffle),
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Search => self.handle_search_mode(key),
            InputMode::Detail => self.handle_detail_mode(key),
            InputMode::Command => self.handle_command_mode(key),
            InputMode::Help => self.handle_help_mode(key),
        }
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(action) = NormalAction::from_event(&key) {
            self.execute_normal_action(action);
        }
        Ok(())
    }

    fn execute_normal_action(&mut self, action: NormalAction) {
        match action {
            NormalAction::Quit => self.should_quit = true,
            NormalAction::Move { d_col, d_row } => self.move_cursor(d_col, d_row),
            NormalAction::OpenSelected => self.open_selected(),
            NormalAction::OpenSearch => self.open_search(),
            NormalAction::EnterCommand => {
                self.input_mode = InputMode::Command;
                self.input.set("/");
                self.update_command_suggestions();
                self.set_status_info(STATUS_COMMAND_PALETTE);
            }
            NormalAction::ShowHelp => self.show_help_overlay(),
            NormalAction::Reshuffle => self.reshuffle(),
        }
    }

    fn handle_search_mode(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => {
                self.submit_search();
            }
            KeyCode::Esc => {
                self.input.clear();
                self.search_error = false;
                self.input_mode = InputMode::Normal;
                self.status = None;
            }
            KeyCode::Backspace => {
                self.input.backspace();
                self.search_error = false;
            }
            KeyCode::Delete => {
                self.input.delete_char();
                self.search_error = false;
            }
            KeyCode::Char(c) => {
                self.input.insert_char(c);
                self.search_error = false;
            }
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
        Ok(())
    }

    fn handle_detail_mode(&mut self, key: KeyEvent) -> Result<()> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.close_detail(),
            KeyCode::Down | KeyCode::Char('j') => self.detail_next(),
            KeyCode::Up | KeyCode::Char('k') => self.detail_prev(),
            KeyCode::Enter | KeyCode::Char('c') => self.copy_current(),
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.close_detail();
                self.open_search();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_help_mode(&mut self, key: KeyEvent) -> Result<()> {
        if let KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') = key.code {
            self.input_mode = InputMode::Normal;
            self.status = None;
        }
        Ok(())
    }

    fn handle_command_mode(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => {
                if let Some(s) = self.suggestions.get(self.suggestion_index) {
                    if s.fill.ends_with(' ') {
                        self.input.set(s.fill.clone());
                        self.update_command_suggestions();
                        Ok(())
                    } else {
                        self.input.set(s.fill.clone());
                        self.run_command()
                    }
                } else {
                    self.run_command()
                }
            }
            KeyCode::Esc => {
                self.input.clear();
                self.input_mode = InputMode::Normal;
                self.status = None;
                Ok(())
            }
            KeyCode::Backspace => {
                self.input.backspace();
                self.update_command_suggestions();
                Ok(())
            }
            KeyCode::Char(c) => {
                self.input.insert_char(c);
                self.update_command_suggestions();
                Ok(())
            }
            KeyCode::Delete => {
                self.input.delete_char();
                self.update_command_suggestions();
                Ok(())
            }
            KeyCode::Tab | KeyCode::Right => {
                self.accept_suggestion();
                Ok(())
            }
            KeyCode::Up => {
                if !self.suggestions.is_empty() {
                    if self.suggestion_index == 0 {
                        self.suggestion_index = self.suggestions.len() - 1;
                    } else {
                        self.suggestion_index -= 1;
                    }
                }
                Ok(())
            }
            KeyCode::Down => {
                if !self.suggestions.is_empty() {
                    self.suggestion_index = (self.suggestion_index + 1) % self.suggestions.len();
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
