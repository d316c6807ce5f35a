//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus};
use crate::state::ViewMode;

impl App {
    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        self.status_note = None;

        // Global keybinds
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Esc => {
                self.handle_escape();
                return;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            _ => {}
        }

        if self.focus.is_text_field() {
            self.handle_text_key(key);
        } else if self.focus == Focus::Month {
            self.handle_month_key(key);
        } else {
            self.handle_grid_key(key);
        }
    }

    /// Insert pasted text into the focused field. Newlines are dropped; the
    /// year field keeps digits only.
    pub fn handle_paste(&mut self, text: &str) {
        let digits_only = self.focus == Focus::Year;
        let Some(field) = self.focused_text() else {
            return;
        };
        field.extend(
            text.chars()
                .filter(|c| !c.is_control())
                .filter(|c| !digits_only || c.is_ascii_digit()),
        );
        self.mark_dirty();
    }

    /// Esc dismisses the error first, then backs out one level.
    fn handle_escape(&mut self) {
        if self.explorer.error().is_some() {
            self.explorer.dismiss_error();
        } else if !matches!(self.explorer.mode(), ViewMode::Overview) {
            self.show_all_clusters();
        } else if self.focus != Focus::Results {
            self.focus = Focus::Results;
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Query => Some(&mut self.query),
            Focus::City => Some(&mut self.filters.city),
            Focus::Year => Some(&mut self.filters.year),
            _ => None,
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let digits_only = self.focus == Focus::Year;
        match key.code {
            KeyCode::Enter => self.submit_search(),
            KeyCode::Backspace => {
                if let Some(text) = self.focused_text() {
                    text.pop();
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(text) = self.focused_text() {
                    text.clear();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if digits_only && !c.is_ascii_digit() {
                    return;
                }
                if let Some(text) = self.focused_text() {
                    text.push(c);
                }
            }
            KeyCode::Down => self.focus = Focus::Results,
            _ => {}
        }
    }

    fn handle_month_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Up | KeyCode::Char(' ') => self.filters.next_month(),
            KeyCode::Left => self.filters.prev_month(),
            KeyCode::Backspace | KeyCode::Delete => self.filters.month.clear(),
            KeyCode::Enter => self.submit_search(),
            KeyCode::Down => self.focus = Focus::Results,
            _ => {}
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(0, 1),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            KeyCode::Enter => self.activate_selected(),
            KeyCode::Char('m') => self.load_more(),
            KeyCode::Char('r') => {
                if matches!(self.explorer.mode(), ViewMode::Overview) {
                    self.reload_clusters();
                }
            }
            KeyCode::Char('o') => self.open_selected(),
            KeyCode::Char('y') => self.copy_selected(),
            KeyCode::Char('/') => self.focus = Focus::Query,
            KeyCode::Backspace => self.show_all_clusters(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}
