//! Keyboard input handlers for the pager.
//!
//! Handlers update view-only state (column selection, jump input) in place and
//! return a `KeyAction` telling the main loop which navigation to perform.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::fetch::RemoteSource;
use crate::navigation::Navigation;
use crate::pager::{AppMode, Pager};

/// Page size step for the +/- keys
const PAGE_SIZE_STEP: usize = 5;

/// Result of handling a key event.
#[derive(Debug, PartialEq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Exit the application
    Quit,
    /// Replace the pagination state and fetch
    Navigate(Navigation),
}

/// Dispatch a key to the handler for the pager's current mode.
pub fn handle_key<S: RemoteSource>(key: &KeyEvent, pager: &mut Pager<S>) -> KeyAction {
    match pager.mode {
        AppMode::Normal => handle_normal_mode(key, pager),
        AppMode::JumpInput => handle_jump_input(key, pager),
    }
}

/// Handle key events in normal mode.
pub fn handle_normal_mode<S: RemoteSource>(key: &KeyEvent, pager: &mut Pager<S>) -> KeyAction {
    let state = &pager.state;
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Next/previous are ignored where the bar shows the arrow disabled
        KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => {
            if state.has_next_page() {
                KeyAction::Navigate(Navigation::Next)
            } else {
                KeyAction::None
            }
        }
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => {
            if state.has_previous_page() {
                KeyAction::Navigate(Navigation::Previous)
            } else {
                KeyAction::None
            }
        }
        KeyCode::Home => KeyAction::Navigate(Navigation::Jump(1)),
        KeyCode::End => {
            let last = i64::try_from(state.page_count()).unwrap_or(i64::MAX).max(1);
            KeyAction::Navigate(Navigation::Jump(last))
        }
        KeyCode::Char('g') => {
            pager.mode = AppMode::JumpInput;
            pager.input_buffer.clear();
            KeyAction::None
        }

        // Column selection and header click
        KeyCode::Char('h') | KeyCode::BackTab => {
            pager.select_column(-1);
            KeyAction::None
        }
        KeyCode::Char('l') | KeyCode::Tab => {
            pager.select_column(1);
            KeyAction::None
        }
        KeyCode::Char('s') | KeyCode::Enter => match pager.selected_column_id() {
            Some(id) => KeyAction::Navigate(Navigation::SortBy(id.to_string())),
            None => KeyAction::None,
        },

        KeyCode::Char('+') | KeyCode::Char('=') => {
            KeyAction::Navigate(Navigation::PageSize(
                state.page_size().saturating_add(PAGE_SIZE_STEP),
            ))
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            let size = state.page_size().saturating_sub(PAGE_SIZE_STEP).max(1);
            if size == state.page_size() {
                KeyAction::None
            } else {
                KeyAction::Navigate(Navigation::PageSize(size))
            }
        }
        _ => KeyAction::None,
    }
}

/// Handle key events while entering a page number.
pub fn handle_jump_input<S: RemoteSource>(key: &KeyEvent, pager: &mut Pager<S>) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            pager.mode = AppMode::Normal;
            pager.input_buffer.clear();
            KeyAction::None
        }
        KeyCode::Enter => {
            pager.mode = AppMode::Normal;
            let input = std::mem::take(&mut pager.input_buffer);
            match input.parse::<i64>() {
                Ok(page) => KeyAction::Navigate(Navigation::Jump(page)),
                Err(_) => {
                    if !input.is_empty() {
                        pager.status = Some(format!("Not a page number: {}", input));
                    }
                    KeyAction::None
                }
            }
        }
        KeyCode::Backspace => {
            pager.input_buffer.pop();
            KeyAction::None
        }
        KeyCode::Char(c) if c.is_ascii_digit() || (c == '-' && pager.input_buffer.is_empty()) => {
            pager.input_buffer.push(c);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}
