//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{can_add_path_char, App, AppState, FormFocus, View};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return Ok(false);
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    if matches!(app.state, AppState::EnteringPath) {
        handle_path_input(app, key);
        return Ok(false);
    }

    match app.view() {
        View::Landing => Ok(handle_landing_input(app, key)),
        View::Dashboard | View::About => Ok(handle_signed_in_input(app, key)),
    }
}

fn handle_landing_input(app: &mut App, key: KeyEvent) -> bool {
    // Form is locked while a request is in flight
    if app.form.pending {
        return false;
    }

    let mode = app.form.mode;
    match key.code {
        KeyCode::Esc => {
            // Quit if on landing page
            app.state = AppState::Quitting;
            return true;
        }
        KeyCode::Down | KeyCode::Tab => {
            app.form.focus = app.form.focus.next(mode);
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.form.focus = app.form.focus.prev(mode);
        }
        KeyCode::Enter => match app.form.focus {
            FormFocus::Name | FormFocus::Email => {
                app.form.focus = app.form.focus.next(mode);
            }
            FormFocus::Password | FormFocus::Submit => {
                app.submit_form();
            }
            FormFocus::Toggle => {
                app.form.toggle_mode();
            }
        },
        KeyCode::Backspace => {
            app.form.pop_char();
        }
        KeyCode::Char(c) => {
            app.form.push_char(c);
        }
        _ => {}
    }
    false
}

fn handle_signed_in_input(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Char('1') => app.navigate(View::Dashboard),
        KeyCode::Char('2') => app.navigate(View::About),
        KeyCode::Tab => {
            let next = app.view().next();
            app.navigate(next);
        }
        KeyCode::Char('o') => app.logout(),
        _ => {
            if app.view() == View::Dashboard {
                handle_dashboard_input(app, key);
            }
        }
    }
    false
}

fn handle_dashboard_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.dashboard.prev_ward(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('w') => app.dashboard.next_ward(),
        KeyCode::Char('u') => app.start_path_entry(),
        KeyCode::Char('p') => app.start_processing(),
        KeyCode::Char('e') => app.export_results(),
        KeyCode::Esc => app.status_message = None,
        _ => {}
    }
}

fn handle_path_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Normal;
        }
        KeyCode::Enter => {
            app.upload_from_input();
        }
        KeyCode::Backspace => {
            app.dashboard.path_input.pop();
        }
        KeyCode::Char(c) => {
            if can_add_path_char(app.dashboard.path_input.chars().count(), c) {
                app.dashboard.path_input.push(c);
            }
        }
        _ => {}
    }
}
