use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::results_state::ResultsView;
use crate::app::{App, Focus};

pub fn handle_results_pane_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') | KeyCode::Esc => {
            app.focus = Focus::InputField;
            return;
        }
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            app.go_back();
            return;
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.go_forward();
            return;
        }
        _ => {}
    }

    if app.section.is_some() {
        handle_section_key(app, key);
    } else {
        handle_list_key(app, key);
    }
}

fn handle_section_key(app: &mut App, key: KeyEvent) {
    let Some(section) = app.section.as_mut() else {
        return;
    };
    let scroll = &mut section.scroll;

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => scroll.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => scroll.scroll_up(1),
        KeyCode::PageDown | KeyCode::Char(' ') => scroll.page_down(),
        KeyCode::PageUp => scroll.page_up(),
        KeyCode::Home | KeyCode::Char('g') => scroll.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => scroll.jump_to_bottom(),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    let count = selectable_count(app);

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.results.select_next(count),
        KeyCode::Up | KeyCode::Char('k') => app.results.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.results.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.results.select_last(count),
        KeyCode::Enter => open_selected(app),
        _ => {}
    }
}

/// Rows the selection moves over: categories on the home view, hits otherwise.
pub fn selectable_count(app: &App) -> usize {
    match app.results.view() {
        ResultsView::Home => app.categories.len(),
        ResultsView::Hits(hits) => hits.len(),
        _ => 0,
    }
}

fn open_selected(app: &mut App) {
    let index = app.results.selected_index();

    match app.results.view() {
        ResultsView::Home => {
            if let Some(category) = app.categories.get(index).cloned() {
                app.search_for(&category);
            }
        }
        ResultsView::Hits(_) => {
            if let Some(section) = app.results.selected_hit().map(|hit| hit.section.clone()) {
                app.open_section(&section);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "results_events_tests.rs"]
mod results_events_tests;
