//! Tests for suggest_render

use super::*;
use crate::test_utils::test_helpers::suggestion;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

const INPUT_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 50,
    height: 3,
};

fn render(state: &SuggestState, width: u16, height: u16) -> (Terminal<TestBackend>, Option<Rect>) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut drawn = None;
    terminal
        .draw(|f| {
            let bounds = f.area();
            drawn = render_popup(state, f, INPUT_AREA, bounds);
        })
        .unwrap();
    (terminal, drawn)
}

fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
}

fn state_with(items: &[(&str, &str)]) -> SuggestState {
    let mut state = SuggestState::default();
    state.replace(items.iter().map(|(s, t)| suggestion(s, t)).collect());
    state
}

#[test]
fn test_hidden_popup_draws_nothing() {
    let state = SuggestState::default();
    let (_, drawn) = render(&state, 50, 20);
    assert!(drawn.is_none());
}

#[test]
fn test_rows_render_below_input() {
    let state = state_with(&[("302", "Punishment for murder"), ("300", "Murder")]);

    let (terminal, drawn) = render(&state, 50, 20);

    assert_eq!(drawn, Some(Rect::new(0, 3, 50, 4)));
    assert!(row(&terminal, 4).contains("Section 302 — Punishment for murder"));
    assert!(row(&terminal, 5).contains("Section 300 — Murder"));
}

#[test]
fn test_active_row_is_highlighted() {
    let mut state = state_with(&[("378", "Theft"), ("379", "Punishment for theft")]);
    state.select_next();
    state.select_next();

    let (terminal, _) = render(&state, 50, 20);
    let buffer = terminal.backend().buffer();

    assert_eq!(buffer[(5, 5)].bg, theme::suggestions::ITEM_ACTIVE_BG);
    assert_eq!(buffer[(5, 4)].bg, theme::suggestions::ITEM_NORMAL_BG);
}

#[test]
fn test_long_list_scrolls_to_active_row() {
    let items: Vec<(String, String)> = (0..12)
        .map(|i| (format!("{}", 100 + i), format!("Title {}", i)))
        .collect();
    let refs: Vec<(&str, &str)> = items.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
    let mut state = state_with(&refs);
    state.select_previous(); // wraps to the last row

    let (terminal, drawn) = render(&state, 50, 20);

    assert_eq!(drawn.map(|r| r.height), Some(MAX_VISIBLE_SUGGESTIONS as u16 + 2));
    let last_row = 3 + MAX_VISIBLE_SUGGESTIONS as u16;
    assert!(row(&terminal, last_row).contains("Section 111"));
    assert!(!row(&terminal, 4).contains("Section 100"));
}

#[test]
fn test_popup_clipped_to_bounds() {
    let state = state_with(&[("1", "a"), ("2", "b"), ("3", "c"), ("4", "d")]);

    let (_, drawn) = render(&state, 50, 6);

    assert_eq!(drawn, Some(Rect::new(0, 3, 50, 3)));
}
