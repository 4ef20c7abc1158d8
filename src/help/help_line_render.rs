use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.focus == Focus::InputField && app.suggest.is_visible() {
        hints!["↑/↓" => "Highlight", "Enter" => "Open", "Esc" => "Close", "Ctrl+C" => "Quit"]
    } else if app.focus == Focus::InputField {
        let mut hints = hints!["Enter" => "Search", "Tab" => "Results"];
        if let Some(history) = history_hint(app) {
            hints.push(("Alt+←/→", history));
        }
        hints.push(("Ctrl+C", "Quit"));
        hints
    } else if app.section.is_some() {
        hints!["↑/↓" => "Scroll", "PgUp/PgDn" => "Page", "Backspace" => "Back", "/" => "Search", "q" => "Quit"]
    } else {
        let mut hints = hints!["↑/↓" => "Select", "Enter" => "Open"];
        if app.nav.can_go_back() {
            hints.push(("Backspace", "Back"));
        }
        hints.extend(hints!["/" => "Search", "q" => "Quit"]);
        hints
    }
}

/// Names only the history directions that lead somewhere.
fn history_hint(app: &App) -> Option<&'static str> {
    match (app.nav.can_go_back(), app.nav.can_go_forward()) {
        (true, true) => Some("Back/Forward"),
        (true, false) => Some("Back"),
        (false, true) => Some("Forward"),
        (false, false) => None,
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let help = Paragraph::new(Line::from(build_styled_spans(&hints)));
    frame.render_widget(help, area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
