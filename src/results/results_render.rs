use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use reqwest::Url;

use super::results_state::ResultsView;
use crate::api::{SearchHit, UNAVAILABLE_MESSAGE};
use crate::app::{App, Focus};
use crate::section::section_render;
use crate::theme;
use crate::widgets::wrap::wrap_truncated;

pub const SPINNER_CHARS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const SPINNER_COLORS: &[Color] = theme::results::SPINNER_COLORS;

pub const EMPTY_MESSAGE: &str = "No results found.";
const HERO_TITLE: &str = "Indian Penal Code Search";
const HERO_SUBTITLE: &str = "Find sections, offenses and punishments";
const SNIPPET_MAX_LINES: usize = 3;

/// Spinner glyph advances every frame; its color once per full turn.
pub fn get_spinner(frame_count: u64) -> (&'static str, Color) {
    let chars = SPINNER_CHARS.len() as u64;
    let char_index = (frame_count % chars) as usize;
    let color_index = ((frame_count / chars) % SPINNER_COLORS.len() as u64) as usize;
    (SPINNER_CHARS[char_index], SPINNER_COLORS[color_index])
}

/// `127.0.0.1:8000`, like the host part of a browser address bar
pub fn display_host(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Draw the results pane, or the open section page in its place.
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let focused = app.focus == Focus::ResultsPane;
    let location = app.location_url().to_string();

    if let Some(section) = app.section.as_mut() {
        section_render::render_view(section, frame, area, &location, focused);
        return area;
    }

    let border_color = if focused {
        theme::results::BORDER_FOCUSED
    } else {
        theme::results::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", location),
            Style::default().fg(theme::results::LOCATION),
        ))
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme::results::BACKGROUND));

    let inner = block.inner(area);
    let width = inner.width.saturating_sub(2) as usize;
    let selected = focused.then(|| app.results.selected_index());

    let (lines, scroll) = match app.results.view() {
        ResultsView::Home => (home_lines(&app.categories, selected), 0),
        ResultsView::Loading => {
            let (spinner, color) = get_spinner(app.frame_count);
            (
                vec![
                    Line::raw(""),
                    Line::from(vec![
                        Span::raw(" "),
                        Span::styled(spinner, Style::default().fg(color)),
                        Span::styled(
                            " Searching…",
                            Style::default().fg(theme::results::LOADING),
                        ),
                    ]),
                ],
                0,
            )
        }
        ResultsView::Empty => (message_lines(EMPTY_MESSAGE, theme::results::EMPTY), 0),
        ResultsView::Unavailable => {
            (message_lines(UNAVAILABLE_MESSAGE, theme::results::ERROR), 0)
        }
        ResultsView::Hits(hits) => {
            let host = display_host(&app.base_url);
            hit_lines(hits, &host, width, selected, inner.height)
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
    area
}

fn message_lines(message: &str, color: Color) -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(color),
        )),
    ]
}

fn home_lines(categories: &[String], selected: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(format!(" {}", HERO_TITLE), theme::home::HERO_TITLE)),
        Line::from(Span::styled(
            format!(" {}", HERO_SUBTITLE),
            Style::default().fg(theme::home::HERO_SUBTITLE),
        )),
        Line::raw(""),
        Line::from(Span::styled(" Popular categories", theme::home::CATEGORIES_HEADER)),
    ];

    for (i, category) in categories.iter().enumerate() {
        let style = if selected == Some(i) {
            Style::default()
                .fg(theme::home::CATEGORY_SELECTED_FG)
                .bg(theme::home::CATEGORY_SELECTED_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::home::CATEGORY)
        };
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(format!(" {} ", category), style),
        ]));
    }

    lines
}

/// Lines for every hit, plus the scroll offset that keeps the selected hit
/// in view.
fn hit_lines(
    hits: &[SearchHit],
    host: &str,
    width: usize,
    selected: Option<usize>,
    viewport: u16,
) -> (Vec<Line<'static>>, u16) {
    let mut lines = Vec::new();
    let mut selected_span = (0, 0);

    for (i, hit) in hits.iter().enumerate() {
        let start = lines.len();
        let is_selected = selected == Some(i);

        let marker = if is_selected {
            Span::styled("▌", Style::default().fg(theme::results::SELECTION_MARKER))
        } else {
            Span::raw(" ")
        };
        let title_style = if is_selected {
            theme::results::TITLE_SELECTED
        } else {
            theme::results::TITLE
        };

        lines.push(Line::from(vec![
            marker.clone(),
            Span::styled(hit.label(), title_style),
        ]));
        lines.push(Line::from(vec![
            marker.clone(),
            Span::styled(
                format!("{} › section-{}", host, hit.section),
                Style::default().fg(theme::results::BREADCRUMB),
            ),
        ]));
        if let Some(chapter) = hit.chapter.as_deref().filter(|c| !c.is_empty()) {
            lines.push(Line::from(vec![
                marker.clone(),
                Span::styled(
                    chapter.to_string(),
                    Style::default().fg(theme::results::CHAPTER),
                ),
            ]));
        }
        if !hit.description.trim().is_empty() {
            for snippet in wrap_truncated(&hit.description, width, SNIPPET_MAX_LINES) {
                lines.push(Line::from(vec![
                    marker.clone(),
                    Span::styled(snippet, Style::default().fg(theme::results::SNIPPET)),
                ]));
            }
        }
        lines.push(Line::raw(""));

        if is_selected {
            selected_span = (start, lines.len());
        }
    }

    let (start, end) = selected_span;
    let viewport = viewport as usize;
    let scroll = end.saturating_sub(viewport).min(start);
    (lines, scroll.min(u16::MAX as usize) as u16)
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
