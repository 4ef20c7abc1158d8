use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::section_state::{SectionState, SectionView};
use crate::api::UNAVAILABLE_MESSAGE;
use crate::api::page::{PageLine, SectionPage};
use crate::theme;
use crate::widgets::wrap::wrap_text;

pub const NOT_FOUND_MESSAGE: &str = "Section not found";
pub const LOADING_MESSAGE: &str = "Loading section…";

pub fn render_view(
    section: &mut SectionState,
    frame: &mut Frame,
    area: Rect,
    location: &str,
    focused: bool,
) {
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

    let lines = match section.view() {
        SectionView::Loading => message_lines(LOADING_MESSAGE, theme::results::LOADING),
        SectionView::NotFound => message_lines(NOT_FOUND_MESSAGE, theme::section::NOT_FOUND),
        SectionView::Unavailable => message_lines(UNAVAILABLE_MESSAGE, theme::results::ERROR),
        SectionView::Loaded(page) => page_lines(page, width),
    };

    section.scroll.update_bounds(lines.len() as u32, inner.height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((section.scroll.offset, 0));
    frame.render_widget(paragraph, area);
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

/// Page text wrapped to `width`, each row indented by one column.
fn page_lines(page: &SectionPage, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(page.line_count());
    lines.push(Line::raw(""));

    let indent =
        |text: String, style: Style| Line::from(Span::styled(format!(" {}", text), style));

    if !page.heading.is_empty() {
        for row in wrap_text(&page.heading, width) {
            lines.push(indent(row, theme::section::HEADING));
        }
    }
    if let Some(chapter) = &page.chapter {
        for row in wrap_text(chapter, width) {
            lines.push(indent(row, Style::default().fg(theme::results::CHAPTER)));
        }
    }
    lines.push(Line::raw(""));

    for line in &page.lines {
        match line {
            PageLine::Blank => lines.push(Line::raw("")),
            PageLine::Subheading(text) => {
                for row in wrap_text(text, width) {
                    lines.push(indent(row, theme::section::SUBHEADING));
                }
            }
            PageLine::Text(text) => {
                for row in wrap_text(text, width) {
                    lines.push(indent(row, Style::default().fg(theme::section::BODY)));
                }
            }
        }
    }

    lines
}

#[cfg(test)]
#[path = "section_render_tests.rs"]
mod section_render_tests;
