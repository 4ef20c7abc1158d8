use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::suggest_state::SuggestState;
use crate::theme;
use crate::widgets::popup;

const MAX_VISIBLE_SUGGESTIONS: usize = 8;
const POPUP_BORDER_HEIGHT: u16 = 2;

/// Draw the suggestion list under the search field.
///
/// Returns the popup area, or `None` when nothing was drawn.
pub fn render_popup(
    suggest: &SuggestState,
    frame: &mut Frame,
    input_area: Rect,
    bounds: Rect,
) -> Option<Rect> {
    let suggestions = suggest.suggestions();
    if !suggest.is_visible() || suggestions.is_empty() {
        return None;
    }

    let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
    let height = visible_count as u16 + POPUP_BORDER_HEIGHT;
    let area = popup::popup_below_anchor(input_area, bounds, input_area.width, height)?;
    if area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }
    let rows = (area.height - POPUP_BORDER_HEIGHT) as usize;

    // Keep the highlighted row inside the window
    let first = suggest
        .active_index()
        .map(|active| (active + 1).saturating_sub(rows))
        .unwrap_or(0);

    let lines: Vec<Line> = suggestions
        .iter()
        .enumerate()
        .skip(first)
        .take(rows)
        .map(|(i, suggestion)| {
            let active = suggest.active_index() == Some(i);
            let (fg, bg) = if active {
                (
                    theme::suggestions::ITEM_ACTIVE_FG,
                    theme::suggestions::ITEM_ACTIVE_BG,
                )
            } else {
                (
                    theme::suggestions::ITEM_NORMAL_FG,
                    theme::suggestions::ITEM_NORMAL_BG,
                )
            };
            let mut row = Style::default().fg(fg).bg(bg);
            let mut label = Style::default()
                .fg(theme::suggestions::SECTION_LABEL)
                .bg(bg);
            if active {
                row = row.add_modifier(theme::suggestions::ITEM_ACTIVE_MODIFIER);
                label = row;
            }

            Line::from(vec![
                Span::styled(format!(" Section {}", suggestion.section), label),
                Span::styled(format!(" — {}", suggestion.title), row),
            ])
            .style(Style::default().bg(bg))
        })
        .collect();

    popup::clear_area(frame, area);

    let title = if suggestions.len() > rows {
        format!(" {}/{} ", suggest.active_index().map_or(0, |i| i + 1), suggestions.len())
    } else {
        String::new()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title_bottom(title)
        .border_style(Style::default().fg(theme::suggestions::BORDER))
        .style(Style::default().bg(theme::suggestions::BACKGROUND));

    frame.render_widget(Paragraph::new(lines).block(block), area);
    Some(area)
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
