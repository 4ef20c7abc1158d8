use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};
use crate::theme;

pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let focused = app.focus == Focus::InputField;

    let border_color = if focused {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };

    // Only the focused field shows a cursor
    let cursor_style = if focused {
        theme::input::CURSOR
    } else {
        Style::default()
    };
    app.input.textarea.set_cursor_style(cursor_style);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(Style::default().fg(border_color));

    if app.results.is_loading() {
        block = block.title_top(
            Line::from(Span::styled(
                " Searching… ",
                Style::default().fg(theme::input::LOADING_HINT),
            ))
            .alignment(Alignment::Right),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&app.input.textarea, inner);
    area
}
