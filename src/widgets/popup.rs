use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly under `anchor`, clipped to `bounds`.
///
/// Returns `None` when there is no room left below the anchor.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Option<Rect> {
    let y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);
    let available = bottom.saturating_sub(y);
    if available == 0 {
        return None;
    }

    Some(Rect {
        x: anchor.x,
        y,
        width: width.min(anchor.width),
        height: height.min(available),
    })
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
