use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::{App, Focus};
use crate::notification::render_notification;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (input_area, results_area, help_area) = (layout[0], layout[1], layout[2]);

        crate::input::input_render::render_field(self, frame, input_area);
        crate::results::results_render::render_pane(self, frame, results_area);
        crate::help::help_line_render::render_line(self, frame, help_area);

        // Popup overlaps the results pane but never the help line
        if self.focus == Focus::InputField {
            let bounds = input_area.union(results_area);
            crate::suggest::suggest_render::render_popup(&self.suggest, frame, input_area, bounds);
        }

        render_notification(frame, &mut self.notification);
    }
}
