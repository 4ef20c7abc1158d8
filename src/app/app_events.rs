use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus};
use crate::notification::NotificationType;
use crate::results;
use crate::suggest::suggest_events;
use crate::worker::ApiResponse;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if suggest_events::fire_if_ready(self) {
            self.mark_dirty();
        }

        self.poll_api_responses();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                    self.mark_dirty();
                }
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                    self.mark_dirty();
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Drain every answer the worker has delivered so far.
    pub fn poll_api_responses(&mut self) {
        while let Some(response) = self.api.try_recv() {
            let changed = match response {
                ApiResponse::Suggestions { request_id, result } => {
                    suggest_events::handle_suggestions_response(self, request_id, result)
                }
                ApiResponse::Results { request_id, result } => {
                    self.results.finish_search(request_id, result)
                }
                ApiResponse::Section { request_id, result } => match self.section.as_mut() {
                    Some(section) => section.finish(request_id, result),
                    None => {
                        log::debug!("Dropping section response {}, page closed", request_id);
                        false
                    }
                },
            };
            if changed {
                self.mark_dirty();
            }
        }
    }

    pub fn handle_paste_event(&mut self, text: &str) {
        self.focus = Focus::InputField;
        if self.input.paste(text) {
            suggest_events::on_query_changed(self);
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::ResultsPane => results::results_events::handle_results_pane_key(self, key),
        }
    }

    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Left if alt => {
                self.go_back();
                true
            }
            KeyCode::Char('o') if ctrl => {
                self.go_back();
                true
            }
            KeyCode::Right if alt => {
                self.go_forward();
                true
            }
            KeyCode::Esc if !self.suggest.is_visible() && self.showing_error() => {
                self.notification.dismiss();
                true
            }
            _ => false,
        }
    }

    fn showing_error(&self) -> bool {
        self.notification
            .current()
            .is_some_and(|n| n.kind == NotificationType::Error)
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        let popup_open = self.suggest.is_visible();

        match key.code {
            KeyCode::Enter => {
                if !suggest_events::accept_active(self) {
                    self.search();
                }
            }
            KeyCode::Down if popup_open => self.suggest.select_next(),
            KeyCode::Up if popup_open => self.suggest.select_previous(),
            KeyCode::Esc if popup_open => self.dismiss_suggestions(),
            KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
                self.dismiss_suggestions();
                self.focus = Focus::ResultsPane;
            }
            _ => {
                if self.input.handle_key(key) {
                    suggest_events::on_query_changed(self);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
