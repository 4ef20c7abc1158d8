use reqwest::Url;

use crate::config::Config;
use crate::input::InputState;
use crate::nav::NavHistory;
use crate::notification::NotificationState;
use crate::results::ResultsState;
use crate::section::SectionState;
use crate::suggest::SuggestState;
use crate::worker::ApiChannel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    ResultsPane,
}

pub struct App {
    pub input: InputState,
    pub suggest: SuggestState,
    pub results: ResultsState,
    /// Open section page; replaces the results pane while present
    pub section: Option<SectionState>,
    pub nav: NavHistory,
    pub api: ApiChannel,
    pub focus: Focus,
    pub notification: NotificationState,
    pub base_url: Url,
    pub categories: Vec<String>,
    pub should_quit: bool,
    pub frame_count: u64,
    pub(super) section_seq: u64,
    needs_render: bool,
}

impl App {
    pub fn new(config: &Config, base_url: Url, api: ApiChannel) -> Self {
        Self {
            input: InputState::new(),
            suggest: SuggestState::new(config.search.debounce_ms, config.search.min_suggest_chars),
            results: ResultsState::new(config.search.top_k),
            section: None,
            nav: NavHistory::new(),
            api,
            focus: Focus::InputField,
            notification: NotificationState::new(),
            base_url,
            categories: config.ui.categories.clone(),
            should_quit: false,
            frame_count: 0,
            section_seq: 0,
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Address of the current location, as shown in the pane title.
    pub fn location_url(&self) -> Url {
        self.nav.current().to_url(&self.base_url)
    }

    /// Something is animating or changed since the last draw.
    pub fn should_render(&self) -> bool {
        self.needs_render || self.is_busy() || self.notification.current().is_some()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    fn is_busy(&self) -> bool {
        self.results.is_loading() || self.section.as_ref().is_some_and(SectionState::is_loading)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
