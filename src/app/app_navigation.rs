//! Search submission, section pages and walking the location history

use super::app_state::{App, Focus};
use crate::api::ApiError;
use crate::nav::Location;
use crate::section::SectionState;
use crate::worker::ApiRequest;

pub const NO_EARLIER_PAGE: &str = "No earlier page";
pub const NO_LATER_PAGE: &str = "No later page";

impl App {
    /// Submit the current query.
    ///
    /// Skipped while a search is in flight or when the trimmed query is
    /// empty; returns whether a request was sent.
    pub fn search(&mut self) -> bool {
        if self.results.is_loading() {
            log::debug!("Search ignored, previous search still loading");
            return false;
        }

        let query = self.input.query().trim().to_string();
        if query.is_empty() {
            return false;
        }

        self.nav.push(Location::Search {
            query: query.clone(),
        });
        self.run_search(query)
    }

    /// Put `query` into the field and submit it.
    pub fn search_for(&mut self, query: &str) -> bool {
        self.input.set_query(query);
        self.search()
    }

    fn run_search(&mut self, query: String) -> bool {
        self.dismiss_suggestions();

        let Some(request_id) = self.results.begin_search() else {
            return false;
        };
        self.section = None;
        self.mark_dirty();

        log::debug!("Search request {} for {:?}", request_id, query);
        let sent = self.api.send(ApiRequest::Search {
            query,
            top_k: self.results.top_k(),
            request_id,
        });
        if !sent {
            self.report_worker_unavailable();
            self.results
                .finish_search(request_id, Err(ApiError::WorkerUnavailable));
        }
        true
    }

    /// Navigate to a section page.
    pub fn open_section(&mut self, id: &str) {
        self.nav.push(Location::Section { id: id.to_string() });
        self.show_section(id);
    }

    fn show_section(&mut self, id: &str) {
        self.dismiss_suggestions();

        self.section_seq = self.section_seq.wrapping_add(1);
        let request_id = self.section_seq;
        self.section = Some(SectionState::loading(id, request_id));
        self.focus = Focus::ResultsPane;
        self.mark_dirty();

        log::debug!("Section request {} for {:?}", request_id, id);
        let sent = self.api.send(ApiRequest::Section {
            id: id.to_string(),
            request_id,
        });
        if !sent {
            self.report_worker_unavailable();
            if let Some(section) = self.section.as_mut() {
                section.finish(request_id, Err(ApiError::WorkerUnavailable));
            }
        }
    }

    /// Persistent error until the user dismisses it with Esc.
    fn report_worker_unavailable(&mut self) {
        self.notification
            .show_error(&ApiError::WorkerUnavailable.to_string());
    }

    /// Step back in the history; returns false at the oldest entry.
    pub fn go_back(&mut self) -> bool {
        match self.nav.back().cloned() {
            Some(location) => {
                self.restore(location);
                true
            }
            None => {
                self.notification.show(NO_EARLIER_PAGE);
                false
            }
        }
    }

    pub fn go_forward(&mut self) -> bool {
        match self.nav.forward().cloned() {
            Some(location) => {
                self.restore(location);
                true
            }
            None => {
                self.notification.show(NO_LATER_PAGE);
                false
            }
        }
    }

    /// Show `location` without adding a history entry.
    fn restore(&mut self, location: Location) {
        log::debug!("Restoring {:?}", location);
        match location {
            Location::Home => {
                self.input.clear();
                self.dismiss_suggestions();
                self.suggest.clear();
                self.results.show_home();
                self.section = None;
                self.focus = Focus::InputField;
            }
            Location::Search { query } => {
                self.input.set_query(&query);
                // A search still loading belongs to the location we left
                self.results.abandon();
                self.run_search(query);
            }
            Location::Section { id } => self.show_section(&id),
        }
        self.mark_dirty();
    }

    /// Hide the popup and forget any pending or running autocomplete.
    pub fn dismiss_suggestions(&mut self) {
        self.suggest.debouncer_mut().cancel();
        self.suggest.cancel_in_flight();
        self.suggest.hide();
    }
}

#[cfg(test)]
#[path = "app_navigation_tests.rs"]
mod app_navigation_tests;
