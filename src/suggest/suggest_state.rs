use tokio_util::sync::CancellationToken;

use super::debouncer::Debouncer;
use crate::api::Suggestion;

/// Popup contents, highlight and request bookkeeping for autocomplete.
///
/// `active` is `None` until the user moves the highlight; when `Some` it is
/// always a valid index into `suggestions`.
#[derive(Debug)]
pub struct SuggestState {
    suggestions: Vec<Suggestion>,
    active: Option<usize>,
    visible: bool,
    debouncer: Debouncer,
    min_chars: usize,
    request_seq: u64,
    in_flight: Option<(u64, CancellationToken)>,
}

impl Default for SuggestState {
    fn default() -> Self {
        Self::new(250, 2)
    }
}

impl SuggestState {
    pub fn new(debounce_ms: u64, min_chars: usize) -> Self {
        Self {
            suggestions: Vec::new(),
            active: None,
            visible: false,
            debouncer: Debouncer::new(debounce_ms),
            min_chars,
            request_seq: 0,
            in_flight: None,
        }
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    pub fn debouncer_mut(&mut self) -> &mut Debouncer {
        &mut self.debouncer
    }

    /// Queries shorter than this (after trimming) never hit the server.
    pub fn accepts(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.min_chars
    }

    /// Replace the list with a fresh server answer.
    pub fn replace(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.active = None;
        self.visible = !self.suggestions.is_empty();
    }

    /// Hide the popup. The rows are kept, but navigation ignores them.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn clear(&mut self) {
        self.suggestions.clear();
        self.active = None;
        self.visible = false;
    }

    /// Move the highlight by `delta`, wrapping around the list.
    ///
    /// Without a highlight, moving down starts at the first row and moving
    /// up starts at the last one.
    pub fn move_active(&mut self, delta: isize) {
        if !self.visible || self.suggestions.is_empty() || delta == 0 {
            return;
        }

        let len = self.suggestions.len() as isize;
        let current = match self.active {
            Some(i) => i as isize,
            None if delta > 0 => -1,
            None => len,
        };
        self.active = Some((current + delta).rem_euclid(len) as usize);
    }

    pub fn select_next(&mut self) {
        self.move_active(1);
    }

    pub fn select_previous(&mut self) {
        self.move_active(-1);
    }

    /// Highlighted suggestion, if the popup is visible and a row is active.
    pub fn active_suggestion(&self) -> Option<&Suggestion> {
        if !self.visible {
            return None;
        }
        self.active.and_then(|i| self.suggestions.get(i))
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Start a new request, cancelling the one still in flight.
    pub fn begin_request(&mut self) -> (u64, CancellationToken) {
        self.cancel_in_flight();
        self.request_seq = self.request_seq.wrapping_add(1);
        let token = CancellationToken::new();
        self.in_flight = Some((self.request_seq, token.clone()));
        (self.request_seq, token)
    }

    pub fn cancel_in_flight(&mut self) {
        if let Some((request_id, token)) = self.in_flight.take() {
            log::debug!("Cancelling autocomplete request {}", request_id);
            token.cancel();
        }
    }

    /// Whether `request_id` answers the most recent request. Answers to
    /// superseded requests must be dropped.
    pub fn is_current(&self, request_id: u64) -> bool {
        matches!(&self.in_flight, Some((id, _)) if *id == request_id)
    }

    pub fn finish_request(&mut self, request_id: u64) {
        if self.is_current(request_id) {
            self.in_flight = None;
        }
    }

    #[cfg(test)]
    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
