use crate::api::{ApiError, SearchHit};

/// What the results pane currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Home,
    Loading,
    Hits(Vec<SearchHit>),
    Empty,
    Unavailable,
}

/// State of the search in flight and of the rendered result list.
#[derive(Debug)]
pub struct ResultsState {
    view: ResultsView,
    loading: bool,
    selected: usize,
    request_seq: u64,
    in_flight: Option<u64>,
    top_k: usize,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self::new(8)
    }
}

impl ResultsState {
    pub fn new(top_k: usize) -> Self {
        Self {
            view: ResultsView::Home,
            loading: false,
            selected: 0,
            request_seq: 0,
            in_flight: None,
            top_k,
        }
    }

    pub fn view(&self) -> &ResultsView {
        &self.view
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Enter the loading state for a new search.
    ///
    /// Returns the request id to send, or `None` while another search is
    /// still in flight (the new search is skipped).
    pub fn begin_search(&mut self) -> Option<u64> {
        if self.loading {
            log::debug!("Search skipped, request {:?} still in flight", self.in_flight);
            return None;
        }

        self.request_seq = self.request_seq.wrapping_add(1);
        self.in_flight = Some(self.request_seq);
        self.loading = true;
        self.view = ResultsView::Loading;
        self.selected = 0;
        Some(self.request_seq)
    }

    /// Apply a search answer. Answers for abandoned requests are ignored;
    /// returns whether the view changed.
    pub fn finish_search(
        &mut self,
        request_id: u64,
        result: Result<Vec<SearchHit>, ApiError>,
    ) -> bool {
        if self.in_flight != Some(request_id) {
            log::debug!("Dropping stale search response {}", request_id);
            return false;
        }

        self.in_flight = None;
        self.loading = false;
        self.selected = 0;
        self.view = match result {
            Err(_) => ResultsView::Unavailable,
            Ok(hits) if hits.is_empty() => ResultsView::Empty,
            Ok(hits) => ResultsView::Hits(hits),
        };
        true
    }

    /// Back to the landing view; any search in flight is abandoned.
    pub fn show_home(&mut self) {
        self.abandon();
        self.view = ResultsView::Home;
        self.selected = 0;
    }

    /// Forget the search in flight so its answer is dropped.
    pub fn abandon(&mut self) {
        if let Some(request_id) = self.in_flight.take() {
            log::debug!("Abandoning search request {}", request_id);
        }
        if self.loading {
            self.loading = false;
            if self.view == ResultsView::Loading {
                self.view = ResultsView::Home;
            }
        }
    }

    pub fn hits(&self) -> &[SearchHit] {
        match &self.view {
            ResultsView::Hits(hits) => hits,
            _ => &[],
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_hit(&self) -> Option<&SearchHit> {
        self.hits().get(self.selected)
    }

    /// Move the selection down within `count` items (clamped at the end).
    pub fn select_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(count - 1);
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, count: usize) {
        self.selected = count.saturating_sub(1);
    }
}

#[cfg(test)]
#[path = "results_state_tests.rs"]
mod results_state_tests;
