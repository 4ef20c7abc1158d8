//! Debounced autocomplete requests and their answers

use crate::api::{ApiError, Suggestion};
use crate::app::App;
use crate::worker::ApiRequest;

/// Restart the debounce timer after an edit of the query.
pub fn on_query_changed(app: &mut App) {
    app.suggest.debouncer_mut().schedule();
}

/// Fetch suggestions once the debounce delay has elapsed.
///
/// Returns true when the debouncer fired.
pub fn fire_if_ready(app: &mut App) -> bool {
    if !app.suggest.debouncer().is_ready() {
        return false;
    }
    app.suggest.debouncer_mut().mark_complete();
    fetch_suggestions(app);
    true
}

/// Request suggestions for the current query.
///
/// Short queries hide the popup instead, and a request still running for
/// an older query is cancelled either way.
pub fn fetch_suggestions(app: &mut App) {
    let query = app.input.query().trim().to_string();

    if !app.suggest.accepts(&query) {
        app.suggest.cancel_in_flight();
        app.suggest.hide();
        return;
    }

    let (request_id, cancel_token) = app.suggest.begin_request();
    log::debug!("Autocomplete request {} for {:?}", request_id, query);

    app.api.send(ApiRequest::Autocomplete {
        query,
        request_id,
        cancel_token,
    });
}

/// Apply an autocomplete answer; returns whether the popup changed.
pub fn handle_suggestions_response(
    app: &mut App,
    request_id: u64,
    result: Result<Vec<Suggestion>, ApiError>,
) -> bool {
    if !app.suggest.is_current(request_id) {
        log::debug!("Dropping stale autocomplete response {}", request_id);
        return false;
    }
    app.suggest.finish_request(request_id);

    match result {
        Ok(suggestions) => {
            log::debug!(
                "Autocomplete request {} returned {} suggestions",
                request_id,
                suggestions.len()
            );
            app.suggest.replace(suggestions);
            true
        }
        // Failures leave whatever the popup showed before
        Err(_) => false,
    }
}

/// Open the highlighted suggestion's section. Returns false when no row is
/// highlighted.
pub fn accept_active(app: &mut App) -> bool {
    let Some(section) = app.suggest.active_suggestion().map(|s| s.section.clone()) else {
        return false;
    };
    app.suggest.hide();
    app.open_section(&section);
    true
}

#[cfg(test)]
#[path = "suggest_events_tests.rs"]
mod suggest_events_tests;
