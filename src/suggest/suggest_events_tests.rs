//! Tests for suggest_events

use super::*;
use crate::config::Config;
use crate::test_utils::test_helpers::{
    suggestion, test_app_with_config, test_app_with_worker, type_text,
};

fn autocomplete_ids(requests: &[ApiRequest]) -> Vec<(String, u64)> {
    requests
        .iter()
        .filter_map(|r| match r {
            ApiRequest::Autocomplete {
                query, request_id, ..
            } => Some((query.clone(), *request_id)),
            _ => None,
        })
        .collect()
}

fn immediate_config() -> Config {
    let mut config = Config::default();
    config.search.debounce_ms = 0;
    config
}

#[test]
fn test_typing_schedules_debouncer_without_request() {
    let (mut app, mut worker) = test_app_with_worker();

    type_text(&mut app, "murder");

    assert!(app.suggest.debouncer().has_pending());
    assert!(!fire_if_ready(&mut app), "250ms have not elapsed yet");
    assert!(worker.drain().is_empty());
}

#[test]
fn test_fire_if_ready_sends_trimmed_query() {
    let (mut app, mut worker) = test_app_with_config(&immediate_config());

    type_text(&mut app, "  theft ");
    assert!(fire_if_ready(&mut app));

    let requests = worker.drain();
    assert_eq!(autocomplete_ids(&requests), vec![("theft".to_string(), 1)]);
    assert!(!app.suggest.debouncer().has_pending());
}

#[test]
fn test_burst_of_keystrokes_sends_one_request() {
    let (mut app, mut worker) = test_app_with_config(&immediate_config());

    type_text(&mut app, "kidnap");
    fire_if_ready(&mut app);
    assert!(!fire_if_ready(&mut app));

    assert_eq!(autocomplete_ids(&worker.drain()).len(), 1);
}

#[test]
fn test_short_query_hides_popup_and_sends_nothing() {
    let (mut app, mut worker) = test_app_with_worker();
    app.suggest.replace(vec![suggestion("302", "Murder")]);
    app.input.set_query("m");

    fetch_suggestions(&mut app);

    assert!(!app.suggest.is_visible());
    assert!(worker.drain().is_empty());
}

#[test]
fn test_whitespace_only_query_is_short() {
    let (mut app, mut worker) = test_app_with_worker();
    app.input.set_query("   x   ");

    fetch_suggestions(&mut app);

    assert!(worker.drain().is_empty());
}

#[test]
fn test_zero_min_chars_from_config_still_skips_empty_and_single_char() {
    let mut config = immediate_config();
    config.search.min_suggest_chars = 0;
    config.clamp_to_minimums();
    let (mut app, mut worker) = test_app_with_config(&config);

    for query in ["", "k"] {
        app.input.set_query(query);
        fetch_suggestions(&mut app);
    }

    assert!(worker.drain().is_empty());
}

#[test]
fn test_new_request_cancels_previous() {
    let (mut app, mut worker) = test_app_with_worker();

    app.input.set_query("mu");
    fetch_suggestions(&mut app);
    app.input.set_query("mur");
    fetch_suggestions(&mut app);

    let requests = worker.drain();
    let tokens: Vec<_> = requests
        .iter()
        .filter_map(|r| match r {
            ApiRequest::Autocomplete { cancel_token, .. } => Some(cancel_token.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(tokens.len(), 2);
    assert!(tokens[0].is_cancelled());
    assert!(!tokens[1].is_cancelled());
}

#[test]
fn test_short_query_cancels_running_request() {
    let (mut app, mut worker) = test_app_with_worker();

    app.input.set_query("fraud");
    fetch_suggestions(&mut app);
    app.input.set_query("f");
    fetch_suggestions(&mut app);

    match worker.drain().as_slice() {
        [ApiRequest::Autocomplete { cancel_token, .. }] => assert!(cancel_token.is_cancelled()),
        other => panic!("unexpected requests {:?}", other),
    }
    assert!(!app.suggest.has_in_flight_request());
}

#[test]
fn test_response_shows_suggestions() {
    let (mut app, mut worker) = test_app_with_worker();
    app.input.set_query("theft");
    fetch_suggestions(&mut app);
    let (_, id) = autocomplete_ids(&worker.drain())[0].clone();

    let changed = handle_suggestions_response(
        &mut app,
        id,
        Ok(vec![suggestion("378", "Theft"), suggestion("379", "Punishment for theft")]),
    );

    assert!(changed);
    assert!(app.suggest.is_visible());
    assert_eq!(app.suggest.suggestions().len(), 2);
    assert_eq!(app.suggest.active_index(), None);
}

#[test]
fn test_stale_response_is_dropped() {
    let (mut app, mut worker) = test_app_with_worker();

    app.input.set_query("mu");
    fetch_suggestions(&mut app);
    app.input.set_query("murder");
    fetch_suggestions(&mut app);
    let ids = autocomplete_ids(&worker.drain());
    let (old, new) = (ids[0].1, ids[1].1);

    handle_suggestions_response(&mut app, new, Ok(vec![suggestion("302", "Murder")]));
    let changed =
        handle_suggestions_response(&mut app, old, Ok(vec![suggestion("999", "Stale")]));

    assert!(!changed);
    assert_eq!(app.suggest.suggestions()[0].section, "302");
}

#[test]
fn test_empty_response_hides_popup() {
    let (mut app, mut worker) = test_app_with_worker();
    app.suggest.replace(vec![suggestion("302", "Murder")]);
    app.input.set_query("zzz");
    fetch_suggestions(&mut app);
    let (_, id) = autocomplete_ids(&worker.drain())[0].clone();

    handle_suggestions_response(&mut app, id, Ok(Vec::new()));

    assert!(!app.suggest.is_visible());
}

#[test]
fn test_error_response_leaves_popup_untouched() {
    let (mut app, mut worker) = test_app_with_worker();
    app.suggest.replace(vec![suggestion("302", "Murder")]);
    app.input.set_query("murd");
    fetch_suggestions(&mut app);
    let (_, id) = autocomplete_ids(&worker.drain())[0].clone();

    let changed = handle_suggestions_response(&mut app, id, Err(ApiError::Status { code: 500 }));

    assert!(!changed);
    assert!(app.suggest.is_visible());
    assert_eq!(app.suggest.suggestions().len(), 1);
    assert!(!app.suggest.has_in_flight_request());
}

#[test]
fn test_accept_active_opens_section() {
    let (mut app, mut worker) = test_app_with_worker();
    app.suggest
        .replace(vec![suggestion("302", "Murder"), suggestion("304", "Culpable homicide")]);
    app.suggest.select_next();
    app.suggest.select_next();

    assert!(accept_active(&mut app));

    assert!(!app.suggest.is_visible());
    assert_eq!(app.section.as_ref().map(|s| s.id()), Some("304"));
    assert!(matches!(
        worker.drain().as_slice(),
        [ApiRequest::Section { id, .. }] if id == "304"
    ));
}

#[test]
fn test_accept_without_highlight_does_nothing() {
    let (mut app, mut worker) = test_app_with_worker();
    app.suggest.replace(vec![suggestion("302", "Murder")]);

    assert!(!accept_active(&mut app));
    assert!(app.section.is_none());
    assert!(worker.drain().is_empty());
}
