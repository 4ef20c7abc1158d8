//! Tests for app_state

use super::*;
use crate::results::ResultsView;
use crate::test_utils::test_helpers::{test_app, test_app_with_config, test_base_url};

#[test]
fn test_app_initialization() {
    let app = test_app();

    assert_eq!(app.focus, Focus::InputField);
    assert_eq!(app.query(), "");
    assert_eq!(app.results.view(), &ResultsView::Home);
    assert!(app.section.is_none());
    assert!(!app.should_quit());
    assert_eq!(app.nav.len(), 1);
}

#[test]
fn test_config_flows_into_state() {
    let mut config = Config::default();
    config.search.top_k = 3;
    config.search.debounce_ms = 500;
    config.ui.categories = vec!["Bribery".into()];

    let (app, _worker) = test_app_with_config(&config);

    assert_eq!(app.results.top_k(), 3);
    assert_eq!(app.suggest.debouncer().delay_ms(), 500);
    assert_eq!(app.categories, vec!["Bribery".to_string()]);
}

#[test]
fn test_location_url_starts_at_root() {
    let app = test_app();
    assert_eq!(app.location_url(), test_base_url());
    assert_eq!(app.location_url().as_str(), "http://127.0.0.1:8000/");
}

#[test]
fn test_dirty_flag() {
    let mut app = test_app();
    assert!(app.should_render(), "first frame must be drawn");

    app.clear_dirty();
    assert!(!app.should_render());

    app.mark_dirty();
    assert!(app.should_render());
}

#[test]
fn test_loading_keeps_rendering_for_spinner() {
    let (mut app, _worker) = test_app_with_config(&Config::default());
    app.search_for("theft");
    app.clear_dirty();

    assert!(app.should_render());
}

#[test]
fn test_notification_keeps_rendering() {
    let mut app = test_app();
    app.clear_dirty();
    app.notification.show_warning("Invalid config");

    assert!(app.should_render());
}
