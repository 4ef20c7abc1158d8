//! Shared test fixtures: an `App` wired to an in-process fake worker

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::Sender;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::UnboundedReceiver;

    use crate::api::{SearchHit, Suggestion, parse_base_url};
    use crate::app::App;
    use crate::config::Config;
    use crate::worker::{ApiChannel, ApiRequest, ApiResponse};

    pub const TEST_BASE_URL: &str = "http://127.0.0.1:8000";

    /// Stands in for the API worker: captures requests, injects responses.
    pub struct FakeWorker {
        pub requests: UnboundedReceiver<ApiRequest>,
        pub responses: Sender<ApiResponse>,
    }

    impl FakeWorker {
        /// Every request sent since the last call
        pub fn drain(&mut self) -> Vec<ApiRequest> {
            let mut out = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                out.push(request);
            }
            out
        }

        pub fn respond(&self, response: ApiResponse) {
            self.responses.send(response).unwrap();
        }
    }

    /// App with a disconnected worker (requests fail immediately)
    pub fn test_app() -> App {
        App::new(&Config::default(), test_base_url(), ApiChannel::default())
    }

    pub fn test_app_with_worker() -> (App, FakeWorker) {
        test_app_with_config(&Config::default())
    }

    pub fn test_app_with_config(config: &Config) -> (App, FakeWorker) {
        let (request_tx, requests) = tokio::sync::mpsc::unbounded_channel();
        let (responses, response_rx) = std::sync::mpsc::channel();

        let app = App::new(config, test_base_url(), ApiChannel::new(request_tx, response_rx));
        (app, FakeWorker { requests, responses })
    }

    pub fn test_base_url() -> reqwest::Url {
        parse_base_url(TEST_BASE_URL).unwrap()
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type `text` into the focused input one key at a time.
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    pub fn suggestion(section: &str, title: &str) -> Suggestion {
        Suggestion {
            section: section.to_string(),
            title: title.to_string(),
        }
    }

    pub fn hit(section: &str, title: &str, description: &str) -> SearchHit {
        SearchHit {
            section: section.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            chapter: None,
        }
    }

    /// Request id of the only `Search` request sent, panicking otherwise.
    pub fn expect_search(requests: &[ApiRequest]) -> (String, u64) {
        match requests {
            [ApiRequest::Search {
                query, request_id, ..
            }] => (query.clone(), *request_id),
            other => panic!("expected one search request, got {:?}", other),
        }
    }
}
