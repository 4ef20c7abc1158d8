//! API worker thread
//!
//! Runs every HTTP request off the UI thread. The worker owns a
//! single-threaded tokio runtime; each request becomes its own task so a slow
//! search never holds up autocomplete. Answers travel back over a std
//! channel that the event loop drains without blocking.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use crate::api::{ApiError, SearchClient, SearchHit, SectionPage, Suggestion};
use crate::error::AppError;

const WORKER_THREAD_NAME: &str = "api-worker";

/// Requests sent from the UI to the worker
#[derive(Debug)]
pub enum ApiRequest {
    Autocomplete {
        query: String,
        request_id: u64,
        cancel_token: CancellationToken,
    },
    Search {
        query: String,
        top_k: usize,
        request_id: u64,
    },
    Section {
        id: String,
        request_id: u64,
    },
}

/// Answers sent back to the UI, tagged with the request they belong to
#[derive(Debug)]
pub enum ApiResponse {
    Suggestions {
        request_id: u64,
        result: Result<Vec<Suggestion>, ApiError>,
    },
    Results {
        request_id: u64,
        result: Result<Vec<SearchHit>, ApiError>,
    },
    Section {
        request_id: u64,
        result: Result<Option<SectionPage>, ApiError>,
    },
}

/// UI side of the worker channels.
///
/// A default channel is disconnected: sends are dropped and nothing is ever
/// received. Tests build connected channels with [`ApiChannel::new`].
#[derive(Debug, Default)]
pub struct ApiChannel {
    request_tx: Option<UnboundedSender<ApiRequest>>,
    response_rx: Option<Receiver<ApiResponse>>,
}

impl ApiChannel {
    pub fn new(request_tx: UnboundedSender<ApiRequest>, response_rx: Receiver<ApiResponse>) -> Self {
        Self {
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
        }
    }

    /// Queue a request; returns false when the worker is gone.
    pub fn send(&self, request: ApiRequest) -> bool {
        match &self.request_tx {
            Some(tx) => match tx.send(request) {
                Ok(()) => true,
                Err(e) => {
                    log::error!("API worker disconnected, dropping {:?}", e.0);
                    false
                }
            },
            None => {
                log::debug!("No API worker, dropping {:?}", request);
                false
            }
        }
    }

    /// Next pending answer, without blocking.
    pub fn try_recv(&self) -> Option<ApiResponse> {
        let rx = self.response_rx.as_ref()?;
        match rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::debug!("API worker response channel closed");
                None
            }
        }
    }

    #[cfg(test)]
    pub fn is_connected(&self) -> bool {
        self.request_tx.as_ref().is_some_and(|tx| !tx.is_closed())
    }
}

/// Spawn the worker thread and return the channel that talks to it.
///
/// A client that failed to build is still handed to the worker so that each
/// request answers with the construction error instead of hanging.
pub fn spawn_worker(client: Result<SearchClient, ApiError>) -> Result<ApiChannel, AppError> {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();

    install_worker_panic_hook();

    std::thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("Failed to create tokio runtime: {}", e);
                        return;
                    }
                };

                rt.block_on(worker_loop(client, request_rx, response_tx));
            }));

            if let Err(e) = result {
                log::error!("API worker thread panicked: {}", panic_message(e.as_ref()));
            }
        })?;

    Ok(ApiChannel::new(request_tx, response_rx))
}

/// Panics on the worker thread are logged instead of printed, since stderr
/// output would corrupt the TUI. Other threads keep the previous hook.
fn install_worker_panic_hook() {
    let prev_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if std::thread::current().name() == Some(WORKER_THREAD_NAME) {
            log::error!(
                "API worker panic: {} at {:?}",
                panic_message(info.payload()),
                info.location()
            );
        } else {
            prev_hook(info);
        }
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Processes requests until every sender is dropped.
async fn worker_loop(
    client: Result<SearchClient, ApiError>,
    mut request_rx: UnboundedReceiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    if let Err(e) = &client {
        log::error!("Search client unavailable: {}", e);
    }

    while let Some(request) = request_rx.recv().await {
        let client = client.clone();
        let response_tx = response_tx.clone();

        tokio::spawn(async move {
            let response = handle_request(client, request).await;
            if response_tx.send(response).is_err() {
                log::debug!("UI dropped the response channel");
            }
        });
    }
}

async fn handle_request(
    client: Result<SearchClient, ApiError>,
    request: ApiRequest,
) -> ApiResponse {
    match request {
        ApiRequest::Autocomplete {
            query,
            request_id,
            cancel_token,
        } => {
            let result = match client {
                Ok(client) => {
                    // Biased so an already-cancelled request never touches the network
                    tokio::select! {
                        biased;

                        _ = cancel_token.cancelled() => {
                            log::debug!("Autocomplete request {} cancelled", request_id);
                            Err(ApiError::Cancelled)
                        }
                        result = client.autocomplete(&query) => result,
                    }
                }
                Err(e) => Err(e),
            };
            log_failure("autocomplete", request_id, &result);
            ApiResponse::Suggestions { request_id, result }
        }
        ApiRequest::Search {
            query,
            top_k,
            request_id,
        } => {
            let result = match client {
                Ok(client) => client.search(&query, top_k).await,
                Err(e) => Err(e),
            };
            log_failure("search", request_id, &result);
            ApiResponse::Results { request_id, result }
        }
        ApiRequest::Section { id, request_id } => {
            let result = match client {
                Ok(client) => client.section(&id).await,
                Err(e) => Err(e),
            };
            log_failure("section", request_id, &result);
            ApiResponse::Section { request_id, result }
        }
    }
}

fn log_failure<T>(what: &str, request_id: u64, result: &Result<T, ApiError>) {
    match result {
        Err(ApiError::Cancelled) | Ok(_) => {}
        Err(e) => log::error!("{} request {} failed: {}", what, request_id, e),
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
