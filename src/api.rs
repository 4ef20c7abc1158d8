//! HTTP access to the section search service
//!
//! Three endpoints are used: `GET /autocomplete`, `POST /search` and
//! `GET /section/{id}`. Every call returns `Result<_, ApiError>`; the UI
//! collapses all errors into a single "server unavailable" message.

mod client;
pub mod page;
mod types;

pub use client::{ApiError, SearchClient, parse_base_url};
pub use page::SectionPage;
pub use types::{SearchHit, SearchRequest, Suggestion};

/// Text shown for every failed request
pub const UNAVAILABLE_MESSAGE: &str = "Server unavailable. Try again.";
