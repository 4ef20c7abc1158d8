//! ipc-search library - terminal client for an IPC section search service
//!
//! Exposes the application modules so they can be exercised from tests.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod nav;
pub mod notification;
pub mod results;
pub mod scroll;
pub mod section;
pub mod suggest;
pub mod theme;
pub mod widgets;
pub mod worker;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
