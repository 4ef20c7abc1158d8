//! Autocomplete suggestions shown under the search input
//!
//! Keystrokes are debounced; once the input settles the trimmed query is
//! sent to `/autocomplete` and the answer replaces the popup contents.

mod debouncer;
pub mod suggest_events;
pub mod suggest_render;
mod suggest_state;

pub use debouncer::Debouncer;
pub use suggest_state::SuggestState;
