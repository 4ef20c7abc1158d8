//! Search results pane
//!
//! Shows the home view (popular categories), the loading spinner, the hit
//! list, or the empty/unavailable messages for the last submitted search.

pub mod results_events;
pub mod results_render;
mod results_state;

pub use results_state::{ResultsState, ResultsView};
