//! Navigation history
//!
//! Plays the role the browser history API plays for a web page: every
//! search and every opened section is a location that can be walked back
//! and forward, and the current location is shown as an address.

mod location;
mod nav_history;

pub use location::Location;
pub use nav_history::{MAX_ENTRIES, NavHistory};
