//! Layout helpers shared by the panes and overlays

pub mod popup;
pub mod wrap;
