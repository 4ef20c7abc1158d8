//! Section detail view
//!
//! Opened from a suggestion or a search hit; shows the text of a single
//! section fetched from `/section/{id}`.

pub mod section_render;
mod section_state;

pub use section_state::{SectionState, SectionView};
