mod app_events;
mod app_navigation;
mod app_render;
mod app_state;

pub use app_state::{App, Focus};
