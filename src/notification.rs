//! Transient messages drawn over the top-right corner of the screen

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState, NotificationType};
