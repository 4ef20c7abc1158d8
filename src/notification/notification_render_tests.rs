use super::*;
use crate::theme;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_to_terminal(
    notification: &mut NotificationState,
    width: u16,
    height: u16,
) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| render_notification(f, notification))
        .unwrap();
    terminal
}

#[test]
fn test_renders_message_top_right() {
    let mut notification = NotificationState::new();
    notification.show("Copied!");

    let terminal = render_to_terminal(&mut notification, 40, 10);
    let buffer = terminal.backend().buffer();
    let row: String = (0..40).map(|x| buffer[(x, 3)].symbol()).collect();

    assert!(row.contains("Copied!"));
    // " Copied! " plus borders ends two columns before the right edge
    assert_eq!(buffer[(37, 3)].symbol(), "│");
}

#[test]
fn test_no_notification_renders_nothing() {
    let mut notification = NotificationState::new();
    let terminal = render_to_terminal(&mut notification, 40, 10);
    assert!(!terminal.backend().to_string().contains('┌'));
}

#[test]
fn test_warning_uses_warning_background() {
    let mut notification = NotificationState::new();
    notification.show_warning("Bad config");

    let terminal = render_to_terminal(&mut notification, 40, 10);
    let buffer = terminal.backend().buffer();
    let x = (0..40).find(|&x| buffer[(x, 3)].symbol() == "B").unwrap();
    assert_eq!(buffer[(x, 3)].bg, theme::notification::WARNING.bg);
}

#[test]
fn test_too_small_terminal_skips_render() {
    let mut notification = NotificationState::new();
    notification.show("Hello");

    let terminal = render_to_terminal(&mut notification, 6, 4);
    assert!(!terminal.backend().to_string().contains("Hello"));
}
