//! Centralized theme configuration for all UI components.
//!
//! Render code uses `theme::module::CONSTANT` rather than hardcoding
//! `Color::*` values, so the whole look can be adjusted from this file.
//!
//! Palette: saffron accents over a deep navy background.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(22, 26, 44);
    pub const BG_SURFACE: Color = Color::Rgb(33, 38, 60);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(52, 58, 88);

    pub const SAFFRON: Color = Color::Rgb(255, 153, 51);
    pub const GREEN: Color = Color::Rgb(19, 136, 8);
    pub const BLUE: Color = Color::Rgb(26, 115, 232);
    pub const LINK: Color = Color::Rgb(138, 180, 248);
    pub const ERROR: Color = Color::Rgb(217, 48, 37);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Search input styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::SAFFRON;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const LOADING_HINT: Color = palette::SAFFRON;
    pub const CURSOR: Style = palette::CURSOR;
}

/// Suggestion popup styles
pub mod suggestions {
    use super::*;

    pub const BORDER: Color = palette::SAFFRON;
    pub const BACKGROUND: Color = palette::BG_DARK;

    pub const ITEM_NORMAL_FG: Color = palette::TEXT;
    pub const ITEM_NORMAL_BG: Color = palette::BG_DARK;
    pub const ITEM_ACTIVE_FG: Color = palette::BG_DARK;
    pub const ITEM_ACTIVE_BG: Color = palette::SAFFRON;
    pub const ITEM_ACTIVE_MODIFIER: Modifier = Modifier::BOLD;
    pub const SECTION_LABEL: Color = palette::SAFFRON;
}

/// Results pane styles
pub mod results {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::SAFFRON;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const LOCATION: Color = palette::TEXT_MUTED;

    pub const TITLE: Style = Style::new().fg(palette::LINK).add_modifier(Modifier::BOLD);
    pub const TITLE_SELECTED: Style = Style::new()
        .fg(palette::LINK)
        .bg(palette::BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD.union(Modifier::UNDERLINED));
    pub const BREADCRUMB: Color = palette::GREEN;
    pub const CHAPTER: Color = palette::TEXT_MUTED;
    pub const SNIPPET: Color = palette::TEXT;
    pub const SELECTION_MARKER: Color = palette::SAFFRON;

    pub const LOADING: Color = palette::SAFFRON;
    pub const EMPTY: Color = palette::TEXT_MUTED;
    pub const ERROR: Color = palette::ERROR;

    // Spinner frames cycle through these
    pub const SPINNER_COLORS: &[Color] = &[
        palette::SAFFRON,
        palette::TEXT,
        palette::GREEN,
        palette::BLUE,
    ];
}

/// Home view (hero + popular categories)
pub mod home {
    use super::*;

    pub const HERO_TITLE: Style = Style::new()
        .fg(palette::SAFFRON)
        .add_modifier(Modifier::BOLD);
    pub const HERO_SUBTITLE: Color = palette::TEXT_MUTED;
    pub const CATEGORIES_HEADER: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::BOLD);
    pub const CATEGORY: Color = palette::TEXT;
    pub const CATEGORY_SELECTED_FG: Color = palette::BG_DARK;
    pub const CATEGORY_SELECTED_BG: Color = palette::SAFFRON;
}

/// Section detail view
pub mod section {
    use super::*;

    pub const HEADING: Style = Style::new()
        .fg(palette::SAFFRON)
        .add_modifier(Modifier::BOLD);
    pub const SUBHEADING: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::BOLD);
    pub const BODY: Color = palette::TEXT;
    pub const NOT_FOUND: Color = palette::TEXT_MUTED;
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_HIGHLIGHT,
        border: palette::TEXT_MUTED,
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::WARNING,
        border: palette::WARNING,
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::ERROR,
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}
