//! Light/dark theme preference.
//!
//! The preference is a single string flag in `localStorage` under
//! [`STORAGE_KEY`]. When nothing is stored, the operating system's
//! colour-scheme preference decides. The active theme is reflected by the
//! [`DARK_CLASS`] class on the document root; the browser glue lives in
//! `client::theme`.

/// localStorage key holding `"light"` or `"dark"`
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` when the dark palette is active
pub const DARK_CLASS: &str = "dark";

/// Media query used when no preference has been stored
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Element ids of the toggle button and its icon/caption spans
pub const TOGGLE_BUTTON_ID: &str = "themeToggleDashboard";
pub const TOGGLE_ICON_ID: &str = "themeIconDashboard";
pub const TOGGLE_TEXT_ID: &str = "themeTextDashboard";

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only the exact string `"dark"` selects the dark theme.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// What the toggle button shows while this theme is active.
    ///
    /// The button offers the *other* theme, so the dark theme shows the
    /// light-mode icon and vice versa.
    pub fn toggle_label(&self) -> ToggleLabel {
        match self {
            Theme::Dark => ToggleLabel {
                icon: "light_mode",
                text: "Toggle Light Mode",
            },
            Theme::Light => ToggleLabel {
                icon: "dark_mode",
                text: "Toggle Dark Mode",
            },
        }
    }
}

/// Icon ligature and caption for the toggle button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleLabel {
    pub icon: &'static str,
    pub text: &'static str,
}

/// Pick the theme to apply on page load.
///
/// A stored value always wins, even when it is not a recognised theme name
/// (it then means light). Only when the key is absent does the system
/// preference apply.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored {
        Some(value) => Theme::parse(value),
        None => Theme::from_dark(prefers_dark),
    }
}
