//! Shared UI components for the server-rendered dashboard.

pub mod layout;
pub mod theme_toggle;
pub mod weather_card;

pub use layout::Layout;
pub use theme_toggle::ThemeToggle;
pub use weather_card::WeatherCard;
