//! Page components for the server-rendered dashboard.

pub mod dashboard;

pub use dashboard::DashboardPage;
