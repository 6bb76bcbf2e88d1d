pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod ui;

pub use app::KioskApp;
pub use error::KioskError;
