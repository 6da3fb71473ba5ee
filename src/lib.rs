pub mod app;
pub mod config;
pub mod errors;
pub mod layout;
pub mod logging;
pub mod model;
pub mod parser;
pub mod state;
pub mod terminal;
pub mod ui;

// Input handling
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppMode, AppState};
pub use config::AppConfig;
pub use model::Resume;
