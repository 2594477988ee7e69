pub mod app;
pub mod feedback_overlay;
pub mod header;
pub mod manage;
pub mod practice;
pub mod settings;
pub mod theme;

pub use app::VokabelApp;
