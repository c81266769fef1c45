pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod logging;
pub mod models;

pub use app::App;
