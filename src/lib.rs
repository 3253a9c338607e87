pub mod app;
pub mod charts;
pub mod clicks;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod messages;
pub mod models;
pub mod pagination;
pub mod state;
pub mod stats;
pub mod ui;
pub mod widgets;

pub use app::router;
pub use client::CatalogClient;
pub use config::Config;
pub use state::AppState;
