pub mod app;
pub mod charts;
pub mod config;
pub mod controller;
pub mod errors;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::DashboardConfig;
pub use controller::DashboardController;
pub use gateway::{FeedbackApi, HttpGateway};
pub use state::AppState;
