pub mod achievements;
pub mod app;
pub mod errors;
pub mod handlers;
pub mod journal;
pub mod models;
pub mod stats;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
