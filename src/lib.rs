pub mod app;
pub mod comments;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod reminders;
pub mod state;
pub mod stats;
pub mod storage;
pub mod tags;
pub mod templates;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_dir};
