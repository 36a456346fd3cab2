pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod input;
pub mod models;
pub mod score;
pub mod state;
pub mod storage;
pub mod timer;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use models::Record;
pub use state::AppState;
pub use storage::{Store, load_record};

/// Wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
