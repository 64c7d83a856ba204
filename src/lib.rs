pub mod app;
pub mod athletes;
pub mod config;
pub mod errors;
pub mod feed;
pub mod handlers;
pub mod models;
pub mod render;
pub mod selection;
pub mod snapshot;
pub mod state;
pub mod stats;
pub mod ui;
pub mod week;

pub use app::router;
pub use config::Config;
pub use errors::{AppError, MileageError};
pub use feed::{ActivityFeed, HttpActivityFeed};
pub use snapshot::{load_snapshot, ActivitySnapshot, SnapshotStore};
pub use state::AppState;
pub use stats::aggregate;
