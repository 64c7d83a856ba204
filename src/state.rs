use crate::config::Config;
use crate::feed::HttpActivityFeed;
use crate::snapshot::SnapshotStore;
use crate::selection::SelectionPolicy;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub feed: Arc<HttpActivityFeed>,
    pub snapshots: Arc<SnapshotStore>,
}

impl AppState {
    pub fn new(config: Config, feed: HttpActivityFeed) -> Self {
        Self {
            config: Arc::new(config),
            feed: Arc::new(feed),
            snapshots: Arc::new(SnapshotStore::default()),
        }
    }

    pub fn selection(&self) -> &SelectionPolicy {
        &self.config.selection
    }
}
