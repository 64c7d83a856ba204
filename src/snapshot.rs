use crate::athletes::{enrich, group_by_athlete};
use crate::errors::MileageError;
use crate::feed::ActivityFeed;
use crate::models::{Athlete, SnapshotStatusResponse};
use chrono::{DateTime, Local};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::{
    sync::{Mutex, RwLock},
    task::AbortHandle,
};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ActivitySnapshot {
    pub athletes: Vec<Athlete>,
    pub metadata_enriched: bool,
    pub loaded_at: DateTime<Local>,
}

impl ActivitySnapshot {
    pub fn new(athletes: Vec<Athlete>, metadata_enriched: bool) -> Self {
        Self {
            athletes,
            metadata_enriched,
            loaded_at: Local::now(),
        }
    }
}

pub async fn load_snapshot<F: ActivityFeed>(feed: &F) -> Result<ActivitySnapshot, MileageError> {
    let activities = feed.fetch_activities().await?;
    let mut athletes = group_by_athlete(&activities);

    let metadata_enriched = match feed.fetch_athlete_metadata().await {
        Ok(metadata) => {
            enrich(&mut athletes, &metadata);
            true
        }
        Err(err) => {
            warn!("{err}, using default athlete details");
            false
        }
    };

    if athletes.is_empty() {
        return Err(MileageError::feed(
            "no athlete data found after processing activities",
        ));
    }

    info!(
        activities = activities.len(),
        athletes = athletes.len(),
        metadata_enriched,
        "activity snapshot loaded"
    );
    Ok(ActivitySnapshot::new(athletes, metadata_enriched))
}

#[derive(Debug, Clone)]
pub enum SnapshotState {
    Loading,
    Ready(Arc<ActivitySnapshot>),
    Failed(String),
}

/// A load only lands if its generation is still the latest one.
#[derive(Debug)]
pub struct SnapshotStore {
    state: RwLock<SnapshotState>,
    generation: AtomicU64,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self {
            state: RwLock::new(SnapshotState::Loading),
            generation: AtomicU64::new(0),
            in_flight: Mutex::new(None),
        }
    }
}

impl SnapshotStore {
    pub async fn state(&self) -> SnapshotState {
        self.state.read().await.clone()
    }

    pub async fn current(&self) -> Result<Arc<ActivitySnapshot>, MileageError> {
        match &*self.state.read().await {
            SnapshotState::Ready(snapshot) => Ok(Arc::clone(snapshot)),
            SnapshotState::Loading => Err(MileageError::feed("activity data is still loading")),
            SnapshotState::Failed(message) => Err(MileageError::FeedUnavailable(message.clone())),
        }
    }

    pub async fn reload<F>(&self, feed: Arc<F>) -> Result<Arc<ActivitySnapshot>, MileageError>
    where
        F: ActivityFeed + 'static,
    {
        // Generation order must match registration order, so both happen under the lock.
        let (generation, task) = {
            let mut in_flight = self.in_flight.lock().await;
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            let task = tokio::spawn(async move { load_snapshot(feed.as_ref()).await });
            if let Some(previous) = in_flight.replace(task.abort_handle()) {
                previous.abort();
            }
            (generation, task)
        };

        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_cancelled() => {
                info!(generation, "snapshot reload cancelled");
                return Err(MileageError::Superseded);
            }
            Err(err) => return Err(MileageError::feed(format!("snapshot load failed: {err}"))),
        };

        self.commit(generation, outcome).await
    }

    async fn commit(
        &self,
        generation: u64,
        outcome: Result<ActivitySnapshot, MileageError>,
    ) -> Result<Arc<ActivitySnapshot>, MileageError> {
        let mut state = self.state.write().await;
        if generation != self.generation.load(Ordering::SeqCst) {
            info!(generation, "discarding stale snapshot");
            return Err(MileageError::Superseded);
        }

        match outcome {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                *state = SnapshotState::Ready(Arc::clone(&snapshot));
                Ok(snapshot)
            }
            Err(err) => {
                // A failed reload keeps serving the last good snapshot.
                if !matches!(*state, SnapshotState::Ready(_)) {
                    *state = SnapshotState::Failed(err.to_string());
                }
                Err(err)
            }
        }
    }

    pub async fn status(&self) -> SnapshotStatusResponse {
        match self.state().await {
            SnapshotState::Ready(snapshot) => SnapshotStatusResponse {
                status: "ready".to_string(),
                snapshot_loaded: true,
                athletes: snapshot.athletes.len(),
                metadata_enriched: snapshot.metadata_enriched,
                loaded_at: Some(snapshot.loaded_at.to_rfc3339()),
                error: None,
            },
            SnapshotState::Loading => SnapshotStatusResponse {
                status: "loading".to_string(),
                snapshot_loaded: false,
                athletes: 0,
                metadata_enriched: false,
                loaded_at: None,
                error: None,
            },
            SnapshotState::Failed(message) => SnapshotStatusResponse {
                status: "failed".to_string(),
                snapshot_loaded: false,
                athletes: 0,
                metadata_enriched: false,
                loaded_at: None,
                error: Some(message),
            },
        }
    }
}
