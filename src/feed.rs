use crate::errors::MileageError;
use crate::models::{ActivityRecord, AthleteMetadata};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

const ACTIVITIES_PATH: &str = "/data";
const ATHLETES_PATH: &str = "/athletes";

pub trait ActivityFeed: Send + Sync {
    fn fetch_activities(
        &self,
    ) -> impl Future<Output = Result<Vec<ActivityRecord>, MileageError>> + Send;

    fn fetch_athlete_metadata(
        &self,
    ) -> impl Future<Output = Result<Vec<AthleteMetadata>, MileageError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpActivityFeed {
    client: Client,
    base_url: String,
}

impl HttpActivityFeed {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, MileageError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| MileageError::config(format!("failed to create HTTP client: {err}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Result<Response, String> {
        let url = self.build_url(path);
        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| format!("request to {url} failed: {err}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP error! status: {}", status.as_u16()));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self.get(path).await?;
        response
            .json()
            .await
            .map_err(|err| format!("failed to parse {path} response: {err}"))
    }
}

impl ActivityFeed for HttpActivityFeed {
    async fn fetch_activities(&self) -> Result<Vec<ActivityRecord>, MileageError> {
        let activities: Vec<ActivityRecord> = self
            .get_json(ACTIVITIES_PATH)
            .await
            .map_err(MileageError::FeedUnavailable)?;

        if activities.is_empty() {
            return Err(MileageError::feed(format!(
                "no activity data found from {ACTIVITIES_PATH} endpoint"
            )));
        }
        Ok(activities)
    }

    async fn fetch_athlete_metadata(&self) -> Result<Vec<AthleteMetadata>, MileageError> {
        self.get_json(ATHLETES_PATH)
            .await
            .map_err(MileageError::MetadataUnavailable)
    }
}
