//! Admin-managed zones and feature toggles, fetched from the backend.

use crate::error::CoreError;
use crate::model::{FeatureSettings, GeofenceZone};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RemoteConfig {
    #[serde(default, alias = "geofenceZones")]
    pub zones: Vec<GeofenceZone>,
    #[serde(default)]
    pub settings: FeatureSettings,
}

#[async_trait]
pub trait RemoteConfigSource: Send + Sync {
    async fn fetch(&self) -> Result<RemoteConfig, CoreError>;
}

/// GETs the configuration document from the backend.
#[derive(Clone, Debug)]
pub struct HttpConfigSource {
    client: reqwest::Client,
    url: String,
}

impl HttpConfigSource {
    /// # Errors
    ///
    /// Returns `CoreError::Network` if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RemoteConfigSource for HttpConfigSource {
    async fn fetch(&self) -> Result<RemoteConfig, CoreError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<RemoteConfig>().await?)
    }
}

/// Reads the same document from disk; handy for a club without a backend.
#[derive(Clone, Debug)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RemoteConfigSource for FileConfigSource {
    async fn fetch(&self) -> Result<RemoteConfig, CoreError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Last good configuration snapshot.
///
/// Until a fetch succeeds the zone list is empty, which sends the engine to
/// the local course layout, and every toggle is on.
#[derive(Clone, Debug, Default)]
pub struct ZoneConfigCache {
    inner: Arc<RwLock<RemoteConfig>>,
}

impl ZoneConfigCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: RemoteConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    pub async fn snapshot(&self) -> RemoteConfig {
        self.inner.read().await.clone()
    }

    pub async fn replace(&self, config: RemoteConfig) {
        *self.inner.write().await = config;
    }

    /// Fetches once. On failure the previous snapshot stays in place.
    ///
    /// # Errors
    ///
    /// Returns whatever error the source produced.
    pub async fn refresh(&self, source: &dyn RemoteConfigSource) -> Result<(), CoreError> {
        match source.fetch().await {
            Ok(config) => {
                debug!(zones = config.zones.len(), "remote zone config refreshed");
                self.replace(config).await;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "remote zone config unavailable, keeping previous snapshot");
                Err(e)
            }
        }
    }
}

/// Polls `source` every `every` until the runtime shuts down.
pub fn spawn_poller(
    cache: ZoneConfigCache,
    source: Arc<dyn RemoteConfigSource>,
    every: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let _ = cache.refresh(source.as_ref()).await;
        }
    })
}
