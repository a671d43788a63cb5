//! Key-value persistence for round state and history.

pub mod locks;
pub mod memory;
pub mod sqlite;

pub use locks::PlayerLocks;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::handicap::updated_handicap;
use crate::model::{RoundProgress, RoundRecord, TeeTimeAlert};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(value.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::new(value.to_string())
    }
}

/// Plain get/set/remove over string keys and JSON string values.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub fn round_in_progress_key(player: &str) -> String {
    format!("player:{player}:round_in_progress")
}

pub fn tee_time_alert_key(player: &str) -> String {
    format!("player:{player}:tee_time_alert")
}

pub fn round_history_key(player: &str) -> String {
    format!("player:{player}:round_history")
}

pub fn handicap_index_key(player: &str) -> String {
    format!("player:{player}:handicap_index")
}

pub async fn get_json<T>(storage: &dyn Storage, key: &str) -> Result<Option<T>, StorageError>
where
    T: for<'de> Deserialize<'de>,
{
    match storage.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub async fn put_json<T>(storage: &dyn Storage, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string(value)?;
    storage.set(key, payload).await
}

pub async fn load_round_in_progress(
    storage: &dyn Storage,
    player: &str,
) -> Result<Option<RoundProgress>, StorageError> {
    get_json(storage, &round_in_progress_key(player)).await
}

pub async fn save_round_in_progress(
    storage: &dyn Storage,
    player: &str,
    progress: &RoundProgress,
) -> Result<(), StorageError> {
    put_json(storage, &round_in_progress_key(player), progress).await
}

pub async fn clear_round_in_progress(storage: &dyn Storage, player: &str) -> Result<(), StorageError> {
    storage.remove(&round_in_progress_key(player)).await
}

pub async fn load_tee_time_alert(
    storage: &dyn Storage,
    player: &str,
) -> Result<Option<TeeTimeAlert>, StorageError> {
    get_json(storage, &tee_time_alert_key(player)).await
}

pub async fn save_tee_time_alert(
    storage: &dyn Storage,
    player: &str,
    alert: &TeeTimeAlert,
) -> Result<(), StorageError> {
    put_json(storage, &tee_time_alert_key(player), alert).await
}

pub async fn clear_tee_time_alert(storage: &dyn Storage, player: &str) -> Result<(), StorageError> {
    storage.remove(&tee_time_alert_key(player)).await
}

/// Round history, most recent first.
pub async fn load_round_history(
    storage: &dyn Storage,
    player: &str,
) -> Result<Vec<RoundRecord>, StorageError> {
    Ok(get_json(storage, &round_history_key(player))
        .await?
        .unwrap_or_default())
}

/// Adds a finished round and returns the history, most recent first.
///
/// Not atomic: concurrent callers for the same player must go through
/// [`record_round_history`].
pub async fn append_round(
    storage: &dyn Storage,
    player: &str,
    record: RoundRecord,
) -> Result<Vec<RoundRecord>, StorageError> {
    let mut history = load_round_history(storage, player).await?;
    history.push(record);
    history.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    put_json(storage, &round_history_key(player), &history).await?;
    Ok(history)
}

/// Appends `record` and stores the refreshed handicap index under the
/// player's lock. Returns the history (most recent first) and the new index.
pub async fn record_round_history(
    storage: &dyn Storage,
    locks: &PlayerLocks,
    player: &str,
    record: RoundRecord,
) -> Result<(Vec<RoundRecord>, Option<f64>), StorageError> {
    let _guard = locks.lock(player).await;
    let history = append_round(storage, player, record).await?;
    let index = updated_handicap(&history);
    if let Some(index) = index {
        save_handicap_index(storage, player, index).await?;
    }
    Ok((history, index))
}

pub async fn load_handicap_index(
    storage: &dyn Storage,
    player: &str,
) -> Result<Option<f64>, StorageError> {
    get_json(storage, &handicap_index_key(player)).await
}

pub async fn save_handicap_index(
    storage: &dyn Storage,
    player: &str,
    index: f64,
) -> Result<(), StorageError> {
    put_json(storage, &handicap_index_key(player), &index).await
}
