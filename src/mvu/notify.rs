use crate::model::Trigger;
use std::sync::Mutex;
use tracing::info;

/// Where fired triggers are delivered (push notification, in-app banner, ...).
pub trait NotificationSink: Send + Sync {
    fn notify(&self, player: &str, trigger: &Trigger);
}

/// Writes triggers to the log; the default sink for the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, player: &str, trigger: &Trigger) {
        info!(player, %trigger, "trigger fired");
    }
}

/// Keeps every delivered trigger in memory.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    delivered: Mutex<Vec<(String, Trigger)>>,
}

impl CollectingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn delivered(&self) -> Vec<(String, Trigger)> {
        self.delivered
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }
}

impl NotificationSink for CollectingNotifier {
    fn notify(&self, player: &str, trigger: &Trigger) {
        if let Ok(mut d) = self.delivered.lock() {
            d.push((player.to_string(), trigger.clone()));
        }
    }
}
