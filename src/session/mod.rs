use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;

/// Open/closed flags for the first-run "create a store" dialog, keyed by
/// acting identity so one caller's empty store list never opens the dialog
/// for another session. Explicitly constructed and injected as an extension
/// rather than living in an ambient global; observers subscribe for change
/// notifications.
#[derive(Clone)]
pub struct SetupDialogs {
    channels: Arc<Mutex<HashMap<String, Arc<watch::Sender<bool>>>>>,
}

impl SetupDialogs {
    pub fn new() -> Self {
        Self {
            channels: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn channel(&self, user_id: &str) -> Arc<watch::Sender<bool>> {
        let mut channels = self
            .channels
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        channels
            .entry(user_id.to_string())
            .or_insert_with(|| {
                let (tx, _rx) = watch::channel(false);
                Arc::new(tx)
            })
            .clone()
    }

    pub fn is_open(&self, user_id: &str) -> bool {
        *self.channel(user_id).borrow()
    }

    pub fn open(&self, user_id: &str) {
        self.channel(user_id).send_replace(true);
    }

    pub fn close(&self, user_id: &str) {
        self.channel(user_id).send_replace(false);
    }

    /// Subscribe for open/close notifications for one identity
    pub fn subscribe(&self, user_id: &str) -> watch::Receiver<bool> {
        self.channel(user_id).subscribe()
    }
}

impl Default for SetupDialogs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggles() {
        let dialogs = SetupDialogs::new();
        assert!(!dialogs.is_open("user_a"));

        dialogs.open("user_a");
        assert!(dialogs.is_open("user_a"));

        dialogs.close("user_a");
        assert!(!dialogs.is_open("user_a"));
    }

    #[test]
    fn identities_are_isolated() {
        let dialogs = SetupDialogs::new();

        dialogs.open("user_a");
        assert!(dialogs.is_open("user_a"));
        assert!(!dialogs.is_open("user_b"));

        dialogs.close("user_a");
        dialogs.open("user_b");
        assert!(!dialogs.is_open("user_a"));
        assert!(dialogs.is_open("user_b"));
    }

    #[tokio::test]
    async fn notifies_subscribers_on_open() {
        let dialogs = SetupDialogs::new();
        let mut rx = dialogs.subscribe("user_a");

        dialogs.open("user_a");
        rx.changed().await.expect("sender alive");
        assert!(*rx.borrow());
    }

    #[test]
    fn clones_share_state() {
        let dialogs = SetupDialogs::new();
        let other = dialogs.clone();
        other.open("user_a");
        assert!(dialogs.is_open("user_a"));
    }
}
