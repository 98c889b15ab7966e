//! Outbound notification bus.
//!
//! The settings panel broadcasts opaque topic names to whichever sibling
//! views care to listen. There is no payload contract; receivers re-read
//! whatever state they depend on.

use tokio::sync::broadcast;

/// Broadcast topics emitted by the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Amount rendering changed; re-render all tabs.
    RefreshTabs,
    /// Status bar contents changed.
    UpdateStatus,
    /// Channel set or routing mode changed.
    ChannelsUpdated,
    /// Gossip sync progress display should update.
    GossipSyncProgress,
    /// History view must refetch.
    HistoryRefreshed,
    /// Asset list filtering changed.
    AssetListUpdated,
    /// Fiat overlay configuration changed.
    FiatUpdated,
}

/// Fan-out channel for [`Notification`]s.
///
/// Sending never blocks; notifications to a bus without receivers are
/// dropped, and lagging receivers miss topics rather than stalling the
/// panel.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<Notification>,
}

impl EventBus {
    /// Bus with a small bounded backlog per receiver.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { tx }
    }

    /// Subscribe to all future notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Broadcast a topic to all current receivers.
    pub fn notify(&self, topic: Notification) {
        let _ = self.tx.send(topic);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_to_subscriber() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();
        bus.notify(Notification::RefreshTabs);
        assert_eq!(rx.try_recv(), Ok(Notification::RefreshTabs));
    }

    #[test]
    fn send_without_receivers_is_silent() {
        let bus = EventBus::new();
        bus.notify(Notification::UpdateStatus);
    }
}
