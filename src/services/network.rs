//! Network control.
//!
//! The panel's only network interaction is starting and stopping the
//! channel-gossip process. Stop crosses into the network task's own
//! thread as a fire-and-forget command: nothing is awaited and there is
//! no timeout.

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::events::{EventBus, Notification};

/// Commands accepted by the network task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkCommand {
    /// Begin the background gossip process.
    StartGossip,
    /// Stop the background gossip process.
    StopGossip,
}

/// Capability interface for the network collaborator.
#[cfg_attr(test, mockall::automock)]
pub trait NetworkControl {
    /// Begin background gossip.
    fn start_gossip(&self);
    /// Stop background gossip. Fire-and-forget.
    fn stop_gossip(&self);
}

/// Handle into the network task's command channel.
#[derive(Debug, Clone)]
pub struct Network {
    cmd_tx: mpsc::UnboundedSender<NetworkCommand>,
}

impl Network {
    /// Handle plus the raw command receiver, for callers that run the
    /// task themselves.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NetworkCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        (Self { cmd_tx }, cmd_rx)
    }

    /// Spawn the network task on the current tokio runtime.
    pub fn spawn(events: EventBus) -> Self {
        let (handle, mut cmd_rx) = Self::channel();
        tokio::spawn(async move {
            let mut gossip_running = false;
            while let Some(cmd) = cmd_rx.recv().await {
                match cmd {
                    NetworkCommand::StartGossip => {
                        if !gossip_running {
                            gossip_running = true;
                            info!("gossip started");
                            events.notify(Notification::GossipSyncProgress);
                        }
                    }
                    NetworkCommand::StopGossip => {
                        if gossip_running {
                            gossip_running = false;
                            debug!("gossip stopped");
                            events.notify(Notification::GossipSyncProgress);
                        }
                    }
                }
            }
        });
        handle
    }
}

impl NetworkControl for Network {
    fn start_gossip(&self) {
        let _ = self.cmd_tx.send(NetworkCommand::StartGossip);
    }

    fn stop_gossip(&self) {
        // Dropped receiver means the task is gone; nothing to report.
        let _ = self.cmd_tx.send(NetworkCommand::StopGossip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_cross_the_channel() {
        let (net, mut rx) = Network::channel();
        net.start_gossip();
        net.stop_gossip();
        assert_eq!(rx.try_recv(), Ok(NetworkCommand::StartGossip));
        assert_eq!(rx.try_recv(), Ok(NetworkCommand::StopGossip));
    }

    #[test]
    fn send_after_task_exit_is_silent() {
        let (net, rx) = Network::channel();
        drop(rx);
        net.stop_gossip();
    }
}
