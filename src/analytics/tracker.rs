use tokio::sync::mpsc;
use tracing::{debug, info};

use super::command::TrackerCommand;
use crate::config::TrackerConfig;

/// Handle to the tracking queue.
///
/// The queue itself is owned by the agent's runtime; this handle only
/// appends. It is an injected dependency, never a singleton: the binder and
/// the tests each hold their own clone, and a test captures commands by
/// holding the receiver side.
#[derive(Debug, Clone)]
pub struct Tracker {
    tx: mpsc::UnboundedSender<TrackerCommand>,
}

impl Tracker {
    pub fn channel() -> (Tracker, mpsc::UnboundedReceiver<TrackerCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Tracker { tx }, rx)
    }

    /// Append one command. Commands are flushed in exactly this order.
    pub fn enqueue(&self, command: TrackerCommand) {
        debug!(command = %command, "enqueue");
        // A closed queue means the agent is gone; commands are then dropped,
        // matching a page torn down mid-navigation.
        let _ = self.tx.send(command);
    }
}

/// Stand-in for the external analytics agent: consumes the queue in order.
pub struct Agent {
    rx: mpsc::UnboundedReceiver<TrackerCommand>,
}

impl Agent {
    pub fn new(rx: mpsc::UnboundedReceiver<TrackerCommand>) -> Self {
        Self { rx }
    }

    /// Enqueue the one-time tracker bootstrap the original script performed
    /// when loading the agent.
    pub fn bootstrap(tracker: &Tracker, config: &TrackerConfig) {
        tracker.enqueue(TrackerCommand::SetTrackerUrl(format!(
            "{}piwik.php",
            config.url
        )));
        tracker.enqueue(TrackerCommand::SetSiteId(config.site_id.clone()));
    }

    /// Drain everything queued so far, in order.
    pub fn flush(&mut self) -> Vec<TrackerCommand> {
        let mut flushed = Vec::new();
        while let Ok(command) = self.rx.try_recv() {
            info!(command = %command, "flush");
            flushed.push(command);
        }
        flushed
    }

    /// Run until the last tracker handle is dropped, flushing commands as
    /// they arrive.
    pub async fn run(mut self) {
        while let Some(command) = self.rx.recv().await {
            info!(command = %command, "flush");
        }
    }
}
