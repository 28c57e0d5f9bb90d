//! Content-load notifications for the rendering layer.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::models::PresetId;

/// Emitted after a preset activation has completed. The selection store has
/// already been reset by the time this is observable; `generation` increases
/// with every activation so a consumer can drop stale redraws.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLoaded {
    pub preset_id: PresetId,
    pub preset_name: String,
    pub generation: u64,
}

/// Hands content-load notifications to a single consumer. Without a
/// subscriber (headless use, tests that don't care) events are dropped.
#[derive(Debug, Default)]
pub struct Notifier {
    sender: Option<UnboundedSender<ContentLoaded>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the consuming side. A later call replaces the previous
    /// subscriber.
    pub fn subscribe(&mut self) -> UnboundedReceiver<ContentLoaded> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.sender = Some(sender);
        receiver
    }

    pub fn emit(&self, event: ContentLoaded) {
        match &self.sender {
            Some(sender) => {
                if sender.send(event).is_err() {
                    debug!("content-load subscriber dropped; notification discarded");
                }
            }
            None => debug!(preset = %event.preset_id, "no content-load subscriber"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_emitted_events() {
        let mut notifier = Notifier::new();
        let mut events = notifier.subscribe();

        notifier.emit(ContentLoaded {
            preset_id: "p-1".to_string(),
            preset_name: "Weekly".to_string(),
            generation: 3,
        });

        let event = events.try_recv().expect("one event queued");
        assert_eq!(event.preset_name, "Weekly");
        assert_eq!(event.generation, 3);
    }

    #[test]
    fn test_emit_without_subscriber_is_harmless() {
        let notifier = Notifier::new();
        notifier.emit(ContentLoaded {
            preset_id: "p-1".to_string(),
            preset_name: "Weekly".to_string(),
            generation: 1,
        });
    }
}
