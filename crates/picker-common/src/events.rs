use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::Rgb;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PickerEvent {
    /// A user edit produced a new color.
    ColorChanged { color: Rgb, hex: String },
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<PickerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PickerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: PickerEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
