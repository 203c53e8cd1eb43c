use std::sync::Arc;

use picker_common::events::{EventBus, PickerEvent};
use picker_common::types::Rgb;

use crate::color_space::to_hex_string;

/// Receives the resolved color after each user edit.
///
/// Called synchronously, once per edit. The delegate only gets the value,
/// never the model, so it cannot start another edit from inside the call.
pub trait ColorViewDelegate {
    fn color_did_change(&self, color: Rgb);
}

/// Republishes color changes on an [`EventBus`] for async consumers.
pub struct EventBusDelegate {
    bus: Arc<EventBus>,
}

impl EventBusDelegate {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self { bus }
    }
}

impl ColorViewDelegate for EventBusDelegate {
    fn color_did_change(&self, color: Rgb) {
        self.bus.publish(PickerEvent::ColorChanged {
            color,
            hex: to_hex_string(color),
        });
    }
}
