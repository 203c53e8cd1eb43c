//! The canonical color and the partial-update protocol.
//!
//! [`ColorModel`] holds exactly one [`Hsb`] value. Widgets report edits as
//! [`PartialUpdate`]s; the model merges them, tells its delegate about the
//! new color once, and rewrites the display snapshots of the widgets that
//! depend on fields they do not edit themselves.

mod delegate;
mod display;
mod update;


pub use delegate::{ColorViewDelegate, EventBusDelegate};
pub use display::{BrightnessSliderDisplay, ColorSampleDisplay, Gradient, WheelDisplay};
pub use update::PartialUpdate;

use std::rc::{Rc, Weak};

use picker_common::types::{Hsb, PlatformColor, Rgb};
use tracing::debug;

use crate::color_space::{extract_components, hsb_to_rgb, rgb_to_hsb, to_hex_string};

/// Single source of truth for the picker's color.
///
/// Lives on the UI thread; the delegate is held weakly and does not keep
/// its owner alive.
pub struct ColorModel {
    components: Hsb,
    wheel: WheelDisplay,
    brightness_slider: BrightnessSliderDisplay,
    sample: ColorSampleDisplay,
    delegate: Option<Weak<dyn ColorViewDelegate>>,
}

impl ColorModel {
    /// A model holding opaque white.
    pub fn new() -> Self {
        let components = Hsb::WHITE;
        Self {
            components,
            wheel: WheelDisplay::new(components),
            brightness_slider: BrightnessSliderDisplay::new(components),
            sample: ColorSampleDisplay::new(hsb_to_rgb(components)),
            delegate: None,
        }
    }

    /// A model seeded with `color`.
    pub fn with_color(color: &PlatformColor) -> Self {
        let mut model = Self::new();
        model.set_color(color);
        model
    }

    /// The current color, derived from the canonical HSB value on every call.
    pub fn color(&self) -> Rgb {
        hsb_to_rgb(self.components)
    }

    /// The canonical HSB value.
    pub fn components(&self) -> Hsb {
        self.components
    }

    pub fn hex_string(&self) -> String {
        to_hex_string(self.color())
    }

    /// Replace the color programmatically.
    ///
    /// Every display is refreshed; the delegate is not notified since this is
    /// not a user edit.
    pub fn set_color(&mut self, color: &PlatformColor) {
        self.components = rgb_to_hsb(extract_components(color));
        debug!(components = ?self.components, "color set");
        self.reload_data();
    }

    /// Merge a widget's edit, notify the delegate once, and refresh dependents.
    ///
    /// Returns the resolved color.
    pub fn apply_partial_update(&mut self, update: PartialUpdate) -> Rgb {
        self.components = update.merge_into(self.components);
        let color = self.color();
        debug!(edit = update.label(), components = ?self.components, "partial update");

        self.notify_delegate(color);
        self.refresh_dependents(update, color);
        color
    }

    /// Rewrite every display snapshot from the canonical value.
    ///
    /// Never notifies the delegate.
    pub fn reload_data(&mut self) {
        self.sample.reload(self.color());
        self.wheel.reload(self.components);
        self.brightness_slider.reload(self.components);
    }

    /// Register the delegate, replacing any previous one.
    pub fn set_delegate<D: ColorViewDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let delegate: Rc<dyn ColorViewDelegate> = delegate.clone();
        self.delegate = Some(Rc::downgrade(&delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    pub fn wheel(&self) -> &WheelDisplay {
        &self.wheel
    }

    pub fn brightness_slider(&self) -> &BrightnessSliderDisplay {
        &self.brightness_slider
    }

    pub fn sample(&self) -> &ColorSampleDisplay {
        &self.sample
    }

    /// Set the slider's static presentation. Takes effect immediately.
    pub fn configure_brightness_slider(
        &mut self,
        title: impl Into<String>,
        maximum_value: f64,
        precision: usize,
    ) {
        self.brightness_slider.title = title.into();
        self.brightness_slider.maximum_value = maximum_value;
        self.brightness_slider.precision = precision;
    }

    fn notify_delegate(&self, color: Rgb) {
        match self.delegate.as_ref().and_then(Weak::upgrade) {
            Some(delegate) => delegate.color_did_change(color),
            None => debug!("no live delegate, change not reported"),
        }
    }

    /// The sample and the slider (gradient from hue/saturation, value from
    /// brightness) follow every edit. The wheel only shows fields it edits.
    fn refresh_dependents(&mut self, update: PartialUpdate, color: Rgb) {
        self.sample.reload(color);
        self.brightness_slider.reload(self.components);
        if let PartialUpdate::HueSaturation { hue, saturation } = update {
            // mirror the wheel's own edit, not a redraw
            self.wheel.hue = hue;
            self.wheel.saturation = saturation;
        }
    }
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::new()
    }
}
