use serde::{Deserialize, Serialize};

use picker_common::types::Hsb;

/// A single widget's edit to the canonical color.
///
/// Each variant carries only the fields its widget owns; everything else
/// is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartialUpdate {
    /// From the color wheel.
    HueSaturation { hue: f64, saturation: f64 },
    /// From the brightness slider.
    Brightness { value: f64 },
}

impl PartialUpdate {
    pub fn hue_saturation(hue: f64, saturation: f64) -> Self {
        Self::HueSaturation { hue, saturation }
    }

    pub fn brightness(value: f64) -> Self {
        Self::Brightness { value }
    }

    /// Return `components` with this edit merged in.
    pub fn merge_into(self, components: Hsb) -> Hsb {
        match self {
            Self::HueSaturation { hue, saturation } => Hsb {
                hue,
                saturation,
                ..components
            },
            Self::Brightness { value } => Hsb {
                brightness: value,
                ..components
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HueSaturation { .. } => "hue_saturation",
            Self::Brightness { .. } => "brightness",
        }
    }
}
