pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ColorError, ConfigError, PickerError};
pub use events::{EventBus, PickerEvent};
pub use types::{ColorSpaceModel, Hsb, PlatformColor, Rgb, HSB_COMPONENT_MAX, RGB_COMPONENT_MAX};

pub type Result<T> = std::result::Result<T, PickerError>;
