//! Subcommand implementations. Each returns the text to print.

use std::cell::RefCell;
use std::rc::Rc;

use picker_common::types::{Hsb, PlatformColor, Rgb};
use picker_common::{PickerError, Result};
use picker_config::PickerConfig;
use picker_core::{
    hsb_to_rgb, parse_hex_string, rgb_to_hsb, to_hex_string, ColorModel, ColorViewDelegate,
    PartialUpdate,
};
use serde::Serialize;
use serde_json::json;

use crate::cli::Command;

/// Keeps every color the model reports.
#[derive(Default)]
struct ChangeLog {
    colors: RefCell<Vec<Rgb>>,
}

impl ColorViewDelegate for ChangeLog {
    fn color_did_change(&self, color: Rgb) {
        self.colors.borrow_mut().push(color);
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| PickerError::Other(format!("failed to serialize output: {e}")))
}

pub fn run(command: Command, config: &PickerConfig) -> Result<String> {
    match command {
        Command::Hsb { hex, json } => hsb(&hex, json),
        Command::Hex {
            hue,
            saturation,
            brightness,
            alpha,
        } => Ok(to_hex_string(hsb_to_rgb(Hsb::new(
            hue, saturation, brightness, alpha,
        )))),
        Command::Edit { hex, updates, json } => {
            let start = hex.as_deref().unwrap_or(&config.color.initial);
            edit(start, &updates, config, json)
        }
    }
}

fn hsb(hex: &str, as_json: bool) -> Result<String> {
    let components = rgb_to_hsb(parse_hex_string(hex)?);
    if as_json {
        return to_json(&components);
    }
    Ok(format!(
        "hue={:.6} saturation={:.6} brightness={:.6} alpha={:.6}",
        components.hue, components.saturation, components.brightness, components.alpha
    ))
}

fn edit(
    start: &str,
    updates: &[PartialUpdate],
    config: &PickerConfig,
    as_json: bool,
) -> Result<String> {
    let seed = parse_hex_string(start)?;
    let mut model = ColorModel::with_color(&PlatformColor::from(seed));
    model.configure_brightness_slider(
        config.brightness.title.as_str(),
        config.brightness.maximum_value,
        config.brightness.precision as usize,
    );

    let log = Rc::new(ChangeLog::default());
    model.set_delegate(&log);

    for update in updates {
        model.apply_partial_update(*update);
    }

    let changes: Vec<String> = log.colors.borrow().iter().map(|c| to_hex_string(*c)).collect();
    let slider = model.brightness_slider();

    if as_json {
        let out = json!({
            "changes": changes,
            "components": model.components(),
            "color": model.color(),
            "hex": model.hex_string(),
            "brightness": {
                "title": slider.title,
                "value": slider.formatted_value(),
                "gradient": slider.gradient,
            },
        });
        return to_json(&out);
    }

    let mut lines: Vec<String> = changes.iter().map(|hex| format!("changed {hex}")).collect();
    lines.push(format!("{}: {}", slider.title, slider.formatted_value()));
    lines.push(format!("final {}", model.hex_string()));
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsb_text_output() {
        let out = hsb("#FF0000FF", false).unwrap();
        assert_eq!(
            out,
            "hue=0.000000 saturation=1.000000 brightness=1.000000 alpha=1.000000"
        );
    }

    #[test]
    fn hsb_json_output() {
        let out = hsb("#00000000", true).unwrap();
        let parsed: Hsb = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, Hsb::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn hsb_rejects_bad_hex() {
        let err = hsb("FF0000FF", false).unwrap_err();
        assert!(matches!(err, PickerError::Color(_)));
    }

    #[test]
    fn hex_command() {
        let out = run(
            Command::Hex {
                hue: 0.0,
                saturation: 1.0,
                brightness: 1.0,
                alpha: 1.0,
            },
            &PickerConfig::default(),
        )
        .unwrap();
        assert_eq!(out, "#FF0000FF");
    }

    #[test]
    fn edit_reports_each_change() {
        let updates = [
            PartialUpdate::hue_saturation(0.0, 1.0),
            PartialUpdate::brightness(0.0),
        ];
        let out = edit("#FFFFFFFF", &updates, &PickerConfig::default(), false).unwrap();
        assert_eq!(
            out,
            "changed #FF0000FF\nchanged #000000FF\nBrightness: 0.00\nfinal #000000FF"
        );
    }

    #[test]
    fn edit_without_updates_reports_nothing() {
        let out = edit("#FFFFFFFF", &[], &PickerConfig::default(), false).unwrap();
        assert_eq!(out, "Brightness: 1.00\nfinal #FFFFFFFF");
    }

    #[test]
    fn edit_defaults_to_configured_color() {
        let mut config = PickerConfig::default();
        config.color.initial = "#000000FF".into();
        let out = run(
            Command::Edit {
                hex: None,
                updates: vec![],
                json: false,
            },
            &config,
        )
        .unwrap();
        assert!(out.ends_with("final #000000FF"));
    }

    #[test]
    fn edit_json_output() {
        let updates = [PartialUpdate::brightness(0.5)];
        let out = edit("#FFFFFFFF", &updates, &PickerConfig::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["changes"].as_array().unwrap().len(), 1);
        assert_eq!(value["brightness"]["value"], "0.50");
        assert_eq!(value["components"]["brightness"], 0.5);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("no json form"))
        }
    }

    #[test]
    fn serialization_failure_is_an_error() {
        let err = to_json(&Unserializable).unwrap_err();
        assert!(matches!(err, PickerError::Other(_)));
        assert!(err.to_string().contains("no json form"));
    }
}
