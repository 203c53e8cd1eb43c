use clap::{Parser, Subcommand};
use picker_core::PartialUpdate;

/// hsb-picker: convert colors and drive the HSB picker model from the shell.
#[derive(Parser, Debug)]
#[command(name = "hsb-picker", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the HSB components of a #RRGGBBAA color.
    Hsb {
        hex: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the #RRGGBBAA form of HSB components.
    Hex {
        #[arg(long)]
        hue: f64,
        #[arg(long)]
        saturation: f64,
        #[arg(long)]
        brightness: f64,
        #[arg(long, default_value_t = 1.0)]
        alpha: f64,
    },
    /// Seed a picker model and apply widget edits in order.
    Edit {
        /// Starting color; defaults to the configured initial color.
        hex: Option<String>,
        /// `hs=HUE,SATURATION` or `b=BRIGHTNESS`, repeatable.
        #[arg(short, long = "update", value_parser = parse_update)]
        updates: Vec<PartialUpdate>,
        #[arg(long)]
        json: bool,
    },
}

/// Parse `hs=H,S` or `b=V` into a widget edit.
pub fn parse_update(s: &str) -> Result<PartialUpdate, String> {
    let (kind, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected hs=H,S or b=V, got {s:?}"))?;
    let number = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid number {v:?}: {e}"))
    };

    match kind.trim() {
        "hs" => {
            let (hue, saturation) = value
                .split_once(',')
                .ok_or_else(|| format!("expected hs=H,S, got {s:?}"))?;
            Ok(PartialUpdate::hue_saturation(number(hue)?, number(saturation)?))
        }
        "b" => Ok(PartialUpdate::brightness(number(value)?)),
        other => Err(format!("unknown update kind {other:?}, expected hs or b")),
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hue_saturation_update() {
        assert_eq!(
            parse_update("hs=0.3,0.5").unwrap(),
            PartialUpdate::hue_saturation(0.3, 0.5)
        );
        assert_eq!(
            parse_update("hs= 0.3 , 0.5").unwrap(),
            PartialUpdate::hue_saturation(0.3, 0.5)
        );
    }

    #[test]
    fn parse_brightness_update() {
        assert_eq!(parse_update("b=0.9").unwrap(), PartialUpdate::brightness(0.9));
    }

    #[test]
    fn parse_update_rejects_garbage() {
        assert!(parse_update("0.9").is_err());
        assert!(parse_update("hs=0.3").is_err());
        assert!(parse_update("x=1").is_err());
        assert!(parse_update("b=bright").is_err());
    }

    #[test]
    fn edit_collects_updates_in_order() {
        let args = Args::try_parse_from([
            "hsb-picker",
            "edit",
            "#FF0000FF",
            "-u",
            "b=0.5",
            "--update",
            "hs=0.5,1",
        ])
        .unwrap();
        match args.command {
            Command::Edit { hex, updates, json } => {
                assert_eq!(hex.as_deref(), Some("#FF0000FF"));
                assert!(!json);
                assert_eq!(
                    updates,
                    vec![
                        PartialUpdate::brightness(0.5),
                        PartialUpdate::hue_saturation(0.5, 1.0),
                    ]
                );
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["hsb-picker", "hsb", "#000000FF", "--log-level", "debug"])
                .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
