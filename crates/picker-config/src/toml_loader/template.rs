//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# hsb-picker configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[color]
# Color a new picker starts with, as #RRGGBBAA.
initial = "#FFFFFFFF"

[brightness]
# title = "Brightness"
# maximum_value = 1.0    # 0.01-1.0
# precision = 2          # 0-6 digits after the decimal point

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}
