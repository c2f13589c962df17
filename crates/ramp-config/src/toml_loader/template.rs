//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Ramp Studio Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[store]
# JSON document holding the palette list (array of {name, category, tags, colors}).
# path = "palettes.json"

[export]
# bundle_file_name = "gis_color_package.json"
# output_dir = "Color_Ramps_Output"

[preview]
# max_dimension = 1200     # 16-8192; larger rasters are resampled to fit
# nodata = -9999.0         # sample value rendered transparent
# zero_is_nodata = false   # also treat literal 0 as no-data

[sync]
# Command run after a delete rewrites the palette document.
# The document path is appended as the last argument.
# command = ["./scripts/push-palettes.sh"]

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
}
