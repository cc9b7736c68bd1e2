//! Commented default config written on first run.

/// The default `config.toml`. Parses to [`crate::OpdeckConfig::default`].
pub fn default_config_toml() -> &'static str {
    r#"# Opdeck configuration
# Every key is optional; removed keys fall back to the values shown here.

[layout]
# Panel that holds the tab area. It always takes the remaining width.
main_panel = "main"
# Panel that gets its own fixed column on tablet viewports.
trailing_panel = "timeline"
# Desktop column template override, e.g. "280px 1fr 320px".
# column_template = ""

[[layout.panels]]
id = "file-explorer"
position = "left"
default_width = 280.0
min_width = 200.0
max_width = 600.0
resizable = true
visible = false

[[layout.panels]]
id = "main"
position = "center"
visible = true

[[layout.panels]]
id = "git-status"
position = "right"
default_width = 320.0
min_width = 240.0
max_width = 640.0
resizable = true
visible = false

[[layout.panels]]
id = "timeline"
position = "right"
default_width = 320.0
min_width = 240.0
max_width = 560.0
resizable = true
visible = false

[breakpoints]
# Viewports up to this width use overlay panels.
mobile_max = 767.0
# Viewports up to this width use the two-region grid.
tablet_max = 1279.0

[mobile]
overlay_width_fraction = 0.85

[tablet]
trailing_width = 320.0

[tabs]
home_redirect_delay_ms = 100
max_title_len = 40

[persistence]
enabled = true
# widths_file = "/path/to/panel-widths.json"

[events]
watch_capacity = 64
"#
}
