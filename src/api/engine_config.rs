use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};

/// Public engine configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. All lengths are pixels; the
/// three durations use whatever time unit the host feeds to `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub animate: bool,
    #[serde(default)]
    pub hide_on_hover: bool,
    #[serde(default = "default_hide_opacity")]
    pub hide_opacity: f64,
    #[serde(default = "default_x_left_padding")]
    pub x_left_padding: f64,
    #[serde(default)]
    pub x_right_padding: f64,
    #[serde(default)]
    pub y_top_padding: f64,
    #[serde(default)]
    pub y_bottom_padding: f64,
    #[serde(default = "default_x_bar_width_percentage")]
    pub x_bar_width_percentage: f64,
    #[serde(default = "default_current_marker_height")]
    pub current_marker_height: f64,
    #[serde(default = "default_current_marker_circle_radius")]
    pub current_marker_circle_radius: f64,
    #[serde(default = "default_bar_border_radius")]
    pub bar_border_radius: f64,
    #[serde(default = "default_axis_tick_size")]
    pub x_axis_tick_size: f64,
    #[serde(default = "default_axis_tick_size")]
    pub y_axis_tick_size: f64,
    #[serde(default = "default_row_height_per_hour")]
    pub row_height_per_hour: f64,
    #[serde(default = "default_bar_label_font_size")]
    pub bar_label_font_size_px: f64,
    #[serde(default = "default_hour_label_font_size")]
    pub hour_label_font_size_px: f64,
    #[serde(default = "default_day_number_font_size")]
    pub day_number_font_size_px: f64,
    #[serde(default = "default_day_name_font_size")]
    pub day_name_font_size_px: f64,
    #[serde(default = "default_day_name_offset")]
    pub day_name_offset: f64,
    #[serde(default = "default_transition_duration")]
    pub hover_fade_duration: f64,
    #[serde(default = "default_transition_duration")]
    pub grow_duration: f64,
    #[serde(default = "default_reflow_debounce")]
    pub reflow_debounce: f64,
}

impl TimelineConfig {
    /// Creates a config with defaults for everything but the viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            animate: false,
            hide_on_hover: false,
            hide_opacity: default_hide_opacity(),
            x_left_padding: default_x_left_padding(),
            x_right_padding: 0.0,
            y_top_padding: 0.0,
            y_bottom_padding: 0.0,
            x_bar_width_percentage: default_x_bar_width_percentage(),
            current_marker_height: default_current_marker_height(),
            current_marker_circle_radius: default_current_marker_circle_radius(),
            bar_border_radius: default_bar_border_radius(),
            x_axis_tick_size: default_axis_tick_size(),
            y_axis_tick_size: default_axis_tick_size(),
            row_height_per_hour: default_row_height_per_hour(),
            bar_label_font_size_px: default_bar_label_font_size(),
            hour_label_font_size_px: default_hour_label_font_size(),
            day_number_font_size_px: default_day_number_font_size(),
            day_name_font_size_px: default_day_name_font_size(),
            day_name_offset: default_day_name_offset(),
            hover_fade_duration: default_transition_duration(),
            grow_duration: default_transition_duration(),
            reflow_debounce: default_reflow_debounce(),
        }
    }

    /// Enables the mount-time grow animation.
    #[must_use]
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Enables hover isolation with the given settled opacity.
    #[must_use]
    pub fn with_hide_on_hover(mut self, hide_opacity: f64) -> Self {
        self.hide_on_hover = true;
        self.hide_opacity = hide_opacity;
        self
    }

    /// Sets horizontal paddings around the column area.
    #[must_use]
    pub fn with_x_padding(mut self, left: f64, right: f64) -> Self {
        self.x_left_padding = left;
        self.x_right_padding = right;
        self
    }

    /// Sets vertical paddings around the scrollable body.
    #[must_use]
    pub fn with_y_padding(mut self, top: f64, bottom: f64) -> Self {
        self.y_top_padding = top;
        self.y_bottom_padding = bottom;
        self
    }

    /// Sets the bar width as a fraction of the column width.
    #[must_use]
    pub fn with_bar_width_percentage(mut self, fraction: f64) -> Self {
        self.x_bar_width_percentage = fraction;
        self
    }

    /// Sets current-time marker bar height and dot radius.
    #[must_use]
    pub fn with_current_marker(mut self, height: f64, circle_radius: f64) -> Self {
        self.current_marker_height = height;
        self.current_marker_circle_radius = circle_radius;
        self
    }

    /// Sets the bar corner radius.
    #[must_use]
    pub fn with_bar_border_radius(mut self, radius: f64) -> Self {
        self.bar_border_radius = radius;
        self
    }

    /// Sets both axis tick lengths.
    #[must_use]
    pub fn with_axis_tick_sizes(mut self, x_tick_size: f64, y_tick_size: f64) -> Self {
        self.x_axis_tick_size = x_tick_size;
        self.y_axis_tick_size = y_tick_size;
        self
    }

    /// Sets the vertical pixel budget of one hour.
    #[must_use]
    pub fn with_row_height_per_hour(mut self, row_height: f64) -> Self {
        self.row_height_per_hour = row_height;
        self
    }

    /// Sets the debounce window for viewport reflow.
    #[must_use]
    pub fn with_reflow_debounce(mut self, debounce: f64) -> Self {
        self.reflow_debounce = debounce;
        self
    }

    pub fn validate(self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        if !self.hide_opacity.is_finite() || !(0.0..=1.0).contains(&self.hide_opacity) {
            return Err(TimelineError::InvalidData(
                "hide opacity must be finite and in [0, 1]".to_owned(),
            ));
        }

        if !self.x_bar_width_percentage.is_finite()
            || self.x_bar_width_percentage <= 0.0
            || self.x_bar_width_percentage > 1.0
        {
            return Err(TimelineError::InvalidData(
                "bar width percentage must be finite and in (0, 1]".to_owned(),
            ));
        }

        for (name, value) in [
            ("x left padding", self.x_left_padding),
            ("x right padding", self.x_right_padding),
            ("y top padding", self.y_top_padding),
            ("y bottom padding", self.y_bottom_padding),
            ("current marker height", self.current_marker_height),
            ("bar border radius", self.bar_border_radius),
            ("x axis tick size", self.x_axis_tick_size),
            ("y axis tick size", self.y_axis_tick_size),
            ("day name offset", self.day_name_offset),
            ("hover fade duration", self.hover_fade_duration),
            ("grow duration", self.grow_duration),
            ("reflow debounce", self.reflow_debounce),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        for (name, value) in [
            ("row height per hour", self.row_height_per_hour),
            (
                "current marker circle radius",
                self.current_marker_circle_radius,
            ),
            ("bar label font size", self.bar_label_font_size_px),
            ("hour label font size", self.hour_label_font_size_px),
            ("day number font size", self.day_number_font_size_px),
            ("day name font size", self.day_name_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_hide_opacity() -> f64 {
    0.25
}

fn default_x_left_padding() -> f64 {
    50.0
}

fn default_x_bar_width_percentage() -> f64 {
    0.8
}

fn default_current_marker_height() -> f64 {
    2.5
}

fn default_current_marker_circle_radius() -> f64 {
    6.0
}

fn default_bar_border_radius() -> f64 {
    5.0
}

fn default_axis_tick_size() -> f64 {
    10.0
}

fn default_row_height_per_hour() -> f64 {
    75.0
}

fn default_bar_label_font_size() -> f64 {
    12.0
}

fn default_hour_label_font_size() -> f64 {
    10.0
}

fn default_day_number_font_size() -> f64 {
    26.0
}

fn default_day_name_font_size() -> f64 {
    11.0
}

fn default_day_name_offset() -> f64 {
    50.0
}

fn default_transition_duration() -> f64 {
    1_000.0
}

fn default_reflow_debounce() -> f64 {
    400.0
}
