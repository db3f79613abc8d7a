use crate::error::{TimelineError, TimelineResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Parses a `#RRGGBB` or `#RRGGBBAA` hex string.
    pub fn from_hex(hex: &str) -> TimelineResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(TimelineError::InvalidData(format!(
                "hex color must be 6 or 8 digits: `{hex}`"
            )));
        }

        let channel = |range: std::ops::Range<usize>| -> TimelineResult<f64> {
            u8::from_str_radix(&digits[range], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| TimelineError::InvalidData(format!("invalid hex color: `{hex}`")))
        };

        let alpha = if digits.len() == 8 {
            channel(6..8)?
        } else {
            1.0
        };
        Ok(Self::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, alpha))
    }

    pub fn validate(self) -> TimelineResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TimelineError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> TimelineResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(TimelineError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(TimelineError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled rectangle in pixel space.
///
/// `opacity` multiplies the alpha of both fill and border; the hover fade
/// dims bars through it without rewriting their colors. Height may be zero:
/// bars start collapsed when the grow animation is armed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub opacity: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            corner_radius: 0.0,
            fill_color,
            border_width: 0.0,
            border_color: Color::BLACK,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn validate(self) -> TimelineResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TimelineError::InvalidData(
                "rect position must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || self.width < 0.0 || !self.height.is_finite() || self.height < 0.0
        {
            return Err(TimelineError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(TimelineError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(TimelineError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(TimelineError::InvalidData(
                "rect opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Draw command for one filled circle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, fill_color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill_color,
        }
    }

    pub fn validate(self) -> TimelineResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(TimelineError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(TimelineError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub opacity: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.text.is_empty() {
            return Err(TimelineError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TimelineError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(TimelineError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(TimelineError::InvalidData(
                "text opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, RectPrimitive};

    #[test]
    fn hex_colors_parse_both_lengths() {
        let opaque = Color::from_hex("#EA4334").expect("6-digit hex");
        assert!((opaque.red - 234.0 / 255.0).abs() < 1e-9);
        assert!((opaque.alpha - 1.0).abs() < 1e-9);

        let translucent = Color::from_hex("0099F380").expect("8-digit hex");
        assert!((translucent.alpha - 128.0 / 255.0).abs() < 1e-9);

        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn zero_height_rect_is_valid_but_bad_opacity_is_not() {
        let rect = RectPrimitive::new(0.0, 0.0, 10.0, 0.0, Color::BLACK);
        assert!(rect.validate().is_ok());

        let dimmed = rect.with_opacity(1.5);
        assert!(dimmed.validate().is_err());
    }
}
