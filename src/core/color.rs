use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// RGBA color with 8-bit channels and alpha in `0..=1`.
///
/// Serializes as a CSS color string, the form rendering engines consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rgb` or `#rrggbb`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().strip_prefix('#').ok_or_else(|| {
            ChartError::InvalidData(format!("hex color `{input}` must start with `#`"))
        })?;
        if !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!("invalid hex color `{input}`")));
        }
        let channel = |text: &str| {
            u8::from_str_radix(text, 16)
                .map_err(|_| ChartError::InvalidData(format!("invalid hex color `{input}`")))
        };
        match digits.len() {
            3 => {
                let expand = |index: usize| channel(&digits[index..=index].repeat(2));
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(ChartError::InvalidData(format!(
                "hex color `{input}` must have 3 or 6 digits"
            ))),
        }
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ChartError::InvalidData(
                "color alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }

        let (body, has_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(ChartError::InvalidData(format!(
                "unsupported color syntax `{input}`"
            )));
        };
        let body = body.strip_suffix(')').ok_or_else(|| {
            ChartError::InvalidData(format!("unterminated color function `{input}`"))
        })?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if has_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(ChartError::InvalidData(format!(
                "color `{input}` must have {expected} components"
            )));
        }
        let channel = |text: &str| {
            text.parse::<u8>()
                .map_err(|_| ChartError::InvalidData(format!("invalid color channel `{text}`")))
        };
        let alpha = if has_alpha {
            parts[3]
                .parse::<f64>()
                .map_err(|_| ChartError::InvalidData(format!("invalid alpha `{}`", parts[3])))?
        } else {
            1.0
        };

        let color = Self::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, alpha);
        color.validate()?;
        Ok(color)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
