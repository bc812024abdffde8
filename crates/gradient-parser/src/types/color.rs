//! Color values and color stops.

use super::Distance;

/// A color as written in a gradient. Components are kept as source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "value", rename_all = "kebab-case")
)]
pub enum ColorValue {
    /// Named color or keyword (`red`, `transparent`).
    Literal(String),
    /// Hex digits without the leading `#`.
    Hex(String),
    /// `rgb()` components.
    Rgb(Vec<String>),
    /// `rgba()` components.
    Rgba(Vec<String>),
    /// `hsl()` hue, saturation and lightness; percentages without the `%`.
    Hsl([String; 3]),
    /// `hsla()` hue, saturation, lightness and alpha.
    Hsla([String; 4]),
    /// `var()` custom property reference, unevaluated.
    Var(String),
}

impl ColorValue {
    /// Create a literal color.
    pub fn literal(name: impl Into<String>) -> Self {
        Self::Literal(name.into())
    }

    /// Create a hex color from its digits.
    pub fn hex(digits: impl Into<String>) -> Self {
        Self::Hex(digits.into())
    }

    /// Create an `rgb()` color.
    pub fn rgb<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::Rgb(values.into_iter().map(Into::into).collect())
    }

    /// Create an `rgba()` color.
    pub fn rgba<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::Rgba(values.into_iter().map(Into::into).collect())
    }

    /// The CSS function or notation this color uses.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Hex(_) => "hex",
            Self::Rgb(_) => "rgb",
            Self::Rgba(_) => "rgba",
            Self::Hsl(_) => "hsl",
            Self::Hsla(_) => "hsla",
            Self::Var(_) => "var",
        }
    }
}

/// A color with an optional position along the gradient line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStop {
    /// The stop color.
    pub color: ColorValue,
    /// Where the stop sits, if given.
    pub length: Option<Distance>,
}

impl ColorStop {
    /// Create a stop without a length.
    pub fn new(color: ColorValue) -> Self {
        Self {
            color,
            length: None,
        }
    }

    /// Set the stop length.
    pub fn with_length(mut self, length: Distance) -> Self {
        self.length = Some(length);
        self
    }
}

impl From<ColorValue> for ColorStop {
    fn from(color: ColorValue) -> Self {
        Self::new(color)
    }
}
