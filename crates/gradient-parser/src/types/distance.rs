//! Lengths, positions and keywords shared by gradient orientations and stops.
//!
//! Numeric values are kept exactly as they were written (`"87.23"`, `".5"`,
//! `"-58.3"`) with the unit split off; nothing is converted to floating point.
//!
//! # Example
//!
//! ```
//! use gradient_parser::prelude::*;
//!
//! let at = Position::new(Some(Distance::px("87.23")), Some(Distance::px("-58.3")));
//! assert_eq!(at.to_string(), "87.23px -58.3px");
//! ```

/// A distance used for positions, shape sizes and color stop offsets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "value", rename_all = "kebab-case")
)]
pub enum Distance {
    /// `50%`
    #[cfg_attr(feature = "serde", serde(rename = "%"))]
    Percentage(String),
    /// `left`, `center`, `right`, `top` or `bottom`, as written.
    PositionKeyword(String),
    /// `calc(...)` with the raw, unevaluated expression.
    Calc(String),
    /// `10px`
    Px(String),
    /// `1.5em`
    Em(String),
}

impl Distance {
    /// Create a percentage distance.
    pub fn percentage(value: impl Into<String>) -> Self {
        Self::Percentage(value.into())
    }

    /// Create a position keyword distance.
    pub fn keyword(value: impl Into<String>) -> Self {
        Self::PositionKeyword(value.into())
    }

    /// Create a `calc()` distance from its raw expression.
    pub fn calc(expression: impl Into<String>) -> Self {
        Self::Calc(expression.into())
    }

    /// Create a pixel distance.
    pub fn px(value: impl Into<String>) -> Self {
        Self::Px(value.into())
    }

    /// Create an em distance.
    pub fn em(value: impl Into<String>) -> Self {
        Self::Em(value.into())
    }

    /// The stored text: number without unit, keyword, or calc expression.
    pub fn value(&self) -> &str {
        match self {
            Self::Percentage(v)
            | Self::PositionKeyword(v)
            | Self::Calc(v)
            | Self::Px(v)
            | Self::Em(v) => v,
        }
    }

    /// The unit suffix written after the value, if any.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Self::Percentage(_) => Some("%"),
            Self::Px(_) => Some("px"),
            Self::Em(_) => Some("em"),
            Self::PositionKeyword(_) | Self::Calc(_) => None,
        }
    }
}

/// A one- or two-component position (`center`, `50% 96%`, `87.23px -58.3px`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Horizontal component.
    pub x: Option<Distance>,
    /// Vertical component.
    pub y: Option<Distance>,
}

impl Position {
    /// Create a position from its components.
    pub fn new(x: Option<Distance>, y: Option<Distance>) -> Self {
        Self { x, y }
    }

    /// Create a position with both components set.
    pub fn xy(x: Distance, y: Distance) -> Self {
        Self::new(Some(x), Some(y))
    }

    /// Whether neither component is set.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// Radial gradient sizing keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ExtentKeyword {
    ClosestSide,
    ClosestCorner,
    FarthestSide,
    FarthestCorner,
    Contain,
    Cover,
}

impl ExtentKeyword {
    /// Parse an extent keyword from CSS text. Matching is case-sensitive.
    pub fn from_css(s: &str) -> Option<Self> {
        match s {
            "closest-side" => Some(Self::ClosestSide),
            "closest-corner" => Some(Self::ClosestCorner),
            "farthest-side" => Some(Self::FarthestSide),
            "farthest-corner" => Some(Self::FarthestCorner),
            "contain" => Some(Self::Contain),
            "cover" => Some(Self::Cover),
            _ => None,
        }
    }

    /// The CSS keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClosestSide => "closest-side",
            Self::ClosestCorner => "closest-corner",
            Self::FarthestSide => "farthest-side",
            Self::FarthestCorner => "farthest-corner",
            Self::Contain => "contain",
            Self::Cover => "cover",
        }
    }
}

/// Unit of a linear gradient angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AngleUnit {
    #[default]
    Deg,
    Rad,
}

impl AngleUnit {
    /// The CSS unit suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deg => "deg",
            Self::Rad => "rad",
        }
    }
}
