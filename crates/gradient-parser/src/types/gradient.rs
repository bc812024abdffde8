//! Gradient nodes and their orientations.

use super::{AngleUnit, ColorStop, Distance, ExtentKeyword, Position};

/// The four gradient functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum GradientKind {
    LinearGradient,
    RepeatingLinearGradient,
    RadialGradient,
    RepeatingRadialGradient,
}

impl GradientKind {
    /// The CSS function name, without vendor prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LinearGradient => "linear-gradient",
            Self::RepeatingLinearGradient => "repeating-linear-gradient",
            Self::RadialGradient => "radial-gradient",
            Self::RepeatingRadialGradient => "repeating-radial-gradient",
        }
    }

    /// Whether this is a radial gradient function.
    pub fn is_radial(&self) -> bool {
        matches!(self, Self::RadialGradient | Self::RepeatingRadialGradient)
    }
}

/// Browser vendor prefix on a legacy gradient function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum VendorPrefix {
    Webkit,
    Moz,
    O,
    Ms,
}

impl VendorPrefix {
    /// Parse a vendor name (`webkit`, `moz`, `o`, `ms`), ignoring case.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "webkit" => Some(Self::Webkit),
            "moz" => Some(Self::Moz),
            "o" => Some(Self::O),
            "ms" => Some(Self::Ms),
            _ => None,
        }
    }

    /// The prefix as written before the function name, dashes included.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Webkit => "-webkit-",
            Self::Moz => "-moz-",
            Self::O => "-o-",
            Self::Ms => "-ms-",
        }
    }
}

/// One parsed `<gradient>(...)` call.
///
/// # Example
///
/// ```
/// use gradient_parser::prelude::*;
///
/// let node = GradientNode::new(GradientKind::LinearGradient)
///     .with_orientation(Orientation::Linear(LinearOrientation::to("right")))
///     .with_stop(ColorValue::literal("red"))
///     .with_stop(ColorValue::literal("blue"));
///
/// assert_eq!(node.to_string(), "linear-gradient(to right, red, blue)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GradientNode {
    /// Which gradient function this is.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: GradientKind,
    /// Vendor prefix the function was written with.
    pub prefix: Option<VendorPrefix>,
    /// Direction, shape or position clause before the color stops.
    pub orientation: Option<Orientation>,
    /// Color stops in source order.
    pub color_stops: Vec<ColorStop>,
}

impl GradientNode {
    /// Create a node with no orientation and no stops.
    pub fn new(kind: GradientKind) -> Self {
        Self {
            kind,
            prefix: None,
            orientation: None,
            color_stops: vec![],
        }
    }

    /// Set the vendor prefix.
    pub fn with_prefix(mut self, prefix: VendorPrefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Append a color stop.
    pub fn with_stop(mut self, stop: impl Into<ColorStop>) -> Self {
        self.color_stops.push(stop.into());
        self
    }
}

/// The clause that precedes the color stops.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Orientation {
    /// Direction of a linear gradient.
    Linear(LinearOrientation),
    /// One or two radial shape/size/position terms.
    Radial(Vec<RadialOrientation>),
}

/// Direction of a linear gradient.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "kebab-case")
)]
pub enum LinearOrientation {
    /// Side or corner such as `right` or `left top`.
    ///
    /// `legacy` is set for the bare keyword syntax of prefixed gradients,
    /// which is written without `to`.
    Directional { value: String, legacy: bool },
    /// Angle with its unit split off; the sign is kept.
    Angular { value: String, unit: AngleUnit },
}

impl LinearOrientation {
    /// A modern `to <side-or-corner>` direction.
    pub fn to(value: impl Into<String>) -> Self {
        Self::Directional {
            value: value.into(),
            legacy: false,
        }
    }

    /// A legacy bare keyword direction.
    pub fn legacy(value: impl Into<String>) -> Self {
        Self::Directional {
            value: value.into(),
            legacy: true,
        }
    }

    /// An angle in degrees.
    pub fn deg(value: impl Into<String>) -> Self {
        Self::Angular {
            value: value.into(),
            unit: AngleUnit::Deg,
        }
    }

    /// An angle in radians.
    pub fn rad(value: impl Into<String>) -> Self {
        Self::Angular {
            value: value.into(),
            unit: AngleUnit::Rad,
        }
    }
}

/// `circle` or `ellipse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ShapeKind {
    Circle,
    Ellipse,
}

impl ShapeKind {
    /// The CSS keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
        }
    }
}

/// Size given after `circle` or `ellipse`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum ShapeStyle {
    /// A single length (`circle 10px`).
    Distance(Distance),
    /// One or two lengths (`ellipse 40px 134px`).
    Position(Position),
    /// A sizing keyword (`circle cover`).
    Extent(ExtentKeyword),
}

/// One term of a radial gradient's orientation list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "kebab-case")
)]
pub enum RadialOrientation {
    /// Explicit `circle`/`ellipse`, optionally sized and positioned.
    Shape {
        #[cfg_attr(feature = "serde", serde(rename = "value"))]
        shape: ShapeKind,
        style: Option<ShapeStyle>,
        at: Option<Position>,
    },
    /// A bare extent keyword, optionally positioned.
    #[cfg_attr(feature = "serde", serde(rename = "extent-keyword"))]
    Extent {
        #[cfg_attr(feature = "serde", serde(rename = "value"))]
        keyword: ExtentKeyword,
        at: Option<Position>,
    },
    /// Only a position, with or without a leading `at`.
    #[cfg_attr(feature = "serde", serde(rename = "default-radial"))]
    Default { at: Option<Position> },
}

impl RadialOrientation {
    /// The position the term is centered at, if any.
    pub fn at(&self) -> Option<&Position> {
        match self {
            Self::Shape { at, .. } | Self::Extent { at, .. } | Self::Default { at } => at.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radial_orientation_position() {
        let center = Position::new(Some(Distance::keyword("center")), None);

        let shape = RadialOrientation::Shape {
            shape: ShapeKind::Circle,
            style: None,
            at: Some(center.clone()),
        };
        assert_eq!(shape.at(), Some(&center));

        let extent = RadialOrientation::Extent {
            keyword: ExtentKeyword::Cover,
            at: None,
        };
        assert_eq!(extent.at(), None);

        let default = RadialOrientation::Default {
            at: Some(center.clone()),
        };
        assert_eq!(default.at(), Some(&center));
    }

    #[test]
    fn vendor_prefix_ignores_case() {
        assert_eq!(VendorPrefix::from_css("WebKit"), Some(VendorPrefix::Webkit));
        assert_eq!(VendorPrefix::from_css("khtml"), None);
        assert_eq!(VendorPrefix::Moz.as_str(), "-moz-");
    }
}
