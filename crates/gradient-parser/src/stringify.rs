//! Rendering gradient trees back to CSS text.
//!
//! Every node type implements [`Display`](fmt::Display); nested structures
//! render their children recursively. Optional parts that are absent render
//! as nothing, together with the separator that would have introduced them.

use crate::types::{
    AngleUnit, ColorStop, ColorValue, Distance, ExtentKeyword, GradientKind, GradientNode,
    LinearOrientation, Orientation, Position, RadialOrientation, ShapeKind, ShapeStyle,
    VendorPrefix,
};
use std::fmt;

/// Render a list of gradients as CSS text, separated by `, `.
///
/// An empty list renders as the empty string.
///
/// # Example
///
/// ```
/// use gradient_parser::{parse, stringify};
///
/// let nodes = parse("linear-gradient(to left, #fff, transparent)").unwrap();
/// assert_eq!(stringify(&nodes), "linear-gradient(to left, #fff, transparent)");
/// assert_eq!(stringify(&[]), "");
/// ```
pub fn stringify(nodes: &[GradientNode]) -> String {
    join(nodes)
}

/// Render items separated by `, `, skipping items that render empty.
fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for GradientNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{}", prefix)?;
        }
        write!(f, "{}(", self.kind)?;

        if let Some(orientation) = &self.orientation {
            let orientation = orientation.to_string();
            if !orientation.is_empty() {
                write!(f, "{}, ", orientation)?;
            }
        }

        write!(f, "{})", join(&self.color_stops))
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VendorPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Linear(linear) => write!(f, "{}", linear),
            Orientation::Radial(items) => f.write_str(&join(items)),
        }
    }
}

impl fmt::Display for LinearOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinearOrientation::Directional {
                value,
                legacy: false,
            } => write!(f, "to {}", value),
            LinearOrientation::Directional {
                value,
                legacy: true,
            } => f.write_str(value),
            LinearOrientation::Angular { value, unit } => write!(f, "{}{}", value, unit),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RadialOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadialOrientation::Shape { shape, style, .. } => {
                write!(f, "{}", shape)?;
                if let Some(style) = style {
                    write_prefixed(f, " ", style)?;
                }
            }
            RadialOrientation::Extent { keyword, .. } => write!(f, "{}", keyword)?,
            // A lone position needs no `at`.
            RadialOrientation::Default { at } => {
                if let Some(at) = at {
                    write!(f, "{}", at)?;
                }
                return Ok(());
            }
        }

        match self.at() {
            Some(at) => write_prefixed(f, " at ", at),
            None => Ok(()),
        }
    }
}

/// Write `value` preceded by `separator`, or nothing if it renders empty.
fn write_prefixed(
    f: &mut fmt::Formatter<'_>,
    separator: &str,
    value: &impl fmt::Display,
) -> fmt::Result {
    let text = value.to_string();
    if text.is_empty() {
        return Ok(());
    }
    write!(f, "{}{}", separator, text)
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ShapeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeStyle::Distance(distance) => write!(f, "{}", distance),
            ShapeStyle::Position(position) => write!(f, "{}", position),
            ShapeStyle::Extent(keyword) => write!(f, "{}", keyword),
        }
    }
}

impl fmt::Display for ExtentKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.x, &self.y) {
            (Some(x), Some(y)) => write!(f, "{} {}", x, y),
            (Some(only), None) | (None, Some(only)) => write!(f, "{}", only),
            (None, None) => Ok(()),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Calc(expression) => write!(f, "calc({})", expression),
            Distance::PositionKeyword(keyword) => f.write_str(keyword),
            Distance::Percentage(value) | Distance::Px(value) | Distance::Em(value) => {
                write!(f, "{}{}", value, self.unit().unwrap_or_default())
            }
        }
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)?;
        match &self.length {
            Some(length) => write_prefixed(f, " ", length),
            None => Ok(()),
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Literal(name) => f.write_str(name),
            ColorValue::Hex(digits) => write!(f, "#{}", digits),
            ColorValue::Rgb(values) => write!(f, "rgb({})", values.join(", ")),
            ColorValue::Rgba(values) => write!(f, "rgba({})", values.join(", ")),
            ColorValue::Hsl([hue, saturation, lightness]) => {
                write!(f, "hsl({}, {}%, {}%)", hue, saturation, lightness)
            }
            ColorValue::Hsla([hue, saturation, lightness, alpha]) => {
                write!(f, "hsla({}, {}%, {}%, {})", hue, saturation, lightness, alpha)
            }
            ColorValue::Var(name) => write!(f, "var({})", name),
        }
    }
}
