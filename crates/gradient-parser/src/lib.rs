//! Parser and serializer for CSS gradient values.
//!
//! This crate turns CSS `<gradient>` values into a typed syntax tree and
//! renders such trees back to CSS text:
//!
//! - **Gradients**: `linear-gradient`, `radial-gradient` and their
//!   `repeating-*` variants, with or without `-webkit-`/`-moz-`/`-o-`/`-ms-`
//!   prefixes
//! - **Orientations**: `to <side-or-corner>`, legacy bare keywords, `deg` and
//!   `rad` angles, radial shapes, extent keywords and positions
//! - **Colors**: hex, `rgb()`, `rgba()`, `hsl()`, `hsla()`, `var()` and named
//!   colors, each with an optional `%`/`px`/`em`/`calc()` stop position
//!
//! Values are kept as written. Nothing is evaluated: `calc()` expressions and
//! `var()` references are stored verbatim, and numbers stay text.
//!
//! # Example
//!
//! ```
//! use gradient_parser::prelude::*;
//!
//! let nodes = parse("radial-gradient(circle at 87.23px -58.3px, red, blue)")?;
//!
//! assert_eq!(nodes[0].kind, GradientKind::RadialGradient);
//! assert_eq!(
//!     stringify(&nodes),
//!     "radial-gradient(circle at 87.23px -58.3px, red, blue)"
//! );
//! # Ok::<(), gradient_parser::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every tree type, in the
//!   `{ "type": ..., "value": ... }` shape used by JavaScript gradient parsers.

pub mod parser;
pub mod stringify;
pub mod types;

mod error;

use std::str::FromStr;

pub use error::{Error, ParseErrorKind, Result};
pub use parser::parse;
pub use stringify::stringify;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::types::{
        AngleUnit, ColorStop, ColorValue, Distance, ExtentKeyword, GradientKind, GradientNode,
        LinearOrientation, Orientation, Position, RadialOrientation, ShapeKind, ShapeStyle,
        VendorPrefix,
    };
    pub use crate::{Error, ParseErrorKind, Result, parse, stringify};
}

impl FromStr for types::GradientNode {
    type Err = Error;

    /// Parse exactly one gradient definition.
    fn from_str(s: &str) -> Result<Self> {
        let mut nodes = parse(s)?;

        match nodes.len() {
            1 => Ok(nodes.remove(0)),
            0 => Err(Error::parse(ParseErrorKind::EmptyInput, 0, s)),
            _ => Err(Error::parse(ParseErrorKind::MultipleDefinitions, 0, s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn from_str_single_gradient() {
        let node: GradientNode = "linear-gradient(45deg, red, blue)".parse().unwrap();

        assert_eq!(
            node.orientation,
            Some(Orientation::Linear(LinearOrientation::deg("45")))
        );
    }

    #[test]
    fn from_str_rejects_lists() {
        let err = "linear-gradient(red), linear-gradient(blue)"
            .parse::<GradientNode>()
            .unwrap_err();
        assert_eq!(err.kind(), &ParseErrorKind::MultipleDefinitions);

        let err = "".parse::<GradientNode>().unwrap_err();
        assert_eq!(err.kind(), &ParseErrorKind::EmptyInput);
    }

    #[test]
    fn from_str_propagates_parse_errors() {
        let err = "linear-gradient(red,)".parse::<GradientNode>().unwrap_err();
        assert_eq!(err.kind(), &ParseErrorKind::ExpectedColor);
    }
}
