//! Gradient syntax tree.
//!
//! Every grammar production maps to one Rust type or enum variant. Trees are
//! plain owned values: they hold no references into the parsed text and can
//! be built by hand as well as by [`parse`](crate::parse).

mod color;
mod distance;
mod gradient;

pub use color::{ColorStop, ColorValue};
pub use distance::{AngleUnit, Distance, ExtentKeyword, Position};
pub use gradient::{
    GradientKind, GradientNode, LinearOrientation, Orientation, RadialOrientation, ShapeKind,
    ShapeStyle, VendorPrefix,
};
