//! Gradient parsing module.

mod grammar;
mod scanner;
mod tokens;

use crate::Result;
use crate::types::GradientNode;
use grammar::GradientParser;

/// Parse a comma-separated list of CSS gradient values.
///
/// The whole input must consist of gradient definitions; a single trailing
/// `;` is ignored. Nodes are returned in source order.
///
/// # Errors
///
/// Returns [`Error::Parse`](crate::Error::Parse) on the first grammar
/// violation. The error carries the byte offset and the unconsumed input at
/// the failure point. No partial result is produced.
///
/// # Example
///
/// ```
/// use gradient_parser::prelude::*;
///
/// let nodes = parse("linear-gradient(to right bottom, red, blue)").unwrap();
///
/// assert_eq!(nodes.len(), 1);
/// assert_eq!(nodes[0].kind, GradientKind::LinearGradient);
/// assert_eq!(
///     nodes[0].orientation,
///     Some(Orientation::Linear(LinearOrientation::to("right bottom")))
/// );
/// ```
pub fn parse(input: &str) -> Result<Vec<GradientNode>> {
    let source = input.trim_end();
    let source = source.strip_suffix(';').unwrap_or(source);

    match GradientParser::new(source).parse_definitions() {
        Ok(nodes) => {
            tracing::debug!("Parsed {} gradient definition(s)", nodes.len());
            Ok(nodes)
        }
        Err(e) => {
            tracing::debug!("Gradient parse error: {}", e);
            Err(e)
        }
    }
}
