//! Anchored token patterns used by the gradient grammar.
//!
//! Every pattern starts with `^` and is matched against the unconsumed suffix
//! of the input, so a match always begins at the scanner position.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! tokens {
    ($($(#[$meta:meta])* $name:ident = $pattern:expr;)*) => {
        $(
            $(#[$meta])*
            pub(crate) static $name: LazyLock<Regex> =
                LazyLock::new(|| Regex::new($pattern).expect("token pattern must compile"));
        )*
    };
}

/// Signed decimal number: `10`, `-3.5`, `.5`, `1.`
macro_rules! number {
    () => {
        r"-?(?:[0-9]*\.[0-9]+|[0-9]+\.?)"
    };
}

tokens! {
    LINEAR_GRADIENT = r"(?i)^(?:-(webkit|o|ms|moz)-)?linear-gradient";
    REPEATING_LINEAR_GRADIENT = r"(?i)^(?:-(webkit|o|ms|moz)-)?repeating-linear-gradient";
    RADIAL_GRADIENT = r"(?i)^(?:-(webkit|o|ms|moz)-)?radial-gradient";
    REPEATING_RADIAL_GRADIENT = r"(?i)^(?:-(webkit|o|ms|moz)-)?repeating-radial-gradient";

    /// `to <side>` or `to <side> <side>`; group 1 is the direction text.
    SIDE_OR_CORNER =
        r"(?i)^to\s+((?:left|right)(?:\s+(?:top|bottom))?|(?:top|bottom)(?:\s+(?:left|right))?)";
    /// Bare keyword direction of prefixed legacy gradients.
    LEGACY_DIRECTION = r"(?i)^((?:left|center|right|top|bottom)(?:\s+(?:left|center|right|top|bottom))?)";
    EXTENT_KEYWORD = r"^(closest-side|closest-corner|farthest-side|farthest-corner|contain|cover)";
    POSITION_KEYWORD = r"(?i)^(left|center|right|top|bottom)";
    CIRCLE = r"(?i)^(circle)";
    ELLIPSE = r"(?i)^(ellipse)";
    AT = r"^at\b";

    PIXEL_VALUE = concat!("^(", number!(), ")px");
    PERCENTAGE_VALUE = concat!("^(", number!(), ")%");
    EM_VALUE = concat!("^(", number!(), ")em");
    ANGLE_VALUE = concat!("^(", number!(), ")deg");
    RADIAN_VALUE = concat!("^(", number!(), ")rad");
    NUMBER = concat!("^(", number!(), ")");

    START_CALL = r"^\(";
    END_CALL = r"^\)";
    COMMA = r"^,";

    HEX_COLOR = r"^#([0-9a-fA-F]+)";
    LITERAL_COLOR = r"^([a-zA-Z]+)";
    RGB_COLOR = r"(?i)^rgb";
    RGBA_COLOR = r"(?i)^rgba";
    HSL_COLOR = r"(?i)^hsl";
    HSLA_COLOR = r"(?i)^hsla";
    VAR_COLOR = r"(?i)^var";
    CALC_VALUE = r"(?i)^calc";
    /// Custom property reference inside `var()`, kept verbatim.
    VARIABLE_NAME = r"^(--[a-zA-Z0-9\-,\s#]+)";
}
