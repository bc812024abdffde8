//! Error types for gradient parsing.

/// Result type alias for gradient operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a gradient value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Gradient syntax error.
    #[error("{kind} at offset {offset}, remaining input: '{remaining}'")]
    Parse {
        /// What went wrong.
        kind: ParseErrorKind,
        /// Byte offset into the input where the failure was detected.
        offset: usize,
        /// The unconsumed input at the failure point.
        remaining: String,
    },
}

impl Error {
    /// Create a parse error.
    pub fn parse(kind: ParseErrorKind, offset: usize, remaining: impl Into<String>) -> Self {
        Self::Parse {
            kind,
            offset,
            remaining: remaining.into(),
        }
    }

    /// The kind of parse failure.
    pub fn kind(&self) -> &ParseErrorKind {
        match self {
            Self::Parse { kind, .. } => kind,
        }
    }

    /// Byte offset into the input where the failure was detected.
    pub fn offset(&self) -> usize {
        match self {
            Self::Parse { offset, .. } => *offset,
        }
    }

    /// The unconsumed input at the failure point.
    pub fn remaining(&self) -> &str {
        match self {
            Self::Parse { remaining, .. } => remaining,
        }
    }
}

/// The individual grammar violations reported by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// A function keyword was not followed by `(`.
    #[error("Missing (")]
    MissingOpenParen,

    /// A function body was not closed by `)`.
    #[error("Missing )")]
    MissingCloseParen,

    /// A comma in a listing was not followed by another item.
    #[error("One extra comma")]
    ExtraComma,

    /// A color stop did not start with a color.
    #[error("Expected color definition")]
    ExpectedColor,

    /// An orientation was given but not separated from the color stops.
    #[error("Missing comma before color stops")]
    MissingCommaBeforeColorStops,

    /// Text remained after the last gradient definition.
    #[error("Invalid input not EOF")]
    TrailingInput,

    /// `at` was not followed by a position.
    #[error("Missing positioning value")]
    MissingPositioning,

    /// The input ended inside a `calc()` expression.
    #[error("Missing closing parenthesis in calc() expression")]
    UnclosedCalc,

    /// An `hsl()`/`hsla()` hue was written as a percentage.
    #[error(
        "HSL hue value must be a number in degrees (0-360) or normalized (-360 to 360), not a percentage"
    )]
    HslHuePercentage,

    /// Saturation or lightness of `hsl()`/`hsla()` was not a percentage.
    #[error(
        "Expected percentage value for saturation and lightness in {}",
        hsl_function_name(.alpha)
    )]
    ExpectedHslPercentage {
        /// Whether the failing function was `hsla()`.
        alpha: bool,
    },

    /// `hsla()` ended without an alpha component.
    #[error("Expected alpha value in HSLA")]
    ExpectedAlpha,

    /// A numeric component was required.
    #[error("Expected number")]
    ExpectedNumber,

    /// `var()` did not contain a custom property name.
    #[error("Expected custom property name")]
    ExpectedVariableName,

    /// A radial gradient listed more than two orientation terms.
    #[error("Too many radial orientation terms")]
    TooManyRadialOrientations,

    /// A single gradient was requested but the input held none.
    #[error("Expected a gradient definition")]
    EmptyInput,

    /// A single gradient was requested but the input held several.
    #[error("Expected a single gradient definition")]
    MultipleDefinitions,
}

fn hsl_function_name(alpha: &bool) -> &'static str {
    if *alpha { "HSLA" } else { "HSL" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message_and_remaining() {
        let err = Error::parse(ParseErrorKind::TrailingInput, 27, "aaa");
        let text = err.to_string();

        assert!(text.contains("Invalid input not EOF"));
        assert!(text.contains("27"));
        assert!(text.contains("'aaa'"));
    }

    #[test]
    fn hsl_percentage_message_names_function() {
        assert_eq!(
            ParseErrorKind::ExpectedHslPercentage { alpha: false }.to_string(),
            "Expected percentage value for saturation and lightness in HSL"
        );
        assert_eq!(
            ParseErrorKind::ExpectedHslPercentage { alpha: true }.to_string(),
            "Expected percentage value for saturation and lightness in HSLA"
        );
    }

    #[test]
    fn accessors() {
        let err = Error::parse(ParseErrorKind::MissingCloseParen, 4, "red");
        assert_eq!(err.kind(), &ParseErrorKind::MissingCloseParen);
        assert_eq!(err.offset(), 4);
        assert_eq!(err.remaining(), "red");
    }
}
