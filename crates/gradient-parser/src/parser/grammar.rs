//! Recursive-descent gradient grammar.
//!
//! Each `match_*` rule either recognizes its production at the scanner
//! position and returns `Ok(Some(..))`, returns `Ok(None)` when the
//! production is absent, or fails the whole parse with an [`Error`] once the
//! input is known to be malformed. There is no error recovery: the first
//! violation aborts the call.

use super::scanner::Scanner;
use super::tokens;
use crate::error::ParseErrorKind;
use crate::types::{
    AngleUnit, ColorStop, ColorValue, Distance, ExtentKeyword, GradientKind, GradientNode,
    LinearOrientation, Orientation, Position, RadialOrientation, ShapeKind, ShapeStyle,
    VendorPrefix,
};
use crate::{Error, Result};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Gradient functions in the order they are tried.
static DEFINITIONS: [(GradientKind, &LazyLock<Regex>); 4] = [
    (GradientKind::LinearGradient, &tokens::LINEAR_GRADIENT),
    (
        GradientKind::RepeatingLinearGradient,
        &tokens::REPEATING_LINEAR_GRADIENT,
    ),
    (GradientKind::RadialGradient, &tokens::RADIAL_GRADIENT),
    (
        GradientKind::RepeatingRadialGradient,
        &tokens::REPEATING_RADIAL_GRADIENT,
    ),
];

/// Parser state for a single `parse` call.
pub(crate) struct GradientParser<'i> {
    scanner: Scanner<'i>,
}

impl<'i> GradientParser<'i> {
    pub fn new(input: &'i str) -> Self {
        Self {
            scanner: Scanner::new(input),
        }
    }

    /// Parse the whole input as a comma-separated list of gradients.
    pub fn parse_definitions(&mut self) -> Result<Vec<GradientNode>> {
        let nodes = self.match_listing(Self::match_definition)?;

        if !self.scanner.is_exhausted() {
            return Err(self.error(ParseErrorKind::TrailingInput));
        }

        Ok(nodes)
    }

    fn error(&self, kind: ParseErrorKind) -> Error {
        Error::parse(kind, self.scanner.offset(), self.scanner.remaining())
    }

    fn comma(&mut self) -> bool {
        self.scanner.scan(&tokens::COMMA).is_some()
    }

    /// Match `matcher` one or more times separated by commas.
    ///
    /// An absent first item yields an empty list; an absent item after a
    /// comma is an error.
    fn match_listing<T>(
        &mut self,
        mut matcher: impl FnMut(&mut Self) -> Result<Option<T>>,
    ) -> Result<Vec<T>> {
        let mut items = vec![];

        let Some(first) = matcher(self)? else {
            return Ok(items);
        };
        items.push(first);

        while self.comma() {
            match matcher(self)? {
                Some(item) => items.push(item),
                None => return Err(self.error(ParseErrorKind::ExtraComma)),
            }
        }

        Ok(items)
    }

    /// Match `keyword(` ... `)`, running `body` between the parentheses.
    fn match_call<T>(
        &mut self,
        pattern: &Regex,
        body: impl FnOnce(&mut Self, Captures<'i>) -> Result<T>,
    ) -> Result<Option<T>> {
        let Some(captures) = self.scanner.scan(pattern) else {
            return Ok(None);
        };

        if self.scanner.scan(&tokens::START_CALL).is_none() {
            return Err(self.error(ParseErrorKind::MissingOpenParen));
        }

        let result = body(self, captures)?;

        if self.scanner.scan(&tokens::END_CALL).is_none() {
            return Err(self.error(ParseErrorKind::MissingCloseParen));
        }

        Ok(Some(result))
    }

    fn match_definition(&mut self) -> Result<Option<GradientNode>> {
        for (kind, pattern) in &DEFINITIONS {
            if let Some(node) = self.match_gradient(*kind, pattern)? {
                return Ok(Some(node));
            }
        }
        Ok(None)
    }

    fn match_gradient(
        &mut self,
        kind: GradientKind,
        pattern: &Regex,
    ) -> Result<Option<GradientNode>> {
        self.match_call(pattern, |parser, captures| {
            let prefix = captures
                .get(1)
                .and_then(|m| VendorPrefix::from_css(m.as_str()));

            let orientation = if kind.is_radial() {
                parser.match_list_radial_orientations()?
            } else {
                parser.match_linear_orientation().map(Orientation::Linear)
            };

            if orientation.is_some() && !parser.comma() {
                return Err(parser.error(ParseErrorKind::MissingCommaBeforeColorStops));
            }

            let color_stops = parser.match_listing(Self::match_color_stop)?;

            Ok(GradientNode {
                kind,
                prefix,
                orientation,
                color_stops,
            })
        })
    }

    // === Linear orientation ===

    fn match_linear_orientation(&mut self) -> Option<LinearOrientation> {
        if let Some(value) = self.scanner.scan_group(&tokens::SIDE_OR_CORNER, 1) {
            return Some(LinearOrientation::to(value));
        }

        if let Some(value) = self.scanner.scan_group(&tokens::LEGACY_DIRECTION, 1) {
            return Some(LinearOrientation::legacy(value));
        }

        self.match_angle()
    }

    fn match_angle(&mut self) -> Option<LinearOrientation> {
        if let Some(value) = self.scanner.scan_group(&tokens::ANGLE_VALUE, 1) {
            return Some(LinearOrientation::Angular {
                value: value.to_string(),
                unit: AngleUnit::Deg,
            });
        }

        self.scanner
            .scan_group(&tokens::RADIAN_VALUE, 1)
            .map(|value| LinearOrientation::Angular {
                value: value.to_string(),
                unit: AngleUnit::Rad,
            })
    }

    // === Radial orientation ===

    /// Match one or two radial orientation terms.
    ///
    /// A comma after the first term is ambiguous: it either introduces a
    /// second term or separates the orientation from the color stops. The
    /// second term is tried speculatively and the comma is given back when
    /// it does not match.
    fn match_list_radial_orientations(&mut self) -> Result<Option<Orientation>> {
        let Some(first) = self.match_radial_orientation()? else {
            return Ok(None);
        };
        let mut orientations = vec![first];

        if let Some(second) = self.try_next_radial_orientation()? {
            orientations.push(second);

            let checkpoint = self.scanner.checkpoint();
            if self.try_next_radial_orientation()?.is_some() {
                // Report at the start of the rejected term.
                self.scanner.rewind(checkpoint);
                self.comma();
                self.scanner.skip_whitespace();
                return Err(self.error(ParseErrorKind::TooManyRadialOrientations));
            }
        }

        Ok(Some(Orientation::Radial(orientations)))
    }

    /// Match `, <radial-orientation>`, rewinding past the comma on failure.
    fn try_next_radial_orientation(&mut self) -> Result<Option<RadialOrientation>> {
        let checkpoint = self.scanner.checkpoint();

        if self.comma() {
            if let Some(orientation) = self.match_radial_orientation()? {
                return Ok(Some(orientation));
            }
            tracing::trace!(
                "no radial orientation after comma at offset {}, rewinding",
                self.scanner.offset()
            );
        }

        self.scanner.rewind(checkpoint);
        Ok(None)
    }

    fn match_radial_orientation(&mut self) -> Result<Option<RadialOrientation>> {
        if let Some((shape, style)) = self.match_shape()? {
            let at = self.match_at_position()?;
            return Ok(Some(RadialOrientation::Shape { shape, style, at }));
        }

        if let Some(keyword) = self.match_extent_keyword() {
            let at = self.match_at_position()?;
            return Ok(Some(RadialOrientation::Extent { keyword, at }));
        }

        // Browsers serialize a lone position both with and without `at`.
        if let Some(at) = self.match_at_position()? {
            return Ok(Some(RadialOrientation::Default { at: Some(at) }));
        }

        Ok(self
            .match_positioning()?
            .map(|at| RadialOrientation::Default { at: Some(at) }))
    }

    fn match_shape(&mut self) -> Result<Option<(ShapeKind, Option<ShapeStyle>)>> {
        if self.scanner.scan(&tokens::CIRCLE).is_some() {
            let style = match self.match_length() {
                Some(length) => Some(ShapeStyle::Distance(length)),
                None => self.match_extent_keyword().map(ShapeStyle::Extent),
            };
            return Ok(Some((ShapeKind::Circle, style)));
        }

        if self.scanner.scan(&tokens::ELLIPSE).is_some() {
            let style = match self.match_positioning()? {
                Some(size) => Some(ShapeStyle::Position(size)),
                None => self.match_extent_keyword().map(ShapeStyle::Extent),
            };
            return Ok(Some((ShapeKind::Ellipse, style)));
        }

        Ok(None)
    }

    fn match_extent_keyword(&mut self) -> Option<ExtentKeyword> {
        self.scanner
            .scan_group(&tokens::EXTENT_KEYWORD, 1)
            .and_then(ExtentKeyword::from_css)
    }

    fn match_at_position(&mut self) -> Result<Option<Position>> {
        if self.scanner.scan(&tokens::AT).is_none() {
            return Ok(None);
        }

        match self.match_positioning()? {
            Some(position) => Ok(Some(position)),
            None => Err(self.error(ParseErrorKind::MissingPositioning)),
        }
    }

    /// Match up to two consecutive distances.
    fn match_positioning(&mut self) -> Result<Option<Position>> {
        let x = self.match_distance()?;
        let y = self.match_distance()?;
        let position = Position::new(x, y);

        Ok((!position.is_empty()).then_some(position))
    }

    // === Distances ===

    fn match_distance(&mut self) -> Result<Option<Distance>> {
        if let Some(value) = self.scanner.scan_group(&tokens::PERCENTAGE_VALUE, 1) {
            return Ok(Some(Distance::percentage(value)));
        }

        if let Some(value) = self.scanner.scan_group(&tokens::POSITION_KEYWORD, 1) {
            return Ok(Some(Distance::keyword(value)));
        }

        if let Some(calc) = self.match_calc()? {
            return Ok(Some(calc));
        }

        Ok(self.match_length())
    }

    fn match_length(&mut self) -> Option<Distance> {
        if let Some(value) = self.scanner.scan_group(&tokens::PIXEL_VALUE, 1) {
            return Some(Distance::px(value));
        }

        self.scanner
            .scan_group(&tokens::EM_VALUE, 1)
            .map(Distance::em)
    }

    /// Match `calc(...)`, keeping the expression text verbatim.
    fn match_calc(&mut self) -> Result<Option<Distance>> {
        self.match_call(&tokens::CALC_VALUE, |parser, _| {
            let rest = parser.scanner.remaining();
            let mut depth = 1usize;
            let mut end = None;

            for (index, c) in rest.char_indices() {
                match c {
                    '(' => depth += 1,
                    ')' => {
                        depth -= 1;
                        if depth == 0 {
                            end = Some(index);
                            break;
                        }
                    }
                    _ => {}
                }
            }

            let Some(end) = end else {
                return Err(parser.error(ParseErrorKind::UnclosedCalc));
            };

            // The closing parenthesis is left for `match_call`.
            parser.scanner.advance(end);
            Ok(Distance::calc(&rest[..end]))
        })
    }

    // === Colors ===

    fn match_color_stop(&mut self) -> Result<Option<ColorStop>> {
        let Some(color) = self.match_color()? else {
            return Err(self.error(ParseErrorKind::ExpectedColor));
        };

        let length = self.match_distance()?;
        Ok(Some(ColorStop { color, length }))
    }

    /// Match a color. Function forms are tried before the bare literal,
    /// which would otherwise swallow their names.
    fn match_color(&mut self) -> Result<Option<ColorValue>> {
        if let Some(digits) = self.scanner.scan_group(&tokens::HEX_COLOR, 1) {
            return Ok(Some(ColorValue::hex(digits)));
        }

        if let Some(color) = self.match_hsl_color(true)? {
            return Ok(Some(color));
        }
        if let Some(color) = self.match_hsl_color(false)? {
            return Ok(Some(color));
        }

        if let Some(values) = self.match_numbers_call(&tokens::RGBA_COLOR)? {
            return Ok(Some(ColorValue::Rgba(values)));
        }
        if let Some(values) = self.match_numbers_call(&tokens::RGB_COLOR)? {
            return Ok(Some(ColorValue::Rgb(values)));
        }

        if let Some(color) = self.match_var_color()? {
            return Ok(Some(color));
        }

        Ok(self
            .scanner
            .scan_group(&tokens::LITERAL_COLOR, 1)
            .map(ColorValue::literal))
    }

    /// `rgb()`/`rgba()` bodies: a listing of bare numbers.
    fn match_numbers_call(&mut self, pattern: &Regex) -> Result<Option<Vec<String>>> {
        self.match_call(pattern, |parser, _| {
            let values = parser.match_listing(|p| Ok(p.match_number()))?;
            if values.is_empty() {
                return Err(parser.error(ParseErrorKind::ExpectedNumber));
            }
            Ok(values)
        })
    }

    fn match_hsl_color(&mut self, alpha: bool) -> Result<Option<ColorValue>> {
        let pattern: &Regex = if alpha {
            &tokens::HSLA_COLOR
        } else {
            &tokens::HSL_COLOR
        };

        self.match_call(pattern, |parser, _| {
            if parser.scanner.scan(&tokens::PERCENTAGE_VALUE).is_some() {
                return Err(parser.error(ParseErrorKind::HslHuePercentage));
            }

            let Some(hue) = parser.match_number() else {
                return Err(parser.error(ParseErrorKind::ExpectedNumber));
            };

            // Component commas are optional.
            parser.comma();
            let saturation = parser.match_percentage();
            parser.comma();
            let lightness = parser.match_percentage();

            let (Some(saturation), Some(lightness)) = (saturation, lightness) else {
                return Err(parser.error(ParseErrorKind::ExpectedHslPercentage { alpha }));
            };

            if !alpha {
                return Ok(ColorValue::Hsl([hue, saturation, lightness]));
            }

            parser.comma();
            let Some(opacity) = parser.match_number() else {
                return Err(parser.error(ParseErrorKind::ExpectedAlpha));
            };

            Ok(ColorValue::Hsla([hue, saturation, lightness, opacity]))
        })
    }

    fn match_var_color(&mut self) -> Result<Option<ColorValue>> {
        self.match_call(&tokens::VAR_COLOR, |parser, _| {
            match parser.scanner.scan_group(&tokens::VARIABLE_NAME, 1) {
                Some(name) => Ok(ColorValue::Var(name.to_string())),
                None => Err(parser.error(ParseErrorKind::ExpectedVariableName)),
            }
        })
    }

    fn match_number(&mut self) -> Option<String> {
        self.scanner
            .scan_group(&tokens::NUMBER, 1)
            .map(str::to_string)
    }

    fn match_percentage(&mut self) -> Option<String> {
        self.scanner
            .scan_group(&tokens::PERCENTAGE_VALUE, 1)
            .map(str::to_string)
    }
}
