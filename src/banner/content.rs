//! Composition of the banner text from a cursor and a function

use core::fmt::Write;

use log::warn;

use crate::config::{BannerConfig, MAX_SIGNIFICANT_DIGITS};
use crate::curve::{CurveViewCursor, Function};

use super::format::format_float;
use super::legend::{char_count, compose_legend, elide};
use super::{FIELD_SEPARATOR, FieldText, Legend, MAX_NUMBER_OF_CHARACTERS};

/// Text written to a banner view for one cursor position
#[derive(Debug, Clone, PartialEq)]
pub struct BannerContent {
    /// Function legend (e.g. `f`)
    pub legend: Legend,
    /// Abscissa readout (e.g. `x=2`)
    pub abscissa: FieldText,
    /// Ordinate readout (e.g. `f(x)=4`)
    pub ordinate: FieldText,
}

impl BannerContent {
    /// Abscissa and ordinate joined by the field separator.
    pub fn line(&self) -> FieldText {
        let mut line = FieldText::new();
        let _ = line.push_str(&self.abscissa);
        if !self.ordinate.is_empty() {
            let _ = line.push_str(FIELD_SEPARATOR);
            let _ = line.push_str(&self.ordinate);
        }
        line
    }

    /// Number of characters in [`BannerContent::line`].
    pub fn line_length(&self) -> usize {
        let ordinate = char_count(&self.ordinate);
        let separator = if ordinate == 0 {
            0
        } else {
            char_count(FIELD_SEPARATOR)
        };
        char_count(&self.abscissa) + separator + ordinate
    }
}

/// Compose the banner for `cursor` sitting on `function`.
///
/// The function is evaluated at the cursor abscissa. The composed line is
/// kept within `max_characters` (never more than
/// [`MAX_NUMBER_OF_CHARACTERS`]) by dropping significant digits, then by
/// eliding the ordinate, then the abscissa.
pub fn compose_banner<F: Function + ?Sized>(
    cursor: &CurveViewCursor,
    function: &F,
    symbol: char,
    config: &BannerConfig,
    max_characters: usize,
) -> BannerContent {
    let budget = max_characters.min(MAX_NUMBER_OF_CHARACTERS);
    let legend = compose_legend(symbol, function.name());
    let variable = function.variable_symbol();
    let x = cursor.x();
    let y = function.evaluate(x);

    let mut abscissa_digits = config
        .abscissa_significant_digits
        .clamp(1, MAX_SIGNIFICANT_DIGITS);
    let mut ordinate_digits = config
        .ordinate_significant_digits
        .clamp(1, MAX_SIGNIFICANT_DIGITS);

    loop {
        let content = BannerContent {
            legend: legend.clone(),
            abscissa: abscissa_text(variable, x, abscissa_digits, config),
            ordinate: ordinate_text(&legend, variable, y, ordinate_digits, config),
        };
        if content.line_length() <= budget {
            return content;
        }
        if abscissa_digits <= 1 && ordinate_digits <= 1 {
            warn!(
                "Banner line of {} chars exceeds {} even at one digit, eliding",
                content.line_length(),
                budget
            );
            return elide_fields(content, budget);
        }
        if ordinate_digits >= abscissa_digits && ordinate_digits > 1 {
            ordinate_digits -= 1;
        } else {
            abscissa_digits -= 1;
        }
    }
}

fn abscissa_text(variable: char, x: f64, digits: u8, config: &BannerConfig) -> FieldText {
    let mut text = FieldText::new();
    let _ = write!(
        text,
        "{}={}",
        variable,
        format_float(x, digits, config.display_mode)
    );
    text
}

fn ordinate_text(
    legend: &str,
    variable: char,
    y: f64,
    digits: u8,
    config: &BannerConfig,
) -> FieldText {
    let mut text = FieldText::new();
    let _ = write!(
        text,
        "{}({})={}",
        legend,
        variable,
        format_float(y, digits, config.display_mode)
    );
    text
}

/// Elide the fields so the joined line fits `budget` characters.
fn elide_fields(content: BannerContent, budget: usize) -> BannerContent {
    let abscissa_len = char_count(&content.abscissa);
    let separator_len = char_count(FIELD_SEPARATOR);

    if abscissa_len + separator_len < budget {
        let room = budget - abscissa_len - separator_len;
        BannerContent {
            ordinate: elide(&content.ordinate, room),
            ..content
        }
    } else {
        BannerContent {
            abscissa: elide(&content.abscissa, budget),
            ordinate: FieldText::new(),
            ..content
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::{ELLIPSIS, MAX_LEGEND_LENGTH, UNDEFINED_TEXT};
    use crate::config::DisplayMode;
    use crate::curve::CartesianFunction;

    fn square() -> CartesianFunction {
        CartesianFunction::new(|x| x * x)
    }

    #[test]
    fn test_square_at_two() {
        let cursor = CurveViewCursor::new(2.0, 4.0);
        let content = compose_banner(
            &cursor,
            &square(),
            'f',
            &BannerConfig::default(),
            MAX_NUMBER_OF_CHARACTERS,
        );
        assert_eq!(content.legend.as_str(), "f");
        assert_eq!(content.abscissa.as_str(), "x=2");
        assert_eq!(content.ordinate.as_str(), "f(x)=4");
        assert_eq!(content.line().as_str(), "x=2  f(x)=4");
        assert_eq!(content.line_length(), 11);
    }

    #[test]
    fn test_undefined_value_uses_placeholder() {
        let root = CartesianFunction::new(f64::sqrt);
        let cursor = CurveViewCursor::new(-1.0, 0.0);
        let content = compose_banner(
            &cursor,
            &root,
            'g',
            &BannerConfig::default(),
            MAX_NUMBER_OF_CHARACTERS,
        );
        assert_eq!(content.abscissa.as_str(), "x=-1");
        assert!(content.ordinate.ends_with(UNDEFINED_TEXT));
        assert_eq!(content.ordinate.as_str(), "g(x)=undef");
    }

    #[test]
    fn test_variable_symbol_is_used() {
        let function = CartesianFunction::new(|t| 2.0 * t).with_variable('t');
        let cursor = CurveViewCursor::new(1.5, 3.0);
        let content = compose_banner(
            &cursor,
            &function,
            'r',
            &BannerConfig::default(),
            MAX_NUMBER_OF_CHARACTERS,
        );
        assert_eq!(content.line().as_str(), "t=1.5  r(t)=3");
    }

    #[test]
    fn test_digits_degrade_to_fit() {
        let function =
            CartesianFunction::new(|x| -x / 3.0e-200).with_name("a_very_long_function_name");
        let cursor = CurveViewCursor::new(-1.0 / 7.0 * 1.0e-100, 0.0);
        let config = BannerConfig::default()
            .with_significant_digits(MAX_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS);

        let content = compose_banner(&cursor, &function, 'f', &config, MAX_NUMBER_OF_CHARACTERS);
        assert!(char_count(&content.legend) <= MAX_LEGEND_LENGTH);
        assert!(content.line_length() <= MAX_NUMBER_OF_CHARACTERS);
        assert!(char_count(&content.line()) <= MAX_NUMBER_OF_CHARACTERS);
        // Digits were dropped, not text.
        assert!(!content.line().contains(ELLIPSIS));
        assert!(content.ordinate.starts_with("a_very_long_f~(x)="));
    }

    #[test]
    fn test_narrow_budget_elides() {
        let cursor = CurveViewCursor::new(123.456, 0.0);
        let function = square().with_name("height");
        let config = BannerConfig::default();

        for budget in [0, 1, 5, 8, 12, 16, 20] {
            let content = compose_banner(&cursor, &function, 'f', &config, budget);
            assert!(
                content.line_length() <= budget,
                "line {:?} exceeds {}",
                content.line(),
                budget
            );
            assert_eq!(char_count(&content.line()), content.line_length());
        }
    }

    #[test]
    fn test_budget_never_exceeds_maximum() {
        let cursor = CurveViewCursor::new(1.0 / 3.0, 0.0);
        let config = BannerConfig::default().with_significant_digits(14, 14);
        let content = compose_banner(&cursor, &square(), 'f', &config, usize::MAX);
        assert!(content.line_length() <= MAX_NUMBER_OF_CHARACTERS);
    }

    #[test]
    fn test_unvalidated_digits_are_clamped() {
        let cursor = CurveViewCursor::new(1.0 / 3.0, 0.0);
        let clamped = BannerConfig::default()
            .with_significant_digits(MAX_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS);
        let oversized = BannerConfig::default().with_significant_digits(u8::MAX, u8::MAX);
        let zero = BannerConfig::default().with_significant_digits(0, 0);
        let one = BannerConfig::default().with_significant_digits(1, 1);

        let expected = compose_banner(&cursor, &square(), 'f', &clamped, MAX_NUMBER_OF_CHARACTERS);
        let content = compose_banner(&cursor, &square(), 'f', &oversized, MAX_NUMBER_OF_CHARACTERS);
        assert_eq!(content, expected);

        let expected = compose_banner(&cursor, &square(), 'f', &one, MAX_NUMBER_OF_CHARACTERS);
        let content = compose_banner(&cursor, &square(), 'f', &zero, MAX_NUMBER_OF_CHARACTERS);
        assert_eq!(content, expected);
    }

    #[test]
    fn test_scientific_mode_applies_to_both_fields() {
        let cursor = CurveViewCursor::new(2.0, 4.0);
        let config = BannerConfig::default().with_display_mode(DisplayMode::Scientific);
        let content = compose_banner(&cursor, &square(), 'f', &config, MAX_NUMBER_OF_CHARACTERS);
        assert_eq!(content.line().as_str(), "x=2E0  f(x)=4E0");
    }

    #[test]
    fn test_composition_is_deterministic() {
        let cursor = CurveViewCursor::new(0.7, 0.49);
        let config = BannerConfig::default();
        let first = compose_banner(&cursor, &square(), 'f', &config, MAX_NUMBER_OF_CHARACTERS);
        let second = compose_banner(&cursor, &square(), 'f', &config, MAX_NUMBER_OF_CHARACTERS);
        assert_eq!(first, second);
    }
}
