// Number formatting for the display
//
// Whole numbers render bare ("3", not "3.00"); everything else gets at most
// two decimal places with trailing zeros and a trailing point stripped.
// Infinities and NaN take the fractional path and come out as Rust's
// standard float text ("inf", "NaN"), which the display shows as-is.

/// Format a computation result for the display buffer
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let rounded = format!("{value:.2}");
        rounded
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_decimals() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-42.0), "-42");
    }

    #[test]
    fn fractions_round_to_two_places() {
        assert_eq!(format_number(3.14159), "3.14");
        assert_eq!(format_number(2.675), "2.67"); // nearest f64 sits just below 2.675
        assert_eq!(format_number(-0.125), "-0.13");
    }

    #[test]
    fn trailing_zeros_are_stripped() {
        assert_eq!(format_number(3.10), "3.1");
        assert_eq!(format_number(2.50), "2.5");
    }

    #[test]
    fn non_finite_values_render_as_float_text() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn large_whole_values_stay_exact_form() {
        assert_eq!(format_number(1e6), "1000000");
    }
}
