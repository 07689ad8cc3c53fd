//! Tests for SVG text formatting.

use super::*;

mod xml_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(xml_escape("A & B"), "A &amp; B");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(xml_escape("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(xml_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(xml_escape("'single'"), "&#39;single&#39;");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(xml_escape("F1 Score"), "F1 Score");
    }
}

mod format_value_tests {
    use super::*;

    #[test]
    fn three_decimals() {
        assert_eq!(format_value(0.884, 3), "0.884");
        assert_eq!(format_value(0.880_952_380_952_380_9, 3), "0.881");
        assert_eq!(format_value(0.888, 3), "0.888");
        assert_eq!(format_value(0.884_462_151_394_422_3, 3), "0.884");
    }

    #[test]
    fn pads_trailing_zeros() {
        assert_eq!(format_value(0.5, 3), "0.500");
        assert_eq!(format_value(1.0, 3), "1.000");
    }

    #[test]
    fn one_decimal_for_ticks() {
        assert_eq!(format_value(0.2, 1), "0.2");
        assert_eq!(format_value(0.0, 1), "0.0");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_value(f64::NAN, 3), "nan");
        assert_eq!(format_value(f64::INFINITY, 3), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY, 3), "-inf");
    }
}
