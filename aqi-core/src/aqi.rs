//! AQI readings and their color bands.

/// Upper (inclusive) limit of the green band.
pub const GREEN_MAX: f64 = 50.0;
/// Upper (inclusive) limit of the yellow band.
pub const YELLOW_MAX: f64 = 200.0;

/// A single AQI value as delivered by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct AqiReading {
    /// The raw response body, displayed verbatim.
    pub text: String,
    /// The numeric interpretation of `text`, `NaN` if there is none.
    pub value: f64,
}

impl AqiReading {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let value = parse_float(&text);
        Self { text, value }
    }

    #[must_use]
    pub fn band(&self) -> AqiBand {
        AqiBand::from_value(self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AqiBand {
    #[default]
    Green,
    Yellow,
    Red,
}

impl AqiBand {
    /// `NaN` never compares, so unparsable values end up green.
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value > GREEN_MAX && value <= YELLOW_MAX {
            Self::Yellow
        } else if value > YELLOW_MAX {
            Self::Red
        } else {
            Self::Green
        }
    }

    /// CSS background color of the status box.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Green => "hsl(141,53%,53%)",
            Self::Yellow => "hsl(48,100%,67%)",
            Self::Red => "hsl(348,100%,61%)",
        }
    }
}

/// Parses the longest numeric prefix of `text` after leading whitespace,
/// returning `NaN` if there is none (the behavior of JavaScript's `parseFloat`).
#[must_use]
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    s[..end].parse().unwrap_or(f64::NAN)
}

pub(crate) fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_limits() {
        assert_eq!(AqiBand::from_value(0.0), AqiBand::Green);
        assert_eq!(AqiBand::from_value(50.0), AqiBand::Green);
        assert_eq!(AqiBand::from_value(50.1), AqiBand::Yellow);
        assert_eq!(AqiBand::from_value(200.0), AqiBand::Yellow);
        assert_eq!(AqiBand::from_value(200.01), AqiBand::Red);
        assert_eq!(AqiBand::from_value(500.0), AqiBand::Red);
    }

    #[test]
    fn every_value_falls_into_exactly_one_band() {
        for i in 0..=6000 {
            let v = f64::from(i) / 10.0;
            let expected = if v <= 50.0 {
                AqiBand::Green
            } else if v <= 200.0 {
                AqiBand::Yellow
            } else {
                AqiBand::Red
            };
            assert_eq!(AqiBand::from_value(v), expected, "AQI {v}");
        }
    }

    #[test]
    fn not_a_number_is_green() {
        assert_eq!(AqiBand::from_value(f64::NAN), AqiBand::Green);
        assert_eq!(AqiReading::new("n/a").band(), AqiBand::Green);
        assert_eq!(AqiReading::new("").band(), AqiBand::Green);
    }

    #[test]
    fn readings_keep_their_text() {
        let r = AqiReading::new("42");
        assert_eq!(r.text, "42");
        assert_eq!(r.band().color(), "hsl(141,53%,53%)");
        assert_eq!(AqiReading::new("150").band().color(), "hsl(48,100%,67%)");
        assert_eq!(AqiReading::new("301").band().color(), "hsl(348,100%,61%)");
    }

    #[test]
    fn parse_numeric_prefix() {
        assert_eq!(parse_float("42"), 42.0);
        assert_eq!(parse_float("  42.5\n"), 42.5);
        assert_eq!(parse_float("150 (moderate)"), 150.0);
        assert_eq!(parse_float("-3"), -3.0);
        assert_eq!(parse_float("+7."), 7.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("2E-1x"), 0.2);
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("e5").is_nan());
    }
}
