use crate::{aqi::count_digits, Error, Result};

/// Reads the notification threshold from the raw value of the input control.
///
/// Leading whitespace is skipped and the first run of decimal digits
/// (with an optional sign) is taken; trailing characters are ignored.
/// Values outside the `i64` range are rejected.
pub fn parse_threshold(input: &str) -> Result<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return Err(Error::InvalidThreshold(input.to_string()));
    }
    s[..sign + digits]
        .parse()
        .map_err(|_| Error::InvalidThreshold(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_thresholds() {
        assert_eq!(parse_threshold("75").unwrap(), 75);
        assert_eq!(parse_threshold(" 100 ").unwrap(), 100);
        assert_eq!(parse_threshold("120.7").unwrap(), 120);
        assert_eq!(parse_threshold("-5").unwrap(), -5);
        assert_eq!(parse_threshold("+0").unwrap(), 0);
        assert_eq!(parse_threshold("50abc").unwrap(), 50);
        assert_eq!(parse_threshold("3000000000").unwrap(), 3_000_000_000);
        assert_eq!(parse_threshold("-3000000000").unwrap(), -3_000_000_000);
    }

    #[test]
    fn reject_invalid_thresholds() {
        assert!(matches!(parse_threshold(""), Err(Error::InvalidThreshold(_))));
        assert!(matches!(parse_threshold("abc"), Err(Error::InvalidThreshold(_))));
        assert!(matches!(parse_threshold("-"), Err(Error::InvalidThreshold(_))));
        assert!(matches!(
            parse_threshold("99999999999999999999"),
            Err(Error::InvalidThreshold(_))
        ));
    }
}
