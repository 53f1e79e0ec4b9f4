//! Duration strings as they appear in the export ("45m", "2h 15m").

use crate::utils::error::ParseError;

/// Parse a duration into whole minutes
///
/// Accepts exactly `"<n>m"` or `"<h>h <n>m"`.
///
/// # Errors
/// * `ParseError::MalformedTimeSpec` - missing suffix or non-numeric part
pub fn parse_minutes(spec: &str) -> Result<u64, ParseError> {
    let malformed = || ParseError::MalformedTimeSpec(spec.to_string());

    let number = |part: &str, suffix: char| {
        part.strip_suffix(suffix)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u64>().ok())
            .ok_or_else(malformed)
    };

    match spec.split_once(' ') {
        Some((hours, minutes)) => {
            let hours = number(hours, 'h')?;
            let minutes = number(minutes, 'm')?;
            hours
                .checked_mul(60)
                .and_then(|h| h.checked_add(minutes))
                .ok_or_else(malformed)
        }
        None => number(spec, 'm'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("2h 15m").unwrap(), 135);
        assert_eq!(parse_minutes("45m").unwrap(), 45);
        assert_eq!(parse_minutes("0m").unwrap(), 0);
        assert_eq!(parse_minutes("10h 0m").unwrap(), 600);
    }

    #[test]
    fn test_parse_minutes_rejects_missing_suffix() {
        for spec in ["2h", "15", "1h15m", "", "h m", "1h 2", "-5m", "2h 15m 3s"] {
            assert!(
                matches!(parse_minutes(spec), Err(ParseError::MalformedTimeSpec(_))),
                "expected '{}' to be rejected",
                spec
            );
        }
    }
}
