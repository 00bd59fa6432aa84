//! Integer parsing shared by the validators.

/// Parses a whole cell as an integer, ignoring surrounding whitespace.
///
/// Returns `None` for anything that is not a plain base-10 integer. Callers
/// decide whether a failed parse is a finding (PriorityLevel,
/// MaxLoadPerPhase) or a no-op (Duration, MaxConcurrent).
pub(crate) fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_int("3"), Some(3));
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("-1"), Some(-1));
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("2.5"), None);
        assert_eq!(parse_int("3x"), None);
    }
}
