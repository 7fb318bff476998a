//! Literal classification for bare FVV tokens.
//!
//! A bare (unquoted) token is typed by trying, in order:
//!
//! 1. `true` / `false` → boolean
//! 2. optional sign followed by digits → integer
//! 3. optional sign, digits and at most one `.` → floating point
//! 4. anything else → a dotted path, resolved as a link
//!
//! The parser uses [`classify`] to type scalar values and list elements, and the
//! printer uses [`is_int`] / [`is_double`] to make sure every number it emits reads
//! back as the same kind.
//!
//! ## Examples
//!
//! ```rust
//! use fvv::literal::{classify, Literal};
//!
//! assert_eq!(classify("true"), Literal::Bool(true));
//! assert_eq!(classify("-42"), Literal::Int(-42));
//! assert_eq!(classify("+2.5"), Literal::Double(2.5));
//! assert_eq!(classify("server.port"), Literal::Path("server.port"));
//! ```

/// The kind a bare token classifies as.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal<'a> {
    Bool(bool),
    Int(i64),
    Double(f64),
    /// Not a literal: a dotted path naming another node.
    Path(&'a str),
}

/// Returns `true` if `token` is exactly `true` or `false`.
#[inline]
#[must_use]
pub fn is_bool(token: &str) -> bool {
    token == "true" || token == "false"
}

/// Returns `true` for an optional `+`/`-` followed by one or more ASCII digits.
///
/// # Examples
///
/// ```rust
/// use fvv::literal::is_int;
///
/// assert!(is_int("42"));
/// assert!(is_int("+7"));
/// assert!(!is_int("-"));
/// assert!(!is_int("4.2"));
/// ```
#[must_use]
pub fn is_int(token: &str) -> bool {
    let digits = strip_sign(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` for an optional sign, ASCII digits and at most one `.`,
/// with at least one digit somewhere.
///
/// Every integer literal is also a double literal; callers that care check
/// [`is_int`] first.
///
/// # Examples
///
/// ```rust
/// use fvv::literal::is_double;
///
/// assert!(is_double("3.14"));
/// assert!(is_double("-.5"));
/// assert!(is_double("7."));
/// assert!(!is_double("."));
/// assert!(!is_double("1.2.3"));
/// ```
#[must_use]
pub fn is_double(token: &str) -> bool {
    let body = strip_sign(token);
    let mut has_digit = false;
    let mut has_dot = false;

    for b in body.bytes() {
        match b {
            b'0'..=b'9' => has_digit = true,
            b'.' if !has_dot => has_dot = true,
            _ => return false,
        }
    }

    has_digit
}

/// Classifies a bare token using the bool → int → double → path priority.
///
/// An integer-shaped token that does not fit in an `i64` is read as a double.
#[must_use]
pub fn classify(token: &str) -> Literal<'_> {
    if is_bool(token) {
        return Literal::Bool(token == "true");
    }

    if is_int(token) {
        if let Ok(i) = token.parse::<i64>() {
            return Literal::Int(i);
        }
    }

    if is_double(token) {
        if let Ok(f) = token.parse::<f64>() {
            return Literal::Double(f);
        }
    }

    Literal::Path(token)
}

/// Parses `token` as a boolean list element.
pub(crate) fn parse_bool(token: &str) -> Option<bool> {
    match token {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parses `token` as an integer list element.
pub(crate) fn parse_int(token: &str) -> Option<i64> {
    if is_int(token) {
        token.parse().ok()
    } else {
        None
    }
}

/// Parses `token` as a double list element. Integer-shaped tokens are accepted.
pub(crate) fn parse_double(token: &str) -> Option<f64> {
    if is_double(token) {
        token.parse().ok()
    } else {
        None
    }
}

#[inline]
fn strip_sign(token: &str) -> &str {
    token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_is_exact() {
        assert!(is_bool("true"));
        assert!(is_bool("false"));
        assert!(!is_bool("True"));
        assert!(!is_bool("truex"));
        assert_eq!(classify("TRUE"), Literal::Path("TRUE"));
    }

    #[test]
    fn test_int_shapes() {
        assert!(is_int("0"));
        assert!(is_int("-12"));
        assert!(is_int("+12"));
        assert!(!is_int(""));
        assert!(!is_int("+"));
        assert!(!is_int("1a"));
        assert!(!is_int("--1"));
    }

    #[test]
    fn test_double_shapes() {
        assert!(is_double("1"));
        assert!(is_double("1.5"));
        assert!(is_double("+.5"));
        assert!(!is_double(""));
        assert!(!is_double("-"));
        assert!(!is_double("-."));
        assert!(!is_double("1e5"));
        assert!(!is_double("1..2"));
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify("false"), Literal::Bool(false));
        assert_eq!(classify("10"), Literal::Int(10));
        assert_eq!(classify("10.0"), Literal::Double(10.0));
        assert_eq!(classify("a.b"), Literal::Path("a.b"));
        assert_eq!(classify(""), Literal::Path(""));
    }

    #[test]
    fn test_int_overflow_reads_as_double() {
        match classify("99999999999999999999") {
            Literal::Double(f) => assert!(f > 9.0e19),
            other => panic!("Expected double, got {:?}", other),
        }
    }

    #[test]
    fn test_element_parsers() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("1"), None);
        assert_eq!(parse_int("3"), Some(3));
        assert_eq!(parse_int("2.5"), None);
        assert_eq!(parse_double("3"), Some(3.0));
        assert_eq!(parse_double("x"), None);
    }
}
