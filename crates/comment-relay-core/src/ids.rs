//! Identifier types taken from request paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A post identifier as it appeared in the request path.
///
/// The raw segment is kept verbatim and used as-is when building upstream
/// URLs. The numeric form is only needed for the `post_id` field of an
/// outbound comment and is parsed leniently.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Wrap a raw path segment.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw path segment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the leading integer of the segment.
    ///
    /// Leading whitespace and a single sign are accepted, then a `0x`/`0X`
    /// prefix switches to hexadecimal. The longest run of digits in that radix
    /// is taken and anything after it is ignored (`"12abc"` is 12, `"0x1A"` is
    /// 26). Returns `None` when there are no digits or the value overflows
    /// `i64`.
    #[must_use]
    pub fn numeric(&self) -> Option<i64> {
        let trimmed = self.0.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (radix, rest) = match rest.get(..2) {
            Some("0x" | "0X") => (16, &rest[2..]),
            _ => (10, rest),
        };

        let digits_len = rest
            .bytes()
            .take_while(|b| char::from(*b).is_digit(radix))
            .count();
        if digits_len == 0 {
            return None;
        }

        let magnitude = i64::from_str_radix(&rest[..digits_len], radix).ok()?;
        Some(if negative { -magnitude } else { magnitude })
    }
}

impl fmt::Debug for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostId({:?})", self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PostId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for PostId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl AsRef<str> for PostId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_plain() {
        assert_eq!(PostId::new("18525").numeric(), Some(18525));
    }

    #[test]
    fn numeric_ignores_trailing_garbage() {
        assert_eq!(PostId::new("123abc").numeric(), Some(123));
        assert_eq!(PostId::new("7.9").numeric(), Some(7));
    }

    #[test]
    fn numeric_accepts_sign_and_leading_whitespace() {
        assert_eq!(PostId::new("  -42").numeric(), Some(-42));
        assert_eq!(PostId::new("+5").numeric(), Some(5));
    }

    #[test]
    fn numeric_hex_prefix() {
        assert_eq!(PostId::new("0x1A").numeric(), Some(26));
        assert_eq!(PostId::new("-0X10zz").numeric(), Some(-16));
        assert_eq!(PostId::new("0x").numeric(), None);
        assert_eq!(PostId::new("0xg").numeric(), None);
    }

    #[test]
    fn numeric_without_digits_is_none() {
        assert_eq!(PostId::new("abc").numeric(), None);
        assert_eq!(PostId::new("").numeric(), None);
        assert_eq!(PostId::new("-").numeric(), None);
    }

    #[test]
    fn numeric_overflow_is_none() {
        assert_eq!(PostId::new("99999999999999999999").numeric(), None);
    }

    #[test]
    fn display_keeps_raw_segment() {
        let id = PostId::new("0042");
        assert_eq!(id.to_string(), "0042");
        assert_eq!(id.numeric(), Some(42));
    }

    #[test]
    fn serde_is_transparent() {
        let id = PostId::new("123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"123\"");
    }
}
