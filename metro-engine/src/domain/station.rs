//! Station identity types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code: {reason}")]
pub struct InvalidLineCode {
    reason: &'static str,
}

/// A valid metro line code: 1 to 3 uppercase ASCII letters or digits.
///
/// Line codes identify which line a station record belongs to
/// (e.g. `B` for Blue, `Y` for Yellow, `L1` on numbered systems). This
/// type guarantees that any `LineCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use metro_engine::domain::LineCode;
///
/// let blue = LineCode::parse("B").unwrap();
/// assert_eq!(blue.as_str(), "B");
///
/// // Lowercase is rejected
/// assert!(LineCode::parse("b").is_err());
///
/// // Wrong length is rejected
/// assert!(LineCode::parse("").is_err());
/// assert!(LineCode::parse("BLUE").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCode {
    bytes: [u8; 3],
    len: u8,
}

impl LineCode {
    /// Parse a line code from a string.
    ///
    /// The input must be 1 to 3 uppercase ASCII letters (A-Z) or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        let input = s.as_bytes();

        if input.is_empty() || input.len() > 3 {
            return Err(InvalidLineCode {
                reason: "must be 1 to 3 characters",
            });
        }

        for &b in input {
            if !b.is_ascii_uppercase() && !b.is_ascii_digit() {
                return Err(InvalidLineCode {
                    reason: "must be uppercase ASCII letters A-Z or digits",
                });
            }
        }

        let mut bytes = [0u8; 3];
        bytes[..input.len()].copy_from_slice(input);

        Ok(LineCode {
            bytes,
            len: input.len() as u8,
        })
    }

    /// Returns the line code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap()
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.as_str())
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LineCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Identity of one station record: a human-readable label plus the line it
/// belongs to.
///
/// A station physically served by several lines appears as several records
/// sharing the same label but differing line codes; the registry joins such
/// records with zero-distance interchange edges. Using a structured key
/// rather than a delimiter-encoded display string means no downstream code
/// ever parses line codes out of names.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StationId {
    label: String,
    line: LineCode,
}

impl StationId {
    /// Create a station identity from a label and line code.
    pub fn new(label: impl Into<String>, line: LineCode) -> Self {
        Self {
            label: label.into(),
            line,
        }
    }

    /// The human-readable station label (shared across lines).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The line this record belongs to.
    pub fn line(&self) -> LineCode {
        self.line
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({} [{}])", self.label, self.line)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.label, self.line)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn valid_line_code() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z0-9]{1,3}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_line_code()) {
            let code = LineCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Any valid line code can be parsed
        #[test]
        fn valid_always_parses(s in valid_line_code()) {
            prop_assert!(LineCode::parse(&s).is_ok());
        }

        /// Lowercase codes are always rejected
        #[test]
        fn lowercase_rejected(s in "[a-z]{1,3}") {
            prop_assert!(LineCode::parse(&s).is_err());
        }

        /// Too-long codes are always rejected
        #[test]
        fn too_long_rejected(s in "[A-Z0-9]{4,8}") {
            prop_assert!(LineCode::parse(&s).is_err());
        }
    }
}
