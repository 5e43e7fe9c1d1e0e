//! Core vocabulary types for dial-code resolution.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Iso2
// =============================================================================

/// Error when parsing an ISO 3166-1 alpha-2 code.
#[derive(Debug, Clone, Error)]
pub enum Iso2Error {
    /// Code is not exactly two characters long.
    #[error("ISO2 code must be exactly two characters")]
    BadLength,
    /// Code contains characters other than ASCII letters.
    #[error("ISO2 code must contain only ASCII letters")]
    NonAlphabetic,
}

/// ISO 3166-1 alpha-2 country code (e.g., "us", "gb", "ua").
///
/// Codes are normalized to lowercase on construction, matching the bundled
/// country dataset, so `"US"` and `"us"` address the same country.
///
/// # Example
///
/// ```rust
/// use phone_resolver::Iso2;
///
/// let iso2 = Iso2::new("US").unwrap();
/// assert_eq!(iso2.as_str(), "us");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iso2([u8; 2]);

impl Iso2 {
    /// Create a new Iso2 from a two-letter string, normalizing to lowercase.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Iso2Error> {
        let s = s.as_ref().trim();
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(Iso2Error::BadLength);
        }
        if !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            return Err(Iso2Error::NonAlphabetic);
        }
        Ok(Self([
            bytes[0].to_ascii_lowercase(),
            bytes[1].to_ascii_lowercase(),
        ]))
    }

    /// Get the code as a lowercase string slice.
    pub fn as_str(&self) -> &str {
        // Two lowercase ASCII letters by construction.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }

    /// Get the code in uppercase, as used by region-keyed phone metadata.
    pub fn to_uppercase(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl FromStr for Iso2 {
    type Err = Iso2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for Iso2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Iso2 {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<'de> Deserialize<'de> for Iso2 {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        Iso2::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for Iso2 {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

// =============================================================================
// DialCode
// =============================================================================

/// Error when parsing a dial code.
#[derive(Debug, Clone, Error)]
pub enum DialCodeError {
    /// Dial code contains non-digit characters.
    #[error("dial code must contain only digits")]
    NonDigit,
    /// Dial code is empty.
    #[error("dial code cannot be empty")]
    Empty,
    /// Dial code exceeds the maximum calling-code length.
    #[error("dial code cannot exceed {MAX_DIAL_CODE_LEN} digits")]
    TooLong,
}

/// Maximum length of a country calling code in digits.
pub const MAX_DIAL_CODE_LEN: usize = 4;

/// Country calling code (e.g., "1" for the US, "380" for Ukraine).
///
/// Dial codes are stored without the leading '+' sign and are at most
/// [`MAX_DIAL_CODE_LEN`] digits long. Longer digit keys in the dial-code
/// index come from dial code + area code concatenations, not from dial
/// codes themselves.
///
/// # Example
///
/// ```rust
/// use phone_resolver::DialCode;
///
/// let dc = DialCode::new("+380").unwrap();
/// assert_eq!(dc.to_string(), "380");
///
/// let dc = DialCode::new("1").unwrap();
/// assert_eq!(dc.to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialCode(String);

impl DialCode {
    /// Create a new DialCode from a string.
    ///
    /// The input can include a leading '+' which will be stripped.
    pub fn new(s: impl AsRef<str>) -> Result<Self, DialCodeError> {
        let n = s.as_ref().trim().trim_start_matches('+');
        if n.is_empty() {
            return Err(DialCodeError::Empty);
        }
        if !n.chars().all(|c| c.is_ascii_digit()) {
            return Err(DialCodeError::NonDigit);
        }
        if n.len() > MAX_DIAL_CODE_LEN {
            return Err(DialCodeError::TooLong);
        }
        Ok(Self(n.to_string()))
    }

    /// Get the dial code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DialCode {
    type Err = DialCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for DialCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for DialCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        DialCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for DialCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// NumberType
// =============================================================================

/// Classification of a phone number by line type.
///
/// Variants follow the libphonenumber taxonomy; [`NumberType::Unknown`] is
/// returned whenever the backing library cannot parse or classify a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberType {
    FixedLine,
    Mobile,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Voicemail,
    Unknown,
}

impl NumberType {
    /// Upstream label for this type (e.g., `FIXED_LINE_OR_MOBILE`).
    pub fn label(&self) -> &'static str {
        match self {
            NumberType::FixedLine => "FIXED_LINE",
            NumberType::Mobile => "MOBILE",
            NumberType::FixedLineOrMobile => "FIXED_LINE_OR_MOBILE",
            NumberType::TollFree => "TOLL_FREE",
            NumberType::PremiumRate => "PREMIUM_RATE",
            NumberType::SharedCost => "SHARED_COST",
            NumberType::Voip => "VOIP",
            NumberType::PersonalNumber => "PERSONAL_NUMBER",
            NumberType::Pager => "PAGER",
            NumberType::Uan => "UAN",
            NumberType::Voicemail => "VOICEMAIL",
            NumberType::Unknown => "UNKNOWN",
        }
    }
}

impl Display for NumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Iso2 tests
    #[test]
    fn test_iso2_normalizes_case() {
        let upper = Iso2::new("US").unwrap();
        let lower = Iso2::new("us").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.as_str(), "us");
        assert_eq!(upper.to_uppercase(), "US");
    }

    #[test]
    fn test_iso2_rejects_bad_input() {
        assert!(matches!(Iso2::new(""), Err(Iso2Error::BadLength)));
        assert!(matches!(Iso2::new("usa"), Err(Iso2Error::BadLength)));
        assert!(matches!(Iso2::new("u1"), Err(Iso2Error::NonAlphabetic)));
    }

    #[test]
    fn test_iso2_trims_whitespace() {
        let iso2 = Iso2::new("  GB  ").unwrap();
        assert_eq!(iso2.as_str(), "gb");
    }

    #[test]
    fn test_iso2_serde() {
        let iso2: Iso2 = serde_json::from_str(r#""US""#).unwrap();
        assert_eq!(iso2.as_str(), "us");

        let json = serde_json::to_string(&iso2).unwrap();
        assert_eq!(json, r#""us""#);
    }

    // DialCode tests
    #[test]
    fn test_dial_code_valid() {
        assert!(DialCode::new("1").is_ok());
        assert!(DialCode::new("380").is_ok());
        assert!(DialCode::new("1684").is_ok());
    }

    #[test]
    fn test_dial_code_with_plus() {
        let dc = DialCode::new("+380").unwrap();
        assert_eq!(dc.as_str(), "380");
    }

    #[test]
    fn test_dial_code_trim() {
        let dc = DialCode::new("  +7  ").unwrap();
        assert_eq!(dc.as_str(), "7");
    }

    #[test]
    fn test_dial_code_empty() {
        assert!(matches!(DialCode::new(""), Err(DialCodeError::Empty)));
        assert!(matches!(DialCode::new("+"), Err(DialCodeError::Empty)));
    }

    #[test]
    fn test_dial_code_non_digit() {
        assert!(matches!(DialCode::new("12a"), Err(DialCodeError::NonDigit)));
    }

    #[test]
    fn test_dial_code_too_long() {
        assert!(matches!(DialCode::new("12345"), Err(DialCodeError::TooLong)));
    }

    #[test]
    fn test_dial_code_serde() {
        let dc = DialCode::new("+380").unwrap();
        let json = serde_json::to_string(&dc).unwrap();
        assert_eq!(json, r#""380""#);

        let dc: DialCode = serde_json::from_str(r#""+380""#).unwrap();
        assert_eq!(dc.as_str(), "380");
    }

    // NumberType tests
    #[test]
    fn test_number_type_labels() {
        assert_eq!(
            NumberType::FixedLineOrMobile.label(),
            "FIXED_LINE_OR_MOBILE"
        );
        assert_eq!(NumberType::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_number_type_serde() {
        let json = serde_json::to_string(&NumberType::TollFree).unwrap();
        assert_eq!(json, r#""TOLL_FREE""#);

        let t: NumberType = serde_json::from_str(r#""MOBILE""#).unwrap();
        assert_eq!(t, NumberType::Mobile);
    }
}
