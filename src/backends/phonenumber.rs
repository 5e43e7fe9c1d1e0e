//! Backend implementation on top of the `phonenumber` crate.

use super::traits::{AsYouType, PhoneBackend};
use crate::types::{Iso2, NumberType};
use phonenumber::{Mode, PhoneNumber, country};
use thiserror::Error;

/// Error from the `phonenumber`-backed backend.
#[derive(Debug, Clone, Error)]
pub enum PhonenumberError {
    /// The region hint is not a known region.
    #[error("unknown region '{region}'")]
    UnknownRegion { region: Iso2 },
    /// The library rejected the number.
    #[error("failed to parse number: {message}")]
    Parse { message: String },
}

/// [`PhoneBackend`] backed by the `phonenumber` crate, a Rust port of
/// Google's libphonenumber.
///
/// # Example
///
/// ```rust
/// use phone_resolver::backends::{PhoneBackend, PhonenumberBackend};
/// use phone_resolver::Iso2;
///
/// let backend = PhonenumberBackend::default();
/// let us = Iso2::new("us").unwrap();
/// let parsed = backend.parse("+12025550123", us).unwrap();
/// assert!(backend.is_valid_number(&parsed));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PhonenumberBackend;

impl PhonenumberBackend {
    fn region_id(region: Iso2) -> Result<country::Id, PhonenumberError> {
        region
            .to_uppercase()
            .parse::<country::Id>()
            .map_err(|_| PhonenumberError::UnknownRegion { region })
    }
}

impl PhoneBackend for PhonenumberBackend {
    type Error = PhonenumberError;
    type Parsed = PhoneNumber;
    type Formatter = PhonenumberFormatter;

    fn parse(&self, raw: &str, region: Iso2) -> Result<Self::Parsed, Self::Error> {
        let id = Self::region_id(region)?;
        phonenumber::parse(Some(id), raw).map_err(|e| PhonenumberError::Parse {
            message: e.to_string(),
        })
    }

    fn is_valid_number(&self, parsed: &Self::Parsed) -> bool {
        phonenumber::is_valid(parsed)
    }

    fn number_type(&self, parsed: &Self::Parsed) -> NumberType {
        use phonenumber::Type;
        match parsed.number_type(&*phonenumber::metadata::DATABASE) {
            Type::FixedLine => NumberType::FixedLine,
            Type::Mobile => NumberType::Mobile,
            Type::FixedLineOrMobile => NumberType::FixedLineOrMobile,
            Type::TollFree => NumberType::TollFree,
            Type::PremiumRate => NumberType::PremiumRate,
            Type::SharedCost => NumberType::SharedCost,
            Type::Voip => NumberType::Voip,
            Type::PersonalNumber => NumberType::PersonalNumber,
            Type::Pager => NumberType::Pager,
            Type::Uan => NumberType::Uan,
            Type::Voicemail => NumberType::Voicemail,
            // Emergency, short codes, carrier-specific and other categories
            // outside the component's taxonomy all map to Unknown.
            _ => NumberType::Unknown,
        }
    }

    fn formatter(&self, region: Iso2) -> Self::Formatter {
        PhonenumberFormatter {
            region: Self::region_id(region).ok(),
            buffer: String::new(),
            formatted: String::new(),
        }
    }
}

/// As-you-type formatter over the `phonenumber` crate.
///
/// The crate has no incremental formatter, so each fed character re-parses
/// the accumulated buffer and renders it in International (for `+`-prefixed
/// input) or National format. While the buffer is too short or otherwise
/// unparseable the raw accumulated input is returned unchanged, which matches
/// how an incremental formatter behaves before a pattern is matched.
#[derive(Debug, Clone)]
pub struct PhonenumberFormatter {
    region: Option<country::Id>,
    buffer: String,
    formatted: String,
}

impl AsYouType for PhonenumberFormatter {
    fn input_char(&mut self, c: char) -> &str {
        self.buffer.push(c);

        let mode = if self.buffer.starts_with('+') {
            Mode::International
        } else {
            Mode::National
        };
        self.formatted = match phonenumber::parse(self.region, &self.buffer) {
            Ok(parsed) => parsed.format().mode(mode).to_string(),
            Err(_) => self.buffer.clone(),
        };
        &self.formatted
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.formatted.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> PhonenumberBackend {
        PhonenumberBackend
    }

    #[test]
    fn test_parse_valid_us_number() {
        let us = Iso2::new("us").unwrap();
        let parsed = backend().parse("+12025550123", us).unwrap();
        assert!(backend().is_valid_number(&parsed));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let us = Iso2::new("us").unwrap();
        assert!(backend().parse("not a number", us).is_err());
    }

    #[test]
    fn test_unknown_region_is_an_error() {
        let zz = Iso2::new("zz").unwrap();
        assert!(matches!(
            backend().parse("+12025550123", zz),
            Err(PhonenumberError::UnknownRegion { .. })
        ));
    }

    #[test]
    fn test_mobile_classification() {
        let gb = Iso2::new("gb").unwrap();
        // UK 07xxx numbers are mobile.
        let parsed = backend().parse("+447911123456", gb).unwrap();
        assert_eq!(backend().number_type(&parsed), NumberType::Mobile);
    }

    #[test]
    fn test_formatter_accumulates() {
        let us = Iso2::new("us").unwrap();
        let mut formatter = backend().formatter(us);
        let mut last = String::new();
        for c in "+12025550123".chars() {
            last = formatter.input_char(c).to_string();
        }
        // Whatever the rendering, the digits must all survive.
        let digits: String = last.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(digits, "12025550123");
    }

    #[test]
    fn test_formatter_clear() {
        let us = Iso2::new("us").unwrap();
        let mut formatter = backend().formatter(us);
        formatter.input_char('1');
        formatter.clear();
        assert_eq!(formatter.input_char('2'), "2");
    }
}
