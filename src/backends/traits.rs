//! Phone-number backend contract.
//!
//! Strict validation, line-type classification and as-you-type formatting are
//! delegated to an external libphonenumber-equivalent. This module specifies
//! the interface the resolver expects from such a library; the default
//! implementation lives in [`crate::backends::phonenumber`].

use crate::types::{Iso2, NumberType};
use std::error::Error as StdError;

/// Contract for an external phone-number library.
///
/// Implementations parse raw input against a region hint and answer validity
/// and line-type questions about the parsed number. Parse failures are
/// surfaced as `Self::Error`; callers in this crate convert them to benign
/// "invalid / unknown" outcomes rather than propagating them (malformed user
/// input is an expected, non-fatal event).
///
/// # Example
///
/// ```rust,ignore
/// use phone_resolver::backends::{PhoneBackend, AsYouType};
/// use phone_resolver::{Iso2, NumberType};
///
/// struct MyBackend { /* ... */ }
///
/// impl PhoneBackend for MyBackend {
///     type Error = MyError;
///     type Parsed = MyParsedNumber;
///     type Formatter = MyFormatter;
///
///     fn parse(&self, raw: &str, region: Iso2) -> Result<Self::Parsed, Self::Error> {
///         // Parse against the region's numbering plan
///     }
///
///     fn is_valid_number(&self, parsed: &Self::Parsed) -> bool {
///         // National significant number length rules etc.
///     }
///
///     fn number_type(&self, parsed: &Self::Parsed) -> NumberType {
///         // FIXED_LINE / MOBILE / ...
///     }
///
///     fn formatter(&self, region: Iso2) -> Self::Formatter {
///         // Region-keyed as-you-type formatter
///     }
/// }
/// ```
pub trait PhoneBackend: Send + Sync {
    /// Error type for parse failures.
    type Error: StdError + Send + Sync + 'static;

    /// Parsed representation of a phone number.
    type Parsed;

    /// Region-keyed as-you-type formatter.
    type Formatter: AsYouType;

    /// Parse a raw number string against a region hint.
    ///
    /// The hint supplies the numbering plan for non-internationalized input;
    /// input carrying its own `+` country code may override it.
    fn parse(&self, raw: &str, region: Iso2) -> Result<Self::Parsed, Self::Error>;

    /// Whether a parsed number is valid for its numbering plan.
    fn is_valid_number(&self, parsed: &Self::Parsed) -> bool;

    /// Line-type classification of a parsed number.
    fn number_type(&self, parsed: &Self::Parsed) -> NumberType;

    /// Create an as-you-type formatter for the given region.
    fn formatter(&self, region: Iso2) -> Self::Formatter;
}

/// Incremental formatter fed one character at a time.
pub trait AsYouType {
    /// Feed the next character and get the reformatted string so far.
    fn input_char(&mut self, c: char) -> &str;

    /// Reset the formatter to its initial state.
    fn clear(&mut self);
}
