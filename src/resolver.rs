//! Dial-code extraction and country resolution.

use crate::backends::{AsYouType, PhoneBackend};
use crate::directory::CountryDirectory;
use crate::types::{Iso2, NumberType};
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Resolves free-form phone-number strings against a [`CountryDirectory`].
///
/// The resolver performs longest-prefix matching of calling codes and
/// delegates validity, line-type and as-you-type formatting questions to a
/// [`PhoneBackend`]. Every operation is a pure function of its inputs and the
/// read-only directory; a resolver can be shared freely and queried on every
/// keystroke.
///
/// # Example
///
/// ```rust
/// use phone_resolver::{CountryDirectory, DialCodeResolver};
/// use phone_resolver::backends::PhonenumberBackend;
/// use std::sync::Arc;
///
/// let directory = Arc::new(CountryDirectory::bundled().unwrap());
/// let resolver = DialCodeResolver::new(directory, PhonenumberBackend);
///
/// assert_eq!(resolver.dial_code_prefix("+12125551234"), "+1");
/// assert_eq!(resolver.resolve_country("+12125551234").unwrap().as_str(), "us");
/// ```
#[derive(Debug, Clone)]
pub struct DialCodeResolver<B: PhoneBackend> {
    directory: Arc<CountryDirectory>,
    backend: B,
}

impl<B: PhoneBackend> DialCodeResolver<B> {
    /// Create a resolver over a shared directory and backend.
    pub fn new(directory: Arc<CountryDirectory>, backend: B) -> Self {
        Self { directory, backend }
    }

    /// Reference to the underlying directory.
    pub fn directory(&self) -> &CountryDirectory {
        &self.directory
    }

    /// Reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Extract the longest dial-code prefix from a number string.
    ///
    /// Only `+`-prefixed (internationalized) input is scanned; anything else
    /// returns the empty string. Digits are accumulated left to right,
    /// skipping punctuation without resetting the accumulator, and every
    /// accumulation that is a registered index key extends the match. The
    /// returned slice covers the original input up to the last matching
    /// digit, so skipped punctuation is preserved inside it (`"+1 (86..."`
    /// keeps scanning past the space and parenthesis).
    pub fn dial_code_prefix<'n>(&self, number: &'n str) -> &'n str {
        if !number.starts_with('+') {
            return "";
        }

        let index = self.directory.dial_code_index();
        let mut digits = String::with_capacity(index.max_key_len());
        let mut end = 0;

        for (pos, c) in number.char_indices().skip(1) {
            if !c.is_ascii_digit() {
                continue;
            }
            digits.push(c);
            if index.contains(&digits) {
                // Longest match wins by continual overwrite: scanning goes
                // from shorter to longer digit keys.
                end = pos + c.len_utf8();
            }
            if digits.len() >= index.max_key_len() {
                break;
            }
        }

        &number[..end]
    }

    /// Resolve a number string to its most likely country.
    ///
    /// Strips punctuation from the extracted prefix and returns the first
    /// country registered under that digit key, in priority-slot order.
    /// `None` is the normal outcome for partial, national-format or
    /// unresolvable input, not an error.
    pub fn resolve_country(&self, number: &str) -> Option<Iso2> {
        let prefix = self.dial_code_prefix(number);
        if prefix.is_empty() {
            return None;
        }
        let digits: String = prefix.chars().filter(|c| c.is_ascii_digit()).collect();
        let resolved = self.directory.dial_code_index().resolve(&digits);

        #[cfg(feature = "tracing")]
        debug!(prefix, country = ?resolved, "resolved dial code");

        resolved
    }

    /// Whether the number parses as valid for the given region.
    ///
    /// Parse failures are expected for partial input and yield `false`.
    pub fn is_likely_valid(&self, number: &str, region: Iso2) -> bool {
        match self.backend.parse(number, region) {
            Ok(parsed) => self.backend.is_valid_number(&parsed),
            Err(_) => false,
        }
    }

    /// Line-type classification for the given region.
    ///
    /// Unparseable input classifies as [`NumberType::Unknown`].
    pub fn classify_number_type(&self, number: &str, region: Iso2) -> NumberType {
        match self.backend.parse(number, region) {
            Ok(parsed) => self.backend.number_type(&parsed),
            Err(_) => NumberType::Unknown,
        }
    }

    /// Reformat a number the way an as-you-type formatter would.
    ///
    /// Dashes and spaces are stripped and the remaining characters fed one at
    /// a time into the backend's formatter; the last emitted string is
    /// returned. Empty input formats to the empty string.
    pub fn format_as_typed(&self, number: &str, region: Iso2) -> String {
        let mut formatter = self.backend.formatter(region);
        let mut formatted = String::new();
        for c in number.chars().filter(|c| *c != '-' && *c != ' ') {
            formatted = formatter.input_char(c).to_string();
        }
        formatted
    }
}
