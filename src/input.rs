//! Headless phone-input session model.
//!
//! Mirrors the state an input component keeps between keystrokes (current
//! raw text, current formatted value, selected country) without any
//! rendering concerns. Host code feeds edits in with [`PhoneInput::set_value`]
//! and country choices with [`PhoneInput::select_country`], and reads the
//! derived state back out.

use crate::backends::PhoneBackend;
use crate::resolver::DialCodeResolver;
use crate::types::{Iso2, NumberType};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Configuration for a [`PhoneInput`] session.
#[derive(Debug, Clone)]
pub struct PhoneInputConfig {
    /// Country selected before the user types anything.
    pub initial_country: Iso2,
    /// Keep a `0` typed directly after the dial code instead of dropping it.
    pub allow_zero_after_dial_code: bool,
}

impl PhoneInputConfig {
    /// Create a config with the given initial country and defaults otherwise.
    pub fn new(initial_country: Iso2) -> Self {
        Self {
            initial_country,
            allow_zero_after_dial_code: false,
        }
    }

    /// Keep zeros typed directly after the dial code.
    pub fn with_allow_zero_after_dial_code(mut self, allow: bool) -> Self {
        self.allow_zero_after_dial_code = allow;
        self
    }
}

/// One row of country-picker data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    /// Display name.
    pub label: String,
    /// Dial code with a leading '+', ready for display.
    pub dial_code: String,
    /// Two-letter code identifying the row.
    pub iso2: Iso2,
}

/// Headless phone-input state over a [`DialCodeResolver`].
///
/// # Example
///
/// ```rust
/// use phone_resolver::{CountryDirectory, DialCodeResolver, PhoneInput, PhoneInputConfig, Iso2};
/// use phone_resolver::backends::PhonenumberBackend;
/// use std::sync::Arc;
///
/// let directory = Arc::new(CountryDirectory::bundled().unwrap());
/// let resolver = DialCodeResolver::new(directory, PhonenumberBackend);
/// let config = PhoneInputConfig::new(Iso2::new("us").unwrap());
/// let mut input = PhoneInput::new(resolver, config);
///
/// input.set_value("2025550123");
/// assert_eq!(input.value(), "+12025550123");
/// assert_eq!(input.selected_country().unwrap().as_str(), "us");
/// ```
#[derive(Debug, Clone)]
pub struct PhoneInput<B: PhoneBackend> {
    resolver: DialCodeResolver<B>,
    config: PhoneInputConfig,
    selected: Option<Iso2>,
    raw_value: String,
    formatted_value: String,
}

impl<B: PhoneBackend> PhoneInput<B> {
    /// Create a session with the configured initial country selected and the
    /// value primed to its `+<dial code>` prefix.
    pub fn new(resolver: DialCodeResolver<B>, config: PhoneInputConfig) -> Self {
        let initial = resolver.directory().country_by_code(config.initial_country);
        let formatted_value = initial
            .map(|c| format!("+{}", c.dial_code))
            .unwrap_or_default();
        let selected = initial.map(|c| c.iso2);

        Self {
            resolver,
            config,
            selected,
            raw_value: String::new(),
            formatted_value,
        }
    }

    /// Apply an edited value.
    ///
    /// Non-internationalized input is prefixed with the selected country's
    /// dial code, a zero typed right after the dial code is dropped unless
    /// configured otherwise, and the country selection is re-resolved from
    /// the resulting number on every edit.
    pub fn set_value(&mut self, raw: &str) {
        let mut formatted = raw.to_string();
        if !raw.is_empty() {
            if !formatted.starts_with('+') {
                let region = self.selected.unwrap_or(self.config.initial_country);
                if let Some(country) = self.resolver.directory().country_by_code(region) {
                    formatted = format!("+{}{}", country.dial_code, formatted);
                }
            }
            if !self.config.allow_zero_after_dial_code {
                formatted = self.strip_zero_after_dial_code(&formatted);
            }
            self.selected = self.resolver.resolve_country(&formatted);
        }

        #[cfg(feature = "tracing")]
        debug!(value = %formatted, country = ?self.selected, "input value changed");

        self.raw_value = raw.to_string();
        self.formatted_value = formatted;
    }

    /// Select a country explicitly (e.g., from a picker).
    ///
    /// Unknown codes are ignored. The value is reset to the new country's
    /// `+<dial code>` prefix when nothing has been typed yet, otherwise the
    /// typed value is re-evaluated against the new selection.
    pub fn select_country(&mut self, iso2: Iso2) {
        if self.selected == Some(iso2) {
            return;
        }
        let Some(country) = self.resolver.directory().country_by_code(iso2) else {
            return;
        };

        self.selected = Some(country.iso2);
        self.formatted_value = format!("+{}", country.dial_code);
        if !self.raw_value.is_empty() {
            let raw = self.raw_value.clone();
            self.set_value(&raw);
        }
    }

    /// The current value with whitespace stripped.
    pub fn value(&self) -> String {
        self.formatted_value
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    /// The value exactly as last typed.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// The dial-code prefix of the current value, empty if unresolved.
    pub fn dial_code(&self) -> &str {
        self.resolver.dial_code_prefix(&self.formatted_value)
    }

    /// The currently selected country, if any.
    pub fn selected_country(&self) -> Option<Iso2> {
        self.selected
    }

    /// Whether the current value is a valid number for the selected country.
    ///
    /// Fewer than three typed characters never validate, matching the
    /// original component's gate against spurious early positives.
    pub fn is_valid_number(&self) -> bool {
        if self.raw_value.chars().count() < 3 {
            return false;
        }
        match self.selected {
            Some(region) => self
                .resolver
                .is_likely_valid(&self.formatted_value, region),
            None => false,
        }
    }

    /// Line-type classification of the current value.
    pub fn number_type(&self) -> NumberType {
        match self.selected {
            Some(region) => self
                .resolver
                .classify_number_type(&self.formatted_value, region),
            None => NumberType::Unknown,
        }
    }

    /// Name-sorted rows for a country picker.
    pub fn picker_entries(&self) -> Vec<PickerEntry> {
        self.resolver
            .directory()
            .all()
            .iter()
            .map(|country| PickerEntry {
                label: country.name.clone(),
                dial_code: format!("+{}", country.dial_code),
                iso2: country.iso2,
            })
            .collect()
    }

    /// Reference to the underlying resolver.
    pub fn resolver(&self) -> &DialCodeResolver<B> {
        &self.resolver
    }

    fn strip_zero_after_dial_code(&self, number: &str) -> String {
        let prefix = self.resolver.dial_code_prefix(number);
        if prefix.is_empty() {
            return number.to_string();
        }
        match number[prefix.len()..].strip_prefix('0') {
            Some(rest) => format!("{prefix}{rest}"),
            None => number.to_string(),
        }
    }
}

#[cfg(all(test, feature = "phonenumber"))]
mod tests {
    use super::*;
    use crate::backends::PhonenumberBackend;
    use crate::directory::CountryDirectory;
    use std::sync::Arc;

    fn input(initial: &str) -> PhoneInput<PhonenumberBackend> {
        let directory = Arc::new(CountryDirectory::bundled().unwrap());
        let resolver = DialCodeResolver::new(directory, PhonenumberBackend);
        PhoneInput::new(resolver, PhoneInputConfig::new(Iso2::new(initial).unwrap()))
    }

    #[test]
    fn test_initial_state_primes_dial_code() {
        let input = input("gb");
        assert_eq!(input.value(), "+44");
        assert_eq!(input.selected_country().unwrap().as_str(), "gb");
        assert!(!input.is_valid_number());
    }

    #[test]
    fn test_national_input_gets_dial_code_prefix() {
        let mut input = input("us");
        input.set_value("2025550123");
        assert_eq!(input.value(), "+12025550123");
        assert_eq!(input.dial_code(), "+1");
        assert!(input.is_valid_number());
    }

    #[test]
    fn test_international_input_switches_country() {
        let mut input = input("us");
        input.set_value("+442071838750");
        assert_eq!(input.selected_country().unwrap().as_str(), "gb");
    }

    #[test]
    fn test_zero_after_dial_code_is_dropped() {
        let mut input = input("gb");
        input.set_value("07911123456");
        assert_eq!(input.value(), "+447911123456");
    }

    #[test]
    fn test_zero_after_dial_code_kept_when_allowed() {
        let directory = Arc::new(CountryDirectory::bundled().unwrap());
        let resolver = DialCodeResolver::new(directory, PhonenumberBackend);
        let config = PhoneInputConfig::new(Iso2::new("gb").unwrap())
            .with_allow_zero_after_dial_code(true);
        let mut input = PhoneInput::new(resolver, config);

        input.set_value("07911123456");
        assert_eq!(input.value(), "+4407911123456");
    }

    #[test]
    fn test_select_country_resets_value() {
        let mut input = input("us");
        input.select_country(Iso2::new("ua").unwrap());
        assert_eq!(input.value(), "+380");
        assert_eq!(input.selected_country().unwrap().as_str(), "ua");
    }

    #[test]
    fn test_select_unknown_country_is_ignored() {
        let mut input = input("us");
        input.select_country(Iso2::new("zz").unwrap());
        assert_eq!(input.selected_country().unwrap().as_str(), "us");
        assert_eq!(input.value(), "+1");
    }

    #[test]
    fn test_short_input_never_validates() {
        let mut input = input("us");
        input.set_value("20");
        assert!(!input.is_valid_number());
    }

    /// Test that the short-input gate counts characters, not bytes. The stub
    /// backend reports every number valid, so only the gate can reject.
    #[test]
    fn test_short_input_gate_counts_chars() {
        use crate::backends::{AsYouType, PhoneBackend};

        struct AlwaysValid;

        struct EchoFormatter(String);

        impl AsYouType for EchoFormatter {
            fn input_char(&mut self, c: char) -> &str {
                self.0.push(c);
                &self.0
            }

            fn clear(&mut self) {
                self.0.clear();
            }
        }

        impl PhoneBackend for AlwaysValid {
            type Error = std::convert::Infallible;
            type Parsed = ();
            type Formatter = EchoFormatter;

            fn parse(&self, _raw: &str, _region: Iso2) -> Result<(), Self::Error> {
                Ok(())
            }

            fn is_valid_number(&self, _parsed: &()) -> bool {
                true
            }

            fn number_type(&self, _parsed: &()) -> NumberType {
                NumberType::Mobile
            }

            fn formatter(&self, _region: Iso2) -> EchoFormatter {
                EchoFormatter(String::new())
            }
        }

        let directory = Arc::new(CountryDirectory::bundled().unwrap());
        let resolver = DialCodeResolver::new(directory, AlwaysValid);
        let mut input =
            PhoneInput::new(resolver, PhoneInputConfig::new(Iso2::new("jp").unwrap()));

        // Two fullwidth digits are six bytes but two characters.
        input.set_value("２２");
        assert!(!input.is_valid_number());
        input.set_value("２２２");
        assert!(input.is_valid_number());
    }

    #[test]
    fn test_picker_entries_are_name_sorted() {
        let input = input("us");
        let entries = input.picker_entries();
        assert!(entries.len() > 200);
        assert!(entries.windows(2).all(|w| w[0].label <= w[1].label));
        let us = entries.iter().find(|e| e.iso2.as_str() == "us").unwrap();
        assert_eq!(us.dial_code, "+1");
    }
}
