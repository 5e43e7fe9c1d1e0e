//! Country directory and the derived dial-code index.
//!
//! The directory is an explicitly constructed, immutable value: load it once
//! at wiring time (usually via [`CountryDirectory::bundled`]) and hand it to
//! a [`DialCodeResolver`](crate::DialCodeResolver). There is no process-wide
//! state; memoization of the derived index is scoped to the instance.

use crate::types::{DialCode, Iso2, MAX_DIAL_CODE_LEN};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Country dataset bundled with the crate, embedded at compile time.
static COUNTRIES_JSON: &str = include_str!("../assets/countries.json");

/// Error when loading or validating a country dataset.
///
/// All variants are fatal: a directory is either fully valid or not built at
/// all, so a malformed entry can never corrupt the derived index.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Dataset is not valid JSON or an entry has the wrong shape.
    #[error("invalid country dataset: {0}")]
    Parse(#[from] serde_json::Error),
    /// Dataset contains no countries.
    #[error("country dataset is empty")]
    Empty,
    /// Two entries share the same ISO2 code.
    #[error("duplicate ISO2 code '{iso2}' in country dataset")]
    DuplicateIso2 { iso2: Iso2 },
    /// An area code is empty or contains non-digit characters.
    #[error("invalid area code '{area_code}' for country '{iso2}'")]
    BadAreaCode { iso2: Iso2, area_code: String },
}

/// A single country record from the dataset.
///
/// `priority` disambiguates countries sharing a dial code: the entry with the
/// lowest value (or no value, treated as 0) is the default for that code.
/// `area_codes` are digit suffixes appended to the dial code to register
/// longer, more specific index keys for sub-regions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Display name, used for sorting and picker labels only.
    pub name: String,
    /// Two-letter code, unique across the directory.
    pub iso2: Iso2,
    /// Country calling code without the leading '+'.
    pub dial_code: DialCode,
    /// Disambiguation slot for shared dial codes; lower wins.
    #[serde(default)]
    pub priority: Option<u8>,
    /// Digit suffixes registered as `dial_code + area_code` index keys.
    #[serde(default)]
    pub area_codes: Option<Vec<String>>,
}

// =============================================================================
// DialCodeIndex
// =============================================================================

/// Reverse index from digit-string key to the countries registered under it.
///
/// Each key maps to a list of `(priority_slot, iso2)` pairs kept sorted
/// ascending by slot; resolution takes the first pair. Registering a second
/// country under the same key and slot replaces the earlier entry, which is
/// how the dataset's "unset priority" and area-code entries behave.
#[derive(Debug, Clone)]
pub struct DialCodeIndex {
    entries: HashMap<String, Vec<(u8, Iso2)>>,
    max_key_len: usize,
}

impl DialCodeIndex {
    fn register(&mut self, key: String, slot: u8, iso2: Iso2) {
        self.max_key_len = self.max_key_len.max(key.len());
        let slots = self.entries.entry(key).or_default();
        match slots.binary_search_by_key(&slot, |(s, _)| *s) {
            // Same key and slot: last registration wins.
            Ok(pos) => slots[pos] = (slot, iso2),
            Err(pos) => slots.insert(pos, (slot, iso2)),
        }
    }

    /// Whether `digits` is a registered dial-code key.
    pub fn contains(&self, digits: &str) -> bool {
        self.entries.contains_key(digits)
    }

    /// Resolve a digit key to its default country (lowest priority slot).
    pub fn resolve(&self, digits: &str) -> Option<Iso2> {
        self.candidates(digits).first().map(|(_, iso2)| *iso2)
    }

    /// All countries registered under a digit key, ordered by priority slot.
    pub fn candidates(&self, digits: &str) -> &[(u8, Iso2)] {
        self.entries.get(digits).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Length in digits of the longest registered key.
    ///
    /// The prefix scanner stops accumulating once this many digits have been
    /// seen; plain dial codes never exceed [`MAX_DIAL_CODE_LEN`], but
    /// area-code concatenations can be longer.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Number of distinct digit keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// CountryDirectory
// =============================================================================

/// Read-only set of countries plus the lazily built dial-code index.
///
/// # Example
///
/// ```rust
/// use phone_resolver::CountryDirectory;
///
/// let directory = CountryDirectory::bundled().unwrap();
/// let us = directory.country_by_code("us").unwrap();
/// assert_eq!(us.dial_code.as_str(), "1");
/// ```
#[derive(Debug, Clone)]
pub struct CountryDirectory {
    countries: Vec<Country>,
    by_iso2: HashMap<Iso2, usize>,
    index: OnceCell<DialCodeIndex>,
}

impl CountryDirectory {
    /// Load the directory from the dataset bundled with the crate.
    pub fn bundled() -> Result<Self, DirectoryError> {
        Self::from_json(COUNTRIES_JSON)
    }

    /// Parse and validate a country dataset.
    ///
    /// Fails on malformed JSON, an empty list, duplicate ISO2 codes or
    /// non-digit area codes. Countries are sorted by display name ascending;
    /// this ordering is for presentation only and has no bearing on
    /// resolution.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let mut countries: Vec<Country> = serde_json::from_str(json)?;
        if countries.is_empty() {
            return Err(DirectoryError::Empty);
        }

        for country in &countries {
            for area_code in country.area_codes.iter().flatten() {
                if area_code.is_empty() || !area_code.chars().all(|c| c.is_ascii_digit()) {
                    return Err(DirectoryError::BadAreaCode {
                        iso2: country.iso2,
                        area_code: area_code.clone(),
                    });
                }
            }
        }

        countries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut by_iso2 = HashMap::with_capacity(countries.len());
        for (i, country) in countries.iter().enumerate() {
            if by_iso2.insert(country.iso2, i).is_some() {
                return Err(DirectoryError::DuplicateIso2 {
                    iso2: country.iso2,
                });
            }
        }

        #[cfg(feature = "tracing")]
        debug!(countries = countries.len(), "loaded country directory");

        Ok(Self {
            countries,
            by_iso2,
            index: OnceCell::new(),
        })
    }

    /// All countries, sorted by display name ascending.
    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    /// Exact lookup by two-letter code; `None` for unknown codes.
    ///
    /// Accepts anything convertible to a well-formed code (`"us"`, `"US"`);
    /// structurally invalid input also yields `None` rather than an error.
    pub fn country_by_code(&self, iso2: impl AsRef<str>) -> Option<&Country> {
        let iso2 = Iso2::new(iso2).ok()?;
        self.by_iso2.get(&iso2).map(|&i| &self.countries[i])
    }

    /// The derived dial-code index, built on first call and cached for the
    /// lifetime of the directory.
    pub fn dial_code_index(&self) -> &DialCodeIndex {
        self.index.get_or_init(|| self.build_index())
    }

    fn build_index(&self) -> DialCodeIndex {
        let mut index = DialCodeIndex {
            entries: HashMap::with_capacity(self.countries.len()),
            // Plain dial codes are the floor even when no area codes exist.
            max_key_len: MAX_DIAL_CODE_LEN,
        };

        for country in &self.countries {
            let key = country.dial_code.as_str().to_string();
            index.register(key, country.priority.unwrap_or(0), country.iso2);

            // Area-code keys never carry an explicit priority: they land in
            // slot 0 and a later registration with the same concatenated key
            // replaces the earlier one (inherited behavior, see tests).
            for area_code in country.area_codes.iter().flatten() {
                let key = format!("{}{}", country.dial_code, area_code);
                index.register(key, 0, country.iso2);
            }
        }

        #[cfg(feature = "tracing")]
        debug!(
            keys = index.len(),
            max_key_len = index.max_key_len(),
            "built dial-code index"
        );

        index
    }
}
