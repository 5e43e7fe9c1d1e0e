//! # Phone Resolver
//!
//! A country dial-code resolution and phone-number validation library with a
//! pluggable formatter backend.
//!
//! Given a free-form phone-number string, this library determines which
//! country the number belongs to, extracts the canonical dial-code prefix,
//! and delegates strict validity checking, line-type classification and
//! as-you-type formatting to an external libphonenumber-equivalent backend.
//!
//! ## Supported Backends
//!
//! | Backend | Feature | Library |
//! |---------|---------|---------|
//! | phonenumber | `phonenumber` (default) | <https://crates.io/crates/phonenumber> |
//!
//! ## Quick Start
//!
//! ```rust
//! use phone_resolver::{CountryDirectory, DialCodeResolver, Iso2};
//! use phone_resolver::backends::PhonenumberBackend;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load the bundled country dataset once at wiring time
//! let directory = Arc::new(CountryDirectory::bundled()?);
//! let resolver = DialCodeResolver::new(directory, PhonenumberBackend);
//!
//! // Longest-prefix dial-code matching
//! assert_eq!(resolver.dial_code_prefix("+12125551234"), "+1");
//! assert_eq!(resolver.resolve_country("+12125551234").unwrap().as_str(), "us");
//!
//! // Area codes disambiguate countries sharing a calling code
//! assert_eq!(resolver.resolve_country("+4414811234567").unwrap().as_str(), "gg");
//!
//! // Validation is delegated to the backend
//! let us = Iso2::new("us")?;
//! assert!(resolver.is_likely_valid("+12025550123", us));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! PhoneInput<B>           (headless input session state)
//!         │
//!         ▼
//! DialCodeResolver<B>     (longest-prefix matching + pass-throughs)
//!         │                        │
//!         ▼                        ▼
//! CountryDirectory         PhoneBackend        (trait: PhonenumberBackend, etc.)
//! (static dataset + index)
//! ```
//!
//! ## Features
//!
//! - `phonenumber` - libphonenumber-backed validation and formatting (enabled by default)
//! - `tracing` - tracing instrumentation (enabled by default)

pub mod backends;
pub mod directory;
pub mod input;
pub mod resolver;
pub mod types;

// Re-export commonly used types at the crate root
pub use directory::{Country, CountryDirectory, DialCodeIndex, DirectoryError};
pub use input::{PhoneInput, PhoneInputConfig, PickerEntry};
pub use resolver::DialCodeResolver;
pub use types::{DialCode, DialCodeError, Iso2, Iso2Error, MAX_DIAL_CODE_LEN, NumberType};
