//! Example demonstrating dial-code resolution.
//!
//! This example shows how free-form phone-number strings are matched against
//! the bundled country directory.
//!
//! # Running
//!
//! ```bash
//! cargo run --example resolve_number
//! ```

use phone_resolver::backends::PhonenumberBackend;
use phone_resolver::{CountryDirectory, DialCodeResolver, Iso2};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let directory = Arc::new(CountryDirectory::bundled()?);
    let resolver = DialCodeResolver::new(directory, PhonenumberBackend);

    println!("=== Dial Code Resolution Demo ===\n");

    let numbers = [
        "+12125551234",
        "+14165551234",
        "+18765551234",
        "+442071838750",
        "+4414811234567",
        "+74951234567",
        "+77011234567",
        "+3801234567",
        "555-1234",
        "+",
    ];

    println!("{:<20} {:<12} {:<10}", "Number", "Prefix", "Country");
    println!("{}", "-".repeat(42));

    for number in numbers {
        let prefix = resolver.dial_code_prefix(number);
        let country = resolver
            .resolve_country(number)
            .map(|iso2| iso2.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<20} {:<12} {:<10}", number, prefix, country);
    }

    println!("\n=== Validation Demo ===\n");

    let us = Iso2::new("us")?;
    let gb = Iso2::new("gb")?;
    let candidates = [
        ("+12025550123", us),
        ("+1202", us),
        ("+447911123456", gb),
        ("garbage", us),
    ];

    for (number, region) in candidates {
        let valid = resolver.is_likely_valid(number, region);
        let kind = resolver.classify_number_type(number, region);
        println!("  {:<16} [{}] valid: {:<5} type: {}", number, region, valid, kind);
    }

    Ok(())
}
