//! Example demonstrating the headless phone-input session.
//!
//! # Running
//!
//! ```bash
//! cargo run --example picker_data
//! ```

use phone_resolver::backends::PhonenumberBackend;
use phone_resolver::{CountryDirectory, DialCodeResolver, Iso2, PhoneInput, PhoneInputConfig};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let directory = Arc::new(CountryDirectory::bundled()?);
    let resolver = DialCodeResolver::new(directory, PhonenumberBackend);
    let config = PhoneInputConfig::new(Iso2::new("us")?);
    let mut input = PhoneInput::new(resolver, config);

    println!("=== Phone Input Session Demo ===\n");

    println!("initial value: {}", input.value());

    input.set_value("2025550123");
    println!(
        "typed '2025550123' -> value: {}, country: {:?}, valid: {}",
        input.value(),
        input.selected_country().map(|c| c.to_string()),
        input.is_valid_number()
    );

    input.set_value("+447911123456");
    println!(
        "pasted '+447911123456' -> value: {}, country: {:?}, type: {}",
        input.value(),
        input.selected_country().map(|c| c.to_string()),
        input.number_type()
    );

    input.set_value("");
    input.select_country(Iso2::new("ua")?);
    println!("cleared, picked 'ua' -> value: {}", input.value());

    println!("\n=== First Picker Rows ===\n");
    println!("{:<28} {:<8} {:<6}", "Country", "Dial", "ISO");
    println!("{}", "-".repeat(42));
    for entry in input.picker_entries().iter().take(10) {
        println!(
            "{:<28} {:<8} {:<6}",
            entry.label, entry.dial_code, entry.iso2
        );
    }

    Ok(())
}
