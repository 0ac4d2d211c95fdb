use steuerid::{SteuerIdValidator, ValidatorConfig, checksum_digit};

fn main() {
    // Structural + checksum validation (no network required)
    println!("=== Steuer-ID Validation ===\n");

    let validator = SteuerIdValidator::default();

    let candidates = [
        "65929970489",
        "02476291358",
        "1234",        // too short
        "12/45/68/11", // separators
        "11223456789", // two repeated digits
        "21113456789", // consecutive triple
        "01234567800", // wrong check digit
    ];

    for id in &candidates {
        match validator.validate(id) {
            Ok(()) => println!("  {id} => valid"),
            Err(e) => println!("  {id} => INVALID: {e}"),
        }
    }

    // Production mode rejects test IDs (leading 0)
    println!("\n=== Production Mode ===\n");

    let production = SteuerIdValidator::new(ValidatorConfig::production());
    for id in &["02476291358", "65929970489"] {
        match production.validate(id) {
            Ok(()) => println!("  {id} => valid"),
            Err(e) => println!("  {id} => INVALID: {e}"),
        }
    }

    // Check digit computation for a 10-digit serial part
    println!("\n=== Check Digit Computation ===\n");

    for serial in &["0247629135", "6592997048", "123"] {
        match checksum_digit(serial) {
            Ok(d) => println!("  {serial} => check digit {d}"),
            Err(e) => println!("  {serial} => INVALID: {e}"),
        }
    }
}
