//! EU VAT-ID validation walkthrough.
//!
//! Run with: `cargo run --example vat_ids`

use pruefziffer::euvat::*;

fn main() {
    println!("=== EU VAT-ID validation ===\n");

    let test_ids = [
        "DE136695976",
        "BE0411905847",
        "DK13585628",
        "FR40303265045",
        "HR69435151530",
        "ATU12345678",
        "NL123456789B01",
        "DE136695970", // wrong check digit
        "DE13669597",  // too short
        "XX999999999", // unknown country
    ];

    for id in &test_ids {
        match check_euvatid(id) {
            Ok(()) => println!("  {id} => valid"),
            Err(e) => match e.expected() {
                Some(expected) => println!("  {id} => INVALID, check should be {expected}"),
                None => println!("  {id} => INVALID: {e}"),
            },
        }
    }

    // country validators also accept the bare number
    println!("\n=== Without country prefix ===\n");
    for (label, result) in [
        ("DE 136695976", check_devatid("136695976")),
        ("BE 0411.905.847", check_bevatid("0411.905.847")),
        ("DK 13 58 56 28", check_dkvatid("13 58 56 28")),
        ("FI 13669598", check_fivatid("13669598")),
        ("FR 40303265045", check_frvatid("40303265045")),
    ] {
        println!("  {label} => {}", if result.is_ok() { "valid" } else { "invalid" });
    }
}
