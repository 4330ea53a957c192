//! Summing the income figures mentioned in a sentence
//!
//! ```bash
//! cargo run --example sum_income
//! cargo run --example sum_income -- "paid 10,50 and 4 more"
//! ```

use pocketkit::numbers::{extract_numbers, sum_values};

const DEFAULT_TEXT: &str = "The total income of the employee consists of several parts: \
    1000.01 as the main income, supplemented by additional receipts of 27,45 , 324.00 and 100 dollars.";

fn main() {
    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TEXT.to_string());

    for value in extract_numbers(&text) {
        println!("found: {}", value);
    }
    println!("Total income: {:.2}", sum_values(&text, extract_numbers));
}
