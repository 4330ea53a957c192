//! Extraction of income figures from free text
//!
//! Numbers count only when a single space sits on each side of them, so
//! figures glued to words or punctuation ("100$", "(27)") are ignored.
//! Both `.` and `,` are accepted as the decimal separator.
//!
//! # Examples
//!
//! ```
//! use pocketkit::numbers::{extract_numbers, sum_values};
//!
//! let text = "The total income of the employee consists of several parts: 1000.01 as the main income, \
//!             supplemented by additional receipts of 27,45 , 324.00 and 100 dollars.";
//!
//! let values: Vec<f64> = extract_numbers(text).collect();
//! assert_eq!(values, vec![1000.01, 27.45, 324.0, 100.0]);
//!
//! let total = sum_values(text, extract_numbers);
//! assert!((total - 1451.46).abs() < 1e-9);
//! ```

use once_cell::sync::Lazy;
use regex::{Matches, Regex};
use tracing::trace;

/// Space-delimited run of ASCII digits with an optional `.`/`,` fraction
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" [0-9]+(?:[.,][0-9]+)? ").expect("Valid regex pattern"));

/// Lazy left-to-right iterator over the numbers found in a text
///
/// Created by [`extract_numbers`]. Single pass; not restartable.
pub struct Numbers<'t> {
    matches: Matches<'static, 't>,
}

impl Iterator for Numbers<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        for found in self.matches.by_ref() {
            let token = found.as_str().trim().replace(',', ".");
            match token.parse::<f64>() {
                Ok(value) => {
                    trace!(token = %token, value, "extracted number");
                    return Some(value);
                }
                // The pattern only admits digits and one separator, so this
                // cannot happen for well-formed matches.
                Err(_) => continue,
            }
        }
        None
    }
}

/// Scan `text` for space-delimited decimal numbers
pub fn extract_numbers(text: &str) -> Numbers<'_> {
    Numbers {
        matches: NUMBER_PATTERN.find_iter(text),
    }
}

/// Sum every value the extractor yields for `text`; 0 when nothing matches
pub fn sum_values<'t, F, I>(text: &'t str, extractor: F) -> f64
where
    F: FnOnce(&'t str) -> I,
    I: IntoIterator<Item = f64>,
{
    extractor(text).into_iter().sum()
}
