//! Memoized Fibonacci calculator usage
//!
//! ```bash
//! cargo run --example fibonacci -- 10 15 100 -5 5.5
//! ```

use pocketkit::fibonacci::FibonacciCalculator;
use pocketkit::PocketError;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if args.is_empty() {
        vec!["10".to_string(), "15".to_string()]
    } else {
        args
    };

    let mut fib = FibonacciCalculator::new();
    for input in &inputs {
        match fib.compute_str(input) {
            Ok(value) => println!("F({}) = {}", input, value),
            Err(err) => eprintln!("F({}): {}", input, PocketError::from(err)),
        }
    }
    println!("cached indices: {}", fib.cached_len());
}
