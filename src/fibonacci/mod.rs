//! Memoizing Fibonacci calculator
//!
//! `FibonacciCalculator` owns its cache, so results survive across calls on
//! the same instance and are computed with exact big-integer arithmetic.
//!
//! # Examples
//!
//! ```
//! use pocketkit::fibonacci::FibonacciCalculator;
//!
//! let mut fib = FibonacciCalculator::new();
//! assert_eq!(fib.compute(10).to_string(), "55");
//! assert_eq!(fib.compute(15).to_string(), "610");
//! assert!(fib.compute_signed(-5).is_err());
//! assert!(fib.compute_f64(5.5).is_err());
//! ```

use crate::error::{ErrorCode, PocketError};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::collections::HashMap;
use thiserror::Error;
use tracing::trace;

/// Rejected calculator input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FibonacciError {
    #[error("Input must be a non-negative integer, got {0}.")]
    Negative(i64),

    #[error("Input must be an integer, got {0}.")]
    NonInteger(f64),

    #[error("Input must be a number, got '{0}'.")]
    NotANumber(String),
}

impl From<FibonacciError> for PocketError {
    fn from(err: FibonacciError) -> Self {
        let code = match err {
            FibonacciError::Negative(_) => ErrorCode::VALIDATION_OUT_OF_RANGE,
            FibonacciError::NonInteger(_) | FibonacciError::NotANumber(_) => {
                ErrorCode::VALIDATION_INVALID_INPUT
            }
        };
        PocketError::validation_with_code(code, err.to_string(), Some("n".to_string()))
    }
}

/// Fibonacci numbers with a per-instance cache
///
/// F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2). The cache only grows; failed
/// calls leave it untouched.
#[derive(Debug, Clone)]
pub struct FibonacciCalculator {
    cache: HashMap<u64, BigUint>,
    highest: u64,
}

impl FibonacciCalculator {
    pub fn new() -> Self {
        let mut cache = HashMap::new();
        cache.insert(0, BigUint::zero());
        cache.insert(1, BigUint::one());
        Self { cache, highest: 1 }
    }

    /// Compute F(n), filling the cache up to `n` on a miss
    pub fn compute(&mut self, n: u64) -> BigUint {
        if let Some(value) = self.cache.get(&n) {
            trace!(n, "cache hit");
            return value.clone();
        }

        trace!(n, from = self.highest, "cache miss");
        // Every index up to `highest` is cached, so extend upward from there.
        for i in (self.highest + 1)..=n {
            let next = &self.cache[&(i - 1)] + &self.cache[&(i - 2)];
            self.cache.insert(i, next);
        }
        self.highest = n;
        self.cache[&n].clone()
    }

    /// Compute F(n) for a signed index, rejecting negative values
    pub fn compute_signed(&mut self, n: i64) -> Result<BigUint, FibonacciError> {
        let index = u64::try_from(n).map_err(|_| FibonacciError::Negative(n))?;
        Ok(self.compute(index))
    }

    /// Compute F(n) for a floating-point index that must hold an integer value
    pub fn compute_f64(&mut self, n: f64) -> Result<BigUint, FibonacciError> {
        if !n.is_finite() || n.fract() != 0.0 {
            return Err(FibonacciError::NonInteger(n));
        }
        if n < 0.0 {
            return Err(FibonacciError::Negative(n as i64));
        }
        // u64::MAX rounds up to 2^64 as f64, which itself does not fit
        if n >= u64::MAX as f64 {
            return Err(FibonacciError::NonInteger(n));
        }
        Ok(self.compute(n as u64))
    }

    /// Compute F(n) for textual input such as a command-line argument
    pub fn compute_str(&mut self, input: &str) -> Result<BigUint, FibonacciError> {
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return self.compute_signed(n);
        }
        match trimmed.parse::<f64>() {
            Ok(n) if !n.is_nan() => self.compute_f64(n),
            _ => Err(FibonacciError::NotANumber(input.to_string())),
        }
    }

    /// Number of cached indices
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_cached(&self, n: u64) -> bool {
        self.cache.contains_key(&n)
    }
}

impl Default for FibonacciCalculator {
    fn default() -> Self {
        Self::new()
    }
}
