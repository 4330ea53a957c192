//! # Pocketkit
//!
//! A handful of small command-line utilities sharing one library.
//!
//! ## Usage
//!
//! ```bash
//! assistant-bot
//! log-analyzer /path/to/logfile.log [level]
//! ```
//!
//! ## Modules
//!
//! - `bot` - Command dispatch and the interactive loop of the assistant bot
//! - `cli` - Argument structures and tracing setup shared by the binaries
//! - `contacts` - In-memory contact book with insert / no-op / conflict outcomes
//! - `error` - Crate-level fatal error type and error code registry
//! - `fibonacci` - Memoizing Fibonacci calculator with exact big integers
//! - `logs` - Log line parsing, loading, aggregation and reporting
//! - `numbers` - Extraction and summing of space-delimited decimal numbers
pub mod bot;
pub mod cli;
pub mod contacts;
pub mod error;
pub mod fibonacci;
pub mod logs;
pub mod numbers;


pub use error::{PocketError, Result};
