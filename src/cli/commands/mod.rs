//! Command implementation modules
//!
//! One module per binary; each exposes a `run_*` function the binary calls
//! after parsing its arguments.

pub mod analyze;
pub mod bot;

pub use analyze::{analyze, run_log_analyzer, AnalyzeParams};
pub use bot::run_assistant_bot;
