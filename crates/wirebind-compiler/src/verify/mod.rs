//! Golden-output verification.
//!
//! Given a fixed declaration graph and the fixed renderer, the rendered
//! text must equal a stored expected text byte-for-byte after trimming
//! leading and trailing whitespace. Any difference is reported as a
//! line-level structured diff, never a silent pass.

mod golden;


pub use golden::{GoldenReport, LineDiff, compare_golden, parse_layout_constants};
