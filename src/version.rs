//! tally version information.
//!
//! Exposes the version as a single constant so the CLI and anything printing a banner agree on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The tally version string (for example, `0.1.0`).
pub const TALLY_VERSION: &str = env!("CARGO_PKG_VERSION");
