//! # Test helpers
//!
//! - `cli_runner`: `CliRunner` drives `showdown_cli::run` in process and
//!   captures stdout, stderr, the exit code and the elapsed time, with the
//!   `SHOWDOWN_*` environment reset around every invocation.
//!
//! ```rust,ignore
//! use crate::helpers::cli_runner::CliRunner;
//!
//! let res = CliRunner::new().run(&["score", "--cards", "AS", "KS", "QS", "JS", "TS"]);
//! assert_eq!(res.exit_code, 0);
//! ```
pub mod cli_runner;
