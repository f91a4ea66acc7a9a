//! CRLF→LF line-ending normalizer for source trees.
//!
//! eolnorm walks the working directory, rewrites text files matching a
//! fixed allow-list of suffixes in place, and reports the file types it
//! skipped that git does not already ignore.

pub mod cmd;
pub mod error;
pub mod file;
pub mod git;
pub mod version;

pub use error::{Error, Result};
