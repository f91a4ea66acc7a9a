use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Main error type for the eolnorm application.
///
/// Every variant is fatal: the tool aborts the whole run on the first
/// failure rather than skipping files, since a partially processed tree
/// would be left with mixed line endings.
#[derive(Debug, Error)]
pub enum Error {
   /// I/O error occurred during file or directory operations.
   #[error("io error: {0}")]
   Io(#[from] io::Error),

   /// Failed to enumerate the entries of a directory.
   #[error("failed to read directory {path}: {source}", path = .path.display())]
   ReadDir {
      path:   PathBuf,
      #[source]
      source: io::Error,
   },

   /// Failed to read a matched file.
   #[error("failed to read {path}: {source}", path = .path.display())]
   Read {
      path:   PathBuf,
      #[source]
      source: io::Error,
   },

   /// Failed to write a matched file back in place.
   #[error("failed to write {path}: {source}", path = .path.display())]
   Write {
      path:   PathBuf,
      #[source]
      source: io::Error,
   },

   /// A matched file is not valid UTF-8 and cannot be rewritten as text.
   #[error("file is not valid UTF-8: {path}", path = _0.display())]
   NonUtf8(PathBuf),

   /// Failed to launch the `git check-ignore` subprocess.
   #[error("failed to run git check-ignore: {0}")]
   CheckIgnoreSpawn(#[source] io::Error),

   /// `git check-ignore` exited with a status that means neither "ignored"
   /// nor "not ignored". Collapsing this into "not ignored" would silently
   /// misclassify files, so it is always fatal.
   #[error("git check-ignore failed with {status} for {path}: {stderr}", path = .path.display())]
   CheckIgnoreStatus {
      path:   PathBuf,
      status: ExitStatus,
      stderr: String,
   },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
