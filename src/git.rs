//! Git boundary: the ignore-rule probe and the check-ignore oracle

use std::{
   path::{Path, PathBuf},
   process::Command,
};

use crate::error::{Error, Result};

/// Answers whether version control ignores a given path.
///
/// The traversal only ever talks to this trait, so tests can swap in an
/// in-memory fake instead of spawning a `git` process per file.
pub trait IgnoreOracle {
   fn is_ignored(&self, path: &Path) -> Result<bool>;
}

/// Checks if an ignore-rule file exists at the root
pub fn has_ignore_rules(root: &Path) -> bool {
   root.join(".gitignore").exists()
}

/// `IgnoreOracle` backed by `git check-ignore`, run from `root`.
pub struct GitCheckIgnore {
   root: PathBuf,
}

impl GitCheckIgnore {
   pub fn new(root: impl Into<PathBuf>) -> Self {
      Self { root: root.into() }
   }
}

impl IgnoreOracle for GitCheckIgnore {
   /// Exit status 0 means ignored, 1 means not ignored. Any other status
   /// (no repository, git missing, I/O failure) is an error, never a
   /// silent "not ignored".
   fn is_ignored(&self, path: &Path) -> Result<bool> {
      let output = Command::new("git")
         .args(["check-ignore", "-q", "--"])
         .arg(path)
         .current_dir(&self.root)
         .output()
         .map_err(Error::CheckIgnoreSpawn)?;

      match output.status.code() {
         Some(0) => Ok(true),
         Some(1) => Ok(false),
         _ => Err(Error::CheckIgnoreStatus {
            path:   path.to_path_buf(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
         }),
      }
   }
}
