use std::{fs, path::Path};

use crate::error::{Error, Result};

/// Rewrites `path` in place with every CRLF collapsed to a single LF.
///
/// The whole file is read and written back unconditionally, so running
/// twice is byte-identical to running once. Content must be valid UTF-8;
/// a binary file reaching this point is a hard error, not a skip.
pub fn normalize_line_endings(path: &Path) -> Result<()> {
   let bytes = fs::read(path).map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
   let content =
      String::from_utf8(bytes).map_err(|_| Error::NonUtf8(path.to_path_buf()))?;

   let normalized = content.replace("\r\n", "\n");

   fs::write(path, normalized).map_err(|source| Error::Write { path: path.to_path_buf(), source })
}
