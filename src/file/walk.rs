use std::{collections::BTreeSet, fs, path::Path};

use crate::{
   error::{Error, Result},
   file::normalize::normalize_line_endings,
   git::IgnoreOracle,
};

/// Directory names never descended into.
const EXCLUDED_DIRS: &[&str] = &[
   "__pycache__",
   "__pypackages__",
   "_build",
   ".git",
   ".mypy_cache",
   ".pytest_cache",
   ".ruff_cache",
   ".tox",
   ".venv",
   "build",
   "dist",
   "lib",
   "logs",
   "node_modules",
   "site-packages",
   "venv",
];

/// Filename suffixes eligible for rewriting. Matched with `ends_with`
/// against the whole file name, not parsed as extensions: `fooDockerfile`
/// matches `Dockerfile`.
const INCLUDED_SUFFIXES: &[&str] = &[
   ".bat",
   ".bru",
   ".cs",
   ".css",
   ".dockerignore",
   ".env",
   ".gitignore",
   ".gitmodules",
   ".go",
   ".html",
   ".js",
   ".json",
   ".md",
   ".mod",
   ".py",
   ".rst",
   ".sql",
   ".tmpl",
   ".toml",
   ".txt",
   ".xml",
   ".yaml",
   ".yml",
   "Dockerfile",
   "INSTALLER",
   "LICENSE",
   "Makefile",
   "METADATA",
   "WHEEL",
];

/// True if the file name ends with any entry in the allow-list.
pub fn has_accepted_suffix(name: &str) -> bool {
   INCLUDED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Grouping key for the skipped-file report: the leading-dot extension when
/// the name contains a dot, otherwise the name itself.
pub fn suffix_token(name: &str) -> String {
   match name.rfind('.') {
      Some(idx) => format!(".{}", &name[idx + 1 ..]),
      None => name.to_string(),
   }
}

/// Depth-first walker that rewrites matched files in place and collects the
/// suffix tokens of files it skipped but git does not ignore.
pub struct Normalizer<'a> {
   oracle:           &'a dyn IgnoreOracle,
   ignore_available: bool,
   unhandled:        BTreeSet<String>,
   rewritten:        usize,
}

impl<'a> Normalizer<'a> {
   /// `ignore_available` gates the oracle: when false, no ignore check is
   /// made and no skipped file is reported.
   pub fn new(oracle: &'a dyn IgnoreOracle, ignore_available: bool) -> Self {
      Self { oracle, ignore_available, unhandled: BTreeSet::new(), rewritten: 0 }
   }

   /// Walks the tree rooted at `root` and returns the sorted set of
   /// unhandled suffix tokens.
   pub fn run(mut self, root: &Path) -> Result<BTreeSet<String>> {
      self.walk(root)?;
      tracing::info!("rewrote {} files", self.rewritten);
      Ok(self.unhandled)
   }

   fn walk(&mut self, dir: &Path) -> Result<()> {
      let read_dir_err =
         |source| Error::ReadDir { path: dir.to_path_buf(), source };

      for entry in fs::read_dir(dir).map_err(read_dir_err)? {
         let entry = entry.map_err(read_dir_err)?;
         let path = entry.path();
         let name = entry.file_name();
         let name = name.to_string_lossy();

         // file_type() does not follow symlinks, so a symlinked directory
         // is never traversed and cycles cannot form.
         let file_type = entry.file_type().map_err(read_dir_err)?;

         if file_type.is_dir() {
            if EXCLUDED_DIRS.contains(&name.as_ref()) {
               tracing::debug!("skipping excluded directory {}", path.display());
               continue;
            }
            self.walk(&path)?;
         } else if file_type.is_file() {
            if has_accepted_suffix(&name) {
               tracing::debug!("normalizing {}", path.display());
               normalize_line_endings(&path)?;
               self.rewritten += 1;
            } else if self.ignore_available && !self.oracle.is_ignored(&path)? {
               self.unhandled.insert(suffix_token(&name));
            }
         }
      }

      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use std::path::PathBuf;

   use tempfile::TempDir;

   use super::*;

   struct FakeOracle {
      ignored: Vec<PathBuf>,
   }

   impl IgnoreOracle for FakeOracle {
      fn is_ignored(&self, path: &Path) -> Result<bool> {
         Ok(self.ignored.contains(&path.to_path_buf()))
      }
   }

   struct PanickingOracle;

   impl IgnoreOracle for PanickingOracle {
      fn is_ignored(&self, path: &Path) -> Result<bool> {
         panic!("oracle consulted for {} with the gate off", path.display());
      }
   }

   #[test]
   fn accepted_suffix_matching() {
      assert!(has_accepted_suffix("main.py"));
      assert!(has_accepted_suffix("Makefile"));
      assert!(has_accepted_suffix("Dockerfile"));
      assert!(has_accepted_suffix("fooDockerfile"));
      assert!(!has_accepted_suffix("image.png"));
      assert!(!has_accepted_suffix("dockerfile"));
   }

   #[test]
   fn suffix_token_derivation() {
      assert_eq!(suffix_token("archive.tar.gz"), ".gz");
      assert_eq!(suffix_token("LICENSE"), "LICENSE");
      assert_eq!(suffix_token(".gitignore"), ".gitignore");
      assert_eq!(suffix_token("trailing."), ".");
   }

   #[test]
   fn excluded_dirs_untouched() {
      let tmp = TempDir::new().unwrap();
      fs::create_dir(tmp.path().join("build")).unwrap();
      fs::create_dir(tmp.path().join("node_modules")).unwrap();
      fs::write(tmp.path().join("build").join("c.py"), "a\r\nb\r\n").unwrap();
      fs::write(tmp.path().join("node_modules").join("x.weird"), "data").unwrap();

      let oracle = FakeOracle { ignored: Vec::new() };
      let unhandled = Normalizer::new(&oracle, true).run(tmp.path()).unwrap();

      // Nothing beneath an excluded directory is rewritten or reported.
      assert_eq!(fs::read_to_string(tmp.path().join("build").join("c.py")).unwrap(), "a\r\nb\r\n");
      assert!(unhandled.is_empty());
   }

   #[test]
   fn unhandled_tokens_collected_and_deduplicated() {
      let tmp = TempDir::new().unwrap();
      fs::write(tmp.path().join("a.png"), "x").unwrap();
      fs::write(tmp.path().join("b.png"), "y").unwrap();
      fs::write(tmp.path().join("NOTICE"), "z").unwrap();
      fs::write(tmp.path().join("c.lock"), "w").unwrap();

      let oracle = FakeOracle { ignored: vec![tmp.path().join("c.lock")] };
      let unhandled = Normalizer::new(&oracle, true).run(tmp.path()).unwrap();

      let tokens: Vec<_> = unhandled.into_iter().collect();
      assert_eq!(tokens, vec![".png".to_string(), "NOTICE".to_string()]);
   }

   #[test]
   fn gate_off_skips_oracle_and_report() {
      let tmp = TempDir::new().unwrap();
      fs::write(tmp.path().join("b.png"), "x").unwrap();
      fs::write(tmp.path().join("a.py"), "a\r\nb\n").unwrap();

      let unhandled = Normalizer::new(&PanickingOracle, false).run(tmp.path()).unwrap();

      assert!(unhandled.is_empty());
      assert_eq!(fs::read_to_string(tmp.path().join("a.py")).unwrap(), "a\nb\n");
   }

   #[cfg(unix)]
   #[test]
   fn symlinked_directory_not_traversed() {
      let tmp = TempDir::new().unwrap();
      let root = tmp.path().join("root");
      let outside = tmp.path().join("outside");
      fs::create_dir(&root).unwrap();
      fs::create_dir(&outside).unwrap();
      fs::write(outside.join("a.py"), "a\r\nb\r\n").unwrap();
      std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

      let oracle = FakeOracle { ignored: Vec::new() };
      let unhandled = Normalizer::new(&oracle, true).run(&root).unwrap();

      // The symlink is neither a directory nor a regular file to the
      // walker, so the target tree stays untouched and unreported.
      assert_eq!(fs::read_to_string(outside.join("a.py")).unwrap(), "a\r\nb\r\n");
      assert!(unhandled.is_empty());
   }
}
