use std::path::Path;

use console::style;

use crate::{
   Result,
   file::walk::Normalizer,
   git::{self, GitCheckIgnore},
};

/// Walks the working directory, rewrites matched files, and prints the
/// skipped-suffix report.
pub fn execute() -> Result<()> {
   let root = Path::new(".");

   // Checked once here; the walker never re-probes per directory.
   let ignore_available = git::has_ignore_rules(root);
   if !ignore_available {
      tracing::debug!("no .gitignore at root, skipping ignore checks");
   }

   let oracle = GitCheckIgnore::new(root);
   let unhandled = Normalizer::new(&oracle, ignore_available).run(root)?;

   let label = style("File suffixes skipped but not ignored by git:").bold();
   if unhandled.is_empty() {
      println!("{} {}", label, style("(none)").dim());
   } else {
      let tokens = unhandled.into_iter().collect::<Vec<_>>().join(", ");
      println!("{} {}", label, style(tokens).cyan());
   }

   Ok(())
}
