//! Source- and file-level rewrite driver
//!
//! Ties the pieces together for one file: parse, walk, splice, patch. The
//! parser and code generator own everything about concrete syntax; the rename
//! rule only ever sees well-formed nodes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use log::debug;
use ruff_python_codegen::Stylist;
use ruff_python_parser::parse_module;
use walkdir::WalkDir;

use crate::edit::apply_edits;
use crate::rename::FuncRenamer;
use crate::transform::rewrite_module;

/// Result of rewriting one source buffer
#[derive(Debug)]
pub struct RewriteOutcome {
    /// Whether the output differs from the input
    pub changed: bool,
    /// Number of nodes the rule replaced
    pub rewrites: usize,
    /// The rewritten source (equal to the input when nothing matched)
    pub new_source: String,
}

/// Rewrite a Python source buffer with the given rename rule.
///
/// A buffer with no applicable match comes back byte-for-byte identical. A
/// rewrite can also be textually neutral (re-sorting an already sorted import
/// list), which is why `changed` compares bytes rather than counting edits.
pub fn rewrite_source(source: &str, rule: &FuncRenamer) -> Result<RewriteOutcome> {
    let parsed =
        parse_module(source).map_err(|err| anyhow!("failed to parse Python source: {err}"))?;
    let stylist = Stylist::from_tokens(parsed.tokens(), source);
    let mut module = parsed.syntax().clone();

    let edits = rewrite_module(&mut module, rule, &stylist);
    let rewrites = edits.len();
    let new_source = apply_edits(source, &edits)?;
    let changed = new_source != source;
    debug!("Applied {rewrites} rewrite(s), changed: {changed}");

    Ok(RewriteOutcome {
        changed,
        rewrites,
        new_source,
    })
}

/// Result of processing a single file
#[derive(Debug)]
pub struct ProcessResult {
    /// Original source code
    pub old_source: String,
    /// New source code, present only if the file changed
    pub new_source: Option<String>,
    /// Number of nodes the rule replaced
    pub rewrites: usize,
}

/// Process a single Python file, optionally writing changes back to disk.
pub fn process_file(path: &Path, rule: &FuncRenamer, write: bool) -> Result<ProcessResult> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))?;

    let outcome = rewrite_source(&source, rule)
        .with_context(|| format!("failed to rewrite {}", path.display()))?;
    if !outcome.changed {
        return Ok(ProcessResult {
            old_source: source,
            new_source: None,
            rewrites: outcome.rewrites,
        });
    }

    if write {
        fs::write(path, &outcome.new_source)
            .with_context(|| format!("failed to write file: {}", path.display()))?;
    }

    Ok(ProcessResult {
        old_source: source,
        new_source: Some(outcome.new_source),
        rewrites: outcome.rewrites,
    })
}

/// Expand the given paths into a deterministic list of Python files.
///
/// Directories are walked recursively in file-name order; explicit file
/// arguments are taken as-is, whatever their extension.
pub fn discover_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry
                    .with_context(|| format!("failed to walk directory: {}", path.display()))?;
                if entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|ext| ext == "py")
                {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rule() -> FuncRenamer {
        FuncRenamer::new("pkg.old_func", "pkg.new_func").unwrap()
    }

    #[test]
    fn test_rewrite_source_basic() {
        let outcome = rewrite_source("from pkg import old_func\nold_func(1, 2)\n", &rule()).unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.rewrites, 2);
        assert_eq!(
            outcome.new_source,
            "from pkg import new_func\nnew_func(1, 2)\n"
        );
    }

    #[test]
    fn test_rewrite_source_no_match_is_identity() {
        let source = "# comment\nfrom other_pkg import old_func  # trailing\n";
        let outcome = rewrite_source(source, &rule()).unwrap();
        assert!(!outcome.changed);
        assert_eq!(outcome.new_source, source);
    }

    #[test]
    fn test_rewrite_source_rejects_invalid_python() {
        assert!(rewrite_source("def broken(:\n", &rule()).is_err());
    }
}
