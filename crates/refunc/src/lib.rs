//! Rename a Python function across call sites and imports.
//!
//! Given a pair of fully-qualified names such as `pkg.utils.old_func` and
//! `pkg.utils.new_func`, this crate rewrites bare calls (`old_func(...)`)
//! and `from pkg.utils import old_func` statements to reference the new
//! name, merging into existing import lists without duplicates and keeping
//! every untouched source byte intact. Qualified references
//! (`module.old_func(...)`) are deliberately out of scope.

pub mod ast_builder;
pub mod codemod;
pub mod config;
pub mod edit;
pub mod matcher;
pub mod rename;
pub mod transform;

pub use codemod::{ProcessResult, RewriteOutcome, process_file, rewrite_source};
pub use config::{QualifiedName, RenameError, RenamePair};
pub use matcher::{ModulePattern, module_matcher};
pub use rename::{FuncRenamer, Transform};
