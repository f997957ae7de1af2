//! The function-rename rewrite rule
//!
//! [`FuncRenamer`] holds one `(rename_from, rename_to)` pair and exposes the
//! two node callbacks the traversal engine fires on exit from an import
//! statement and from a call expression. Each callback is a pure function of
//! the fixed configuration and its node arguments; it either passes the node
//! through, hands back a freshly built replacement, or asks for deletion.

use ruff_python_ast::{Expr, ExprCall, StmtImportFrom};

use crate::ast_builder;
use crate::config::{RenameError, RenamePair};
use crate::matcher::{ModulePattern, module_matcher};

/// Outcome of a rewrite callback, spliced into the tree by the engine
#[derive(Debug)]
pub enum Transform<T> {
    /// No change; keep the node as-is
    Retain,
    /// Replace the node with this one
    Replace(T),
    /// Delete the node from its parent
    Remove,
}

/// Rewrite rule renaming one function across imports and call sites
#[derive(Debug, Clone)]
pub struct FuncRenamer {
    old_name: String,
    new_name: String,
    import_pattern: ModulePattern,
}

impl FuncRenamer {
    /// Build a renamer from two fully-qualified names.
    ///
    /// Fails on malformed names; a bad configuration is rejected here rather
    /// than silently matching nothing during traversal.
    pub fn new(rename_from: &str, rename_to: &str) -> Result<Self, RenameError> {
        Ok(Self::from_pair(&RenamePair::new(rename_from, rename_to)?))
    }

    pub fn from_pair(pair: &RenamePair) -> Self {
        Self {
            old_name: pair.from.simple_name().to_owned(),
            new_name: pair.to.simple_name().to_owned(),
            import_pattern: module_matcher(pair.from.module_parts()),
        }
    }

    /// The simple name being renamed away from
    pub fn old_name(&self) -> &str {
        &self.old_name
    }

    /// The simple name being renamed to
    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    /// Check whether an import statement's module clause names the module the
    /// renamed function lives in. Only the module clause is inspected; the
    /// relative-import level is left alone and preserved on reconstruction.
    fn test_import_from(&self, node: &StmtImportFrom) -> bool {
        node.module
            .as_ref()
            .is_some_and(|module| self.import_pattern.matches_dotted(module.as_str()))
    }

    /// Exit callback for `from module import ...` statements.
    ///
    /// On a module match, the alias list is rebuilt: the old name is dropped
    /// (any `as` alias collapses away with it), the new name is added unless
    /// already imported, and the whole list is re-sorted by evaluated name.
    /// The re-sort applies even when the old name turns out to be absent, so
    /// unrelated aliases of a matching statement may be reordered.
    pub fn leave_import_from(
        &self,
        original: &StmtImportFrom,
        updated: &StmtImportFrom,
    ) -> Transform<StmtImportFrom> {
        if !self.test_import_from(updated) {
            return Transform::Retain;
        }

        let mut new_names = Vec::with_capacity(original.names.len());
        let mut new_import_missing = true;
        let mut new_import_alias = None;
        for import_alias in &original.names {
            if import_alias.name.as_str() == self.old_name {
                new_import_alias = Some(ast_builder::alias(&self.new_name));
            } else {
                if import_alias.name.as_str() == self.new_name {
                    new_import_missing = false;
                }
                new_names.push(import_alias.clone());
            }
        }
        match new_import_alias {
            Some(new_alias) if new_import_missing => new_names.push(new_alias),
            _ => {}
        }
        new_names.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));

        Transform::Replace(ast_builder::import_from(
            updated.module.clone(),
            updated.level,
            new_names,
        ))
    }

    /// Exit callback for call expressions.
    ///
    /// Only bare-name callees equal to the old name are rewritten; qualified
    /// calls such as `module.old_func(...)` pass through untouched. Arguments
    /// carry over from the updated node with order and content intact.
    pub fn leave_call(&self, _original: &ExprCall, updated: &ExprCall) -> Transform<ExprCall> {
        match updated.func.as_ref() {
            Expr::Name(func) if func.id.as_str() == self.old_name => Transform::Replace(
                ast_builder::call(ast_builder::name(&self.new_name), updated.arguments.clone()),
            ),
            _ => Transform::Retain,
        }
    }
}
