//! Traversal engine driving the rename rule over a parsed module
//!
//! The tree is walked depth-first, post-order. On exit from each
//! `from ... import ...` statement and each call expression the corresponding
//! rule callback runs with the original (pre-subtree-rewrite) and updated
//! node forms; a replacement node is spliced back into the owned tree and
//! reduced to a minimal text edit against the original source. Call rewrites
//! only touch the callee identifier's span, so nested rewrites never collide
//! and every byte outside a rewritten span survives verbatim.

use std::cell::RefCell;

use log::debug;
use ruff_python_ast::visitor::transformer::{self, Transformer};
use ruff_python_ast::{ExceptHandler, Expr, ModModule, Stmt, Suite};
use ruff_python_codegen::{Generator, Stylist};
use ruff_text_size::Ranged;

use crate::edit::SourceEdit;
use crate::rename::{FuncRenamer, Transform};

/// Apply the rename rule to a module, splicing replacements into the tree.
///
/// Returns the text edits corresponding to every rewrite, ready for
/// [`crate::edit::apply_edits`]. An empty vector means the module was left
/// untouched.
pub fn rewrite_module(
    module: &mut ModModule,
    rule: &FuncRenamer,
    stylist: &Stylist<'_>,
) -> Vec<SourceEdit> {
    let mut imports = ImportRewriter {
        rule,
        stylist,
        edits: Vec::new(),
    };
    imports.rewrite_body(&mut module.body);
    let mut edits = imports.edits;

    let calls = CallRewriter {
        rule,
        stylist,
        edits: RefCell::new(Vec::new()),
    };
    for stmt in &mut module.body {
        calls.visit_stmt(stmt);
    }
    edits.extend(calls.edits.into_inner());

    edits
}

/// Rewrites import statements wherever a statement body can hold them.
///
/// Hand-rolled recursion rather than the generic transformer so that a
/// `Remove` outcome can actually drop a statement from its parent body.
struct ImportRewriter<'a> {
    rule: &'a FuncRenamer,
    stylist: &'a Stylist<'a>,
    edits: Vec<SourceEdit>,
}

impl ImportRewriter<'_> {
    fn rewrite_body(&mut self, body: &mut Suite) {
        body.retain_mut(|stmt| self.rewrite_stmt(stmt));
    }

    /// Returns `false` when the statement should be removed from its body.
    fn rewrite_stmt(&mut self, stmt: &mut Stmt) -> bool {
        match stmt {
            Stmt::ImportFrom(import_from) => {
                let range = import_from.range();
                let original = import_from.clone();
                match self.rule.leave_import_from(&original, import_from) {
                    Transform::Replace(replacement) => {
                        let new_stmt = Stmt::ImportFrom(replacement);
                        let rendered = Generator::from(self.stylist).stmt(&new_stmt);
                        debug!("Rewriting import statement to: {rendered}");
                        self.edits.push(SourceEdit::new(range, rendered));
                        *stmt = new_stmt;
                        true
                    }
                    Transform::Remove => {
                        debug!("Removing import statement");
                        self.edits.push(SourceEdit::new(range, String::new()));
                        false
                    }
                    Transform::Retain => true,
                }
            }
            Stmt::FunctionDef(function_def) => {
                self.rewrite_body(&mut function_def.body);
                true
            }
            Stmt::ClassDef(class_def) => {
                self.rewrite_body(&mut class_def.body);
                true
            }
            Stmt::If(if_stmt) => {
                self.rewrite_body(&mut if_stmt.body);
                for clause in &mut if_stmt.elif_else_clauses {
                    self.rewrite_body(&mut clause.body);
                }
                true
            }
            Stmt::While(while_stmt) => {
                self.rewrite_body(&mut while_stmt.body);
                self.rewrite_body(&mut while_stmt.orelse);
                true
            }
            Stmt::For(for_stmt) => {
                self.rewrite_body(&mut for_stmt.body);
                self.rewrite_body(&mut for_stmt.orelse);
                true
            }
            Stmt::With(with_stmt) => {
                self.rewrite_body(&mut with_stmt.body);
                true
            }
            Stmt::Try(try_stmt) => {
                self.rewrite_body(&mut try_stmt.body);
                for handler in &mut try_stmt.handlers {
                    let ExceptHandler::ExceptHandler(handler) = handler;
                    self.rewrite_body(&mut handler.body);
                }
                self.rewrite_body(&mut try_stmt.orelse);
                self.rewrite_body(&mut try_stmt.finalbody);
                true
            }
            Stmt::Match(match_stmt) => {
                for case in &mut match_stmt.cases {
                    self.rewrite_body(&mut case.body);
                }
                true
            }
            _ => true,
        }
    }
}

/// Rewrites call expressions wherever they occur, children first.
struct CallRewriter<'a> {
    rule: &'a FuncRenamer,
    stylist: &'a Stylist<'a>,
    edits: RefCell<Vec<SourceEdit>>,
}

impl Transformer for CallRewriter<'_> {
    fn visit_expr(&self, expr: &mut Expr) {
        let original = match expr {
            Expr::Call(call) => Some(call.clone()),
            _ => None,
        };

        // Rewrite nested calls in arguments before deciding on this node.
        transformer::walk_expr(self, expr);

        let Some(original) = original else { return };
        let Expr::Call(updated) = expr else { return };
        match self.rule.leave_call(&original, updated) {
            Transform::Replace(replacement) => {
                let func_range = updated.func.range();
                let rendered = Generator::from(self.stylist).expr(&replacement.func);
                debug!("Rewriting call callee to: {rendered}");
                self.edits
                    .borrow_mut()
                    .push(SourceEdit::new(func_range, rendered));
                *expr = Expr::Call(replacement);
            }
            // A call cannot be deleted from expression position.
            Transform::Remove | Transform::Retain => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ruff_python_parser::parse_module;

    fn rewrite(source: &str) -> (ModModule, Vec<SourceEdit>) {
        let rule = FuncRenamer::new("pkg.old_func", "pkg.new_func").unwrap();
        let parsed = parse_module(source).expect("Failed to parse");
        let stylist = Stylist::from_tokens(parsed.tokens(), source);
        let mut module = parsed.syntax().clone();
        let edits = rewrite_module(&mut module, &rule, &stylist);
        (module, edits)
    }

    #[test]
    fn test_no_match_produces_no_edits() {
        let (_, edits) = rewrite("from other_pkg import old_func\nother_func(1)\n");
        assert!(edits.is_empty());
    }

    #[test]
    fn test_import_spliced_into_tree() {
        let (module, edits) = rewrite("from pkg import zeta, old_func\n");
        assert_eq!(edits.len(), 1);
        match &module.body[0] {
            Stmt::ImportFrom(import) => {
                let names: Vec<&str> = import.names.iter().map(|a| a.name.as_str()).collect();
                assert_eq!(names, ["new_func", "zeta"]);
            }
            _ => panic!("Expected import statement"),
        }
    }

    #[test]
    fn test_nested_calls_rewritten_inside_out() {
        let (_, edits) = rewrite("old_func(old_func(x))\n");
        assert_eq!(edits.len(), 2);
        for edit in &edits {
            assert_eq!(edit.replacement, "new_func");
        }
    }

    #[test]
    fn test_import_inside_function_body() {
        let (_, edits) = rewrite("def f():\n    from pkg import old_func\n    return old_func()\n");
        assert_eq!(edits.len(), 2);
    }

    #[test]
    fn test_qualified_call_not_rewritten() {
        let (_, edits) = rewrite("pkg.old_func(1)\n");
        assert!(edits.is_empty());
    }
}
