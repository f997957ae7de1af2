//! Factory functions for synthetic AST nodes
//!
//! Rewriting never mutates a node in place: a replacement is always a fresh,
//! fully-formed node built here. Synthetic nodes carry default ranges to
//! clearly mark that they do not originate from source text.

use ruff_python_ast::{
    Alias, Arguments, AtomicNodeIndex, Expr, ExprCall, ExprContext, ExprName, Identifier,
    StmtImportFrom, name::Name,
};
use ruff_text_size::TextRange;

/// Create a synthetic range for generated nodes
fn synthetic_range() -> TextRange {
    TextRange::default()
}

/// Create an import alias without a local rename: `name`
pub fn alias(name: &str) -> Alias {
    Alias {
        name: Identifier::new(name, synthetic_range()),
        asname: None,
        range: synthetic_range(),
        node_index: AtomicNodeIndex::NONE,
    }
}

/// Create a from-import statement from an existing module clause and alias list.
///
/// The module clause and level are typically carried over from the statement
/// being replaced, so `from ..pkg import x` keeps its relative dots.
pub fn import_from(module: Option<Identifier>, level: u32, names: Vec<Alias>) -> StmtImportFrom {
    StmtImportFrom {
        module,
        names,
        level,
        range: synthetic_range(),
        node_index: AtomicNodeIndex::NONE,
        is_lazy: false,
    }
}

/// Create a from-import with aliases: `from module import name as alias, ...`
pub fn from_import_with_aliases(module: &str, imports: &[(&str, Option<&str>)]) -> StmtImportFrom {
    let names = imports
        .iter()
        .map(|(name, asname)| Alias {
            name: Identifier::new(*name, synthetic_range()),
            asname: asname.map(|a| Identifier::new(a, synthetic_range())),
            range: synthetic_range(),
            node_index: AtomicNodeIndex::NONE,
        })
        .collect();

    import_from(Some(Identifier::new(module, synthetic_range())), 0, names)
}

/// Create a name expression: `name`
pub fn name(name: &str) -> Expr {
    Expr::Name(ExprName {
        id: Name::new(name),
        ctx: ExprContext::Load,
        range: synthetic_range(),
        node_index: AtomicNodeIndex::NONE,
    })
}

/// Create a call expression from a callee and an existing argument list
pub fn call(func: Expr, arguments: Arguments) -> ExprCall {
    ExprCall {
        func: Box::new(func),
        arguments,
        range: synthetic_range(),
        node_index: AtomicNodeIndex::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias() {
        let alias = alias("new_func");
        assert_eq!(alias.name.as_str(), "new_func");
        assert!(alias.asname.is_none());
    }

    #[test]
    fn test_from_import_with_aliases() {
        let import = from_import_with_aliases("pkg.sub", &[("a", None), ("b", Some("c"))]);
        assert_eq!(import.module.as_ref().unwrap().as_str(), "pkg.sub");
        assert_eq!(import.level, 0);
        assert_eq!(import.names.len(), 2);
        assert_eq!(import.names[0].name.as_str(), "a");
        assert!(import.names[0].asname.is_none());
        assert_eq!(import.names[1].asname.as_ref().unwrap().as_str(), "c");
    }

    #[test]
    fn test_name() {
        match name("new_func") {
            Expr::Name(expr) => assert_eq!(expr.id.as_str(), "new_func"),
            _ => panic!("Expected Name expression"),
        }
    }
}
