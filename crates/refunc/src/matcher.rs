//! Structural matcher for import module clauses
//!
//! A dotted module path like `pkg.sub` reads as an attribute-access chain:
//! the name `pkg` accessed with `.sub`. [`module_matcher`] builds the pattern
//! mirroring that shape once per configuration; matching an import statement's
//! module clause is then a structural walk, segment for segment.

/// Pattern over the shape of a dotted module path.
///
/// `Name` matches a single plain module name; `Attribute` matches a dotted
/// chain whose rightmost segment equals `attr` and whose prefix recursively
/// matches `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModulePattern {
    Name(String),
    Attribute {
        value: Box<ModulePattern>,
        attr: String,
    },
}

/// Build the pattern matching exactly the given module path.
///
/// A one-element path yields a bare [`ModulePattern::Name`], so single-segment
/// and multi-segment module paths are handled uniformly.
pub fn module_matcher(parts: &[String]) -> ModulePattern {
    let (attr, values) = parts
        .split_last()
        .expect("module path has at least one segment");
    if values.is_empty() {
        ModulePattern::Name(attr.clone())
    } else {
        ModulePattern::Attribute {
            value: Box::new(module_matcher(values)),
            attr: attr.clone(),
        }
    }
}

impl ModulePattern {
    /// Match a dotted module clause such as `pkg.sub` against this pattern.
    pub fn matches_dotted(&self, module: &str) -> bool {
        let segments: Vec<&str> = module.split('.').collect();
        self.matches_segments(&segments)
    }

    fn matches_segments(&self, segments: &[&str]) -> bool {
        match self {
            ModulePattern::Name(name) => segments.len() == 1 && segments[0] == name.as_str(),
            ModulePattern::Attribute { value, attr } => match segments.split_last() {
                Some((last, prefix)) => {
                    !prefix.is_empty() && *last == attr.as_str() && value.matches_segments(prefix)
                }
                None => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parts(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_single_segment_builds_bare_name() {
        let pattern = module_matcher(&parts(&["pkg"]));
        assert_eq!(pattern, ModulePattern::Name("pkg".to_owned()));
    }

    #[test]
    fn test_nested_structure() {
        let pattern = module_matcher(&parts(&["pkg", "sub", "inner"]));
        assert_eq!(
            pattern,
            ModulePattern::Attribute {
                value: Box::new(ModulePattern::Attribute {
                    value: Box::new(ModulePattern::Name("pkg".to_owned())),
                    attr: "sub".to_owned(),
                }),
                attr: "inner".to_owned(),
            }
        );
    }

    #[test]
    fn test_single_segment_matches_bare_name_only() {
        let pattern = module_matcher(&parts(&["pkg"]));
        assert!(pattern.matches_dotted("pkg"));
        assert!(!pattern.matches_dotted("pkg.sub"));
        assert!(!pattern.matches_dotted("other"));
    }

    #[test]
    fn test_dotted_path_matches_exact_chain() {
        let pattern = module_matcher(&parts(&["pkg", "sub"]));
        assert!(pattern.matches_dotted("pkg.sub"));
        assert!(!pattern.matches_dotted("pkg"));
        assert!(!pattern.matches_dotted("sub"));
        assert!(!pattern.matches_dotted("pkg.other"));
        assert!(!pattern.matches_dotted("other.sub"));
        assert!(!pattern.matches_dotted("pkg.sub.extra"));
        assert!(!pattern.matches_dotted("outer.pkg.sub"));
    }

    #[test]
    fn test_deep_path_mismatch_in_middle_segment() {
        let pattern = module_matcher(&parts(&["a", "b", "c"]));
        assert!(pattern.matches_dotted("a.b.c"));
        assert!(!pattern.matches_dotted("a.x.c"));
    }
}
