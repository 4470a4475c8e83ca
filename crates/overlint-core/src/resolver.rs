//! Type resolution: maps syntactic type references to class declarations.

use std::collections::HashMap;

use crate::syntax::{ClassDecl, SourceUnit};

/// Resolves a syntactic type reference to the class declaration it denotes.
///
/// This is the single seam between the override machinery and whatever
/// supplies type information. References to anything that is not exactly one
/// declared class (interfaces, type aliases, unknown or duplicated names)
/// resolve to `None`.
pub trait TypeResolver {
    /// Looks up the class declaration a reference denotes, if any.
    fn resolve_class(&self, name: &str) -> Option<&ClassDecl>;
}

#[derive(Debug)]
enum Entry {
    Class(ClassDecl),
    Ambiguous,
}

/// Whole-program class index built once per analysis pass.
///
/// Only named class declarations are registered. A name declared more than
/// once anywhere in the program becomes ambiguous and stops resolving; this
/// keeps resolution deterministic without caring about file order.
#[derive(Debug, Default)]
pub struct ProgramIndex {
    classes: HashMap<String, Entry>,
}

impl ProgramIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index over every class in the given units.
    #[must_use]
    pub fn from_units<'a>(units: impl IntoIterator<Item = &'a SourceUnit>) -> Self {
        let mut index = Self::new();
        for unit in units {
            for class in &unit.classes {
                index.insert(class.clone());
            }
        }
        index
    }

    /// Registers a class declaration. Anonymous classes are skipped;
    /// duplicate names become ambiguous.
    pub fn insert(&mut self, class: ClassDecl) {
        let Some(name) = class.name.clone() else {
            return;
        };
        if self.classes.contains_key(&name) {
            tracing::debug!("class name `{name}` declared more than once, now ambiguous");
            self.classes.insert(name, Entry::Ambiguous);
        } else {
            self.classes.insert(name, Entry::Class(class));
        }
    }

    /// Number of uniquely-resolvable classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes
            .values()
            .filter(|e| matches!(e, Entry::Class(_)))
            .count()
    }

    /// Whether the index holds no resolvable classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TypeResolver for ProgramIndex {
    fn resolve_class(&self, name: &str) -> Option<&ClassDecl> {
        match self.classes.get(name) {
            Some(Entry::Class(class)) => Some(class),
            Some(Entry::Ambiguous) | None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Span;

    fn class(name: &str) -> ClassDecl {
        ClassDecl {
            name: Some(name.to_owned()),
            span: Span::default(),
            extends: None,
            members: Vec::new(),
        }
    }

    #[test]
    fn resolves_registered_class() {
        let mut index = ProgramIndex::new();
        index.insert(class("Base"));
        assert!(index.resolve_class("Base").is_some());
        assert!(index.resolve_class("Other").is_none());
    }

    #[test]
    fn duplicate_names_become_ambiguous() {
        let mut index = ProgramIndex::new();
        index.insert(class("Base"));
        index.insert(class("Base"));
        assert!(index.resolve_class("Base").is_none());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn anonymous_classes_are_skipped() {
        let mut index = ProgramIndex::new();
        index.insert(ClassDecl {
            name: None,
            span: Span::default(),
            extends: None,
            members: Vec::new(),
        });
        assert!(index.is_empty());
    }
}
