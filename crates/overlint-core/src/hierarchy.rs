//! Inherited-member resolution over class ancestor chains.
//!
//! Given the `extends` reference of a class, [`HierarchyResolver`] produces
//! the union of member names a subclass could override: every member declared
//! directly on each ancestor, minus constructors and static members at each
//! level, collected recursively up the chain. References that do not resolve
//! to exactly one class contribute nothing.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::rc::Rc;

use crate::resolver::TypeResolver;
use crate::syntax::TypeRef;

/// The set of member names visible from an ancestor chain.
pub type InheritedMemberSet = Rc<BTreeSet<String>>;

/// Resolves ancestor chains to inherited member-name sets.
///
/// Results are memoized by resolved class name for the lifetime of the
/// resolver, so sibling classes sharing ancestors re-walk nothing. A visited
/// set guards against cyclic `extends` chains; a detected cycle terminates
/// that branch and contributes nothing further.
pub struct HierarchyResolver<'a> {
    types: &'a dyn TypeResolver,
    cache: HashMap<String, InheritedMemberSet>,
}

impl<'a> HierarchyResolver<'a> {
    /// Creates a resolver over the given type-resolution service.
    #[must_use]
    pub fn new(types: &'a dyn TypeResolver) -> Self {
        Self {
            types,
            cache: HashMap::new(),
        }
    }

    /// An empty set, for classes with no ancestor clause.
    #[must_use]
    pub fn empty() -> InheritedMemberSet {
        Rc::new(BTreeSet::new())
    }

    /// Collects every inheritable member name reachable through the given
    /// `extends` reference.
    pub fn inherited_members(&mut self, reference: &TypeRef) -> InheritedMemberSet {
        let mut visited = HashSet::new();
        self.collect(&reference.name, &mut visited)
    }

    fn collect(&mut self, name: &str, visited: &mut HashSet<String>) -> InheritedMemberSet {
        if let Some(cached) = self.cache.get(name) {
            return Rc::clone(cached);
        }

        if !visited.insert(name.to_owned()) {
            tracing::warn!("cyclic extends chain through `{name}`, stopping collection");
            return Self::empty();
        }

        let Some(class) = self.types.resolve_class(name) else {
            // Interface, alias, unknown, or ambiguous: nothing inheritable.
            return Self::empty();
        };

        let mut names = BTreeSet::new();
        for member in &class.members {
            // Constructors and statics are never overridden. Exclusion is
            // per occurrence: a deeper non-static member of the same name
            // still lands in the set through the recursive step below.
            if member.is_constructor || member.is_static {
                continue;
            }
            names.insert(member.name.clone());
        }

        if let Some(parent) = &class.extends {
            let inherited = self.collect(&parent.name, visited);
            names.extend(inherited.iter().cloned());
        }

        let set = Rc::new(names);
        self.cache.insert(name.to_owned(), Rc::clone(&set));
        set
    }
}
