//! TypeScript syntax model.
//!
//! The extractor (see [`crate::typescript`]) lowers each parsed source file
//! into these types. Rules consume this model rather than raw Tree-sitter
//! nodes wherever member-level structure matters; rules that need a raw scan
//! can still walk the retained parse tree via [`SourceUnit::root_node`].

use std::path::PathBuf;
use tree_sitter::{Node, Tree};

/// A source span: 1-indexed line, 0-indexed column, byte offset and length.
///
/// Columns are 0-indexed as reported by Tree-sitter;
/// [`crate::Location::from_span`] converts to the 1-indexed convention used
/// in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column (0-indexed byte offset within line).
    pub column: usize,
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Span {
    /// Builds a span covering the given node.
    #[must_use]
    pub fn of(node: &Node<'_>) -> Self {
        let start = node.start_position();
        Self {
            line: start.row + 1,
            column: start.column,
            offset: node.start_byte(),
            length: node.end_byte().saturating_sub(node.start_byte()),
        }
    }
}

/// A syntactic reference to a named type, as written in an `extends` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Referenced name as written (e.g. `Base` or `ns.Base`).
    pub name: String,
    /// Location of the reference.
    pub span: Span,
}

/// Accessibility modifier on a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
}

/// Kind of class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Method declaration (including abstract signatures).
    Method,
    /// Property declaration.
    Property,
    /// `get` accessor.
    Getter,
    /// `set` accessor.
    Setter,
}

/// A method or property declared directly in a class body.
#[derive(Debug, Clone)]
pub struct MemberDecl {
    /// Member name as written.
    pub name: String,
    /// Kind of member.
    pub kind: MemberKind,
    /// Whether this member is the class constructor.
    pub is_constructor: bool,
    /// Whether the member carries the `static` modifier.
    pub is_static: bool,
    /// Whether the member carries the `abstract` modifier.
    pub is_abstract: bool,
    /// Accessibility modifier, if written.
    pub accessibility: Option<Accessibility>,
    /// Raw decorator texts, e.g. `"@override"`.
    pub decorators: Vec<String>,
    /// Location of the declaration.
    pub span: Span,
}

impl MemberDecl {
    /// Returns true if a decorator with exactly the given text is present.
    #[must_use]
    pub fn has_decorator(&self, text: &str) -> bool {
        self.decorators.iter().any(|d| d == text)
    }
}

/// A class declaration (or named class expression) found in a source file.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    /// Class name; `None` for anonymous class expressions.
    pub name: Option<String>,
    /// Location of the declaration.
    pub span: Span,
    /// The single `extends` reference, if present. `implements` clauses are
    /// not override-relevant and are never recorded.
    pub extends: Option<TypeRef>,
    /// Members declared directly on this class, in declaration order.
    pub members: Vec<MemberDecl>,
}

/// A top-level export statement.
#[derive(Debug, Clone)]
pub struct ExportDecl {
    /// Location of the export statement.
    pub span: Span,
    /// Tree-sitter kind of the exported declaration (e.g. `class_declaration`).
    pub decl_kind: String,
    /// Cleaned text of the `/** ... */` comment directly above, if any.
    pub doc_comment: Option<String>,
}

/// A variable declarator annotated with the `boolean` type.
#[derive(Debug, Clone)]
pub struct BooleanVar {
    /// Variable name.
    pub name: String,
    /// Location of the declarator.
    pub span: Span,
    /// Whether the initializer is `null` or `undefined`.
    pub null_initializer: bool,
}

/// An assignment of `null` or `undefined` to a plain identifier.
#[derive(Debug, Clone)]
pub struct NullAssign {
    /// Assigned identifier.
    pub name: String,
    /// Location of the assignment expression.
    pub span: Span,
}

/// One parsed source file plus the model extracted from it.
#[derive(Debug)]
pub struct SourceUnit {
    /// Path relative to the project root.
    pub path: PathBuf,
    /// Raw source text.
    pub source: String,
    /// Every class declaration in the file, including nested ones. Each
    /// entry is an independent scope for override reconciliation.
    pub classes: Vec<ClassDecl>,
    /// Top-level export statements in order.
    pub exports: Vec<ExportDecl>,
    /// `boolean`-annotated variable declarators.
    pub boolean_vars: Vec<BooleanVar>,
    /// Assignments of `null`/`undefined` to identifiers.
    pub null_assigns: Vec<NullAssign>,
    tree: Tree,
}

impl SourceUnit {
    /// Assembles a unit from its parts. Used by the extractor.
    #[must_use]
    pub(crate) fn new(path: PathBuf, source: String, tree: Tree) -> Self {
        Self {
            path,
            source,
            classes: Vec::new(),
            exports: Vec::new(),
            boolean_vars: Vec::new(),
            null_assigns: Vec::new(),
            tree,
        }
    }

    /// Root node of the retained parse tree.
    #[must_use]
    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Whether the parse tree contains syntax errors.
    #[must_use]
    pub fn has_syntax_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Source text covered by a node of this unit's tree.
    #[must_use]
    pub fn text(&self, node: &Node<'_>) -> &str {
        &self.source[node.start_byte()..node.end_byte()]
    }
}

/// Depth-first pre-order visit of a node and all of its descendants.
pub fn walk_tree<'t>(node: Node<'t>, f: &mut impl FnMut(Node<'t>)) {
    f(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk_tree(child, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, decorators: &[&str]) -> MemberDecl {
        MemberDecl {
            name: name.into(),
            kind: MemberKind::Method,
            is_constructor: false,
            is_static: false,
            is_abstract: false,
            accessibility: None,
            decorators: decorators.iter().map(|d| (*d).to_owned()).collect(),
            span: Span::default(),
        }
    }

    #[test]
    fn has_decorator_matches_exact_text() {
        let m = member("area", &["@override"]);
        assert!(m.has_decorator("@override"));
        assert!(!m.has_decorator("@override()"));
        assert!(!member("area", &[]).has_decorator("@override"));
    }
}
