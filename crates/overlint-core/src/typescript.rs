//! TypeScript extraction using Tree-sitter.
//!
//! Lowers a parsed source file into the [`crate::syntax`] model: class
//! declarations with their members and `extends` references, top-level
//! exports with attached doc comments, and the handful of statement shapes
//! the simpler rules consume.

use std::path::PathBuf;
use tree_sitter::{Language, Node, Parser};

use crate::syntax::{
    walk_tree, Accessibility, BooleanVar, ClassDecl, ExportDecl, MemberDecl, MemberKind,
    NullAssign, SourceUnit, Span, TypeRef,
};

/// Extracts classes, exports, and declaration facts from TypeScript source.
pub struct TypeScriptExtractor {
    language: Language,
}

impl TypeScriptExtractor {
    /// Creates an extractor for `.ts` sources.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    /// Creates an extractor for `.tsx` sources.
    #[must_use]
    pub fn tsx() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn is_null_or_undefined(node: &Node<'_>, src: &[u8]) -> bool {
        match node.kind() {
            "null" | "undefined" => true,
            "identifier" => Self::text(node, src) == "undefined",
            _ => false,
        }
    }

    /// Pulls the single `extends` target out of a class node, skipping
    /// `implements` clauses entirely.
    fn extract_extends(class_node: &Node<'_>, src: &[u8]) -> Option<TypeRef> {
        let mut cursor = class_node.walk();
        for child in class_node.children(&mut cursor) {
            if child.kind() != "class_heritage" {
                continue;
            }
            let mut clauses = child.walk();
            for clause in child.children(&mut clauses) {
                if clause.kind() == "extends_clause" {
                    return Self::extends_value(&clause, src);
                }
            }
            // Grammar variants put the expression straight under the heritage node.
            return Self::extends_value(&child, src);
        }
        None
    }

    fn extends_value(clause: &Node<'_>, src: &[u8]) -> Option<TypeRef> {
        if let Some(value) = clause.child_by_field_name("value") {
            return Some(TypeRef {
                name: Self::text(&value, src).to_owned(),
                span: Span::of(&value),
            });
        }
        let mut cursor = clause.walk();
        for child in clause.named_children(&mut cursor) {
            if child.kind() != "type_arguments" {
                return Some(TypeRef {
                    name: Self::text(&child, src).to_owned(),
                    span: Span::of(&child),
                });
            }
        }
        None
    }

    fn extract_members(body: &Node<'_>, src: &[u8]) -> Vec<MemberDecl> {
        let mut members = Vec::new();
        // Decorators may appear as siblings of the member they annotate.
        let mut pending_decorators: Vec<String> = Vec::new();

        let mut cursor = body.walk();
        for child in body.children(&mut cursor) {
            match child.kind() {
                "decorator" => pending_decorators.push(Self::text(&child, src).to_owned()),
                "method_definition"
                | "abstract_method_signature"
                | "method_signature"
                | "public_field_definition"
                | "field_definition" => {
                    let decorators = std::mem::take(&mut pending_decorators);
                    if let Some(member) = Self::extract_member(&child, src, decorators) {
                        members.push(member);
                    }
                }
                // Index signatures, static blocks, comments, punctuation.
                _ => {}
            }
        }

        members
    }

    fn extract_member(
        node: &Node<'_>,
        src: &[u8],
        mut decorators: Vec<String>,
    ) -> Option<MemberDecl> {
        let name_node = node
            .child_by_field_name("name")
            .or_else(|| node.child_by_field_name("property"))?;
        let name = Self::text(&name_node, src).to_owned();

        let mut is_static = false;
        let mut is_abstract = false;
        let mut is_getter = false;
        let mut is_setter = false;
        let mut accessibility = None;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            // Modifiers and decorators all precede the member name.
            if child.id() == name_node.id() {
                break;
            }
            match child.kind() {
                "decorator" => decorators.push(Self::text(&child, src).to_owned()),
                "static" => is_static = true,
                "abstract" => is_abstract = true,
                "get" => is_getter = true,
                "set" => is_setter = true,
                "accessibility_modifier" => {
                    accessibility = Some(match Self::text(&child, src) {
                        "private" => Accessibility::Private,
                        "protected" => Accessibility::Protected,
                        _ => Accessibility::Public,
                    });
                }
                _ => {}
            }
        }

        let is_property = matches!(node.kind(), "public_field_definition" | "field_definition");
        let kind = if is_property {
            MemberKind::Property
        } else if is_getter {
            MemberKind::Getter
        } else if is_setter {
            MemberKind::Setter
        } else {
            MemberKind::Method
        };

        let is_constructor = !is_property && !is_getter && !is_setter && name == "constructor";

        Some(MemberDecl {
            name,
            kind,
            is_constructor,
            is_static,
            is_abstract,
            accessibility,
            decorators,
            span: Span::of(node),
        })
    }

    fn extract_class(node: &Node<'_>, src: &[u8]) -> ClassDecl {
        let name = node
            .child_by_field_name("name")
            .map(|n| Self::text(&n, src).to_owned());
        let members = node
            .child_by_field_name("body")
            .map(|body| Self::extract_members(&body, src))
            .unwrap_or_default();

        ClassDecl {
            name,
            span: Span::of(node),
            extends: Self::extract_extends(node, src),
            members,
        }
    }

    fn extract_export(node: &Node<'_>, src: &[u8]) -> ExportDecl {
        let decl_kind = node
            .child_by_field_name("declaration")
            .or_else(|| node.child_by_field_name("value"))
            .map_or_else(|| node.kind().to_owned(), |d| d.kind().to_owned());

        ExportDecl {
            span: Span::of(node),
            decl_kind,
            doc_comment: Self::doc_comment_above(node, src),
        }
    }

    /// Returns the cleaned text of a `/** ... */` comment sitting directly
    /// above the node, if one is attached.
    fn doc_comment_above(node: &Node<'_>, src: &[u8]) -> Option<String> {
        let prev = node.prev_named_sibling()?;
        if prev.kind() != "comment" {
            return None;
        }
        let raw = Self::text(&prev, src);
        if !raw.starts_with("/**") {
            return None;
        }
        if prev.end_position().row + 1 != node.start_position().row {
            return None;
        }
        Some(Self::clean_doc_text(raw))
    }

    fn clean_doc_text(raw: &str) -> String {
        raw.trim_start_matches("/**")
            .trim_end_matches("*/")
            .lines()
            .map(|line| line.trim().trim_start_matches('*').trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn extract_boolean_var(declarator: &Node<'_>, src: &[u8]) -> Option<BooleanVar> {
        let name_node = declarator.child_by_field_name("name")?;
        if name_node.kind() != "identifier" {
            return None;
        }

        let type_node = declarator.child_by_field_name("type")?;
        let mut is_boolean = false;
        let mut cursor = type_node.walk();
        for child in type_node.named_children(&mut cursor) {
            if child.kind() == "predefined_type" && Self::text(&child, src) == "boolean" {
                is_boolean = true;
            }
        }
        if !is_boolean {
            return None;
        }

        let null_initializer = declarator
            .child_by_field_name("value")
            .is_some_and(|v| Self::is_null_or_undefined(&v, src));

        Some(BooleanVar {
            name: Self::text(&name_node, src).to_owned(),
            span: Span::of(declarator),
            null_initializer,
        })
    }

    fn extract_null_assign(node: &Node<'_>, src: &[u8]) -> Option<NullAssign> {
        let left = node.child_by_field_name("left")?;
        let right = node.child_by_field_name("right")?;
        if left.kind() != "identifier" || !Self::is_null_or_undefined(&right, src) {
            return None;
        }
        Some(NullAssign {
            name: Self::text(&left, src).to_owned(),
            span: Span::of(node),
        })
    }

    /// Parses a source file and extracts its model.
    ///
    /// The returned unit has an empty path; the caller sets it.
    #[must_use]
    pub fn analyze(&self, source: String) -> SourceUnit {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .expect("failed to set typescript language");

        let tree = parser
            .parse(source.as_bytes(), None)
            .expect("failed to parse");

        let mut classes = Vec::new();
        let mut exports = Vec::new();
        let mut boolean_vars = Vec::new();
        let mut null_assigns = Vec::new();

        {
            let src = source.as_bytes();
            let root = tree.root_node();

            let mut cursor = root.walk();
            for child in root.children(&mut cursor) {
                if child.kind() == "export_statement" {
                    exports.push(Self::extract_export(&child, src));
                }
            }

            walk_tree(root, &mut |node| match node.kind() {
                "class_declaration" | "abstract_class_declaration" | "class" => {
                    classes.push(Self::extract_class(&node, src));
                }
                "variable_declarator" => {
                    if let Some(var) = Self::extract_boolean_var(&node, src) {
                        boolean_vars.push(var);
                    }
                }
                "assignment_expression" => {
                    if let Some(assign) = Self::extract_null_assign(&node, src) {
                        null_assigns.push(assign);
                    }
                }
                _ => {}
            });
        }

        let mut unit = SourceUnit::new(PathBuf::new(), source, tree);
        unit.classes = classes;
        unit.exports = exports;
        unit.boolean_vars = boolean_vars;
        unit.null_assigns = null_assigns;
        unit
    }
}

impl Default for TypeScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}
