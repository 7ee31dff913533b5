//! Tree-sitter parser integration for Java
//!
//! Parses compilation units with the tree-sitter Java grammar and extracts
//! the handful of facts the generator relies on.

use super::{descriptor, ensure_java_path, Constructor, SourceClass, SourceIntrospector, Visibility};
use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tree_sitter::{Node, Parser, Tree};

const TYPE_DECLARATION_KINDS: [&str; 5] = [
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
];

/// A top-level type declared in a compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Tree-sitter node kind, e.g. `class_declaration`
    pub kind: String,
    pub name: String,
    /// Byte offset of the closing brace of the body
    pub body_close: Option<usize>,
    pub constructors: Vec<Constructor>,
}

/// Facts extracted from one parsed compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUnit {
    pub path: PathBuf,
    pub package: Option<String>,
    /// Byte offset just past the package declaration
    pub package_end: Option<usize>,
    /// Byte offset just past the comments that open the file
    pub header_end: Option<usize>,
    pub types: Vec<TypeDeclaration>,
}

impl ParsedUnit {
    /// The unit's only top-level type, or `NotSingleClass`.
    pub fn single_type(&self) -> Result<&TypeDeclaration> {
        match self.types.as_slice() {
            [only] => Ok(only),
            types => Err(Error::NotSingleClass {
                path: self.path.clone(),
                found: types.len(),
            }),
        }
    }

    pub fn into_source_class(self) -> Result<SourceClass> {
        let declaration = self.single_type()?.clone();
        if declaration.kind != "class_declaration" {
            return Err(Error::NotSingleClass {
                path: self.path,
                found: 0,
            });
        }
        Ok(SourceClass::new(
            self.path,
            self.package,
            declaration.name,
            declaration.constructors,
        ))
    }
}

/// Reads Java source classes from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaSourceIntrospector;

impl SourceIntrospector for JavaSourceIntrospector {
    fn load(&self, path: &Path) -> Result<SourceClass> {
        ensure_java_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_unit(path, &content)?.into_source_class()
    }
}

fn java_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_java::LANGUAGE.into())
        .map_err(|e| Error::Config(format!("Failed to load Java grammar: {}", e)))?;
    Ok(parser)
}

/// Parse Java source and extract its package, top-level types and
/// constructors. Any syntax error fails the parse.
pub fn parse_unit(path: &Path, content: &str) -> Result<ParsedUnit> {
    let mut parser = java_parser()?;
    let tree = parser.parse(content, None).ok_or_else(|| Error::Parse {
        file: path.to_path_buf(),
        line: 0,
        column: 0,
        message: "parser produced no tree".into(),
    })?;
    check_syntax(path, &tree)?;

    let source = content.as_bytes();
    let root = tree.root_node();
    let mut unit = ParsedUnit {
        path: path.to_path_buf(),
        package: None,
        package_end: None,
        header_end: None,
        types: Vec::new(),
    };

    let mut cursor = root.walk();
    let mut in_header = true;
    for child in root.children(&mut cursor) {
        let is_comment = matches!(child.kind(), "line_comment" | "block_comment");
        in_header &= is_comment;
        if in_header {
            unit.header_end = Some(child.end_byte());
        }
        match child.kind() {
            "package_declaration" => {
                unit.package = package_name(child, source);
                unit.package_end = Some(child.end_byte());
            }
            kind if TYPE_DECLARATION_KINDS.contains(&kind) => {
                unit.types.push(type_declaration(child, source)?);
            }
            _ => {}
        }
    }

    debug!(
        path = %path.display(),
        types = unit.types.len(),
        package = unit.package.as_deref().unwrap_or(""),
        "Parsed Java unit"
    );
    Ok(unit)
}

fn check_syntax(path: &Path, tree: &Tree) -> Result<()> {
    let root = tree.root_node();
    if !root.has_error() {
        return Ok(());
    }
    let node = first_error(root).unwrap_or(root);
    let message = if node.is_missing() {
        format!("missing '{}'", node.kind())
    } else {
        "syntax error".to_string()
    };
    Err(Error::Parse {
        file: path.to_path_buf(),
        line: node.start_position().row + 1,
        column: node.start_position().column + 1,
        message,
    })
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found.or(Some(node))
}

fn node_text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Collapse internal whitespace so `Map<String,   Integer>` reads cleanly.
fn type_text(node: Node, source: &[u8]) -> String {
    node_text(node, source)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn package_name(node: Node, source: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    let name = node
        .children(&mut cursor)
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
        .map(|c| node_text(c, source).to_string());
    name
}

fn type_declaration(node: Node, source: &[u8]) -> Result<TypeDeclaration> {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();
    let body = node.child_by_field_name("body");
    let body_close = body.and_then(|b| {
        let mut cursor = b.walk();
        let close = b
            .children(&mut cursor)
            .filter(|c| c.kind() == "}")
            .last()
            .map(|c| c.start_byte());
        close
    });

    let mut constructors = Vec::new();
    if let Some(body) = body {
        let mut cursor = body.walk();
        for member in body.children(&mut cursor) {
            if member.kind() == "constructor_declaration" {
                constructors.push(constructor(member, &name, source)?);
            }
        }
    }

    Ok(TypeDeclaration {
        kind: node.kind().to_string(),
        name,
        body_close,
        constructors,
    })
}

fn visibility(node: Node) -> Visibility {
    let mut cursor = node.walk();
    let modifiers = node.children(&mut cursor).find(|c| c.kind() == "modifiers");
    let Some(modifiers) = modifiers else {
        return Visibility::Package;
    };
    let mut cursor = modifiers.walk();
    let visibility = modifiers
        .children(&mut cursor)
        .find_map(|m| match m.kind() {
            "public" => Some(Visibility::Public),
            "protected" => Some(Visibility::Protected),
            "private" => Some(Visibility::Private),
            _ => None,
        })
        .unwrap_or(Visibility::Package);
    visibility
}

fn constructor(node: Node, class_name: &str, source: &[u8]) -> Result<Constructor> {
    let mut parameters = Vec::new();
    if let Some(list) = node.child_by_field_name("parameters") {
        let mut cursor = list.walk();
        for param in list.children(&mut cursor) {
            match param.kind() {
                "formal_parameter" => {
                    let (name, ty) = formal_parameter(param, source);
                    parameters.push(descriptor(&name, &ty)?);
                }
                "spread_parameter" => {
                    let (name, ty) = spread_parameter(param, source);
                    parameters.push(descriptor(&name, &ty)?);
                }
                _ => {}
            }
        }
    }
    Ok(Constructor::new(
        class_name,
        visibility(node),
        parameters,
        node.start_position().row + 1,
    ))
}

fn formal_parameter(node: Node, source: &[u8]) -> (String, String) {
    let mut ty = node
        .child_by_field_name("type")
        .map(|t| type_text(t, source))
        .unwrap_or_default();
    if let Some(dims) = node.child_by_field_name("dimensions") {
        ty.push_str(&type_text(dims, source).replace(' ', ""));
    }
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();
    (name, ty)
}

/// Varargs are declared as arrays in the generated locals.
fn spread_parameter(node: Node, source: &[u8]) -> (String, String) {
    let mut ty = String::new();
    let mut name = String::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "modifiers" | "..." => {}
            "variable_declarator" => {
                name = child
                    .child_by_field_name("name")
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_default();
            }
            _ if child.is_named() && ty.is_empty() => ty = type_text(child, source),
            _ => {}
        }
    }
    (name, format!("{}[]", ty))
}
