//! Parser building the token tree from TypeScript/TSX source
//!
//! Source is parsed with tree-sitter's TypeScript grammars. The concrete
//! syntax tree is then flattened into tokens and regrouped into balanced
//! `(..)`, `[..]` and `{..}` groups. Only the shapes the engine rewrites keep
//! structure of their own: top-level imports, placeholder `declare`
//! statements, string and template literals, and JSX. Trivia is recovered
//! from the byte gaps between tokens, so printing an unmodified tree
//! reproduces the input exactly.

use std::path::Path;

use tree_sitter::{Language, Node as CstNode, Parser as CstParser};

use super::errors::{Position, SyntaxError};
use super::node::{
    DeclareKind, DeclareStatement, Delimiter, Group, ImportDeclaration, ImportSpecifier,
    JsxAttribute, JsxElement, JsxExpression, JsxFragment, Node, NodeKind, StringLiteral,
    SyntaxTree, TemplateLiteral, TemplateSubstitution,
};
use super::text::{is_ident_start, unescape};

/// Grammar a module is parsed with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// Plain TypeScript, where `<T>expr` is a type assertion
    TypeScript,
    /// TypeScript with JSX
    #[default]
    Tsx,
}

impl Dialect {
    /// `.ts`, `.mts` and `.cts` files are plain TypeScript; anything else is TSX
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("ts" | "mts" | "cts") => Dialect::TypeScript,
            _ => Dialect::Tsx,
        }
    }

    fn language(&self) -> Language {
        match self {
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// Parse a complete TSX module
pub fn parse(source: &str) -> Result<SyntaxTree, SyntaxError> {
    parse_with(source, Dialect::Tsx)
}

/// Parse a complete module with the given grammar
pub fn parse_with(source: &str, dialect: Dialect) -> Result<SyntaxTree, SyntaxError> {
    let mut parser = CstParser::new();
    parser
        .set_language(&dialect.language())
        .map_err(|e| SyntaxError::Grammar(e.to_string()))?;
    let cst = parser.parse(source, None).ok_or(SyntaxError::Aborted)?;
    let root = cst.root_node();
    if root.has_error() {
        return Err(first_error(root, source));
    }

    let converter = Converter { source };
    let mut units = Vec::new();
    for child in children(root) {
        converter.flatten(child, true, &mut units)?;
    }
    let (body, trailing_trivia) = converter.group(units, 0, source.len())?;
    Ok(SyntaxTree {
        body,
        trailing_trivia,
    })
}

fn children<'t>(node: CstNode<'t>) -> Vec<CstNode<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

fn first_error(root: CstNode<'_>, source: &str) -> SyntaxError {
    let Some(node) = find_error(root) else {
        return SyntaxError::UnexpectedEof;
    };
    let position = Position::from_offset(source, node.start_byte());
    if node.is_missing() {
        return SyntaxError::Missing {
            expected: node.kind().to_string(),
            position,
        };
    }
    let found: String = source
        .get(node.byte_range())
        .unwrap_or_default()
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(24)
        .collect();
    if found.is_empty() {
        SyntaxError::UnexpectedEof
    } else {
        SyntaxError::Unexpected { found, position }
    }
}

fn find_error(node: CstNode<'_>) -> Option<CstNode<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    children(node).into_iter().find_map(find_error)
}

/// A token or atomic node with its byte span, before grouping
struct Unit {
    start: usize,
    end: usize,
    kind: UnitKind,
}

enum UnitKind {
    Open(Delimiter),
    Close(Delimiter),
    Node(NodeKind),
}

struct Converter<'s> {
    source: &'s str,
}

impl<'s> Converter<'s> {
    fn slice(&self, start: usize, end: usize) -> &'s str {
        self.source.get(start..end).unwrap_or_default()
    }

    fn text(&self, node: CstNode<'_>) -> &'s str {
        self.slice(node.start_byte(), node.end_byte())
    }

    fn position(&self, offset: usize) -> Position {
        Position::from_offset(self.source, offset)
    }

    /// Append the units of `node` in source order. Comments and zero-width
    /// nodes produce nothing; their text ends up in the next unit's trivia.
    fn flatten(
        &self,
        node: CstNode<'_>,
        top_level: bool,
        out: &mut Vec<Unit>,
    ) -> Result<(), SyntaxError> {
        if node.is_extra() || node.start_byte() == node.end_byte() {
            return Ok(());
        }
        let atom = match node.kind() {
            "string" => Some(NodeKind::Str(self.string_literal(node))),
            "template_string" => Some(NodeKind::Template(self.template(node)?)),
            "regex" => Some(NodeKind::Token(self.text(node).to_string())),
            "jsx_element" | "jsx_self_closing_element" | "jsx_fragment" => Some(self.jsx(node)?),
            "import_statement" if top_level => self.import(node).map(NodeKind::Import),
            "ambient_declaration" if top_level => self.declare(node).map(NodeKind::Declare),
            _ => None,
        };
        if let Some(kind) = atom {
            out.push(Unit {
                start: node.start_byte(),
                end: node.end_byte(),
                kind: UnitKind::Node(kind),
            });
            return Ok(());
        }

        if node.child_count() == 0 {
            out.push(self.leaf(node));
            return Ok(());
        }
        for child in children(node) {
            self.flatten(child, false, out)?;
        }
        Ok(())
    }

    fn leaf(&self, node: CstNode<'_>) -> Unit {
        let text = self.text(node);
        let kind = match text {
            "(" | "[" | "{" => text
                .chars()
                .next()
                .and_then(Delimiter::from_open)
                .map(UnitKind::Open),
            ")" => Some(UnitKind::Close(Delimiter::Paren)),
            "]" => Some(UnitKind::Close(Delimiter::Bracket)),
            "}" => Some(UnitKind::Close(Delimiter::Brace)),
            _ => None,
        };
        let kind = kind.unwrap_or_else(|| {
            if text.starts_with(is_ident_start) {
                UnitKind::Node(NodeKind::Ident(text.to_string()))
            } else {
                UnitKind::Node(NodeKind::Token(text.to_string()))
            }
        });
        Unit {
            start: node.start_byte(),
            end: node.end_byte(),
            kind,
        }
    }

    /// Turn flattened units spanning `start..end` into nodes with trivia,
    /// returning the trivia left before `end`
    fn group(
        &self,
        units: Vec<Unit>,
        start: usize,
        end: usize,
    ) -> Result<(Vec<Node>, String), SyntaxError> {
        struct Frame {
            leading: String,
            delimiter: Delimiter,
            offset: usize,
            parent: Vec<Node>,
        }

        let mut stack: Vec<Frame> = Vec::new();
        let mut items: Vec<Node> = Vec::new();
        let mut cursor = start;
        for unit in units {
            let leading = self.slice(cursor, unit.start).to_string();
            cursor = unit.end;
            match unit.kind {
                UnitKind::Open(delimiter) => stack.push(Frame {
                    leading,
                    delimiter,
                    offset: unit.start,
                    parent: std::mem::take(&mut items),
                }),
                UnitKind::Close(delimiter) => {
                    let frame = match stack.pop() {
                        Some(frame) if frame.delimiter == delimiter => frame,
                        _ => {
                            return Err(SyntaxError::Unbalanced {
                                what: "group",
                                position: self.position(unit.start),
                            });
                        }
                    };
                    let children = std::mem::replace(&mut items, frame.parent);
                    items.push(Node {
                        leading: frame.leading,
                        kind: NodeKind::Group(Group {
                            delimiter,
                            children,
                            close_trivia: leading,
                        }),
                    });
                }
                UnitKind::Node(kind) => items.push(Node { leading, kind }),
            }
        }
        if let Some(frame) = stack.pop() {
            return Err(SyntaxError::Unbalanced {
                what: "group",
                position: self.position(frame.offset),
            });
        }
        Ok((items, self.slice(cursor, end).to_string()))
    }

    /// Contents of a node bracketed by its first and last child, such as
    /// `{ .. }` in JSX or `${ .. }` in a template
    fn delimited(&self, node: CstNode<'_>) -> Result<(Vec<Node>, String), SyntaxError> {
        let parts = children(node);
        let [open, inner @ .., close] = parts.as_slice() else {
            return Ok((Vec::new(), String::new()));
        };
        let mut units = Vec::new();
        for part in inner {
            self.flatten(*part, false, &mut units)?;
        }
        self.group(units, open.end_byte(), close.start_byte())
    }

    fn string_literal(&self, node: CstNode<'_>) -> StringLiteral {
        let raw = self.text(node);
        StringLiteral {
            value: unescape(raw),
            raw: Some(raw.to_string()),
        }
    }

    fn template(&self, node: CstNode<'_>) -> Result<TemplateLiteral, SyntaxError> {
        let end = node.end_byte().saturating_sub(1);
        let mut cursor = node.start_byte() + 1;
        let mut quasis = Vec::new();
        let mut substitutions = Vec::new();
        for part in children(node) {
            if part.kind() != "template_substitution" {
                continue;
            }
            quasis.push(self.slice(cursor, part.start_byte()).to_string());
            let (children, close_trivia) = self.delimited(part)?;
            substitutions.push(TemplateSubstitution {
                children,
                close_trivia,
            });
            cursor = part.end_byte();
        }
        quasis.push(self.slice(cursor, end).to_string());
        Ok(TemplateLiteral {
            quasis,
            substitutions,
        })
    }

    fn import(&self, node: CstNode<'_>) -> Option<ImportDeclaration> {
        let source = node.child_by_field_name("source")?;
        if source.kind() != "string" {
            return None;
        }
        let mut import = ImportDeclaration::named(unescape(self.text(source)));
        for part in children(node) {
            match part.kind() {
                "type" if !part.is_named() => import.type_only = true,
                "typeof" | "import_require_clause" => return None,
                "import_clause" => self.import_clause(part, &mut import)?,
                _ => {}
            }
        }
        import.raw = Some(self.text(node).to_string());
        Some(import)
    }

    fn import_clause(&self, clause: CstNode<'_>, import: &mut ImportDeclaration) -> Option<()> {
        for part in children(clause) {
            match part.kind() {
                "identifier" => import.default = Some(self.text(part).to_string()),
                "namespace_import" => {
                    let local = children(part)
                        .into_iter()
                        .rfind(|p| p.kind() == "identifier")?;
                    import.namespace = Some(self.text(local).to_string());
                }
                "named_imports" => {
                    for specifier in children(part) {
                        if specifier.kind() == "import_specifier" {
                            import.named.push(self.import_specifier(specifier)?);
                        }
                    }
                }
                _ => {}
            }
        }
        Some(())
    }

    fn import_specifier(&self, node: CstNode<'_>) -> Option<ImportSpecifier> {
        let name = node.child_by_field_name("name")?;
        let imported = match name.kind() {
            "string" => unescape(self.text(name)),
            _ => self.text(name).to_string(),
        };
        let type_only = children(node)
            .iter()
            .any(|p| !p.is_named() && p.kind() == "type");
        Some(ImportSpecifier {
            imported,
            local: node
                .child_by_field_name("alias")
                .map(|alias| self.text(alias).to_string()),
            type_only,
        })
    }

    /// `declare` statements naming a single identifier; anything else, such
    /// as `declare global { .. }`, stays ordinary code
    fn declare(&self, node: CstNode<'_>) -> Option<DeclareStatement> {
        let declaration = children(node)
            .into_iter()
            .find(|p| p.is_named() && !p.is_extra())?;
        let (kind, name) = match declaration.kind() {
            "lexical_declaration" | "variable_declaration" => {
                let parts = children(declaration);
                let keyword = parts.first()?;
                let kind = DeclareKind::from_keyword(self.text(*keyword))?;
                let declarator = parts.iter().find(|p| p.kind() == "variable_declarator")?;
                (kind, declarator.child_by_field_name("name")?)
            }
            "class_declaration" | "abstract_class_declaration" => {
                (DeclareKind::Class, declaration.child_by_field_name("name")?)
            }
            "interface_declaration" => (
                DeclareKind::Interface,
                declaration.child_by_field_name("name")?,
            ),
            "type_alias_declaration" => {
                (DeclareKind::Type, declaration.child_by_field_name("name")?)
            }
            "function_signature" | "function_declaration" => (
                DeclareKind::Function,
                declaration.child_by_field_name("name")?,
            ),
            "enum_declaration" => (DeclareKind::Enum, declaration.child_by_field_name("name")?),
            _ => return None,
        };
        if name.child_count() != 0 {
            return None;
        }
        Some(DeclareStatement {
            kind,
            name: self.text(name).to_string(),
            raw: self.text(node).to_string(),
        })
    }

    fn jsx(&self, node: CstNode<'_>) -> Result<NodeKind, SyntaxError> {
        if node.kind() == "jsx_self_closing_element" {
            let (name, attributes, tag_trivia) = self.jsx_tag(node)?;
            return Ok(NodeKind::JsxElement(JsxElement {
                name: name.unwrap_or_default(),
                attributes,
                tag_trivia,
                self_closing: true,
                children: Vec::new(),
            }));
        }

        let parts = children(node);
        if node.kind() == "jsx_fragment" {
            let open_end = parts
                .iter()
                .find(|p| p.kind() == ">")
                .map_or(node.start_byte(), |p| p.end_byte());
            let close_start = parts
                .iter()
                .rfind(|p| p.kind() == "<" || p.kind() == "</")
                .map_or(node.end_byte(), |p| p.start_byte());
            let children = self.jsx_children(&parts, open_end, close_start)?;
            return Ok(NodeKind::JsxFragment(JsxFragment { children }));
        }

        let (Some(open), Some(close)) = (
            node.child_by_field_name("open_tag").or(parts.first().copied()),
            node.child_by_field_name("close_tag").or(parts.last().copied()),
        ) else {
            return Err(SyntaxError::Unbalanced {
                what: "JSX element",
                position: self.position(node.start_byte()),
            });
        };
        let (name, attributes, tag_trivia) = self.jsx_tag(open)?;
        let children = self.jsx_children(&parts, open.end_byte(), close.start_byte())?;
        let close_name = close
            .child_by_field_name("name")
            .map(|name| self.text(name).to_string());

        match (name, close_name) {
            (None, None) => Ok(NodeKind::JsxFragment(JsxFragment { children })),
            (Some(name), Some(found)) if name == found => Ok(NodeKind::JsxElement(JsxElement {
                name,
                attributes,
                tag_trivia,
                self_closing: false,
                children,
            })),
            (expected, found) => Err(SyntaxError::MismatchedTag {
                found: found.unwrap_or_default(),
                expected: expected.unwrap_or_default(),
                position: self.position(close.start_byte()),
            }),
        }
    }

    /// Name, attributes and the trivia before `>` or `/>` of an opening or
    /// self-closing tag
    fn jsx_tag(
        &self,
        tag: CstNode<'_>,
    ) -> Result<(Option<String>, Vec<JsxAttribute>, String), SyntaxError> {
        let name = tag.child_by_field_name("name");
        let mut cursor = name.map_or(tag.start_byte() + 1, |name| name.end_byte());
        let mut tag_end = tag.end_byte().saturating_sub(1);
        let mut attributes = Vec::new();
        for part in children(tag) {
            if part.start_byte() < cursor {
                continue;
            }
            let leading = self.slice(cursor, part.start_byte()).to_string();
            match part.kind() {
                "jsx_attribute" => {
                    attributes.push(self.jsx_attribute(part, leading)?);
                    cursor = part.end_byte();
                }
                "jsx_expression" => {
                    attributes.push(JsxAttribute::Spread(Node {
                        leading,
                        kind: self.jsx_expression(part)?,
                    }));
                    cursor = part.end_byte();
                }
                "/" | "/>" | ">" => {
                    tag_end = part.start_byte();
                    break;
                }
                _ => {}
            }
        }
        Ok((
            name.map(|name| self.text(name).to_string()),
            attributes,
            self.slice(cursor, tag_end).to_string(),
        ))
    }

    fn jsx_attribute(
        &self,
        node: CstNode<'_>,
        leading: String,
    ) -> Result<JsxAttribute, SyntaxError> {
        let parts = children(node);
        let name = parts
            .first()
            .map(|name| self.text(*name).to_string())
            .unwrap_or_default();
        let mut value = None;
        if let Some(index) = parts.iter().position(|p| p.kind() == "=") {
            let equals = parts[index];
            if let Some(target) = parts[index + 1..].iter().find(|p| !p.is_extra()) {
                let kind = match target.kind() {
                    "string" => {
                        let raw = self.text(*target);
                        NodeKind::Str(StringLiteral {
                            value: raw
                                .get(1..raw.len().saturating_sub(1))
                                .unwrap_or_default()
                                .to_string(),
                            raw: Some(raw.to_string()),
                        })
                    }
                    "jsx_expression" => self.jsx_expression(*target)?,
                    _ => self.jsx(*target)?,
                };
                value = Some(Box::new(Node {
                    leading: self.slice(equals.end_byte(), target.start_byte()).to_string(),
                    kind,
                }));
            }
        }
        Ok(JsxAttribute::Named {
            leading,
            name,
            value,
        })
    }

    fn jsx_expression(&self, node: CstNode<'_>) -> Result<NodeKind, SyntaxError> {
        let (children, close_trivia) = self.delimited(node)?;
        Ok(NodeKind::JsxExpression(JsxExpression {
            children,
            close_trivia,
        }))
    }

    /// Children of an element between `start` and `end`; text runs are kept
    /// verbatim, entity references included
    fn jsx_children(
        &self,
        parts: &[CstNode<'_>],
        start: usize,
        end: usize,
    ) -> Result<Vec<Node>, SyntaxError> {
        let mut nodes = Vec::new();
        let mut cursor = start;
        for part in parts {
            if part.start_byte() < start || part.end_byte() > end {
                continue;
            }
            let kind = match part.kind() {
                "jsx_element" | "jsx_self_closing_element" | "jsx_fragment" => self.jsx(*part)?,
                "jsx_expression" => self.jsx_expression(*part)?,
                _ => continue,
            };
            if part.start_byte() > cursor {
                let text = self.slice(cursor, part.start_byte());
                nodes.push(Node::new(NodeKind::JsxText(text.to_string())));
            }
            nodes.push(Node::new(kind));
            cursor = part.end_byte();
        }
        if end > cursor {
            nodes.push(Node::new(NodeKind::JsxText(
                self.slice(cursor, end).to_string(),
            )));
        }
        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn first_import(tree: &SyntaxTree) -> &ImportDeclaration {
        tree.imports().next().expect("no import parsed")
    }

    fn round_trip(source: &str, dialect: Dialect) {
        let tree = parse_with(source, dialect).unwrap();
        assert_eq!(tree.to_source(), source);
    }

    #[test]
    fn test_parse_named_and_default_imports() {
        let tree = parse("import React, { useState, Link as RouterLink } from \"react\";\n").unwrap();
        let import = first_import(&tree);
        assert_eq!(import.default.as_deref(), Some("React"));
        assert_eq!(import.named.len(), 2);
        assert_eq!(import.named[1].imported, "Link");
        assert_eq!(import.named[1].local.as_deref(), Some("RouterLink"));
        assert_eq!(import.source, "react");
        assert_eq!(
            import.raw.as_deref(),
            Some("import React, { useState, Link as RouterLink } from \"react\";")
        );
    }

    #[test]
    fn test_parse_namespace_type_and_side_effect_imports() {
        let tree = parse(
            "import * as React from 'react';\nimport type { Props } from './types';\nimport './styles.css';\n",
        )
        .unwrap();
        let imports: Vec<&ImportDeclaration> = tree.imports().collect();
        assert_eq!(imports.len(), 3);
        assert_eq!(imports[0].namespace.as_deref(), Some("React"));
        assert!(imports[1].type_only);
        assert_eq!(imports[1].named[0].imported, "Props");
        assert_eq!(imports[2].source, "./styles.css");
        assert!(imports[2].named.is_empty());
    }

    #[test]
    fn test_inline_type_specifier() {
        let tree = parse("import { type Props, render } from \"./view\";\n").unwrap();
        let import = first_import(&tree);
        assert!(!import.type_only);
        assert!(import.named[0].type_only);
        assert!(!import.named[1].type_only);
    }

    #[test]
    fn test_dynamic_import_is_not_a_declaration() {
        let tree = parse("const mod = await import(\"./lazy\");").unwrap();
        assert_eq!(tree.imports().count(), 0);
    }

    #[test]
    fn test_parse_declare_statements() {
        let tree = parse(
            "declare const ENTITY_NAME: string;\ndeclare interface CREATE_INPUT {\n  id: string;\n}\ndeclare const INPUTS: React.ReactElement[];\nexport const x = 1;\n",
        )
        .unwrap();
        let names: Vec<&str> = tree.declarations().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["ENTITY_NAME", "CREATE_INPUT", "INPUTS"]);
        let declarations: Vec<&DeclareStatement> = tree.declarations().collect();
        assert_eq!(declarations[1].kind, DeclareKind::Interface);
        assert_eq!(declarations[1].raw, "declare interface CREATE_INPUT {\n  id: string;\n}");
        assert_eq!(declarations[2].raw, "declare const INPUTS: React.ReactElement[];");
    }

    #[test]
    fn test_declare_class_in_plain_typescript() {
        let tree = parse_with(
            "declare class DTO_NAME {}\ndeclare const PROPERTIES: never;\n",
            Dialect::TypeScript,
        )
        .unwrap();
        let kinds: Vec<DeclareKind> = tree.declarations().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DeclareKind::Class, DeclareKind::Const]);
    }

    #[test]
    fn test_declare_global_is_not_a_placeholder() {
        let tree = parse("declare global {\n  interface Window { x: number }\n}\n").unwrap();
        assert_eq!(tree.declarations().count(), 0);
    }

    #[test]
    fn test_parse_jsx_element_tree() {
        let tree = parse("const el = (\n  <Form onSubmit={handle}>\n    <TextField name=\"title\" />\n    {INPUTS}\n  </Form>\n);").unwrap();
        let group = tree
            .body
            .iter()
            .find_map(|node| match &node.kind {
                NodeKind::Group(group) => Some(group),
                _ => None,
            })
            .unwrap();
        let element = group
            .children
            .iter()
            .find_map(|node| match &node.kind {
                NodeKind::JsxElement(element) => Some(element),
                _ => None,
            })
            .unwrap();
        assert_eq!(element.name, "Form");
        assert!(element.attribute("onSubmit").is_some());
        let child_kinds: Vec<&str> = element
            .children
            .iter()
            .map(|child| match &child.kind {
                NodeKind::JsxText(_) => "text",
                NodeKind::JsxElement(_) => "element",
                NodeKind::JsxExpression(_) => "expression",
                _ => "other",
            })
            .collect();
        assert_eq!(
            child_kinds,
            vec!["text", "element", "text", "expression", "text"]
        );
    }

    #[test]
    fn test_generic_call_is_not_jsx() {
        let tree = parse("const [v] = useState<string>(\"\");").unwrap();
        assert!(tree.body.iter().all(|node| !matches!(node.kind, NodeKind::JsxElement(_))));
    }

    #[test]
    fn test_arrow_returning_fragment() {
        let tree = parse("const C = () => <><p>hi</p></>;").unwrap();
        assert!(
            tree.body
                .iter()
                .any(|node| matches!(node.kind, NodeKind::JsxFragment(_)))
        );
    }

    #[test]
    fn test_template_literal_substitutions() {
        let tree = parse("const url = `/${RESOURCE}/${ id }`;").unwrap();
        let template = tree
            .body
            .iter()
            .find_map(|node| match &node.kind {
                NodeKind::Template(template) => Some(template),
                _ => None,
            })
            .unwrap();
        assert_eq!(template.quasis, vec!["/", "/", ""]);
        assert_eq!(template.substitutions.len(), 2);
        assert_eq!(template.substitutions[0].children[0].as_ident(), Some("RESOURCE"));
        assert_eq!(template.substitutions[1].children[0].leading, " ");
        assert_eq!(template.substitutions[1].close_trivia, " ");
        assert_eq!(tree.to_source(), "const url = `/${RESOURCE}/${ id }`;");
    }

    #[test]
    fn test_regex_literals() {
        round_trip("const re = /['\"]/g;\n", Dialect::Tsx);
        round_trip("const close = /[)}\\]]+/;\n", Dialect::TypeScript);
    }

    #[test]
    fn test_type_assertion_in_plain_typescript() {
        round_trip("const a = <any>X;\n", Dialect::TypeScript);
    }

    #[test]
    fn test_generic_arrow_functions() {
        round_trip("const id = <T,>(x: T) => x;\n", Dialect::TypeScript);
        round_trip("const pick = <K extends keyof T>(key: K) => key;\n", Dialect::TypeScript);
    }

    #[test]
    fn test_comments_are_trivia() {
        let source = "// header\nconst a = 1; /* inline */\n";
        let tree = parse(source).unwrap();
        assert_eq!(tree.body[0].leading, "// header\n");
        assert_eq!(tree.trailing_trivia, " /* inline */\n");
        assert_eq!(tree.to_source(), source);
    }

    #[test]
    fn test_dialect_from_path() {
        assert_eq!(Dialect::from_path("server/dto.template.ts"), Dialect::TypeScript);
        assert_eq!(Dialect::from_path("admin/create-entity.template.tsx"), Dialect::Tsx);
        assert_eq!(Dialect::from_path("README"), Dialect::Tsx);
    }

    #[test]
    fn test_mismatched_closing_tag() {
        match parse("const x = <p>text</div>;").unwrap_err() {
            SyntaxError::MismatchedTag {
                found, expected, ..
            } => {
                assert_eq!(found, "div");
                assert_eq!(expected, "p");
            }
            other => assert!(matches!(other, SyntaxError::Unexpected { .. })),
        }
    }

    #[test]
    fn test_syntax_errors_are_positioned() {
        let err = parse("function f() {").unwrap_err();
        assert!(matches!(
            err,
            SyntaxError::Missing { .. } | SyntaxError::Unexpected { .. } | SyntaxError::UnexpectedEof
        ));

        match parse("const ok = 1;\nf());").unwrap_err() {
            SyntaxError::Unexpected { position, .. } | SyntaxError::Missing { position, .. } => {
                assert_eq!(position.line, 2)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_import() {
        assert!(parse("import { A from \"./a\";").is_err());
        assert!(parse("import A \"./a\";").is_err());
    }
}
