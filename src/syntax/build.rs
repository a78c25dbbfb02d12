//! Node factories for building fragments programmatically
//!
//! Every function returns a freshly allocated node. Nothing here hands out a
//! shared instance, so a fragment can be built once per insertion site
//! without any aliasing between sites.

use super::node::{
    JsxAttribute, JsxElement, JsxExpression, JsxFragment, Node, NodeKind, StringLiteral,
};

/// `name`
pub fn identifier(name: impl Into<String>) -> Node {
    Node::new(NodeKind::Ident(name.into()))
}

/// `"value"`
pub fn string_literal(value: impl Into<String>) -> Node {
    Node::new(NodeKind::Str(StringLiteral::new(value)))
}

/// A verbatim token such as `;` or `!:`
pub fn token(text: impl Into<String>) -> Node {
    Node::new(NodeKind::Token(text.into()))
}

/// `<name attrs>children</name>`
pub fn jsx_element(
    name: impl Into<String>,
    attributes: Vec<JsxAttribute>,
    children: Vec<Node>,
) -> Node {
    Node::new(NodeKind::JsxElement(JsxElement {
        name: name.into(),
        attributes,
        tag_trivia: String::new(),
        self_closing: false,
        children,
    }))
}

/// `<name attrs />`
pub fn jsx_self_closing(name: impl Into<String>, attributes: Vec<JsxAttribute>) -> Node {
    Node::new(NodeKind::JsxElement(JsxElement {
        name: name.into(),
        attributes,
        tag_trivia: " ".to_string(),
        self_closing: true,
        children: Vec::new(),
    }))
}

/// `name=value`, printed with a single leading space
pub fn jsx_attribute(name: impl Into<String>, value: Node) -> JsxAttribute {
    JsxAttribute::Named {
        leading: " ".to_string(),
        name: name.into(),
        value: Some(Box::new(value)),
    }
}

/// Raw JSX text
pub fn jsx_text(text: impl Into<String>) -> Node {
    Node::new(NodeKind::JsxText(text.into()))
}

/// `{expression}`
pub fn jsx_expression(expression: Node) -> Node {
    Node::new(NodeKind::JsxExpression(JsxExpression {
        children: vec![expression],
        close_trivia: String::new(),
    }))
}

/// `<>children</>`
pub fn jsx_fragment(children: Vec<Node>) -> Node {
    Node::new(NodeKind::JsxFragment(JsxFragment { children }))
}

/// Composite fragment whose items are spliced in place of a placeholder
pub fn list(items: Vec<Node>) -> Node {
    Node::new(NodeKind::List(items))
}
