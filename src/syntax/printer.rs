//! Serializes a syntax tree back to source text
//!
//! Parsed nodes print their original text with their original trivia.
//! Synthesized nodes have no trivia, so the printer only inserts the single
//! space needed to keep two word-like tokens apart. This is not a formatter.

use super::node::{
    ImportDeclaration, JsxAttribute, JsxElement, Node, NodeKind, SyntaxTree, TemplateLiteral,
    quote,
};
use super::text::is_ident_continue;

/// Print a whole module
pub fn print(tree: &SyntaxTree) -> String {
    let mut printer = Printer::default();
    for node in &tree.body {
        printer.node(node);
    }
    printer.raw(&tree.trailing_trivia);
    printer.out
}

/// Print a single node, trivia included
pub fn print_node(node: &Node) -> String {
    let mut printer = Printer::default();
    printer.node(node);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
}

impl Printer {
    fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Write a word-like token, separating it from a preceding word when the
    /// node carries no trivia of its own
    fn token(&mut self, leading: &str, text: &str) {
        self.raw(leading);
        let joins = match (self.out.chars().last(), text.chars().next()) {
            (Some(last), Some(first)) => is_ident_continue(last) && is_ident_continue(first),
            _ => false,
        };
        if leading.is_empty() && joins {
            self.out.push(' ');
        }
        self.raw(text);
    }

    fn node(&mut self, node: &Node) {
        match &node.kind {
            NodeKind::Ident(name) => self.token(&node.leading, name),
            NodeKind::Token(text) => self.token(&node.leading, text),
            NodeKind::Str(literal) => self.token(&node.leading, &literal.source_text()),
            NodeKind::Template(template) => {
                self.raw(&node.leading);
                self.template(template);
            }
            NodeKind::Group(group) => {
                self.raw(&node.leading);
                self.out.push(group.delimiter.open());
                self.nodes(&group.children);
                self.raw(&group.close_trivia);
                self.out.push(group.delimiter.close());
            }
            NodeKind::Import(import) => {
                self.raw(&node.leading);
                match &import.raw {
                    Some(raw) => self.raw(raw),
                    None => self.raw(&canonical_import(import)),
                }
            }
            NodeKind::Declare(declare) => {
                self.raw(&node.leading);
                self.raw(&declare.raw);
            }
            NodeKind::JsxElement(element) => {
                self.raw(&node.leading);
                self.jsx_element(element);
            }
            NodeKind::JsxFragment(fragment) => {
                self.raw(&node.leading);
                self.raw("<>");
                self.nodes(&fragment.children);
                self.raw("</>");
            }
            NodeKind::JsxText(text) => {
                self.raw(&node.leading);
                self.raw(text);
            }
            NodeKind::JsxExpression(expression) => {
                self.raw(&node.leading);
                self.out.push('{');
                self.nodes(&expression.children);
                self.raw(&expression.close_trivia);
                self.out.push('}');
            }
            NodeKind::List(items) => {
                self.raw(&node.leading);
                self.nodes(items);
            }
        }
    }

    fn nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.node(node);
        }
    }

    fn template(&mut self, template: &TemplateLiteral) {
        self.out.push('`');
        let mut quasis = template.quasis.iter();
        if let Some(first) = quasis.next() {
            self.raw(first);
        }
        for (substitution, quasi) in template.substitutions.iter().zip(quasis) {
            self.raw("${");
            self.nodes(&substitution.children);
            self.raw(&substitution.close_trivia);
            self.out.push('}');
            self.raw(quasi);
        }
        self.out.push('`');
    }

    fn jsx_element(&mut self, element: &JsxElement) {
        self.out.push('<');
        self.raw(&element.name);
        for attribute in &element.attributes {
            match attribute {
                JsxAttribute::Named {
                    leading,
                    name,
                    value,
                } => {
                    self.raw(if leading.is_empty() { " " } else { leading });
                    self.raw(name);
                    if let Some(value) = value {
                        self.out.push('=');
                        self.node(value);
                    }
                }
                JsxAttribute::Spread(expression) => {
                    if expression.leading.is_empty() {
                        self.out.push(' ');
                    }
                    self.node(expression);
                }
            }
        }
        self.raw(&element.tag_trivia);
        if element.self_closing {
            self.raw("/>");
            return;
        }
        self.out.push('>');
        self.nodes(&element.children);
        self.raw("</");
        self.raw(&element.name);
        self.out.push('>');
    }
}

/// `import Default, { a, b as c } from "source";`
pub fn canonical_import(import: &ImportDeclaration) -> String {
    let mut bindings = Vec::new();
    if let Some(default) = &import.default {
        bindings.push(default.clone());
    }
    if let Some(namespace) = &import.namespace {
        bindings.push(format!("* as {namespace}"));
    }
    if !import.named.is_empty() {
        let specifiers: Vec<String> = import
            .named
            .iter()
            .map(|spec| {
                let prefix = if spec.type_only { "type " } else { "" };
                match &spec.local {
                    Some(local) if local != &spec.imported => {
                        format!("{prefix}{} as {local}", spec.imported)
                    }
                    _ => format!("{prefix}{}", spec.imported),
                }
            })
            .collect();
        bindings.push(format!("{{ {} }}", specifiers.join(", ")));
    }

    let type_prefix = if import.type_only { "type " } else { "" };
    if bindings.is_empty() {
        format!("import {type_prefix}{};", quote(&import.source))
    } else {
        format!(
            "import {type_prefix}{} from {};",
            bindings.join(", "),
            quote(&import.source)
        )
    }
}
