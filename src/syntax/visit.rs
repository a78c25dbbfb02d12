//! Depth-first traversal over syntax trees
//!
//! `Visit` reads, `VisitMut` rewrites in place. Both dispatch on `NodeKind`;
//! implementors override the hooks they care about and call the matching
//! `walk_*` function to keep descending.

use super::node::{JsxAttribute, JsxElement, Node, NodeKind, SyntaxTree};

pub trait Visit {
    fn visit_node(&mut self, node: &Node) {
        walk_node(self, node);
    }

    fn visit_jsx_element(&mut self, element: &JsxElement) {
        walk_jsx_element(self, element);
    }
}

pub fn walk_tree<V: Visit + ?Sized>(visitor: &mut V, tree: &SyntaxTree) {
    for node in &tree.body {
        visitor.visit_node(node);
    }
}

pub fn walk_node<V: Visit + ?Sized>(visitor: &mut V, node: &Node) {
    match &node.kind {
        NodeKind::Group(group) => group.children.iter().for_each(|n| visitor.visit_node(n)),
        NodeKind::JsxElement(element) => visitor.visit_jsx_element(element),
        NodeKind::JsxFragment(fragment) => {
            fragment.children.iter().for_each(|n| visitor.visit_node(n))
        }
        NodeKind::JsxExpression(expression) => {
            expression.children.iter().for_each(|n| visitor.visit_node(n))
        }
        NodeKind::Template(template) => template
            .substitutions
            .iter()
            .flat_map(|substitution| &substitution.children)
            .for_each(|n| visitor.visit_node(n)),
        NodeKind::List(items) => items.iter().for_each(|n| visitor.visit_node(n)),
        NodeKind::Ident(_)
        | NodeKind::Str(_)
        | NodeKind::Token(_)
        | NodeKind::Import(_)
        | NodeKind::Declare(_)
        | NodeKind::JsxText(_) => {}
    }
}

pub fn walk_jsx_element<V: Visit + ?Sized>(visitor: &mut V, element: &JsxElement) {
    for attribute in &element.attributes {
        match attribute {
            JsxAttribute::Named {
                value: Some(value), ..
            } => visitor.visit_node(value),
            JsxAttribute::Named { value: None, .. } => {}
            JsxAttribute::Spread(expression) => visitor.visit_node(expression),
        }
    }
    for child in &element.children {
        visitor.visit_node(child);
    }
}

pub trait VisitMut {
    /// Visit a sibling list; overriding this allows splicing and removal
    fn visit_node_list(&mut self, nodes: &mut Vec<Node>) {
        walk_node_list_mut(self, nodes);
    }

    fn visit_node(&mut self, node: &mut Node) {
        walk_node_mut(self, node);
    }

    fn visit_jsx_element(&mut self, element: &mut JsxElement) {
        walk_jsx_element_mut(self, element);
    }
}

pub fn walk_tree_mut<V: VisitMut + ?Sized>(visitor: &mut V, tree: &mut SyntaxTree) {
    visitor.visit_node_list(&mut tree.body);
}

pub fn walk_node_list_mut<V: VisitMut + ?Sized>(visitor: &mut V, nodes: &mut Vec<Node>) {
    for node in nodes.iter_mut() {
        visitor.visit_node(node);
    }
}

pub fn walk_node_mut<V: VisitMut + ?Sized>(visitor: &mut V, node: &mut Node) {
    match &mut node.kind {
        NodeKind::Group(group) => visitor.visit_node_list(&mut group.children),
        NodeKind::JsxElement(element) => visitor.visit_jsx_element(element),
        NodeKind::JsxFragment(fragment) => visitor.visit_node_list(&mut fragment.children),
        NodeKind::JsxExpression(expression) => visitor.visit_node_list(&mut expression.children),
        NodeKind::Template(template) => {
            for substitution in &mut template.substitutions {
                visitor.visit_node_list(&mut substitution.children);
            }
        }
        NodeKind::List(items) => visitor.visit_node_list(items),
        NodeKind::Ident(_)
        | NodeKind::Str(_)
        | NodeKind::Token(_)
        | NodeKind::Import(_)
        | NodeKind::Declare(_)
        | NodeKind::JsxText(_) => {}
    }
}

pub fn walk_jsx_element_mut<V: VisitMut + ?Sized>(visitor: &mut V, element: &mut JsxElement) {
    for attribute in &mut element.attributes {
        match attribute {
            JsxAttribute::Named {
                value: Some(value), ..
            } => visitor.visit_node(value),
            JsxAttribute::Named { value: None, .. } => {}
            JsxAttribute::Spread(expression) => visitor.visit_node(expression),
        }
    }
    visitor.visit_node_list(&mut element.children);
}

/// Every identifier in the tree, in traversal order
pub fn collect_identifiers(tree: &SyntaxTree) -> Vec<String> {
    struct Collector(Vec<String>);

    impl Visit for Collector {
        fn visit_node(&mut self, node: &Node) {
            if let NodeKind::Ident(name) = &node.kind {
                self.0.push(name.clone());
            }
            walk_node(self, node);
        }

        fn visit_jsx_element(&mut self, element: &JsxElement) {
            self.0.push(element.name.clone());
            walk_jsx_element(self, element);
        }
    }

    let mut collector = Collector(Vec::new());
    walk_tree(&mut collector, tree);
    collector.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::parse;

    #[test]
    fn test_collect_identifiers_descends_into_jsx() {
        let tree = parse("const x = <Box title={NAME}>{count}</Box>;").unwrap();
        let identifiers = collect_identifiers(&tree);
        assert_eq!(identifiers, vec!["const", "x", "Box", "NAME", "count"]);
    }

    #[test]
    fn test_collect_identifiers_descends_into_template_literals() {
        let tree = parse("const u = `/${base}/${item.id}`;").unwrap();
        let identifiers = collect_identifiers(&tree);
        assert_eq!(identifiers, vec!["const", "u", "base", "item", "id"]);
    }

    #[test]
    fn test_visit_mut_rewrites_in_place() {
        struct Upper;

        impl VisitMut for Upper {
            fn visit_node(&mut self, node: &mut Node) {
                if let NodeKind::Ident(name) = &mut node.kind {
                    *name = name.to_uppercase();
                }
                walk_node_mut(self, node);
            }
        }

        let mut tree = parse("f(a, [b]);").unwrap();
        walk_tree_mut(&mut Upper, &mut tree);
        assert_eq!(tree.to_source(), "F(A, [B]);");
    }
}
