//! Placeholder interpolation
//!
//! A template declares its placeholders with top-level `declare` statements
//! (`declare const ENTITY_NAME: string;`, `declare interface ENTITY {}`).
//! Every identifier carrying a declared name is an occurrence. Interpolation
//! checks that all declared placeholders have a value, replaces every
//! occurrence with its own copy of the fragment in a single depth-first pass,
//! and finally drops the `declare` statements.
//!
//! Substitutions for names the template never declares are ignored. Callers
//! share one substitution map across several templates, so over-supplying is
//! expected and is not an error.

use std::collections::HashMap;

use tracing::debug;

use super::TemplateError;
use crate::syntax::visit::{VisitMut, walk_jsx_element_mut, walk_tree_mut};
use crate::syntax::{JsxElement, Node, NodeKind, SyntaxTree};

/// Placeholder name to fragment
pub type Substitutions = HashMap<String, Node>;

/// Replace every placeholder occurrence in `tree`
pub fn interpolate(tree: &mut SyntaxTree, substitutions: &Substitutions) -> Result<(), TemplateError> {
    let declared: Vec<String> = tree.declarations().map(|d| d.name.clone()).collect();
    if let Some(missing) = declared
        .iter()
        .find(|name| !substitutions.contains_key(name.as_str()))
    {
        return Err(TemplateError::MissingSubstitution {
            placeholder: missing.clone(),
        });
    }

    let mut unused: Vec<&str> = substitutions
        .keys()
        .map(String::as_str)
        .filter(|key| !declared.iter().any(|name| name == key))
        .collect();
    if !unused.is_empty() {
        unused.sort_unstable();
        debug!(placeholders = ?unused, "Ignoring substitutions the template does not declare");
    }

    let opens_with_declare = tree
        .body
        .first()
        .is_some_and(|node| matches!(node.kind, NodeKind::Declare(_)));
    tree.body
        .retain(|node| !matches!(node.kind, NodeKind::Declare(_)));
    if opens_with_declare {
        if let Some(first) = tree.body.first_mut() {
            if first.leading.trim().is_empty() {
                first.leading.clear();
            }
        }
    }

    let mut interpolator = Interpolator {
        substitutions: declared
            .iter()
            .filter_map(|name| {
                substitutions
                    .get_key_value(name.as_str())
                    .map(|(key, node)| (key.as_str(), node))
            })
            .collect(),
        replaced: 0,
        error: None,
    };
    walk_tree_mut(&mut interpolator, tree);

    match interpolator.error {
        Some(error) => Err(error),
        None => {
            debug!(
                placeholders = declared.len(),
                occurrences = interpolator.replaced,
                "Interpolated template"
            );
            Ok(())
        }
    }
}

struct Interpolator<'s> {
    substitutions: HashMap<&'s str, &'s Node>,
    replaced: usize,
    error: Option<TemplateError>,
}

impl<'s> Interpolator<'s> {
    fn fail(&mut self, placeholder: &str, reason: &str) {
        if self.error.is_none() {
            self.error = Some(TemplateError::IncompatibleFragment {
                placeholder: placeholder.to_string(),
                reason: reason.to_string(),
            });
        }
    }

    /// Fragment replacing `node`, if `node` is a placeholder occurrence
    fn replacement(&mut self, node: &Node, after_member_access: bool) -> Option<&'s Node> {
        match &node.kind {
            NodeKind::Ident(name) if !after_member_access => {
                let fragment = self.substitutions.get(name.as_str()).copied()?;
                let jsx_only = match &fragment.kind {
                    NodeKind::JsxText(_) => true,
                    NodeKind::List(items) => !items.is_empty() && fragment.is_jsx_child(),
                    _ => false,
                };
                if jsx_only {
                    self.fail(
                        name,
                        "JSX text and element lists must fill a whole JSX expression container",
                    );
                    return None;
                }
                Some(fragment)
            }
            // `{INPUTS}` as a JSX child: element-like fragments replace the container
            NodeKind::JsxExpression(expression) => {
                let name = expression.sole_child()?.as_ident()?;
                let fragment = self.substitutions.get(name).copied()?;
                fragment.is_jsx_child().then_some(fragment)
            }
            _ => None,
        }
    }

    fn splice(&mut self, output: &mut Vec<Node>, leading: String, fragment: &Node) {
        self.replaced += 1;
        let Node {
            leading: fragment_leading,
            kind,
        } = fragment.clone();
        let leading = leading + &fragment_leading;
        match kind {
            NodeKind::List(mut items) => {
                if let Some(first) = items.first_mut() {
                    first.leading = format!("{leading}{}", first.leading);
                }
                output.extend(items);
            }
            kind => output.push(Node { leading, kind }),
        }
    }
}

impl VisitMut for Interpolator<'_> {
    fn visit_node_list(&mut self, nodes: &mut Vec<Node>) {
        let mut output = Vec::with_capacity(nodes.len());
        let mut after_member_access = false;
        for mut node in std::mem::take(nodes) {
            let member_access = matches!(&node.kind, NodeKind::Token(t) if t == "." || t == "?.");
            match self.replacement(&node, after_member_access) {
                Some(fragment) => {
                    let leading = std::mem::take(&mut node.leading);
                    self.splice(&mut output, leading, fragment);
                }
                None => {
                    self.visit_node(&mut node);
                    output.push(node);
                }
            }
            after_member_access = member_access;
        }
        *nodes = output;
    }

    fn visit_jsx_element(&mut self, element: &mut JsxElement) {
        if let Some(fragment) = self.substitutions.get(element.name.as_str()).copied() {
            match fragment.as_ident() {
                Some(name) => {
                    element.name = name.to_string();
                    self.replaced += 1;
                }
                None => {
                    let placeholder = element.name.clone();
                    self.fail(&placeholder, "JSX tag names only accept identifiers");
                }
            }
        }
        walk_jsx_element_mut(self, element);
    }
}
