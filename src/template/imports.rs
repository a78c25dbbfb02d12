//! Import merging
//!
//! Adds named imports to a module without duplicating what is already there.
//! Symbols from a path the module already imports are merged into that
//! declaration; new paths get a fresh declaration placed after the leading
//! import block.

use tracing::debug;

use super::TemplateError;
use crate::syntax::{ImportDeclaration, ImportSpecifier, Node, NodeKind, SyntaxTree};

/// One symbol to import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSymbol {
    /// Name exported by the source module; `default` binds the default export
    pub exported: String,
    /// Local alias, when different from `exported`
    pub local: Option<String>,
}

impl ImportSymbol {
    pub fn new(exported: impl Into<String>) -> Self {
        Self {
            exported: exported.into(),
            local: None,
        }
    }

    pub fn aliased(exported: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            exported: exported.into(),
            local: Some(local.into()),
        }
    }

    pub fn local_name(&self) -> &str {
        self.local.as_deref().unwrap_or(&self.exported)
    }
}

/// Symbols to import from one module path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    source: String,
    symbols: Vec<ImportSymbol>,
}

impl ImportRequest {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            symbols: Vec::new(),
        }
    }

    /// Request importing each name under itself, duplicates collapsed
    pub fn names<I, S>(names: I, source: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(Self::new(source), |request, name| {
                request.with_symbol(ImportSymbol::new(name))
            })
    }

    /// Add a symbol unless one with the same exported name is already requested
    pub fn with_symbol(mut self, symbol: ImportSymbol) -> Self {
        if !self.symbols.iter().any(|s| s.exported == symbol.exported) {
            self.symbols.push(symbol);
        }
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn symbols(&self) -> &[ImportSymbol] {
        &self.symbols
    }
}

/// Ensure every requested symbol is imported by `tree`
///
/// Calling this twice with the same requests leaves the tree unchanged the
/// second time. A request whose local name is already bound by an import of
/// a different export or path fails with [`TemplateError::ConflictingImport`].
pub fn add_imports(tree: &mut SyntaxTree, requests: &[ImportRequest]) -> Result<(), TemplateError> {
    let mut insert_at = leading_import_block_end(&tree.body);

    for request in requests {
        if request.symbols.is_empty() {
            if !tree.imports().any(|import| import.source == request.source) {
                insert_declaration(tree, insert_at, ImportDeclaration::named(&request.source));
                insert_at += 1;
            }
            continue;
        }

        for symbol in &request.symbols {
            if tree.imports().any(|import| {
                import.source == request.source && import.imports_export(&symbol.exported)
            }) {
                debug!(
                    symbol = %symbol.exported,
                    source = %request.source,
                    "Symbol already imported"
                );
                continue;
            }

            let local = symbol.local_name();
            if let Some(existing) = tree
                .imports()
                .find(|import| import.local_names().any(|name| name == local))
            {
                return Err(TemplateError::ConflictingImport {
                    local: local.to_string(),
                    existing: existing.source.clone(),
                    requested: request.source.clone(),
                });
            }

            match find_merge_target(tree, &request.source, &symbol.exported) {
                Some(import) => {
                    bind(import, symbol);
                    import.raw = None;
                    debug!(
                        symbol = %symbol.exported,
                        source = %request.source,
                        "Merged symbol into existing import"
                    );
                }
                None => {
                    let mut import = ImportDeclaration::named(&request.source);
                    bind(&mut import, symbol);
                    insert_declaration(tree, insert_at, import);
                    insert_at += 1;
                    debug!(
                        symbol = %symbol.exported,
                        source = %request.source,
                        "Added import declaration"
                    );
                }
            }
        }
    }

    Ok(())
}

fn bind(import: &mut ImportDeclaration, symbol: &ImportSymbol) {
    if symbol.exported == "default" {
        import.default = Some(symbol.local_name().to_string());
    } else {
        import.named.push(ImportSpecifier {
            imported: symbol.exported.clone(),
            local: symbol
                .local
                .clone()
                .filter(|local| local != &symbol.exported),
            type_only: false,
        });
    }
}

fn find_merge_target<'t>(
    tree: &'t mut SyntaxTree,
    source: &str,
    exported: &str,
) -> Option<&'t mut ImportDeclaration> {
    tree.body.iter_mut().find_map(|node| match &mut node.kind {
        NodeKind::Import(import) if import.source == source && import.accepts_named() => {
            if exported == "default" && import.default.is_some() {
                None
            } else {
                Some(import)
            }
        }
        _ => None,
    })
}

/// Index just past the last import of the block opening the module
///
/// Placeholder declarations may be interleaved with the opening imports.
fn leading_import_block_end(body: &[Node]) -> usize {
    body.iter()
        .take_while(|node| matches!(node.kind, NodeKind::Import(_) | NodeKind::Declare(_)))
        .enumerate()
        .filter(|(_, node)| matches!(node.kind, NodeKind::Import(_)))
        .map(|(index, _)| index + 1)
        .last()
        .unwrap_or(0)
}

fn insert_declaration(tree: &mut SyntaxTree, index: usize, import: ImportDeclaration) {
    let leading = if index == 0 { "" } else { "\n" };
    tree.body
        .insert(index, Node::new(NodeKind::Import(import)).with_leading(leading));
    if let Some(next) = tree.body.get_mut(index + 1) {
        if !next.leading.contains('\n') {
            next.leading.insert(0, '\n');
        }
    }
}
