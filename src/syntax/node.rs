//! Syntax tree node types
//!
//! The tree is a token tree over TypeScript/TSX source. Every node owns the
//! trivia (whitespace and comments) that precedes it, so regions that are not
//! rewritten print back exactly as they were parsed.

/// Root of a parsed or generated module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    /// Top-level items in source order
    pub body: Vec<Node>,
    /// Trivia after the last item
    pub trailing_trivia: String,
}

impl SyntaxTree {
    pub fn new(body: Vec<Node>) -> Self {
        Self {
            body,
            trailing_trivia: String::new(),
        }
    }

    /// Top-level import declarations in source order
    pub fn imports(&self) -> impl Iterator<Item = &ImportDeclaration> {
        self.body.iter().filter_map(|node| match &node.kind {
            NodeKind::Import(import) => Some(import),
            _ => None,
        })
    }

    /// Top-level `declare` statements in source order
    pub fn declarations(&self) -> impl Iterator<Item = &DeclareStatement> {
        self.body.iter().filter_map(|node| match &node.kind {
            NodeKind::Declare(declare) => Some(declare),
            _ => None,
        })
    }

    /// Serialize the tree back to source text
    pub fn to_source(&self) -> String {
        crate::syntax::printer::print(self)
    }
}

/// A node together with the trivia that precedes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub leading: String,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            leading: String::new(),
            kind,
        }
    }

    /// Replace the leading trivia of this node
    pub fn with_leading(mut self, leading: impl Into<String>) -> Self {
        self.leading = leading.into();
        self
    }

    /// Identifier name if this node is an identifier
    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Whether the node belongs in a JSX child list rather than an expression
    pub fn is_jsx_child(&self) -> bool {
        match &self.kind {
            NodeKind::JsxElement(_) | NodeKind::JsxFragment(_) | NodeKind::JsxText(_) => true,
            NodeKind::List(items) => items.iter().all(Node::is_jsx_child),
            _ => false,
        }
    }
}

/// Tagged union of every node shape the engine understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Identifier or keyword
    Ident(String),
    /// Quoted string literal
    Str(StringLiteral),
    /// Any other lexical token kept verbatim (punctuation, numbers, regexes)
    Token(String),
    /// Template literal; substitutions are walked like any other node list
    Template(TemplateLiteral),
    /// Balanced `(..)`, `[..]` or `{..}`
    Group(Group),
    /// Top-level `import` declaration
    Import(ImportDeclaration),
    /// Top-level `declare` statement naming a placeholder
    Declare(DeclareStatement),
    JsxElement(JsxElement),
    JsxFragment(JsxFragment),
    /// Raw text between JSX tags, whitespace included
    JsxText(String),
    /// `{ .. }` inside JSX
    JsxExpression(JsxExpression),
    /// Composite fragment spliced into the surrounding child list
    List(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Decoded value
    pub value: String,
    /// Source text including quotes, when parsed
    pub raw: Option<String>,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            raw: None,
        }
    }

    /// Source form of the literal, re-quoted with double quotes when synthesized
    pub fn source_text(&self) -> String {
        match &self.raw {
            Some(raw) => raw.clone(),
            None => quote(&self.value),
        }
    }
}

/// Quote a value as a double-quoted string literal
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// `` `text ${expr} text` ``
///
/// `quasis` holds the raw text runs around the substitutions, so there is
/// always one more quasi than substitutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLiteral {
    pub quasis: Vec<String>,
    pub substitutions: Vec<TemplateSubstitution>,
}

/// Contents of one `${ .. }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSubstitution {
    pub children: Vec<Node>,
    /// Trivia before the closing brace
    pub close_trivia: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Paren,
    Bracket,
    Brace,
}

impl Delimiter {
    pub fn from_open(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Delimiter::Paren),
            '[' => Some(Delimiter::Bracket),
            '{' => Some(Delimiter::Brace),
            _ => None,
        }
    }

    pub fn open(&self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
            Delimiter::Brace => '{',
        }
    }

    pub fn close(&self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::Brace => '}',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub delimiter: Delimiter,
    pub children: Vec<Node>,
    /// Trivia before the closing delimiter
    pub close_trivia: String,
}

/// One named binding of an import declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    /// Name exported by the source module
    pub imported: String,
    /// Local alias, when different from `imported`
    pub local: Option<String>,
    /// Inline `type` modifier
    pub type_only: bool,
}

impl ImportSpecifier {
    pub fn new(imported: impl Into<String>) -> Self {
        Self {
            imported: imported.into(),
            local: None,
            type_only: false,
        }
    }

    /// Name the binding is visible under in the importing module
    pub fn local_name(&self) -> &str {
        self.local.as_deref().unwrap_or(&self.imported)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    /// `import type ...`
    pub type_only: bool,
    /// `import Default from ...`
    pub default: Option<String>,
    /// `import * as ns from ...`
    pub namespace: Option<String>,
    /// `import { a, b as c } from ...`
    pub named: Vec<ImportSpecifier>,
    /// Module specifier, unquoted
    pub source: String,
    /// Original source text; cleared whenever the declaration is modified
    pub raw: Option<String>,
}

impl ImportDeclaration {
    /// A fresh `import { .. } from "source";` with no bindings yet
    pub fn named(source: impl Into<String>) -> Self {
        Self {
            type_only: false,
            default: None,
            namespace: None,
            named: Vec::new(),
            source: source.into(),
            raw: None,
        }
    }

    /// Local names introduced by this declaration
    pub fn local_names(&self) -> impl Iterator<Item = &str> {
        self.default
            .as_deref()
            .into_iter()
            .chain(self.namespace.as_deref())
            .chain(self.named.iter().map(ImportSpecifier::local_name))
    }

    /// Whether `exported` is already bound by this declaration
    pub fn imports_export(&self, exported: &str) -> bool {
        if exported == "default" && self.default.is_some() {
            return true;
        }
        self.named.iter().any(|spec| spec.imported == exported)
    }

    /// Whether named specifiers can be added to this declaration
    pub fn accepts_named(&self) -> bool {
        !self.type_only && self.namespace.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclareKind {
    Const,
    Let,
    Var,
    Class,
    Interface,
    Type,
    Function,
    Enum,
}

impl DeclareKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "const" => Some(DeclareKind::Const),
            "let" => Some(DeclareKind::Let),
            "var" => Some(DeclareKind::Var),
            "class" => Some(DeclareKind::Class),
            "interface" => Some(DeclareKind::Interface),
            "type" => Some(DeclareKind::Type),
            "function" => Some(DeclareKind::Function),
            "enum" => Some(DeclareKind::Enum),
            _ => None,
        }
    }
}

/// `declare const NAME: T;` and friends; the name is a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclareStatement {
    pub kind: DeclareKind,
    pub name: String,
    /// Statement text as written
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsxAttribute {
    /// `name`, `name="v"`, `name={expr}`, `name=<el />`
    Named {
        leading: String,
        name: String,
        value: Option<Box<Node>>,
    },
    /// `{...props}`; the node is a `JsxExpression`
    Spread(Node),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxElement {
    pub name: String,
    pub attributes: Vec<JsxAttribute>,
    /// Trivia before `>` or `/>`
    pub tag_trivia: String,
    pub self_closing: bool,
    pub children: Vec<Node>,
}

impl JsxElement {
    /// Value node of the attribute called `name`
    pub fn attribute(&self, name: &str) -> Option<&Node> {
        self.attributes.iter().find_map(|attr| match attr {
            JsxAttribute::Named {
                name: attr_name,
                value,
                ..
            } if attr_name == name => value.as_deref(),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxFragment {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxExpression {
    pub children: Vec<Node>,
    /// Trivia before the closing brace
    pub close_trivia: String,
}

impl JsxExpression {
    /// The single meaningful child, if the container holds exactly one
    pub fn sole_child(&self) -> Option<&Node> {
        match self.children.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}
