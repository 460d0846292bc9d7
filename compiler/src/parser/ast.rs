use crate::span::Span;

/// An identifier with the span of the token it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub text: String,
    pub span: Span,
}

/// The closed set of syntax tree nodes. Children are owned by their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Def(Def),
    Call(Call),
    Var(Var),
    Int(IntLiteral),
}

/// `def name(params) body end`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Def {
    pub name: Ident,
    pub params: Vec<Ident>,
    pub body: Box<Node>,
    pub span: Span,
}

/// `name(args)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub name: Ident,
    pub args: Vec<Node>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Var {
    pub name: Ident,
}

/// An integer literal of any length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntLiteral {
    /// Decimal digits with leading zeros stripped; zero is `"0"`.
    pub value: String,
    pub span: Span,
}

impl IntLiteral {
    /// Build a literal from the digits of an integer token.
    pub fn from_digits(digits: &str, span: Span) -> Self {
        let trimmed = digits.trim_start_matches('0');
        let value = if trimmed.is_empty() { "0" } else { trimmed };
        Self {
            value: value.to_string(),
            span,
        }
    }
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::Def(def) => def.span,
            Node::Call(call) => call.span,
            Node::Var(var) => var.name.span,
            Node::Int(int) => int.span,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Def(_) => "def",
            Node::Call(_) => "call",
            Node::Var(_) => "var",
            Node::Int(_) => "int",
        }
    }
}
