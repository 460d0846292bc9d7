//! JSON views of intermediate pipeline stages.
//!
//! Spans are byte offsets `[start, end)` with the 1-based line/column of `start`.

use compiler::ast::Node;
use compiler::{SourceMap, Span, Token, TokenKind};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SpanView {
    pub start: u32,
    pub end: u32,
    pub line: usize,
    pub col: usize,
}

#[derive(Debug, Serialize)]
pub struct TokenView {
    pub kind: TokenKind,
    pub text: String,
    pub span: SpanView,
}

#[derive(Debug, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum NodeView {
    Def {
        name: String,
        params: Vec<String>,
        body: Box<NodeView>,
        span: SpanView,
    },
    Call {
        name: String,
        args: Vec<NodeView>,
        span: SpanView,
    },
    Var {
        name: String,
        span: SpanView,
    },
    Int {
        value: String,
        span: SpanView,
    },
}

pub struct ViewCtx {
    sm: SourceMap,
}

impl ViewCtx {
    pub fn new(source: &str) -> Self {
        Self {
            sm: SourceMap::new(source),
        }
    }

    pub fn span(&self, span: Span) -> SpanView {
        let (line, col) = self.sm.line_col(span.start);
        SpanView {
            start: span.start,
            end: span.end,
            line,
            col,
        }
    }

    pub fn tokens(&self, tokens: &[Token]) -> Vec<TokenView> {
        tokens
            .iter()
            .map(|t| TokenView {
                kind: t.kind,
                text: t.text.clone(),
                span: self.span(t.span),
            })
            .collect()
    }

    pub fn node(&self, node: &Node) -> NodeView {
        match node {
            Node::Def(def) => NodeView::Def {
                name: def.name.text.clone(),
                params: def.params.iter().map(|p| p.text.clone()).collect(),
                body: Box::new(self.node(&def.body)),
                span: self.span(def.span),
            },
            Node::Call(call) => NodeView::Call {
                name: call.name.text.clone(),
                args: call.args.iter().map(|a| self.node(a)).collect(),
                span: self.span(call.span),
            },
            Node::Var(var) => NodeView::Var {
                name: var.name.text.clone(),
                span: self.span(var.name.span),
            },
            Node::Int(int) => NodeView::Int {
                value: int.value.clone(),
                span: self.span(int.span),
            },
        }
    }
}
