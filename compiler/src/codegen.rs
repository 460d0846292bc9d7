//! Tree-to-text code generation.
//!
//! Output is a deterministic, context-free function of each node:
//!
//! | Node                      | Output                                           |
//! |---------------------------|--------------------------------------------------|
//! | `Def(name, params, body)` | `function name(p1,p2) { return <body> };`        |
//! | `Call(name, args)`        | `name(<arg1>,<arg2>)`                            |
//! | `Var(name)`               | `name`                                           |
//! | `Int(value)`              | `value` in decimal, without leading zeros        |

use crate::error::{GenError, UnexpectedNodeSnafu};
use crate::parser::ast::{Call, Def, Node};

/// Generate target text for any node.
///
/// A `Def` is only valid at the root; one nested inside a body or an argument list is
/// reported as [`GenError::UnexpectedNode`].
pub fn generate(node: &Node) -> Result<String, GenError> {
    match node {
        Node::Def(def) => generate_def(def),
        expr => generate_expr(expr),
    }
}

fn generate_def(def: &Def) -> Result<String, GenError> {
    let params: Vec<&str> = def.params.iter().map(|p| p.text.as_str()).collect();
    Ok(format!(
        "function {}({}) {{ return {} }};",
        def.name.text,
        params.join(","),
        generate_expr(&def.body)?
    ))
}

fn generate_expr(node: &Node) -> Result<String, GenError> {
    match node {
        Node::Call(call) => generate_call(call),
        Node::Var(var) => Ok(var.name.text.clone()),
        Node::Int(int) => Ok(int.value.clone()),
        Node::Def(def) => UnexpectedNodeSnafu {
            kind: node.kind_name(),
            span: def.span,
        }
        .fail(),
    }
}

fn generate_call(call: &Call) -> Result<String, GenError> {
    let args = call
        .args
        .iter()
        .map(generate_expr)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("{}({})", call.name.text, args.join(",")))
}
