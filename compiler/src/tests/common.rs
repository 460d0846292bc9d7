use crate::ast::Node;
use crate::lexer::tokenize;
use crate::parser::parse;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn parse_source(source: &str) -> Node {
    let tokens = tokenize(source).unwrap_or_else(|e| panic!("lex error for {source:?}: {e}"));
    parse(tokens).unwrap_or_else(|e| panic!("parse error for {source:?}: {e}"))
}

/// Compact structural rendering with spans left out: `Def(f,[x],Call(g,[Var(x),Int(1)]))`.
pub fn shape(node: &Node) -> String {
    match node {
        Node::Def(def) => {
            let params: Vec<&str> = def.params.iter().map(|p| p.text.as_str()).collect();
            format!(
                "Def({},[{}],{})",
                def.name.text,
                params.join(","),
                shape(&def.body)
            )
        }
        Node::Call(call) => {
            let args: Vec<String> = call.args.iter().map(shape).collect();
            format!("Call({},[{}])", call.name.text, args.join(","))
        }
        Node::Var(var) => format!("Var({})", var.name.text),
        Node::Int(int) => format!("Int({})", int.value),
    }
}

#[test]
fn test_shape() {
    let node = parse_source("def f(x, y)\ng(x, 1, h())\nend");
    assert_eq!(shape(&node), "Def(f,[x,y],Call(g,[Var(x),Int(1),Call(h,[])]))");
}

macro_rules! assert_def {
    ($e:expr, $name:expr, $params:expr) => {{
        match &$e {
            Node::Def(def) => {
                assert_eq!(def.name.text, $name);
                let params: Vec<&str> = def.params.iter().map(|p| p.text.as_str()).collect();
                let expected: Vec<&str> = $params;
                assert_eq!(params, expected);
                def.body.as_ref()
            }
            other => panic!("expected Def, got {:?}", other),
        }
    }};
}

macro_rules! assert_call {
    ($e:expr, $name:expr, $args:expr) => {{
        match &$e {
            Node::Call(call) => {
                assert_eq!(call.name.text, $name);
                assert_eq!(call.args.len(), $args);
                &call.args
            }
            other => panic!("expected Call, got {:?}", other),
        }
    }};
}

macro_rules! assert_var {
    ($e:expr, $name:expr) => {{
        match &$e {
            Node::Var(var) => assert_eq!(var.name.text, $name),
            other => panic!("expected Var, got {:?}", other),
        }
    }};
}

macro_rules! assert_int {
    ($e:expr, $value:expr) => {{
        match &$e {
            Node::Int(int) => assert_eq!(int.value, $value.to_string()),
            other => panic!("expected Int, got {:?}", other),
        }
    }};
}
