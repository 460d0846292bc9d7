use super::ast::{Def, Node};

const INDENT: &str = "  ";

impl Node {
    /// Print the tree back in the source language.
    ///
    /// The output re-parses to the same tree shape, and printing that tree again gives the
    /// same text.
    pub fn pretty(&self) -> String {
        match self {
            Node::Def(def) => pretty_def(def),
            Node::Call(call) => {
                let args: Vec<String> = call.args.iter().map(Node::pretty).collect();
                format!("{}({})", call.name.text, args.join(", "))
            }
            Node::Var(var) => var.name.text.clone(),
            Node::Int(int) => int.value.clone(),
        }
    }
}

fn pretty_def(def: &Def) -> String {
    let params: Vec<&str> = def.params.iter().map(|p| p.text.as_str()).collect();
    format!(
        "def {}({})\n{INDENT}{}\nend",
        def.name.text,
        params.join(", "),
        def.body.pretty()
    )
}
