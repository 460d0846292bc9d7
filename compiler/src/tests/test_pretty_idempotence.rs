use crate::tests::common::{parse_source, shape};

fn assert_pretty_idempotent(input: &str) {
    let t1 = parse_source(input);
    let p1 = t1.pretty();
    let t2 = parse_source(&p1);
    assert_eq!(shape(&t1), shape(&t2), "pretty output changed the tree: {p1}");

    let p2 = t2.pretty();
    assert_eq!(p1, p2, "input: {input}");
}

#[test]
fn test_pretty_idempotence_cases() {
    let cases = [
        "def add(x,y)\nadd(x,y)\nend",
        "def f(x)\n1\nend",
        "def f() g() end",
        "def f(a,b,c) c end",
        "def f(a) g(a, h(1, i(a)), 007) end",
        "def definition(ending) define(ending) end",
    ];

    for input in cases {
        assert_pretty_idempotent(input);
    }
}

#[test]
fn test_pretty_layout() {
    let tree = parse_source("def f(a,b)\ng(a,h(b,2))\nend");
    assert_eq!(tree.pretty(), "def f(a, b)\n  g(a, h(b, 2))\nend");
}
