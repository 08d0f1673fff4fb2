// ABOUTME: Lifts a tagged parse tree (grammar::ParseNode) into a runtime Value.

use crate::error::LispError;
use crate::grammar::ParseNode;
use crate::value::Value;

const BRACKETS: [&str; 4] = ["(", ")", "{", "}"];

/// Reads one parse-tree node into a value, per the tag-matching rules: a
/// `number`-tagged node becomes `Number`, `symbol` becomes `Symbol`, the
/// root marker `>` or an `sexpr`-tagged node becomes `SExpr`, `qexpr`
/// becomes `QExpr`; bracket and `regex` children are skipped.
pub fn read(node: &ParseNode) -> Value {
    if node.tag.contains("number") {
        return match node.contents.parse::<i64>() {
            Ok(n) => Value::Number(n),
            Err(_) => LispError::BadNumber.into(),
        };
    }
    if node.tag.contains("symbol") {
        return Value::Symbol(node.contents.clone());
    }
    if node.tag == ">" || node.tag.contains("sexpr") {
        return read_sequence(node, Value::SExpr(Vec::new()));
    }
    if node.tag.contains("qexpr") {
        return read_sequence(node, Value::QExpr(Vec::new()));
    }
    Value::error(format!("unrecognized parse node tag '{}'", node.tag))
}

fn read_sequence(node: &ParseNode, mut acc: Value) -> Value {
    for child in &node.children {
        if BRACKETS.contains(&child.contents.as_str()) || child.tag == "regex" {
            continue;
        }
        acc.append(read(child));
    }
    acc
}
