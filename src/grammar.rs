// ABOUTME: Loads grammar.txt and parses input lines into a tagged parse tree.
//
// The concrete parser/grammar engine is, per design, an external collaborator;
// what follows is this crate's implementation of that collaborator's contract:
// a small `nom` combinator set that recognizes the six productions grammar.txt
// declares (number, symbol, sexpr, qexpr, expr, and the start symbol) and
// builds a generic tagged tree rather than producing `Value`s directly, so
// the reader (src/reader.rs) stays a separate, independently testable layer.

use nom::branch::alt;
use nom::character::complete::{char, digit1, multispace0, one_of};
use nom::combinator::recognize;
use nom::multi::many0;
use nom::sequence::pair;
use nom::{IResult, Parser};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const REQUIRED_PRODUCTIONS: [&str; 6] = ["number", "symbol", "sexpr", "qexpr", "expr", "lithp"];

#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("could not read grammar file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("grammar file is missing required production '{0}'")]
    MissingProduction(&'static str),
    #[error("parse error near: {0}")]
    Parse(String),
    #[error("unconsumed input: {0}")]
    TrailingInput(String),
}

/// A node in the parse tree handed to the reader. `tag` names the grammar
/// production (or `>` for the root), `contents` holds leaf text (numbers,
/// symbols, bracket characters), and `children` holds sub-nodes in order.
#[derive(Debug, Clone)]
pub struct ParseNode {
    pub tag: String,
    pub contents: String,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    fn leaf(tag: &str, contents: &str) -> ParseNode {
        ParseNode {
            tag: tag.to_string(),
            contents: contents.to_string(),
            children: Vec::new(),
        }
    }

    fn branch(tag: &str, children: Vec<ParseNode>) -> ParseNode {
        ParseNode {
            tag: tag.to_string(),
            contents: String::new(),
            children,
        }
    }
}

impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{:?}>", self.tag, self.contents)
    }
}

/// Marker that `grammar.txt` was loaded and declares the required
/// productions; holds no data of its own once validated.
pub struct Grammar;

impl Grammar {
    pub fn load(path: impl AsRef<Path>) -> Result<Grammar, GrammarError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|source| GrammarError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        for production in REQUIRED_PRODUCTIONS {
            if !source.contains(production) {
                return Err(GrammarError::MissingProduction(production));
            }
        }
        Ok(Grammar)
    }
}

const SYMBOL_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_+-*/\\=<>!&";

fn parse_number(input: &str) -> IResult<&str, ParseNode> {
    let (rest, text) = recognize(pair(nom::combinator::opt(char('-')), digit1)).parse(input)?;
    Ok((rest, ParseNode::leaf("number", text)))
}

fn parse_symbol(input: &str) -> IResult<&str, ParseNode> {
    let (rest, text) = recognize(pair(
        one_of(SYMBOL_CHARS),
        many0(one_of(SYMBOL_CHARS)),
    ))
    .parse(input)?;
    Ok((rest, ParseNode::leaf("symbol", text)))
}

fn ws(input: &str) -> IResult<&str, &str> {
    multispace0(input)
}

fn parse_bracketed(open: char, close: char, tag_name: &'static str) -> impl Fn(&str) -> IResult<&str, ParseNode> {
    move |input: &str| {
        let (input, _) = char(open)(input)?;
        let mut children = vec![ParseNode::leaf("char", &open.to_string())];
        let (mut input, _) = ws(input)?;
        loop {
            if let Ok((rest, _)) = char::<_, nom::error::Error<&str>>(close)(input) {
                children.push(ParseNode::leaf("char", &close.to_string()));
                return Ok((rest, ParseNode::branch(tag_name, children)));
            }
            let (rest, child) = parse_expr(input)?;
            children.push(child);
            let (rest, _) = ws(rest)?;
            input = rest;
        }
    }
}

fn parse_sexpr(input: &str) -> IResult<&str, ParseNode> {
    parse_bracketed('(', ')', "sexpr")(input)
}

fn parse_qexpr(input: &str) -> IResult<&str, ParseNode> {
    parse_bracketed('{', '}', "qexpr")(input)
}

fn parse_expr(input: &str) -> IResult<&str, ParseNode> {
    alt((parse_number, parse_symbol, parse_sexpr, parse_qexpr)).parse(input)
}

fn parse_program(input: &str) -> IResult<&str, ParseNode> {
    let mut children = vec![ParseNode::leaf("regex", "")];
    let (mut input, _) = ws(input)?;
    while !input.is_empty() {
        let (rest, child) = parse_expr(input)?;
        children.push(child);
        let (rest, _) = ws(rest)?;
        input = rest;
    }
    children.push(ParseNode::leaf("regex", ""));
    Ok((input, ParseNode::branch(">", children)))
}

/// Parses one line of input against the grammar, producing the root (`>`)
/// parse tree node.
pub fn parse(_grammar: &Grammar, input: &str) -> Result<ParseNode, GrammarError> {
    match parse_program(input) {
        Ok((rest, tree)) => {
            if rest.trim().is_empty() {
                Ok(tree)
            } else {
                Err(GrammarError::TrailingInput(rest.to_string()))
            }
        }
        Err(e) => Err(GrammarError::Parse(format!("{:?}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_children(input: &str) -> Vec<ParseNode> {
        let (rest, tree) = parse_program(input).expect("parse");
        assert!(rest.is_empty());
        tree.children
    }

    #[test]
    fn parses_bare_number() {
        let children = root_children("42");
        assert_eq!(children[1].tag, "number");
        assert_eq!(children[1].contents, "42");
    }

    #[test]
    fn parses_negative_number() {
        let children = root_children("-7");
        assert_eq!(children[1].contents, "-7");
    }

    #[test]
    fn parses_bare_symbol_sequence() {
        let children = root_children("+ 1 2 3");
        assert_eq!(children.len(), 6); // regex, +, 1, 2, 3, regex
        assert_eq!(children[1].tag, "symbol");
        assert_eq!(children[1].contents, "+");
    }

    #[test]
    fn parses_parenthesized_sexpr_with_brackets() {
        let children = root_children("(- 10 3 2)");
        let sexpr = &children[1];
        assert_eq!(sexpr.tag, "sexpr");
        assert_eq!(sexpr.children.first().unwrap().contents, "(");
        assert_eq!(sexpr.children.last().unwrap().contents, ")");
    }

    #[test]
    fn parses_qexpr() {
        let children = root_children("{1 2 3}");
        assert_eq!(children[1].tag, "qexpr");
    }

    #[test]
    fn rejects_trailing_garbage() {
        let err = parse(&Grammar, "1 )").unwrap_err();
        assert!(matches!(err, GrammarError::TrailingInput(_)) || matches!(err, GrammarError::Parse(_)));
    }

    #[test]
    fn grammar_load_rejects_missing_production() {
        let dir = std::env::temp_dir().join(format!("lithp-grammar-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("grammar.txt");
        fs::write(&path, "number symbol sexpr qexpr expr").unwrap();
        let err = Grammar::load(&path).unwrap_err();
        assert!(matches!(err, GrammarError::MissingProduction(_)));
        let _ = fs::remove_dir_all(&dir);
    }
}
