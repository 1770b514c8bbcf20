pub mod error;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::interpreter::error::ParseError;
use crate::interpreter::parser::ParserConfig;
use crate::interpreter::syntax::dump_visitor::DumpVisitor;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;
use syntax::expression_tree::Node;

/// Converts the given input string into an equivalent expression tree.
///
/// Operands are single characters: a digit becomes a literal and a letter
/// becomes a variable. Characters that are neither operands, operators nor
/// parentheses are skipped.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use expression_parser::interpreter::{parse, render};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = parse("a+b*c".into())?;
/// assert_eq!(
///     render(&tree)?,
///     "Binary(Variable(a)+Binary(Variable(b)*Variable(c)))"
/// );
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(expression: String) -> Result<Node, ParseError> {
    parse_with(&expression, &ParserConfig::default())
}

/// Like [`parse`], with explicit control over how malformed input is treated.
pub fn parse_with(expression: &str, config: &ParserConfig) -> Result<Node, ParseError> {
    let tokens = lexer::tokenize(expression);
    let tree = parser::parse(tokens, config)?;
    debug!("parsed {:?} into {:?}", expression, tree);
    Ok(tree)
}

/// Converts the given infix expression into postfix (reverse Polish) order.
///
/// # Examples
///
/// ```
/// use expression_parser::interpreter::{postfix, tokens_to_string};
///
/// let tokens = postfix("(1+x)*(2/4)").unwrap();
/// assert_eq!(tokens_to_string(&tokens), "1x+24/*");
/// ```
pub fn postfix(expression: &str) -> Result<Vec<Token>, ParseError> {
    parser::to_postfix(lexer::tokenize(expression))
}

/// Renders the given tree in the one-line dump format,
/// e.g. `Binary(Literal(1)+Variable(x))`.
pub fn render(tree: &Node) -> Result<String> {
    let mut visitor = DumpVisitor::new();
    tree.accept(&mut visitor);
    visitor.finish()
}

/// Parses the given expression and renders the resulting tree.
///
/// # Examples
///
/// ```
/// use expression_parser::interpreter::dump;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let dumped = dump("1+x".to_string())?;
/// assert_eq!(dumped, "Binary(Literal(1)+Variable(x))");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn dump(expression: String) -> Result<String> {
    let tree = parse_with(&expression, &ParserConfig::default())
        .with_context(|| format!("could not parse expression {:?}", expression))?;
    render(&tree)
}

/// Writes the given tokens back to back, without separators.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join("")
}
