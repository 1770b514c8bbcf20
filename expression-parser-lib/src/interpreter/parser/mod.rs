mod infix_converter;

use crate::interpreter::error::ParseError;
use crate::interpreter::syntax::expression_tree;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;
use log::debug;

/// What to do when the postfix stream leaves more than one operand behind,
/// e.g. for `12+3` where the digits are read as separate literals.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LeftoverOperands {
    /// Fail with [`ParseError::IncompleteExpression`].
    #[default]
    Reject,
    /// Use the most recently built operand as the root and drop the rest.
    KeepTopmost,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParserConfig {
    pub leftovers: LeftoverOperands,
}

impl ParserConfig {
    /// Reproduces the behaviour of the classic stack parser, which returned
    /// whatever was on top of the operand stack.
    pub fn lenient() -> ParserConfig {
        ParserConfig {
            leftovers: LeftoverOperands::KeepTopmost,
        }
    }
}

/// Reorders infix tokens into postfix order.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), expression_parser::interpreter::error::ParseError> {
/// use expression_parser::interpreter::lexer::tokenize;
/// use expression_parser::interpreter::parser::to_postfix;
/// use expression_parser::interpreter::tokens_to_string;
///
/// let postfix = to_postfix(tokenize("a-b-c"))?;
/// assert_eq!(tokens_to_string(&postfix), "ab-c-");
/// # Ok(()) }
/// ```
pub fn to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let postfix_tokens = infix_converter::infix_to_postfix(infix_tokens)?;
    debug!("postfix: {:?}", postfix_tokens);
    Ok(postfix_tokens)
}

/// Parses the given infix tokens into an equivalent expression tree.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
/// * `config`: How strictly malformed token streams are treated.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), expression_parser::interpreter::error::ParseError> {
/// use expression_parser::interpreter::parser::{parse, ParserConfig};
/// use expression_parser::interpreter::operator::BinaryOperator;
/// use expression_parser::interpreter::token::Token;
/// use expression_parser::interpreter::tokens_to_string;
///
/// let infix_tokens = vec![
///     Token::Variable('x'),
///     Token::Operator(BinaryOperator::Multiply),
///     Token::Literal('2'),
/// ];
/// let tree = parse(infix_tokens, &ParserConfig::default())?;
/// let regenerated_tokens = tree.to_postfix();
/// assert_eq!(tokens_to_string(&regenerated_tokens), "x2*");
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>, config: &ParserConfig) -> Result<Node, ParseError> {
    let postfix_tokens = to_postfix(infix_tokens)?;
    expression_tree::new_tree(postfix_tokens, config.leftovers)
}
