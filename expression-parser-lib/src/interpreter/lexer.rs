use crate::interpreter::token::Token;
use log::trace;

/// Splits the given text into tokens, one per meaningful character.
///
/// Characters that are neither operands, operators nor parentheses
/// (whitespace included) are skipped. Numbers are not grouped: `12` becomes
/// two separate literals.
///
/// # Examples
///
/// ```
/// use expression_parser::interpreter::lexer::tokenize;
/// use expression_parser::interpreter::token::Token;
///
/// let tokens = tokenize("(x)");
/// assert_eq!(
///     tokens,
///     vec![Token::LeftParenthesis, Token::Variable('x'), Token::RightParenthesis]
/// );
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    expression
        .char_indices()
        .filter_map(|(position, character)| {
            let token = Token::from_char(character);
            if token.is_none() {
                trace!("skipping {:?} at position {}", character, position);
            }
            token
        })
        .collect()
}
