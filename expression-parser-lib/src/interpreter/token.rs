use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression. Every token corresponds to exactly one
/// character of the source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Literal(char),
    Variable(char),
    Operator(BinaryOperator),
    LeftParenthesis,
    RightParenthesis,
}

impl Token {
    /// Classifies a single character, or returns `None` if the character
    /// has no meaning in an expression.
    pub fn from_char(character: char) -> Option<Token> {
        match character {
            '(' => Some(Token::LeftParenthesis),
            ')' => Some(Token::RightParenthesis),
            digit if digit.is_ascii_digit() => Some(Token::Literal(digit)),
            letter if letter.is_alphabetic() => Some(Token::Variable(letter)),
            symbol => BinaryOperator::from_symbol(symbol).map(Token::Operator),
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Token::Literal(digit) => *digit,
            Token::Variable(name) => *name,
            Token::Operator(operator) => operator.symbol(),
            Token::LeftParenthesis => '(',
            Token::RightParenthesis => ')',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
