use crate::interpreter::error::ParseError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::parser::LeftoverOperands;
use crate::interpreter::syntax::syntax_visitor::{walk_binary, walk_paren, ExpressionVisitor};
use crate::interpreter::token::Token;
use log::debug;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    // Terminal symbols (leaves)
    Literal(char),
    Variable(char),
    // Non-terminal symbols (non-leaves)
    Binary {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    /// Explicit grouping. Never produced by the parser, since parentheses are
    /// consumed while ordering operators.
    Paren(Box<Node>),
}

impl Node {
    pub fn new_literal(digit: char) -> Node {
        Node::Literal(digit)
    }

    pub fn new_variable(name: char) -> Node {
        Node::Variable(name)
    }

    pub fn new_binary(operator: BinaryOperator, left_operand: Node, right_operand: Node) -> Node {
        Node::Binary {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_paren(inner: Node) -> Node {
        Node::Paren(Box::new(inner))
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    ///
    /// Visitors that descend through `accept` use one stack frame per tree
    /// level, so very deep trees need a visitor that walks iteratively, the way
    /// `DumpVisitor` handles left-associative chains.
    pub fn accept(&self, visitor: &mut impl ExpressionVisitor) {
        match self {
            Node::Literal(digit) => visitor.visit_literal(*digit),
            Node::Variable(name) => visitor.visit_variable(*name),
            Node::Binary {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary(operator, left_operand, right_operand),
            Node::Paren(inner) => visitor.visit_paren(inner),
        }
    }

    /// Regenerates the postfix token sequence this tree was built from.
    pub fn to_postfix(&self) -> Vec<Token> {
        let mut visitor = PostfixVisitor { tokens: Vec::new() };
        self.accept(&mut visitor);
        visitor.tokens
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        if write_tree(&visitor.builder.build(), &mut buffer).is_err() {
            return Err(fmt::Error);
        }
        let text = std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

/// Generates an expression tree based off of the given tokens.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
/// * `leftovers`: What to do if more than one operand remains once all tokens are consumed.
///
/// returns: The root of the generated expression tree.
pub fn new_tree(postfix_tokens: Vec<Token>, leftovers: LeftoverOperands) -> Result<Node, ParseError> {
    if postfix_tokens.is_empty() {
        return Err(ParseError::MalformedInput(
            "expression contains no operands or operators".into(),
        ));
    }

    let mut operands: Vec<Node> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::Literal(digit) => operands.push(Node::new_literal(digit)),
            Token::Variable(name) => operands.push(Node::new_variable(name)),
            Token::Operator(operator) => {
                let found = operands.len();
                let (Some(operand_two), Some(operand_one)) = (operands.pop(), operands.pop()) else {
                    return Err(ParseError::IncompleteExpression { expected: 2, found });
                };
                operands.push(Node::new_binary(operator, operand_one, operand_two));
            }
            Token::LeftParenthesis | Token::RightParenthesis => {
                return Err(ParseError::MalformedInput(
                    "there should not be any parenthesis present in postfix input".into(),
                ))
            }
        }
    }

    let found = operands.len();
    let root = match (operands.pop(), leftovers) {
        (Some(root), _) if found == 1 => root,
        (Some(root), LeftoverOperands::KeepTopmost) => {
            debug!("dropping {} leftover operand(s)", found - 1);
            root
        }
        _ => return Err(ParseError::IncompleteExpression { expected: 1, found }),
    };
    Ok(root)
}

struct PostfixVisitor {
    tokens: Vec<Token>,
}

impl ExpressionVisitor for PostfixVisitor {
    fn visit_literal(&mut self, digit: char) {
        self.tokens.push(Token::Literal(digit));
    }
    fn visit_variable(&mut self, name: char) {
        self.tokens.push(Token::Variable(name));
    }
    fn visit_binary(&mut self, operator: &BinaryOperator, left_operand: &Node, right_operand: &Node) {
        walk_binary(self, left_operand, right_operand);
        self.tokens.push(operator.token());
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl ExpressionVisitor for TreeBuilderVisitor {
    fn visit_literal(&mut self, digit: char) {
        self.builder.add_empty_child(digit.to_string());
    }
    fn visit_variable(&mut self, name: char) {
        self.builder.add_empty_child(name.to_string());
    }
    fn visit_binary(&mut self, operator: &BinaryOperator, left_operand: &Node, right_operand: &Node) {
        self.builder.begin_child(operator.to_string());
        walk_binary(self, left_operand, right_operand);
        self.builder.end_child();
    }
    fn visit_paren(&mut self, inner: &Node) {
        self.builder.begin_child("()".into());
        walk_paren(self, inner);
        self.builder.end_child();
    }
}
