use crate::interpreter::error::ParseError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;

/// Reorders infix tokens into postfix order using an operator stack.
///
/// Parentheses only steer the order operators are emitted in and never
/// appear in the output.
pub(crate) fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(infix_tokens.len());

    for token in infix_tokens {
        match token {
            Token::Literal(_) | Token::Variable(_) => output.push(token),
            Token::LeftParenthesis => operators.push(token),
            Token::RightParenthesis => parse_closing_parenthesis_token(&mut operators, &mut output)?,
            Token::Operator(operator) => parse_operator_token(&mut operators, &mut output, operator),
        };
    }

    transfer_leftover_operators(&mut operators, &mut output);

    Ok(output)
}

fn transfer_leftover_operators(operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(token) = operators.pop() {
        match token {
            // An unclosed parenthesis has nothing left to group.
            Token::LeftParenthesis => trace!("discarding unmatched '('"),
            operator => output.push(operator),
        }
    }
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), ParseError> {
    loop {
        match operators.pop() {
            None => return Err(ParseError::UnbalancedParenthesis),
            // Discard the open parenthesis.
            Some(Token::LeftParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(&Token::Operator(top_of_operator_stack)) = operators.last() {
        if !top_of_operator_stack.yields_to(&operator) {
            break;
        }
        trace!("{} flushes {}", operator, top_of_operator_stack);
        operators.pop();
        output.push(top_of_operator_stack.token());
    }

    operators.push(operator.token());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use crate::interpreter::tokens_to_string;
    use pretty_assertions::assert_eq;

    fn convert(expression: &str) -> Result<String, ParseError> {
        let postfix = infix_to_postfix(tokenize(expression))?;
        Ok(tokens_to_string(&postfix))
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // x + y
        let infix = vec![
            Token::Variable('x'),
            Token::Operator(BinaryOperator::Add),
            Token::Variable('y'),
        ];
        let postfix = vec![
            Token::Variable('x'),
            Token::Variable('y'),
            Token::Operator(BinaryOperator::Add),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        assert_eq!(convert("x-(y+z)").unwrap(), "xyz+-")
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        assert_eq!(convert("A+B*C-D").unwrap(), "ABC*+D-")
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        assert_eq!(convert("a+((b+c)*d)").unwrap(), "abc+d*+")
    }

    #[test]
    fn same_precedence_operators_are_left_associative() {
        assert_eq!(convert("a-b-c").unwrap(), "ab-c-");
        assert_eq!(convert("a/b*c").unwrap(), "ab/c*");
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(convert("a+b*c").unwrap(), "abc*+");
        assert_eq!(convert("a*b+c").unwrap(), "ab*c+");
    }

    #[test]
    fn parentheses_never_reach_the_output() {
        let postfix = infix_to_postfix(tokenize("((1+x))*(2/4)")).unwrap();

        assert!(postfix
            .iter()
            .all(|token| !matches!(token, Token::LeftParenthesis | Token::RightParenthesis)));
        assert_eq!(tokens_to_string(&postfix), "1x+24/*")
    }

    #[test]
    fn unmatched_open_parenthesis_is_discarded() {
        assert_eq!(convert("(1+2").unwrap(), "12+")
    }

    #[test]
    fn infix_to_postfix_mismatched_parenthesis_should_return_err() {
        // (x + y))
        let error = convert("(x+y))").expect_err("Should return Err");

        assert_eq!(error, ParseError::UnbalancedParenthesis)
    }

    #[test]
    fn closing_parenthesis_on_empty_stack_should_return_err() {
        assert_eq!(convert(")").unwrap_err(), ParseError::UnbalancedParenthesis)
    }
}
