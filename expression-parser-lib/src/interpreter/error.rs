use thiserror::Error;

/// Reasons an expression could not be turned into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `)` was found with no `(` left on the operator stack.
    #[error("unbalanced parenthesis: ')' has no matching '('")]
    UnbalancedParenthesis,
    /// An operator was missing an operand, or operands were left over
    /// without an operator to combine them.
    #[error("incomplete expression: expected {expected} operand(s) on the stack, found {found}")]
    IncompleteExpression { expected: usize, found: usize },
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_expression_message_names_counts() {
        let error = ParseError::IncompleteExpression {
            expected: 2,
            found: 1,
        };

        assert_eq!(
            error.to_string(),
            "incomplete expression: expected 2 operand(s) on the stack, found 1"
        )
    }
}
