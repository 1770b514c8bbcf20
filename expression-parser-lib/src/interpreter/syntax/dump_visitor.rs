use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::syntax::syntax_visitor::ExpressionVisitor;
use anyhow::{Context, Result};
use string_builder::Builder;

/// Renders a tree as `Binary(Literal(1)+Variable(x))`: each node as its
/// variant name with its contents in parentheses, no whitespace.
pub struct DumpVisitor {
    builder: Builder,
}

impl DumpVisitor {
    pub fn new() -> DumpVisitor {
        DumpVisitor {
            builder: Builder::new(64),
        }
    }

    /// Consumes the visitor, returning everything rendered so far.
    pub fn finish(self) -> Result<String> {
        self.builder.string().context("Failed to build dump string")
    }
}

impl Default for DumpVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionVisitor for DumpVisitor {
    fn visit_literal(&mut self, digit: char) {
        self.builder.append(format!("Literal({})", digit));
    }

    fn visit_variable(&mut self, name: char) {
        self.builder.append(format!("Variable({})", name));
    }

    /// The left spine is walked with an explicit stack, since left-associative
    /// chains such as `a+a+...+a` nest one level per operator. Right operands
    /// and parenthesized groups are still rendered recursively.
    fn visit_binary(&mut self, operator: &BinaryOperator, left_operand: &Node, right_operand: &Node) {
        let mut pending = vec![(operator, right_operand)];
        let mut leftmost = left_operand;
        while let Node::Binary {
            operator,
            left_operand,
            right_operand,
        } = leftmost
        {
            pending.push((operator, right_operand.as_ref()));
            leftmost = left_operand.as_ref();
        }

        for _ in 0..pending.len() {
            self.builder.append("Binary(");
        }
        leftmost.accept(self);
        while let Some((operator, right_operand)) = pending.pop() {
            self.builder.append(operator.to_string());
            right_operand.accept(self);
            self.builder.append(")");
        }
    }

    fn visit_paren(&mut self, inner: &Node) {
        self.builder.append("Paren(");
        inner.accept(self);
        self.builder.append(")");
    }
}
