use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::Node;

/// One handler per node variant. A node passed to [`Node::accept`] calls the
/// method matching its own variant.
///
/// If a method is not implemented, the default implementation will continue in a pre-order
/// traversal of the tree.
pub trait ExpressionVisitor: Sized {
    fn visit_literal(&mut self, _digit: char) {}
    fn visit_variable(&mut self, _name: char) {}
    fn visit_binary(&mut self, _operator: &BinaryOperator, left_operand: &Node, right_operand: &Node) {
        walk_binary(self, left_operand, right_operand)
    }
    fn visit_paren(&mut self, inner: &Node) {
        walk_paren(self, inner)
    }
}

pub fn walk_binary(visitor: &mut impl ExpressionVisitor, left_operand: &Node, right_operand: &Node) {
    left_operand.accept(visitor);
    right_operand.accept(visitor);
}

pub fn walk_paren(visitor: &mut impl ExpressionVisitor, inner: &Node) {
    inner.accept(visitor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_complex_tree() -> Node {
        let a = Node::new_variable('a');
        let b = Node::new_variable('b');
        let c = Node::new_variable('c');
        let d = Node::new_literal('4');
        let second_plus = Node::new_paren(Node::new_binary(BinaryOperator::Add, b, c));
        let star = Node::new_binary(BinaryOperator::Multiply, second_plus, d);
        Node::new_binary(BinaryOperator::Add, a, star)
    }

    struct PrePostPrintVisitor {
        prints: Vec<String>,
    }

    impl ExpressionVisitor for PrePostPrintVisitor {
        fn visit_literal(&mut self, digit: char) {
            self.prints.push(digit.to_string())
        }
        fn visit_variable(&mut self, name: char) {
            self.prints.push(name.to_string())
        }
        fn visit_binary(&mut self, operator: &BinaryOperator, left_operand: &Node, right_operand: &Node) {
            self.prints.push(format!("{:?}", operator));
            walk_binary(self, left_operand, right_operand);
            self.prints.push(format!("exit {:?}", operator));
        }
        fn visit_paren(&mut self, inner: &Node) {
            self.prints.push("Paren".into());
            walk_paren(self, inner);
            self.prints.push("exit Paren".into());
        }
    }

    #[derive(Default)]
    struct VariableCollector {
        names: Vec<char>,
    }

    impl ExpressionVisitor for VariableCollector {
        fn visit_variable(&mut self, name: char) {
            self.names.push(name)
        }
    }

    #[test]
    fn walk_tree_prints_all_nodes_in_tree_in_pre_and_post_orders() {
        let root = create_complex_tree();
        let mut visitor = PrePostPrintVisitor { prints: vec![] };
        root.accept(&mut visitor);
        assert_eq!(
            visitor.prints,
            [
                "Add",
                "a",
                "Multiply",
                "Paren",
                "Add",
                "b",
                "c",
                "exit Add",
                "exit Paren",
                "4",
                "exit Multiply",
                "exit Add",
            ]
        )
    }

    #[test]
    fn default_methods_reach_every_leaf() {
        let root = create_complex_tree();
        let mut visitor = VariableCollector::default();

        root.accept(&mut visitor);

        assert_eq!(visitor.names, ['a', 'b', 'c'])
    }
}
