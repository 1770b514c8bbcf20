pub mod dump_visitor;
pub mod expression_tree;
pub mod syntax_visitor;
