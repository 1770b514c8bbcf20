//! Parses flat infix arithmetic expressions such as `(1+x)*(2/4)` into an
//! expression tree, and renders that tree back into text.

pub mod interpreter;
