//! 表达式树模块
//! 
//! 表达式节点、访问者协议和 AST 打印器

pub mod expr;
pub mod printer;

pub use expr::{Binary, Expr, Grouping, Literal, Unary, Visitor};
pub use printer::AstPrinter;
