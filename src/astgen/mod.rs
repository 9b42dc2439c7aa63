//! AST 生成器模块
//! 
//! 根据声明式的节点模式生成表达式节点和访问者的 Rust 源码

pub mod error;
pub mod schema;
pub mod generate;

pub use error::SchemaError;
pub use schema::{expression_schema, parse_schema, validate, FieldSpec, NodeSpec};
pub use generate::generate;
