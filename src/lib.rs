//! Typhoon 语言前端
//! 
//! 词法扫描、表达式树与访问者协议、AST 源码生成

pub mod config;
pub mod i18n;
pub mod lexer;
pub mod ast;
pub mod astgen;
pub mod driver;
