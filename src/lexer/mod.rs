//! 词法分析模块
//! 
//! 将源代码转换为 Token 流

pub mod token;
pub mod keywords;
pub mod error;
pub mod scanner;

pub use token::{Token, TokenKind, LiteralValue, Span};
pub use error::{LexError, LexErrorKind};
pub use scanner::{scan, ScanResult, Scanner};
