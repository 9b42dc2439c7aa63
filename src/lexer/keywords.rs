//! 关键字表
//! 
//! 保留字拼写到 Token 类型的固定映射，区分大小写

use super::token::{LiteralValue, TokenKind};

/// 查找保留字，不是关键字时返回 None
pub fn lookup(spelling: &str) -> Option<TokenKind> {
    let kind = match spelling {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "if" => TokenKind::If,
        "elif" => TokenKind::Elif,
        "or" => TokenKind::Or,
        "null" => TokenKind::Null,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "self" => TokenKind::SelfValue,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// 字面量关键字携带的值
pub fn keyword_value(kind: TokenKind) -> Option<LiteralValue> {
    match kind {
        TokenKind::True => Some(LiteralValue::Bool(true)),
        TokenKind::False => Some(LiteralValue::Bool(false)),
        TokenKind::Null => Some(LiteralValue::Null),
        _ => None,
    }
}
