//! Token 定义
//! 
//! 词法分析器产生的标记类型

use std::fmt;

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ============ 单字符分隔符 ============
    /// (
    LeftParen,
    /// )
    RightParen,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// ,
    Comma,
    /// .
    Dot,
    /// -
    Minus,
    /// +
    Plus,
    /// ;
    Semicolon,
    /// /
    Slash,
    /// *
    Star,

    // ============ 一或两个字符的运算符 ============
    /// !
    Bang,
    /// !=
    BangEqual,
    /// =
    Equal,
    /// ==
    EqualEqual,
    /// >
    Greater,
    /// >=
    GreaterEqual,
    /// <
    Less,
    /// <=
    LessEqual,

    // ============ 字面量 ============
    /// 标识符
    Identifier,
    /// 字符串字面量
    String,
    /// 数字字面量
    Number,

    // ============ 关键字 ============
    /// and
    And,
    /// class
    Class,
    /// else
    Else,
    /// false
    False,
    /// if
    If,
    /// elif
    Elif,
    /// or
    Or,
    /// null
    Null,
    /// print
    Print,
    /// return
    Return,
    /// super
    Super,
    /// self（Rust 保留了 Self，因此命名为 SelfValue）
    SelfValue,
    /// true
    True,
    /// var
    Var,
    /// while
    While,

    // ============ 特殊 ============
    /// 文件结束
    Eof,
}

impl TokenKind {
    /// 判断是否是保留关键字
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Elif
                | TokenKind::Or
                | TokenKind::Null
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::SelfValue
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }
}

/// 字面量的解码值
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// 数字
    Number(f64),
    /// 字符串（也用于标识符名）
    String(String),
    /// 布尔值
    Bool(bool),
    /// null
    Null,
}

/// 源码位置信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// 起始位置（字符偏移）
    pub start: usize,
    /// 结束位置（字符偏移）
    pub end: usize,
    /// 行号（从1开始）
    pub line: usize,
    /// 列号（从1开始）
    pub column: usize,
}

impl Span {
    /// 创建新的位置信息
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self { start, end, line, column }
    }
}

/// Token 结构
///
/// 由扫描器按源码顺序逐个创建，创建后不再修改
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token 类型
    pub kind: TokenKind,
    /// 原始文本（EOF 为空）
    pub lexeme: String,
    /// 字面量值，运算符和分隔符为 None
    pub value: Option<LiteralValue>,
    /// 位置信息
    pub span: Span,
}

impl Token {
    /// 创建新的 Token
    pub fn new(kind: TokenKind, lexeme: String, value: Option<LiteralValue>, span: Span) -> Self {
        Self { kind, lexeme, value, span }
    }

    /// Token 起始行号
    pub fn line(&self) -> usize {
        self.span.line
    }

    /// 判断是否是指定类型
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// 判断是否是文件结束
    pub fn is_eof(&self) -> bool {
        self.is(TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}' at {}:{}", self.kind, self.lexeme, self.span.line, self.span.column)?;
        if let Some(value) = &self.value {
            write!(f, " = {}", value)?;
        }
        Ok(())
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::String(s) => write!(f, "{}", s),
            LiteralValue::Bool(b) => write!(f, "{}", b),
            LiteralValue::Null => write!(f, "null"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 分隔符
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::LeftBrace => write!(f, "{{"),
            TokenKind::RightBrace => write!(f, "}}"),
            TokenKind::LeftBracket => write!(f, "["),
            TokenKind::RightBracket => write!(f, "]"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Star => write!(f, "*"),

            // 运算符
            TokenKind::Bang => write!(f, "!"),
            TokenKind::BangEqual => write!(f, "!="),
            TokenKind::Equal => write!(f, "="),
            TokenKind::EqualEqual => write!(f, "=="),
            TokenKind::Greater => write!(f, ">"),
            TokenKind::GreaterEqual => write!(f, ">="),
            TokenKind::Less => write!(f, "<"),
            TokenKind::LessEqual => write!(f, "<="),

            // 字面量
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Number => write!(f, "number"),

            // 关键字
            TokenKind::And => write!(f, "and"),
            TokenKind::Class => write!(f, "class"),
            TokenKind::Else => write!(f, "else"),
            TokenKind::False => write!(f, "false"),
            TokenKind::If => write!(f, "if"),
            TokenKind::Elif => write!(f, "elif"),
            TokenKind::Or => write!(f, "or"),
            TokenKind::Null => write!(f, "null"),
            TokenKind::Print => write!(f, "print"),
            TokenKind::Return => write!(f, "return"),
            TokenKind::Super => write!(f, "super"),
            TokenKind::SelfValue => write!(f, "self"),
            TokenKind::True => write!(f, "true"),
            TokenKind::Var => write!(f, "var"),
            TokenKind::While => write!(f, "while"),

            // 特殊
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}
