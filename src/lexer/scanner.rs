//! 词法扫描器
//!
//! 将源代码字符串转换为 Token 流。
//! 遇到词法错误时记录错误并继续扫描，最终同时返回 token 和全部错误。

use super::error::{LexError, LexErrorKind, SourceLines};
use super::keywords;
use super::token::{LiteralValue, Span, Token, TokenKind};
use crate::config::CONTEXT_RADIUS;

/// 一次扫描的结果
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    /// 按源码顺序排列的 token，总是以一个 Eof 结尾
    pub tokens: Vec<Token>,
    /// 按出现顺序排列的词法错误
    pub errors: Vec<LexError>,
}

impl ScanResult {
    /// 没有词法错误
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// 有错误时丢弃 token，只返回错误
    pub fn into_result(self) -> Result<Vec<Token>, Vec<LexError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// 扫描源码，存在任何词法错误时返回全部错误
pub fn scan(source: &str) -> Result<Vec<Token>, Vec<LexError>> {
    Scanner::new(source).scan_tokens().into_result()
}

/// 词法扫描器
pub struct Scanner {
    /// 源代码字符
    source: Vec<char>,
    /// 行索引，用于错误上下文
    lines: SourceLines,
    /// 当前位置
    current: usize,
    /// 当前 token 起始位置
    start: usize,
    /// 当前行号
    line: usize,
    /// 当前列号
    column: usize,
    /// token 起始行号（字符串可以跨行）
    start_line: usize,
    /// token 起始列号
    start_column: usize,
}

impl Scanner {
    /// 创建新的扫描器
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            lines: SourceLines::new(source),
            current: 0,
            start: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
        }
    }

    /// 扫描所有 token
    pub fn scan_tokens(&mut self) -> ScanResult {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        loop {
            match self.scan_token() {
                Ok(token) => {
                    let is_eof = token.is_eof();
                    tokens.push(token);
                    if is_eof {
                        break;
                    }
                }
                Err(error) => errors.push(error),
            }
        }

        ScanResult { tokens, errors }
    }

    /// 扫描单个 token
    fn scan_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia();

        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;

        let c = match self.advance() {
            Some(c) => c,
            None => return Ok(self.make_token(TokenKind::Eof, None)),
        };

        let token = match c {
            // 单字符分隔符
            '(' => self.make_token(TokenKind::LeftParen, None),
            ')' => self.make_token(TokenKind::RightParen, None),
            '{' => self.make_token(TokenKind::LeftBrace, None),
            '}' => self.make_token(TokenKind::RightBrace, None),
            '[' => self.make_token(TokenKind::LeftBracket, None),
            ']' => self.make_token(TokenKind::RightBracket, None),
            ',' => self.make_token(TokenKind::Comma, None),
            '.' => self.make_token(TokenKind::Dot, None),
            '-' => self.make_token(TokenKind::Minus, None),
            '+' => self.make_token(TokenKind::Plus, None),
            ';' => self.make_token(TokenKind::Semicolon, None),
            '*' => self.make_token(TokenKind::Star, None),
            '/' => self.make_token(TokenKind::Slash, None),

            // 一或两个字符的运算符，能组成两字符时总是取长的
            '!' => self.one_or_two('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.one_or_two('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.one_or_two('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.one_or_two('=', TokenKind::GreaterEqual, TokenKind::Greater),

            // 字符串
            '"' | '\'' => return self.scan_string(c),

            // 数字
            '0'..='9' => return self.scan_number(),

            // 标识符或关键字
            c if Self::is_identifier_start(c) => self.scan_identifier(),

            _ => return Err(self.error(LexErrorKind::UnexpectedCharacter(c))),
        };

        Ok(token)
    }

    /// 跳过空白、换行和 # 注释
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\r' | '\t' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.new_line();
                }
                '#' => self.skip_line_comment(),
                _ => break,
            }
        }
    }

    /// 跳过单行注释（不消费换行符）
    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// 下一个字符是 `second` 时组成两字符运算符
    fn one_or_two(&mut self, second: char, long: TokenKind, short: TokenKind) -> Token {
        if self.match_char(second) {
            self.make_token(long, None)
        } else {
            self.make_token(short, None)
        }
    }

    /// 扫描字符串，`quote` 是开头的引号，只有同种未转义的引号才能闭合
    fn scan_string(&mut self, quote: char) -> Result<Token, LexError> {
        let mut value = String::new();

        while let Some(c) = self.peek() {
            if c == quote {
                break;
            }
            self.advance();
            match c {
                '\n' => {
                    value.push(c);
                    self.new_line();
                }
                '\\' => {
                    let escaped = match self.advance() {
                        Some(escaped) => escaped,
                        None => return Err(self.error(LexErrorKind::UnterminatedString)),
                    };
                    match escaped {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        'r' => value.push('\r'),
                        '0' => value.push('\0'),
                        '\\' => value.push('\\'),
                        '"' => value.push('"'),
                        '\'' => value.push('\''),
                        other => {
                            value.push('\\');
                            value.push(other);
                            if other == '\n' {
                                self.new_line();
                            }
                        }
                    }
                }
                _ => value.push(c),
            }
        }

        if self.is_at_end() {
            return Err(self.error(LexErrorKind::UnterminatedString));
        }

        // 消费闭合的引号
        self.advance();

        Ok(self.make_token(TokenKind::String, Some(LiteralValue::String(value))))
    }

    /// 扫描数字：整数部分，以及后面紧跟数字时的一个小数部分
    fn scan_number(&mut self) -> Result<Token, LexError> {
        self.consume_digits();

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // 消费 '.'
            self.consume_digits();
        }

        // 词素只含数字和至多一个小数点，解析不会失败，
        // InvalidNumber 只作为错误分类保留
        let lexeme = self.lexeme();
        match lexeme.parse::<f64>() {
            Ok(value) => Ok(self.make_token(TokenKind::Number, Some(LiteralValue::Number(value)))),
            Err(_) => Err(self.error(LexErrorKind::InvalidNumber(lexeme))),
        }
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// 扫描标识符，再查关键字表决定类型
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(Self::is_identifier_continue) {
            self.advance();
        }

        let lexeme = self.lexeme();
        match keywords::lookup(&lexeme) {
            Some(kind) => self.make_token(kind, keywords::keyword_value(kind)),
            None => self.make_token(TokenKind::Identifier, Some(LiteralValue::String(lexeme))),
        }
    }

    /// 检查字符是否可以作为标识符开头
    fn is_identifier_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    /// 检查字符是否可以作为标识符的后续字符
    fn is_identifier_continue(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    /// 判断是否到达源码末尾
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// 前进一个字符并返回，已到末尾时返回 None
    fn advance(&mut self) -> Option<char> {
        let c = self.source.get(self.current).copied()?;
        self.current += 1;
        self.column += 1;
        Some(c)
    }

    /// 查看当前字符
    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    /// 查看下一个字符
    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    /// 如果当前字符匹配，则前进
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// 刚消费了换行符
    fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// 当前 token 的原始文本
    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    /// 创建 token
    fn make_token(&self, kind: TokenKind, value: Option<LiteralValue>) -> Token {
        let span = Span::new(self.start, self.current, self.start_line, self.start_column);
        Token::new(kind, self.lexeme(), value, span)
    }

    /// 创建位于当前 token 起点的错误
    fn error(&self, kind: LexErrorKind) -> LexError {
        let context = self.lines.context(self.start_line, CONTEXT_RADIUS);
        LexError::new(kind, self.start_line, self.start_column, context)
    }
}
