//! 词法错误定义
//! 
//! 词法错误以值的形式返回，携带行列号和附近源码，供调用方渲染诊断信息

use std::borrow::Cow;
use std::fmt;

use crate::config::CONTEXT_WIDTH;
use crate::i18n::{format_message, get_message, messages, Locale};

/// 词法错误种类
#[derive(Debug, Clone, PartialEq)]
pub enum LexErrorKind {
    /// 字面量之外无法识别的字符
    UnexpectedCharacter(char),
    /// 字符串在闭合引号之前到达输入末尾
    UnterminatedString,
    /// 注释未闭合（目前注释以行结束，保留给块注释）
    UnterminatedComment,
    /// 数字文本无法解析
    InvalidNumber(String),
}

/// 词法错误
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    /// 错误种类
    pub kind: LexErrorKind,
    /// 行号（从1开始）
    pub line: usize,
    /// 列号（从1开始）
    pub column: usize,
    /// 错误行附近的源码
    pub context: String,
}

impl LexError {
    /// 创建新的词法错误
    pub fn new(kind: LexErrorKind, line: usize, column: usize, context: String) -> Self {
        Self { kind, line, column, context }
    }

    /// 本地化的错误描述
    pub fn message(&self, locale: Locale) -> String {
        match &self.kind {
            LexErrorKind::UnexpectedCharacter(c) => format_message(
                messages::ERR_LEX_UNEXPECTED_CHARACTER,
                locale,
                &[&c.to_string(), &format!("{:04X}", *c as u32)],
            ),
            LexErrorKind::UnterminatedString => {
                get_message(messages::ERR_LEX_UNTERMINATED_STRING, locale).to_string()
            }
            LexErrorKind::UnterminatedComment => {
                get_message(messages::ERR_LEX_UNTERMINATED_COMMENT, locale).to_string()
            }
            LexErrorKind::InvalidNumber(text) => {
                format_message(messages::ERR_LEX_INVALID_NUMBER, locale, &[text])
            }
        }
    }

    /// 带位置前缀的本地化描述
    pub fn headline(&self, locale: Locale) -> String {
        format_message(
            messages::ERR_LEX_AT,
            locale,
            &[&self.line.to_string(), &self.column.to_string(), &self.message(locale)],
        )
    }

    /// 完整诊断：描述加上下文窗口
    pub fn render(&self, locale: Locale) -> String {
        if self.context.is_empty() {
            self.headline(locale)
        } else {
            format!("{}\n{}", self.headline(locale), self.context)
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headline(Locale::default()))
    }
}

impl std::error::Error for LexError {}

/// 源码行索引，构造一次后按行号截取上下文
#[derive(Debug, Clone)]
pub struct SourceLines {
    text: String,
    /// 每行起始的字节偏移
    starts: Vec<usize>,
}

impl SourceLines {
    pub fn new(text: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            text.match_indices('\n')
                .map(|(index, _)| index + 1)
                .filter(|&start| start < text.len()),
        );
        Self { text: text.to_string(), starts }
    }

    /// 行数，末尾换行之后不算新行
    pub fn len(&self) -> usize {
        if self.text.is_empty() { 0 } else { self.starts.len() }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 第 `number` 行（从1开始），不含行尾换行
    pub fn line(&self, number: usize) -> Option<&str> {
        if number == 0 || number > self.len() {
            return None;
        }
        let start = self.starts[number - 1];
        let end = self.starts.get(number).map_or(self.text.len(), |next| next - 1);
        let text = &self.text[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// 截取第 `line` 行前后各 `radius` 行，错误行用 `>` 标记，
    /// 每行最多保留 `CONTEXT_WIDTH` 个字符
    pub fn context(&self, line: usize, radius: usize) -> String {
        let first = line.saturating_sub(radius).max(1);
        let last = line + radius;
        let width = last.to_string().len();

        (first..=last.min(self.len()))
            .filter_map(|number| self.line(number).map(|text| (number, text)))
            .map(|(number, text)| {
                let marker = if number == line { '>' } else { ' ' };
                format!("{} {:>width$} | {}", marker, number, clip(text), width = width)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 超过 `CONTEXT_WIDTH` 个字符的行截断并加 `...`
fn clip(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(CONTEXT_WIDTH) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// 截取错误行前后各 `radius` 行源码，错误行用 `>` 标记
pub fn context_window(source: &str, line: usize, radius: usize) -> String {
    SourceLines::new(source).context(line, radius)
}
