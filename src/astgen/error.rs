//! AST 模式错误定义

use std::fmt;

use crate::i18n::{format_message, get_message, messages, Locale};

/// AST 模式错误
///
/// 属于配置错误，发现后立即报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// 模式中没有任何节点
    EmptySchema,
    /// 节点名或字段名不是合法标识符
    InvalidName(String),
    /// 节点重复声明（访问方法名相同也算重复）
    DuplicateNode(String),
    /// 同一节点内字段重复
    DuplicateField { node: String, field: String },
    /// 字段声明不是 `name: Type`
    MalformedField { node: String, text: String },
    /// 节点声明不是 `Name : fields`
    MalformedNode(String),
}

impl SchemaError {
    /// 本地化的错误描述
    pub fn message(&self, locale: Locale) -> String {
        match self {
            SchemaError::EmptySchema => get_message(messages::ERR_SCHEMA_EMPTY, locale).to_string(),
            SchemaError::InvalidName(name) => {
                format_message(messages::ERR_SCHEMA_INVALID_NAME, locale, &[name])
            }
            SchemaError::DuplicateNode(name) => {
                format_message(messages::ERR_SCHEMA_DUPLICATE_NODE, locale, &[name])
            }
            SchemaError::DuplicateField { node, field } => {
                format_message(messages::ERR_SCHEMA_DUPLICATE_FIELD, locale, &[node, field])
            }
            SchemaError::MalformedField { node, text } => {
                format_message(messages::ERR_SCHEMA_MALFORMED_FIELD, locale, &[node, text])
            }
            SchemaError::MalformedNode(line) => {
                format_message(messages::ERR_SCHEMA_MALFORMED_NODE, locale, &[line])
            }
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message(Locale::default()))
    }
}

impl std::error::Error for SchemaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let error = SchemaError::DuplicateField { node: "Binary".to_string(), field: "left".to_string() };
        assert_eq!(error.to_string(), "Node 'Binary' declares field 'left' more than once");
        assert_eq!(error.message(Locale::Zh), "节点 'Binary' 重复声明字段 'left'");
        assert_eq!(SchemaError::EmptySchema.to_string(), "AST schema declares no nodes");
    }
}
