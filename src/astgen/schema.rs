//! 节点模式
//!
//! 模式是表达式树形状的权威定义，可以在代码中构造，也可以从文本解析：
//! 每行一个节点，形如 `Binary : left: Expr, operator: Token, right: Expr`，
//! 空行和 `#` 开头的行会被忽略。

use std::collections::HashSet;

use super::error::SchemaError;

/// Rust 保留字，不能用作字段名
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

/// 生成代码里已经占用的类型名，不能用作节点名
const RESERVED_NODE_NAMES: &[&str] = &["Expr", "Visitor", "PrettyPrinter"];

/// 字段声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// 字段名
    pub name: String,
    /// 字段类型，`Expr` 表示子表达式
    pub ty: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self { name: name.into(), ty: ty.into() }
    }

    /// 是否是子表达式字段（生成时装箱）
    pub fn is_child(&self) -> bool {
        self.ty == "Expr"
    }
}

/// 节点声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    /// 节点名
    pub name: String,
    /// 按声明顺序排列的字段
    pub fields: Vec<FieldSpec>,
}

impl NodeSpec {
    pub fn new(name: impl Into<String>, fields: &[(&str, &str)]) -> Self {
        Self {
            name: name.into(),
            fields: fields.iter().map(|(name, ty)| FieldSpec::new(*name, *ty)).collect(),
        }
    }

    /// 解析一行节点声明
    pub fn parse(line: &str) -> Result<Self, SchemaError> {
        let (name, rest) = line
            .split_once(':')
            .ok_or_else(|| SchemaError::MalformedNode(line.trim().to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(SchemaError::MalformedNode(line.trim().to_string()));
        }

        let mut fields = Vec::new();
        if !rest.trim().is_empty() {
            for text in rest.split(',') {
                let malformed = || SchemaError::MalformedField {
                    node: name.to_string(),
                    text: text.trim().to_string(),
                };
                let (field, ty) = text.split_once(':').ok_or_else(malformed)?;
                let (field, ty) = (field.trim(), ty.trim());
                if field.is_empty() || ty.is_empty() {
                    return Err(malformed());
                }
                fields.push(FieldSpec::new(field, ty));
            }
        }

        Ok(Self { name: name.to_string(), fields })
    }

    /// 访问者方法名：`visit_` 加小写节点名
    pub fn visit_method(&self) -> String {
        format!("visit_{}", self.name.to_lowercase())
    }
}

/// 表达式树的参考模式
pub fn expression_schema() -> Vec<NodeSpec> {
    vec![
        NodeSpec::new("Binary", &[("left", "Expr"), ("operator", "Token"), ("right", "Expr")]),
        NodeSpec::new("Grouping", &[("expression", "Expr")]),
        NodeSpec::new("Literal", &[("value", "LiteralValue")]),
        NodeSpec::new("Unary", &[("operator", "Token"), ("right", "Expr")]),
    ]
}

/// 解析整份模式文本并校验
pub fn parse_schema(text: &str) -> Result<Vec<NodeSpec>, SchemaError> {
    let schema = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(NodeSpec::parse)
        .collect::<Result<Vec<_>, _>>()?;
    validate(&schema)?;
    Ok(schema)
}

/// 校验模式：非空、名字合法、字段类型非空、节点和字段都不重复
pub fn validate(schema: &[NodeSpec]) -> Result<(), SchemaError> {
    if schema.is_empty() {
        return Err(SchemaError::EmptySchema);
    }

    let mut methods = HashSet::new();
    for node in schema {
        if !is_identifier(&node.name) || RESERVED_NODE_NAMES.contains(&node.name.as_str()) {
            return Err(SchemaError::InvalidName(node.name.clone()));
        }
        if !methods.insert(node.visit_method()) {
            return Err(SchemaError::DuplicateNode(node.name.clone()));
        }

        let mut fields = HashSet::new();
        for field in &node.fields {
            if !is_identifier(&field.name) || RUST_KEYWORDS.contains(&field.name.as_str()) {
                return Err(SchemaError::InvalidName(field.name.clone()));
            }
            if field.ty.trim().is_empty() {
                return Err(SchemaError::MalformedField {
                    node: node.name.clone(),
                    text: format!("{}: {}", field.name, field.ty),
                });
            }
            if !fields.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    node: node.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
    }

    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node() {
        let node = NodeSpec::parse("Binary : left: Expr, operator: Token, right: Expr").unwrap();
        assert_eq!(node, expression_schema()[0]);
        assert_eq!(node.visit_method(), "visit_binary");
        assert!(node.fields[0].is_child());
        assert!(!node.fields[1].is_child());
    }

    #[test]
    fn test_parse_node_without_fields() {
        let node = NodeSpec::parse("Nothing :").unwrap();
        assert_eq!(node.name, "Nothing");
        assert!(node.fields.is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            NodeSpec::parse("Binary left Expr"),
            Err(SchemaError::MalformedNode("Binary left Expr".to_string()))
        );
        assert_eq!(
            NodeSpec::parse("Unary : operator Token"),
            Err(SchemaError::MalformedField {
                node: "Unary".to_string(),
                text: "operator Token".to_string(),
            })
        );
        assert!(matches!(NodeSpec::parse("Unary : right: "), Err(SchemaError::MalformedField { .. })));
    }

    #[test]
    fn test_parse_schema_skips_comments() {
        let text = "# expression nodes\n\nBinary : left: Expr, operator: Token, right: Expr\n\
                    Grouping : expression: Expr\n  Literal : value: LiteralValue\n\
                    Unary : operator: Token, right: Expr\n";
        assert_eq!(parse_schema(text).unwrap(), expression_schema());
    }

    #[test]
    fn test_reference_schema_is_valid() {
        assert_eq!(validate(&expression_schema()), Ok(()));
    }

    #[test]
    fn test_validate_rejects() {
        assert_eq!(validate(&[]), Err(SchemaError::EmptySchema));

        let duplicate_field = [NodeSpec::new("Pair", &[("left", "Expr"), ("left", "Expr")])];
        assert_eq!(
            validate(&duplicate_field),
            Err(SchemaError::DuplicateField { node: "Pair".to_string(), field: "left".to_string() })
        );

        let duplicate_node = [NodeSpec::new("Unary", &[]), NodeSpec::new("UNARY", &[])];
        assert_eq!(validate(&duplicate_node), Err(SchemaError::DuplicateNode("UNARY".to_string())));

        let bad_name = [NodeSpec::new("9Lives", &[])];
        assert_eq!(validate(&bad_name), Err(SchemaError::InvalidName("9Lives".to_string())));

        let keyword_field = [NodeSpec::new("Cast", &[("type", "Token")])];
        assert_eq!(validate(&keyword_field), Err(SchemaError::InvalidName("type".to_string())));

        let untyped = [NodeSpec::new("Cast", &[("value", "Expr"), ("target", "  ")])];
        assert_eq!(
            validate(&untyped),
            Err(SchemaError::MalformedField { node: "Cast".to_string(), text: "target:   ".to_string() })
        );
        assert!(validate(&[NodeSpec::new("Leaf", &[("a", "")])]).is_err());

        let reserved = [NodeSpec::new("Expr", &[])];
        assert_eq!(validate(&reserved), Err(SchemaError::InvalidName("Expr".to_string())));
    }
}
