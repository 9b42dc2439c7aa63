//! 源码生成
//!
//! 纯函数：同一份模式总是生成逐字节相同的源码，写文件由调用方负责。

use std::collections::BTreeSet;

use super::error::SchemaError;
use super::schema::{validate, FieldSpec, NodeSpec};

/// 词法模块中可以被字段引用的类型
const LEXER_TYPES: &[&str] = &["LiteralValue", "Span", "Token", "TokenKind"];

/// 生成表达式节点、访问者协议和打印器骨架的源码
pub fn generate(schema: &[NodeSpec]) -> Result<String, SchemaError> {
    validate(schema)?;

    let mut output = String::new();
    emit_header(schema, &mut output);
    emit_expr_enum(schema, &mut output);
    for node in schema {
        emit_node(node, &mut output);
    }
    emit_visitor(schema, &mut output);
    emit_accept(schema, &mut output);
    emit_printer(schema, &mut output);
    Ok(output)
}

fn emit_header(schema: &[NodeSpec], output: &mut String) {
    output.push_str("// Generated by `typhoon generate-ast`. Do not edit by hand.\n");
    output.push('\n');
    output.push_str("use std::fmt;\n");

    let imports: BTreeSet<&str> = schema
        .iter()
        .flat_map(|node| node.fields.iter())
        .map(|field| field.ty.as_str())
        .filter(|ty| LEXER_TYPES.contains(ty))
        .collect();
    if !imports.is_empty() {
        output.push('\n');
        output.push_str("use crate::lexer::{");
        output.push_str(&imports.into_iter().collect::<Vec<_>>().join(", "));
        output.push_str("};\n");
    }
}

fn emit_expr_enum(schema: &[NodeSpec], output: &mut String) {
    output.push('\n');
    output.push_str("pub enum Expr {\n");
    for node in schema {
        output.push_str(&format!("    {}({}),\n", node.name, node.name));
    }
    output.push_str("}\n");

    output.push('\n');
    output.push_str("impl fmt::Debug for Expr {\n");
    output.push_str("    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {\n");
    output.push_str("        match self {\n");
    for node in schema {
        output.push_str(&format!(
            "            Expr::{}(node) => fmt::Debug::fmt(node, f),\n",
            node.name
        ));
    }
    output.push_str("        }\n");
    output.push_str("    }\n");
    output.push_str("}\n");
}

fn field_type(field: &FieldSpec) -> String {
    if field.is_child() {
        "Box<Expr>".to_string()
    } else {
        field.ty.clone()
    }
}

fn emit_node(node: &NodeSpec, output: &mut String) {
    // 结构体
    output.push('\n');
    if node.fields.is_empty() {
        output.push_str(&format!("pub struct {} {{}}\n", node.name));
    } else {
        output.push_str(&format!("pub struct {} {{\n", node.name));
        for field in &node.fields {
            output.push_str(&format!("    pub {}: {},\n", field.name, field_type(field)));
        }
        output.push_str("}\n");
    }

    // 按位置赋值的构造函数
    let params: Vec<String> = node
        .fields
        .iter()
        .map(|field| format!("{}: {}", field.name, field.ty))
        .collect();
    output.push('\n');
    output.push_str(&format!("impl {} {{\n", node.name));
    output.push_str(&format!("    pub fn new({}) -> Self {{\n", params.join(", ")));
    if node.fields.is_empty() {
        output.push_str("        Self {}\n");
    } else {
        output.push_str("        Self {\n");
        for field in &node.fields {
            if field.is_child() {
                output.push_str(&format!("            {}: Box::new({}),\n", field.name, field.name));
            } else {
                output.push_str(&format!("            {},\n", field.name));
            }
        }
        output.push_str("        }\n");
    }
    output.push_str("    }\n");
    output.push_str("}\n");

    // 按声明顺序列出字段值
    output.push('\n');
    output.push_str(&format!("impl fmt::Debug for {} {{\n", node.name));
    output.push_str("    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {\n");
    output.push_str(&format!("        f.debug_tuple(\"{}\")\n", node.name));
    for field in &node.fields {
        output.push_str(&format!("            .field(&self.{})\n", field.name));
    }
    output.push_str("            .finish()\n");
    output.push_str("    }\n");
    output.push_str("}\n");
}

fn emit_visitor(schema: &[NodeSpec], output: &mut String) {
    output.push('\n');
    output.push_str("pub trait Visitor {\n");
    output.push_str("    type Output;\n");
    output.push('\n');
    for node in schema {
        output.push_str(&format!(
            "    fn {}(&mut self, expr: &{}) -> Self::Output;\n",
            node.visit_method(),
            node.name
        ));
    }
    output.push_str("}\n");
}

fn emit_accept(schema: &[NodeSpec], output: &mut String) {
    output.push('\n');
    output.push_str("impl Expr {\n");
    output.push_str("    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {\n");
    output.push_str("        match self {\n");
    for node in schema {
        output.push_str(&format!(
            "            Expr::{}(expr) => visitor.{}(expr),\n",
            node.name,
            node.visit_method()
        ));
    }
    output.push_str("        }\n");
    output.push_str("    }\n");
    output.push_str("}\n");
}

fn emit_printer(schema: &[NodeSpec], output: &mut String) {
    output.push('\n');
    output.push_str("pub struct PrettyPrinter;\n");
    output.push('\n');
    output.push_str("impl Visitor for PrettyPrinter {\n");
    output.push_str("    type Output = String;\n");
    for node in schema {
        let method = node.visit_method();
        output.push('\n');
        output.push_str(&format!(
            "    fn {}(&mut self, _expr: &{}) -> String {{\n",
            method, node.name
        ));
        output.push_str(&format!("        unimplemented!(\"{}\")\n", method));
        output.push_str("    }\n");
    }
    output.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astgen::expression_schema;

    fn reference() -> String {
        generate(&expression_schema()).unwrap()
    }

    /// 返回 `needle` 在 `haystack` 中 `from` 之后的位置
    fn position(haystack: &str, needle: &str, from: usize) -> usize {
        from + haystack[from..].find(needle).unwrap_or_else(|| panic!("missing {:?}", needle))
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(reference(), reference());
    }

    #[test]
    fn test_generate_imports_used_lexer_types() {
        let source = reference();
        assert!(source.starts_with("// Generated by `typhoon generate-ast`. Do not edit by hand.\n"));
        assert!(source.contains("use crate::lexer::{LiteralValue, Token};\n"));

        let plain = generate(&[NodeSpec::new("Leaf", &[("count", "usize")])]).unwrap();
        assert!(!plain.contains("use crate::lexer"));
    }

    #[test]
    fn test_generate_struct_fields_in_order() {
        let source = reference();
        assert!(source.contains(
            "pub struct Binary {\n    pub left: Box<Expr>,\n    pub operator: Token,\n    pub right: Box<Expr>,\n}\n"
        ));
        assert!(source.contains("pub struct Literal {\n    pub value: LiteralValue,\n}\n"));
    }

    #[test]
    fn test_generate_constructor_order() {
        let source = reference();
        assert!(source.contains("    pub fn new(left: Expr, operator: Token, right: Expr) -> Self {\n"));

        let body = position(&source, "impl Binary {", 0);
        let left = position(&source, "left: Box::new(left),", body);
        let operator = position(&source, "operator,", body);
        let right = position(&source, "right: Box::new(right),", body);
        assert!(left < operator && operator < right);
    }

    #[test]
    fn test_generate_debug_order() {
        let source = reference();
        let start = position(&source, "impl fmt::Debug for Unary {", 0);
        let name = position(&source, "f.debug_tuple(\"Unary\")", start);
        let operator = position(&source, ".field(&self.operator)", start);
        let right = position(&source, ".field(&self.right)", start);
        let finish = position(&source, ".finish()", start);
        assert!(name < operator && operator < right && right < finish);
    }

    #[test]
    fn test_generate_visitor_and_dispatch() {
        let source = reference();
        for node in expression_schema() {
            let method = node.visit_method();
            assert!(source.contains(&format!(
                "    fn {}(&mut self, expr: &{}) -> Self::Output;\n",
                method, node.name
            )));
            assert!(source.contains(&format!(
                "            Expr::{}(expr) => visitor.{}(expr),\n",
                node.name, method
            )));
            assert!(source.contains(&format!("        unimplemented!(\"{}\")\n", method)));
        }
        assert!(source.contains("impl Visitor for PrettyPrinter {\n"));
    }

    #[test]
    fn test_generate_node_without_fields() {
        let source = generate(&[NodeSpec::new("Nothing", &[])]).unwrap();
        assert!(source.contains("pub struct Nothing {}\n"));
        assert!(source.contains("    pub fn new() -> Self {\n        Self {}\n    }\n"));
        assert!(source.contains("        f.debug_tuple(\"Nothing\")\n            .finish()\n"));
    }

    #[test]
    fn test_generate_rejects_invalid_schema() {
        let schema = [NodeSpec::new("Pair", &[("left", "Expr"), ("left", "Token")])];
        assert!(matches!(generate(&schema), Err(SchemaError::DuplicateField { .. })));
        assert_eq!(generate(&[]), Err(SchemaError::EmptySchema));

        let untyped = [NodeSpec::new("X", &[("a", "")])];
        assert!(matches!(generate(&untyped), Err(SchemaError::MalformedField { .. })));
    }
}
