//! AST 打印器
//! 
//! 把表达式树渲染成带括号的前缀形式，例如 `(* (- 123) (group 45.67))`

use super::expr::{Binary, Expr, Grouping, Literal, Unary, Visitor};
use crate::lexer::LiteralValue;

/// AST 打印器
#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    /// 创建新的打印器
    pub fn new() -> Self {
        Self
    }

    /// 打印整棵表达式树
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = String::new();
        out.push('(');
        out.push_str(name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out.push(')');
        out
    }
}

impl Visitor for AstPrinter {
    type Output = String;

    fn visit_binary(&mut self, expr: &Binary) -> String {
        self.parenthesize(&expr.operator.lexeme, &[expr.left.as_ref(), expr.right.as_ref()])
    }

    fn visit_grouping(&mut self, expr: &Grouping) -> String {
        self.parenthesize("group", &[expr.expression.as_ref()])
    }

    fn visit_literal(&mut self, expr: &Literal) -> String {
        match &expr.value {
            // 字符串加引号，与同名标识符区分
            LiteralValue::String(s) => format!("{:?}", s),
            other => other.to_string(),
        }
    }

    fn visit_unary(&mut self, expr: &Unary) -> String {
        self.parenthesize(&expr.operator.lexeme, &[expr.right.as_ref()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{scan, Span, Token, TokenKind};

    fn op(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme.to_string(), None, Span::default())
    }

    #[test]
    fn test_print_nested() {
        let tree = Expr::binary(
            Expr::unary(op(TokenKind::Minus, "-"), Expr::literal(LiteralValue::Number(123.0))),
            op(TokenKind::Star, "*"),
            Expr::grouping(Expr::literal(LiteralValue::Number(45.67))),
        );
        assert_eq!(AstPrinter::new().print(&tree), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn test_print_literals() {
        let mut printer = AstPrinter::new();
        assert_eq!(printer.print(&Expr::literal(LiteralValue::String("hi".into()))), "\"hi\"");
        assert_eq!(printer.print(&Expr::literal(LiteralValue::Bool(false))), "false");
        assert_eq!(printer.print(&Expr::literal(LiteralValue::Null)), "null");
        assert_eq!(printer.print(&Expr::literal(LiteralValue::Number(2.5))), "2.5");
    }

    #[test]
    fn test_print_from_scanned_tokens() {
        // 手工用扫描结果拼出 `!(a == "b")`
        let tokens = scan("! a == \"b\"").unwrap();
        let equality = Expr::binary(
            Expr::literal(tokens[1].value.clone().unwrap()),
            tokens[2].clone(),
            Expr::literal(tokens[3].value.clone().unwrap()),
        );
        let tree = Expr::unary(tokens[0].clone(), Expr::grouping(equality));
        assert_eq!(AstPrinter::new().print(&tree), "(! (group (== \"a\" \"b\")))");
    }
}
