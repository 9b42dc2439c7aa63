//! 表达式节点定义
//! 
//! 节点集合是封闭的：新增一种表达式时，`Expr::accept` 的 match
//! 和每个 `Visitor` 实现都必须同步更新，否则无法通过编译。

use std::fmt;

use crate::lexer::{LiteralValue, Token};

/// 表达式节点
///
/// 每个非叶子节点独占自己的子节点，树中没有共享和回指
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// 二元表达式 `left op right`
    Binary(Binary),
    /// 括号分组 `(expr)`
    Grouping(Grouping),
    /// 字面量
    Literal(Literal),
    /// 一元表达式 `op right`
    Unary(Unary),
}

/// 二元表达式
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// 括号分组
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    pub expression: Box<Expr>,
}

/// 字面量，值域与 `Token::value` 相同
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
}

/// 一元表达式
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Binary {
    pub fn new(left: Expr, operator: Token, right: Expr) -> Self {
        Self { left: Box::new(left), operator, right: Box::new(right) }
    }
}

impl Grouping {
    pub fn new(expression: Expr) -> Self {
        Self { expression: Box::new(expression) }
    }
}

impl Literal {
    pub fn new(value: LiteralValue) -> Self {
        Self { value }
    }
}

impl Unary {
    pub fn new(operator: Token, right: Expr) -> Self {
        Self { operator, right: Box::new(right) }
    }
}

/// 访问者协议：每种表达式对应一个方法
pub trait Visitor {
    /// 访问结果类型
    type Output;

    fn visit_binary(&mut self, expr: &Binary) -> Self::Output;
    fn visit_grouping(&mut self, expr: &Grouping) -> Self::Output;
    fn visit_literal(&mut self, expr: &Literal) -> Self::Output;
    fn visit_unary(&mut self, expr: &Unary) -> Self::Output;
}

impl Expr {
    /// 双分派：调用与自身种类对应的访问方法，并把节点本身传给它
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Binary(expr) => visitor.visit_binary(expr),
            Expr::Grouping(expr) => visitor.visit_grouping(expr),
            Expr::Literal(expr) => visitor.visit_literal(expr),
            Expr::Unary(expr) => visitor.visit_unary(expr),
        }
    }

    /// 创建二元表达式
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary(Binary::new(left, operator, right))
    }

    /// 创建括号分组
    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping(Grouping::new(expression))
    }

    /// 创建字面量
    pub fn literal(value: LiteralValue) -> Self {
        Expr::Literal(Literal::new(value))
    }

    /// 创建一元表达式
    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary(Unary::new(operator, right))
    }
}

impl From<Binary> for Expr {
    fn from(expr: Binary) -> Self {
        Expr::Binary(expr)
    }
}

impl From<Grouping> for Expr {
    fn from(expr: Grouping) -> Self {
        Expr::Grouping(expr)
    }
}

impl From<Literal> for Expr {
    fn from(expr: Literal) -> Self {
        Expr::Literal(expr)
    }
}

impl From<Unary> for Expr {
    fn from(expr: Unary) -> Self {
        Expr::Unary(expr)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.accept(&mut super::AstPrinter::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Span, TokenKind};

    fn op(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme.to_string(), None, Span::default())
    }

    fn number(n: f64) -> Expr {
        Expr::literal(LiteralValue::Number(n))
    }

    /// 记录被调用的方法和收到的节点地址
    #[derive(Default)]
    struct Recorder {
        calls: Vec<(&'static str, usize)>,
    }

    impl Visitor for Recorder {
        type Output = &'static str;

        fn visit_binary(&mut self, expr: &Binary) -> Self::Output {
            self.calls.push(("binary", expr as *const Binary as usize));
            "binary"
        }

        fn visit_grouping(&mut self, expr: &Grouping) -> Self::Output {
            self.calls.push(("grouping", expr as *const Grouping as usize));
            "grouping"
        }

        fn visit_literal(&mut self, expr: &Literal) -> Self::Output {
            self.calls.push(("literal", expr as *const Literal as usize));
            "literal"
        }

        fn visit_unary(&mut self, expr: &Unary) -> Self::Output {
            self.calls.push(("unary", expr as *const Unary as usize));
            "unary"
        }
    }

    #[test]
    fn test_accept_dispatches_by_variant() {
        let nodes = vec![
            Expr::binary(number(1.0), op(TokenKind::Plus, "+"), number(2.0)),
            Expr::grouping(number(3.0)),
            number(4.0),
            Expr::unary(op(TokenKind::Minus, "-"), number(5.0)),
        ];

        let mut recorder = Recorder::default();
        let results: Vec<_> = nodes.iter().map(|node| node.accept(&mut recorder)).collect();
        assert_eq!(results, vec!["binary", "grouping", "literal", "unary"]);

        for (node, (name, address)) in nodes.iter().zip(&recorder.calls) {
            let expected = match node {
                Expr::Binary(inner) => inner as *const Binary as usize,
                Expr::Grouping(inner) => inner as *const Grouping as usize,
                Expr::Literal(inner) => inner as *const Literal as usize,
                Expr::Unary(inner) => inner as *const Unary as usize,
            };
            assert_eq!(*address, expected, "{} got a different node", name);
        }
    }

    #[test]
    fn test_accept_does_not_descend() {
        let tree = Expr::binary(
            Expr::grouping(number(1.0)),
            op(TokenKind::Star, "*"),
            number(2.0),
        );
        let mut recorder = Recorder::default();
        tree.accept(&mut recorder);
        tree.accept(&mut recorder);
        assert_eq!(recorder.calls.len(), 2);
        assert!(recorder.calls.iter().all(|(name, _)| *name == "binary"));
    }

    #[test]
    fn test_constructors_keep_field_order() {
        let binary = Binary::new(number(1.0), op(TokenKind::Minus, "-"), number(2.0));
        assert_eq!(*binary.left, number(1.0));
        assert_eq!(binary.operator.kind, TokenKind::Minus);
        assert_eq!(*binary.right, number(2.0));

        let debug = format!("{:?}", Expr::from(Grouping::new(number(7.0))));
        assert_eq!(debug, "Grouping(Grouping { expression: Literal(Literal { value: Number(7.0) }) })");
    }

    #[test]
    fn test_display_uses_printer() {
        let tree = Expr::unary(op(TokenKind::Bang, "!"), Expr::literal(LiteralValue::Bool(true)));
        assert_eq!(tree.to_string(), "(! true)");
    }

    #[test]
    fn test_trees_are_shareable_across_threads() {
        let tree = Expr::binary(number(1.0), op(TokenKind::Plus, "+"), Expr::grouping(number(2.0)));
        let printed: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| crate::ast::AstPrinter::new().print(&tree)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(printed.iter().all(|p| p == "(+ 1 (group 2))"));
    }
}
