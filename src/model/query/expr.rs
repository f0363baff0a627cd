use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Expression subset needed by matrix queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// `name` or `table.name`
    Column {
        table: Option<String>,
        name: String,
    },
    /// `'text'`, with embedded quotes doubled
    Text(String),
    /// `left op right`, parenthesized only where precedence requires it
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
    /// `SUM(expr)`
    Sum(Box<Expr>),
    /// `count(*)`
    CountStar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Eq,
    Add,
    Mul,
}

impl BinaryOp {
    fn precedence(self) -> u8 {
        match self {
            Self::Eq => 1,
            Self::Add => 2,
            Self::Mul => 3,
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eq => write!(f, "="),
            Self::Add => write!(f, "+"),
            Self::Mul => write!(f, "*"),
        }
    }
}

impl Expr {
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column {
            table: None,
            name: name.into(),
        }
    }

    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn equals(left: Expr, right: Expr) -> Self {
        Self::Binary(Box::new(left), BinaryOp::Eq, Box::new(right))
    }

    pub fn product(left: Expr, right: Expr) -> Self {
        Self::Binary(Box::new(left), BinaryOp::Mul, Box::new(right))
    }

    pub fn sum(expr: Expr) -> Self {
        Self::Sum(Box::new(expr))
    }

    /// Left-folds `terms` with `+`. Returns `None` for an empty iterator.
    pub fn add_all(terms: impl IntoIterator<Item = Expr>) -> Option<Self> {
        terms
            .into_iter()
            .reduce(|acc, term| Self::Binary(Box::new(acc), BinaryOp::Add, Box::new(term)))
    }

    fn precedence(&self) -> u8 {
        match self {
            Self::Binary(_, op, _) => op.precedence(),
            _ => u8::MAX,
        }
    }

    fn fmt_operand(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        parent: BinaryOp,
        right: bool,
    ) -> std::fmt::Result {
        // a left-associative chain only needs parentheses on the right
        let needs_parens = self.precedence() < parent.precedence()
            || (right && self.precedence() == parent.precedence());
        if needs_parens {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Column { table: Some(table), name } => write!(f, "{table}.{name}"),
            Self::Column { table: None, name } => write!(f, "{name}"),
            Self::Text(text) => write!(f, "'{}'", text.replace('\'', "''")),
            Self::Binary(left, op, right) => {
                left.fmt_operand(f, *op, false)?;
                write!(f, " {op} ")?;
                right.fmt_operand(f, *op, true)
            }
            Self::Sum(expr) => write!(f, "SUM({expr})"),
            Self::CountStar => write!(f, "count(*)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_product_display() {
        let terms = (1..=3).map(|i| {
            Expr::product(
                Expr::qualified_column("a", format!("c{i}")),
                Expr::qualified_column("b", "c2"),
            )
        });
        let expr = Expr::sum(Expr::add_all(terms).unwrap());
        assert_eq!(
            expr.to_string(),
            "SUM(a.c1 * b.c2 + a.c2 * b.c2 + a.c3 * b.c2)"
        );
    }

    #[test]
    fn test_parenthesizes_by_precedence() {
        let sum = Expr::add_all([Expr::column("x"), Expr::column("y")]).unwrap();
        assert_eq!(
            Expr::product(sum.clone(), Expr::column("z")).to_string(),
            "(x + y) * z"
        );
        assert_eq!(
            Expr::product(Expr::column("z"), sum.clone()).to_string(),
            "z * (x + y)"
        );
        assert_eq!(
            Expr::equals(Expr::column("w"), sum).to_string(),
            "w = x + y"
        );
    }

    #[test]
    fn test_text_escapes_quotes() {
        assert_eq!(Expr::text("it's").to_string(), "'it''s'");
    }

    #[test]
    fn test_add_all_empty() {
        assert_eq!(Expr::add_all(std::iter::empty()), None);
    }
}
