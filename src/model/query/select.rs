use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::expr::Expr;

/// `SELECT` result column
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ResultColumn {
    /// expression
    Expr(Expr),
    /// expression with alias: expr AS name
    ExprAs(Expr, String),
}

impl Display for ResultColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultColumn::Expr(expr) => write!(f, "{expr}"),
            ResultColumn::ExprAs(expr, alias) => write!(f, "{expr} AS {alias}"),
        }
    }
}

/// One entry of a comma-separated `FROM` list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SelectTable {
    /// table name with optional alias
    Table(String, Option<String>),
    /// table-valued function such as `pragma_table_info('m')`
    Function(String, Vec<Expr>),
}

impl Display for SelectTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectTable::Table(name, Some(alias)) => write!(f, "{name} AS {alias}"),
            SelectTable::Table(name, None) => write!(f, "{name}"),
            SelectTable::Function(name, args) => write!(f, "{name}({})", args.iter().join(", ")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub columns: Vec<ResultColumn>,
    pub from: Vec<SelectTable>,
    pub where_clause: Option<Expr>,
    pub group_by: Vec<Expr>,
}

impl Select {
    /// `SELECT count(*) FROM {from} [WHERE {where_clause}]`
    pub fn count(from: SelectTable, where_clause: Option<Expr>) -> Self {
        Self {
            columns: vec![ResultColumn::Expr(Expr::CountStar)],
            from: vec![from],
            where_clause,
            group_by: Vec::new(),
        }
    }
}

impl Display for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SELECT {}", self.columns.iter().join(", "))?;
        if !self.from.is_empty() {
            write!(f, " FROM {}", self.from.iter().join(", "))?;
        }
        if let Some(where_clause) = &self.where_clause {
            write!(f, " WHERE {where_clause}")?;
        }
        if !self.group_by.is_empty() {
            write!(f, " GROUP BY {}", self.group_by.iter().join(", "))?;
        }
        Ok(())
    }
}
