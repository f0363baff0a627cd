use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::table::{FloatLiteral, ValueRow};

use super::select::Select;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Insert {
    Values {
        table: String,
        columns: Vec<String>,
        values: Vec<Vec<FloatLiteral>>,
    },
    Select {
        table: String,
        columns: Vec<String>,
        select: Box<Select>,
    },
}

impl Insert {
    pub fn table(&self) -> &str {
        match self {
            Insert::Values { table, .. } | Insert::Select { table, .. } => table,
        }
    }

    pub fn columns(&self) -> &[String] {
        match self {
            Insert::Values { columns, .. } | Insert::Select { columns, .. } => columns,
        }
    }
}

impl Display for Insert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "INSERT INTO {} ({}) ",
            self.table(),
            self.columns().iter().join(", ")
        )?;
        match self {
            Insert::Values { values, .. } => {
                let rows = values.iter().map(|row| ValueRow(row)).join(", ");
                write!(f, "VALUES {rows}")
            }
            Insert::Select { select, .. } => write!(f, "{select}"),
        }
    }
}
