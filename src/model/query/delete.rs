use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// `DELETE FROM table`, clearing every row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delete {
    pub table: String,
}

impl Delete {
    pub fn all(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl Display for Delete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DELETE FROM {}", self.table)
    }
}
