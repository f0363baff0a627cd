//! The database capability every live operation is handed.
//!
//! The connection is owned by the caller. Nothing in this crate stores,
//! clones or closes it; each operation borrows it for the duration of the call.

use serde::{Deserialize, Serialize};

use crate::Result;

/// SQL dialect of the database behind a [`Connection`].
///
/// Only the schema-catalog query differs between dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dialect {
    #[default]
    Postgres,
    Sqlite,
}

/// A database connection able to run the statements this crate generates.
///
/// Implementations must report driver failures as
/// [`Error::QueryExecutionFailure`](crate::Error::QueryExecutionFailure) with the
/// driver error attached.
pub trait Connection {
    fn dialect(&self) -> Dialect;

    /// Run a query returning exactly one row with one integer column.
    fn query_count(&self, sql: &str) -> Result<i64>;

    /// Execute one or more `;`-terminated statements.
    fn execute_batch(&self, sql: &str) -> Result<()>;
}

impl<C: Connection + ?Sized> Connection for &C {
    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }

    fn query_count(&self, sql: &str) -> Result<i64> {
        (**self).query_count(sql)
    }

    fn execute_batch(&self, sql: &str) -> Result<()> {
        (**self).execute_batch(sql)
    }
}

#[cfg(feature = "sqlite")]
impl Connection for rusqlite::Connection {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn query_count(&self, sql: &str) -> Result<i64> {
        self.query_row(sql, [], |row| row.get::<_, i64>(0))
            .map_err(|e| crate::Error::query(sql, e))
    }

    fn execute_batch(&self, sql: &str) -> Result<()> {
        rusqlite::Connection::execute_batch(self, sql).map_err(|e| crate::Error::query(sql, e))
    }
}
