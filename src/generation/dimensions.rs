use tracing::{instrument, Level};

use super::SqlGenerator;
use crate::connection::{Connection, Dialect};
use crate::matrix::Dimensions;
use crate::model::query::{Expr, Select, SelectTable};
use crate::{Error, Result};

/// Returns true if a matrix of shape `a` can be multiplied by one of shape `b`.
pub fn validate_multiplication(a: Dimensions, b: Dimensions) -> bool {
    a.can_multiply(&b)
}

/// [`SqlGenerator::dimensions`] with the default profile.
pub fn get_dimensions<C: Connection + ?Sized>(conn: &C, table_name: &str) -> Result<Dimensions> {
    SqlGenerator::default().dimensions(conn, table_name)
}

impl SqlGenerator {
    /// Column count of `table_name` according to the schema catalog.
    pub fn column_count_sql(&self, dialect: Dialect, table_name: &str) -> String {
        let select = match dialect {
            Dialect::Postgres => Select::count(
                SelectTable::Table("information_schema.columns".to_string(), None),
                Some(Expr::equals(
                    Expr::column("table_name"),
                    Expr::text(table_name),
                )),
            ),
            Dialect::Sqlite => Select::count(
                SelectTable::Function("pragma_table_info".to_string(), vec![Expr::text(table_name)]),
                None,
            ),
        };
        select.to_string()
    }

    pub fn row_count_sql(&self, table_name: &str) -> String {
        Select::count(SelectTable::Table(self.identifier(table_name), None), None).to_string()
    }

    /// Reads the live shape of `table_name`: columns from the schema catalog,
    /// rows from `count(*)`.
    ///
    /// These are two separate round trips with no atomicity between them. A
    /// concurrent writer can change the table in between and produce a pair
    /// that never existed at any single point in time; run inside a
    /// transaction with suitable isolation if that matters.
    ///
    /// The catalog reports zero columns for a table that does not exist, but
    /// the row count then fails and the error is returned as
    /// [`Error::QueryExecutionFailure`].
    #[instrument(skip(self, conn), level = Level::DEBUG)]
    pub fn dimensions<C: Connection + ?Sized>(
        &self,
        conn: &C,
        table_name: &str,
    ) -> Result<Dimensions> {
        let cols_sql = self.column_count_sql(conn.dialect(), table_name);
        let cols = count_to_usize(conn.query_count(&cols_sql)?, &cols_sql)?;

        let rows_sql = self.row_count_sql(table_name);
        let rows = count_to_usize(conn.query_count(&rows_sql)?, &rows_sql)?;

        let dimensions = Dimensions::new(rows, cols);
        tracing::debug!(%dimensions, "looked up dimensions");
        Ok(dimensions)
    }
}

fn count_to_usize(count: i64, sql: &str) -> Result<usize> {
    usize::try_from(count)
        .map_err(|_| Error::ConversionFailure(format!("`{sql}` returned count {count}")))
}
