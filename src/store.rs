//! Generate-and-execute helpers.
//!
//! Each helper borrows the caller's connection for one call. Statements run in
//! order through [`Connection::execute_batch`]; a failure stops at the
//! failing statement and nothing already executed is rolled back, so wrap the
//! call in a transaction when that matters.

use tracing::{instrument, Level};

use crate::connection::Connection;
use crate::generation::SqlGenerator;
use crate::matrix::Matrix;
use crate::Result;

impl SqlGenerator {
    /// Creates `name` and fills it with `rows`.
    #[instrument(skip(self, conn, rows), level = Level::DEBUG)]
    pub fn store_matrix<C: Connection + ?Sized>(
        &self,
        conn: &C,
        name: &str,
        rows: &[Vec<f64>],
    ) -> Result<Matrix> {
        let matrix = Matrix::from_rows(name, rows)?;
        let create = self.create_table_sql(name, matrix.cols())?;
        let replace = self.replace_data_sql(name, rows)?;
        conn.execute_batch(&create)?;
        conn.execute_batch(&replace)?;
        tracing::debug!(%matrix, "stored matrix");
        Ok(matrix)
    }

    /// Replaces every row of the existing table `name` with `rows`.
    #[instrument(skip(self, conn, rows), level = Level::DEBUG)]
    pub fn replace_matrix<C: Connection + ?Sized>(
        &self,
        conn: &C,
        name: &str,
        rows: &[Vec<f64>],
    ) -> Result<Matrix> {
        let matrix = Matrix::from_rows(name, rows)?;
        conn.execute_batch(&self.replace_data_sql(name, rows)?)?;
        Ok(matrix)
    }

    /// Descriptor of the existing table `name`, read from the database.
    pub fn describe<C: Connection + ?Sized>(&self, conn: &C, name: &str) -> Result<Matrix> {
        Ok(Matrix::new(name, self.dimensions(conn, name)?))
    }

    /// Multiplies the stored matrices `a` and `b` into a new table `c`.
    ///
    /// Operand shapes are read from the database first. Returns the live
    /// descriptor of `c` after the insert.
    #[instrument(skip(self, conn), level = Level::DEBUG)]
    pub fn multiply<C: Connection + ?Sized>(
        &self,
        conn: &C,
        a: &str,
        b: &str,
        c: &str,
    ) -> Result<Matrix> {
        let left = self.describe(conn, a)?;
        let right = self.describe(conn, b)?;
        let result = Matrix::new(c, Default::default());
        let (create, insert) = self.multiply_sql(&left, &right, &result)?;
        conn.execute_batch(&create)?;
        conn.execute_batch(&insert)?;
        self.describe(conn, c)
    }
}
