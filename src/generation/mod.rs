//! SQL text generation for matrix tables.
//!
//! Every matrix table holds one value column per matrix column, named
//! positionally from the profile's prefix (`c1`, `c2`, ...). All builders are
//! pure: the same inputs always produce byte-identical text, and nothing is
//! executed. [`SqlGenerator::store_matrix`] and [`SqlGenerator::multiply`]
//! also run the statements through a [`Connection`](crate::Connection).
//!
//! Table names are interpolated as given unless
//! [`GeneratorProfile::quote_identifiers`] is set. Callers must only pass
//! trusted names.

mod dimensions;

pub use dimensions::{get_dimensions, validate_multiplication};

use crate::matrix::{Dimensions, Matrix};
use crate::model::query::{Create, Delete, Expr, Insert, ResultColumn, Select, SelectTable};
use crate::model::table::{positional_names, FloatLiteral, Table};
use crate::profile::GeneratorProfile;
use crate::{Error, Result};

/// Alias of the left multiplication operand
const LEFT: &str = "a";
/// Alias of the right multiplication operand
const RIGHT: &str = "b";

/// Generates matrix SQL according to a [`GeneratorProfile`].
///
/// The default generator produces the canonical `c1..cN DOUBLE PRECISION`
/// layout joined on `row_id`, which is also what the free functions of this
/// module use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlGenerator {
    profile: GeneratorProfile,
}

impl SqlGenerator {
    pub fn new(profile: GeneratorProfile) -> Result<Self> {
        profile.validate()?;
        Ok(Self { profile })
    }

    pub fn profile(&self) -> &GeneratorProfile {
        &self.profile
    }

    /// Table identifier as it appears in generated text.
    pub fn identifier(&self, name: &str) -> String {
        if self.profile.quote_identifiers {
            format!("\"{}\"", name.replace('"', "\"\""))
        } else {
            name.to_string()
        }
    }

    fn column_names(&self, width: usize) -> Vec<String> {
        positional_names(&self.profile.column_prefix, width).collect()
    }

    /// `CREATE TABLE {table_name} (c1 DOUBLE PRECISION, ..., cN DOUBLE PRECISION);`
    ///
    /// Fails with [`Error::MalformedMatrixData`] when `num_columns` is zero.
    pub fn create_table_sql(&self, table_name: &str, num_columns: usize) -> Result<String> {
        if num_columns == 0 {
            return Err(Error::MalformedMatrixData(
                "cannot create a zero-width matrix table".to_string(),
            ));
        }
        let create = Create {
            table: Table::positional(
                self.identifier(table_name),
                &self.profile.column_prefix,
                num_columns,
                self.profile.column_type,
            ),
        };
        tracing::debug!(table_name, num_columns, "generated CREATE TABLE");
        Ok(format!("{create};"))
    }

    /// `DELETE FROM {table_name};` followed by one multi-row `INSERT` of `rows`.
    ///
    /// The `INSERT` is omitted when `rows` is empty. Values are written as
    /// plain decimal literals, unparameterized.
    pub fn replace_data_sql(&self, table_name: &str, rows: &[Vec<f64>]) -> Result<String> {
        let dimensions = Dimensions::of_rows(rows)?;
        let table = self.identifier(table_name);
        let delete = Delete::all(table.clone());
        if rows.is_empty() {
            tracing::debug!(table_name, "generated DELETE without rows to insert");
            return Ok(format!("{delete};"));
        }
        if dimensions.cols == 0 {
            return Err(Error::MalformedMatrixData(
                "cannot insert zero-width rows".to_string(),
            ));
        }

        let values = rows
            .iter()
            .map(|row| {
                row.iter()
                    .copied()
                    .map(FloatLiteral::new)
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        let insert = Insert::Values {
            table,
            columns: self.column_names(dimensions.cols),
            values,
        };
        tracing::debug!(table_name, %dimensions, "generated DELETE and INSERT");
        Ok(format!("{delete};\n{insert};"))
    }

    /// `CREATE TABLE` for `c` and the `INSERT ... SELECT` filling it from `a` and `b`.
    ///
    /// Rows of `a` and `b` are paired by the profile's row-id column and
    /// grouped on it; output column `j` is
    /// `SUM(a.c1 * b.cj + ... + a.cN * b.cj)` where `N` is `a`'s column count.
    /// The width of `c` is `b`'s column count. `c`'s own dimensions are not
    /// consulted.
    pub fn multiply_sql(&self, a: &Matrix, b: &Matrix, c: &Matrix) -> Result<(String, String)> {
        let (left, right) = (a.dimensions(), b.dimensions());
        if self.profile.enforce_conformability && !validate_multiplication(left, right) {
            return Err(Error::DimensionMismatch { left, right });
        }
        let create = self.create_table_sql(c.name(), right.cols)?;

        let row_id = &self.profile.row_id_column;
        let columns = self
            .column_names(right.cols)
            .into_iter()
            .map(|output| {
                let dot = self.dot_product(left.cols, &output).ok_or_else(|| {
                    Error::MalformedMatrixData(format!(
                        "left operand {} has no columns",
                        a.name()
                    ))
                })?;
                Ok(ResultColumn::ExprAs(Expr::sum(dot), output))
            })
            .collect::<Result<Vec<_>>>()?;
        let select = Select {
            columns,
            from: vec![
                SelectTable::Table(self.identifier(a.name()), Some(LEFT.to_string())),
                SelectTable::Table(self.identifier(b.name()), Some(RIGHT.to_string())),
            ],
            where_clause: Some(Expr::equals(
                Expr::qualified_column(LEFT, row_id),
                Expr::qualified_column(RIGHT, row_id),
            )),
            group_by: vec![Expr::qualified_column(LEFT, row_id)],
        };
        let insert = Insert::Select {
            table: self.identifier(c.name()),
            columns: self.column_names(right.cols),
            select: Box::new(select),
        };
        tracing::debug!(
            left = %a,
            right = %b,
            result = c.name(),
            "generated multiplication"
        );
        let insert = format!("{insert};");
        tracing::trace!(sql = %insert);
        Ok((create, insert))
    }

    /// `a.c1 * b.{output} + ... + a.c{width} * b.{output}`
    fn dot_product(&self, width: usize, output: &str) -> Option<Expr> {
        Expr::add_all(
            positional_names(&self.profile.column_prefix, width).map(|input| {
                Expr::product(
                    Expr::qualified_column(LEFT, input),
                    Expr::qualified_column(RIGHT, output),
                )
            }),
        )
    }
}

/// [`SqlGenerator::create_table_sql`] with the default profile.
pub fn build_create_table(table_name: &str, num_columns: usize) -> Result<String> {
    SqlGenerator::default().create_table_sql(table_name, num_columns)
}

/// [`SqlGenerator::replace_data_sql`] with the default profile.
pub fn build_replace_data(table_name: &str, rows: &[Vec<f64>]) -> Result<String> {
    SqlGenerator::default().replace_data_sql(table_name, rows)
}

/// [`SqlGenerator::multiply_sql`] with the default profile.
pub fn build_multiply(a: &Matrix, b: &Matrix, c: &Matrix) -> Result<(String, String)> {
    SqlGenerator::default().multiply_sql(a, b, c)
}
