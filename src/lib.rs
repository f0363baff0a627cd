//! # matrix_sql
//!
//! Dense numeric matrices stored as relational tables, multiplied by SQL that
//! the database itself executes.
//!
//! Every matrix is a table with one floating-point column per matrix column,
//! named positionally (`c1`, `c2`, ...). This crate only produces SQL text:
//!
//! ```rust
//! use matrix_sql::{build_create_table, build_replace_data};
//!
//! let create = build_create_table("m", 2).unwrap();
//! assert_eq!(create, "CREATE TABLE m (c1 DOUBLE PRECISION, c2 DOUBLE PRECISION);");
//!
//! let replace = build_replace_data("m", &[vec![1.0, 2.0], vec![3.0, 4.5]]).unwrap();
//! assert_eq!(
//!     replace,
//!     "DELETE FROM m;\nINSERT INTO m (c1, c2) VALUES (1.0, 2.0), (3.0, 4.5);"
//! );
//! ```
//!
//! Executing the text is the caller's job, either directly or through a
//! [`Connection`] handed to the helpers on [`SqlGenerator`].
//!
//! ## Identifier safety
//!
//! Table names and values are interpolated into the generated text without
//! escaping. Only pass trusted names. Setting
//! [`GeneratorProfile::quote_identifiers`] double-quotes table identifiers;
//! numeric values are always rendered as plain decimal literals.
//!
//! ## Multiplication semantics
//!
//! [`build_multiply`] joins both operands on a shared row-id column and groups
//! by it: `C[r][j] = SUM(A[r][1] * B[r][j] + ... + A[r][N] * B[r][j])`. This is
//! a row-aligned computation, not a textbook matrix product.

pub mod connection;
pub mod generation;
pub mod matrix;
pub mod model;
pub mod profile;
mod store;

pub use connection::{Connection, Dialect};
pub use generation::{
    build_create_table, build_multiply, build_replace_data, get_dimensions,
    validate_multiplication, SqlGenerator,
};
pub use matrix::{Dimensions, Matrix};
pub use profile::GeneratorProfile;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("dimension mismatch: cannot multiply {left} by {right}")]
    DimensionMismatch { left: Dimensions, right: Dimensions },
    #[error("malformed matrix data: {0}")]
    MalformedMatrixData(String),
    #[error("query execution failed: `{sql}`: {source}")]
    QueryExecutionFailure {
        sql: String,
        #[source]
        source: BoxError,
    },
    #[error("conversion failure: {0}")]
    ConversionFailure(String),
    #[error("invalid generator profile: {0}")]
    InvalidProfile(String),
}

impl Error {
    pub(crate) fn query(sql: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::QueryExecutionFailure {
            sql: sql.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
