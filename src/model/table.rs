use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Table {
    /// A matrix table of `width` value columns named `{prefix}1..{prefix}{width}`.
    pub fn positional(
        name: impl Into<String>,
        prefix: &str,
        width: usize,
        column_type: ColumnType,
    ) -> Self {
        Self {
            name: name.into(),
            columns: positional_names(prefix, width)
                .map(|name| Column { name, column_type })
                .collect(),
        }
    }
}

/// `{prefix}1`, `{prefix}2`, ..., `{prefix}{width}`
pub fn positional_names(prefix: &str, width: usize) -> impl Iterator<Item = String> + '_ {
    (1..=width).map(move |i| format!("{prefix}{i}"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
}

impl Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.column_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnType {
    #[default]
    DoublePrecision,
    Real,
    Float,
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DoublePrecision => write!(f, "DOUBLE PRECISION"),
            Self::Real => write!(f, "REAL"),
            Self::Float => write!(f, "FLOAT"),
        }
    }
}

/// A finite floating-point SQL literal.
///
/// Renders the shortest text that reads back to the same `f64`, always with a
/// decimal point or exponent (`1.0`, `0.1`, `1e-7`). Deserialization goes
/// through [`FloatLiteral::new`], so non-finite values are rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64")]
pub struct FloatLiteral(f64);

impl FloatLiteral {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(Error::MalformedMatrixData(format!(
                "{value} has no SQL literal form"
            )))
        }
    }
}

impl TryFrom<f64> for FloatLiteral {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl Display for FloatLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Renders a parenthesized value row: `(1.0, 2.0, 3.0)`.
pub(crate) struct ValueRow<'a>(pub &'a [FloatLiteral]);

impl Display for ValueRow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}
