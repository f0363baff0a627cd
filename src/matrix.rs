use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Shape of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns true if `self` (M x N) can be multiplied by `other` (N x P).
    pub fn can_multiply(&self, other: &Dimensions) -> bool {
        self.cols == other.rows
    }

    /// Dimensions of `rows`, rejecting rows whose length differs from the first.
    pub fn of_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(Error::MalformedMatrixData(format!(
                "row {idx} has {} values, expected {cols}",
                row.len()
            )));
        }
        Ok(Self::new(rows.len(), cols))
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A matrix handle: the table name and the logical shape stored in it.
///
/// The descriptor is never checked against the database; use
/// [`SqlGenerator::describe`](crate::SqlGenerator::describe) to read the live shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matrix {
    name: String,
    dimensions: Dimensions,
}

impl Matrix {
    pub fn new(name: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            name: name.into(),
            dimensions,
        }
    }

    pub fn from_rows(name: impl Into<String>, rows: &[Vec<f64>]) -> Result<Self> {
        Ok(Self::new(name, Dimensions::of_rows(rows)?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn cols(&self) -> usize {
        self.dimensions.cols
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows("m", &[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.name(), "m");
        assert_eq!(m.dimensions(), Dimensions::new(2, 3));
        assert_eq!(m.to_string(), "m (2x3)");
    }

    #[test]
    fn test_from_rows_empty() {
        let m = Matrix::from_rows("m", &[]).unwrap();
        assert_eq!(m.dimensions(), Dimensions::new(0, 0));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows("m", &[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(
            matches!(&err, Error::MalformedMatrixData(msg) if msg == "row 1 has 1 values, expected 2"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_setters_are_unchecked() {
        let mut m = Matrix::new("a", Dimensions::new(3, 10));
        m.set_name("b");
        m.set_dimensions(Dimensions::new(0, 0));
        assert_eq!(m.name(), "b");
        assert_eq!(m.rows(), 0);
        assert_eq!(m.cols(), 0);
    }

    #[test]
    fn test_can_multiply() {
        assert!(Dimensions::new(3, 10).can_multiply(&Dimensions::new(10, 4)));
        assert!(!Dimensions::new(10, 4).can_multiply(&Dimensions::new(3, 10)));
    }
}
