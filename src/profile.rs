//! Profiles controlling the shape of generated SQL.
//!
//! The default profile reproduces the canonical output: `c1..cN` columns of
//! type `DOUBLE PRECISION`, multiplication joined on `row_id`, conformability
//! enforced and identifiers left unquoted.

use serde::{Deserialize, Serialize};

use crate::model::table::ColumnType;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct GeneratorProfile {
    /// Prefix of the positional value columns
    pub column_prefix: String,
    /// Declared type of every value column
    pub column_type: ColumnType,
    /// Column both multiplication operands are joined and grouped on
    pub row_id_column: String,
    /// Fail with `DimensionMismatch` instead of generating a non-conformable product
    pub enforce_conformability: bool,
    /// Double-quote table identifiers
    pub quote_identifiers: bool,
}

impl Default for GeneratorProfile {
    fn default() -> Self {
        Self {
            column_prefix: "c".to_string(),
            column_type: ColumnType::DoublePrecision,
            row_id_column: "row_id".to_string(),
            enforce_conformability: true,
            quote_identifiers: false,
        }
    }
}

impl GeneratorProfile {
    /// Profile for SQLite tables created by this crate, which carry no explicit
    /// row-id column: multiplication joins on the implicit `rowid` instead.
    pub fn sqlite() -> Self {
        Self::default().with_row_id_column("rowid")
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let profile: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidProfile(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn with_column_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.column_prefix = prefix.into();
        self
    }

    pub fn with_column_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = column_type;
        self
    }

    pub fn with_row_id_column(mut self, column: impl Into<String>) -> Self {
        self.row_id_column = column.into();
        self
    }

    pub fn with_enforce_conformability(mut self, enforce: bool) -> Self {
        self.enforce_conformability = enforce;
        self
    }

    pub fn with_quote_identifiers(mut self, quote: bool) -> Self {
        self.quote_identifiers = quote;
        self
    }

    /// Generated column names are never quoted, so they must be plain identifiers.
    pub fn validate(&self) -> Result<()> {
        check_identifier("column_prefix", &self.column_prefix)?;
        check_identifier("row_id_column", &self.row_id_column)
    }
}

fn check_identifier(field: &str, value: &str) -> Result<()> {
    let mut chars = value.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidProfile(format!(
            "{field} must be a plain identifier, got {value:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        GeneratorProfile::default().validate().unwrap();
        GeneratorProfile::sqlite().validate().unwrap();
    }

    #[test]
    fn test_from_json_partial() {
        let profile =
            GeneratorProfile::from_json_str(r#"{"column_type": "Real", "quote_identifiers": true}"#)
                .unwrap();
        assert_eq!(profile.column_type, ColumnType::Real);
        assert!(profile.quote_identifiers);
        assert_eq!(profile.column_prefix, "c");
        assert_eq!(profile.row_id_column, "row_id");
        assert!(profile.enforce_conformability);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = GeneratorProfile::from_json_str(r#"{"colum_prefix": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidProfile(_)), "{err:?}");
    }

    #[test]
    fn test_validate_rejects_bad_identifiers() {
        for bad in ["", "1c", "c-1", "c; DROP TABLE m"] {
            let err = GeneratorProfile::default()
                .with_column_prefix(bad)
                .validate()
                .unwrap_err();
            assert!(matches!(err, Error::InvalidProfile(_)), "{bad}: {err:?}");
        }
        let err = GeneratorProfile::from_json_str(r#"{"row_id_column": "row id"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidProfile(_)), "{err:?}");
    }
}
