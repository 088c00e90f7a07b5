//! Categorical-to-number encoding tables
//!
//! Correlation needs numbers, so categorical features are mapped to fixed
//! codes before any coefficient is computed. The mapping is plain
//! configuration, versioned so that a saved configuration can be checked
//! against the codes this build understands.
//!
//! Default table (version 1):
//!
//! | column     | codes                    | fallback |
//! |------------|--------------------------|----------|
//! | `Sex`      | `male` → 0               | 1        |
//! | `Embarked` | `C` → 0, `Q` → 1         | 2        |
//!
//! Values not listed, including missing ones, take the fallback code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEncoding {
    pub version: u32,
    pub columns: BTreeMap<String, ColumnEncoding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnEncoding {
    pub codes: BTreeMap<String, f64>,
    pub fallback: f64,
}

impl CategoryEncoding {
    /// The encoding table version understood by this build.
    pub const VERSION: u32 = 1;

    /// Returns the encoding for `column`, if it is encoded.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&ColumnEncoding> {
        self.columns.get(column)
    }
}

impl Default for CategoryEncoding {
    fn default() -> Self {
        let sex = ColumnEncoding {
            codes: BTreeMap::from([("male".to_owned(), 0.0)]),
            fallback: 1.0,
        };
        let embarked = ColumnEncoding {
            codes: BTreeMap::from([("C".to_owned(), 0.0), ("Q".to_owned(), 1.0)]),
            fallback: 2.0,
        };
        Self {
            version: Self::VERSION,
            columns: BTreeMap::from([("Sex".to_owned(), sex), ("Embarked".to_owned(), embarked)]),
        }
    }
}

impl ColumnEncoding {
    #[must_use]
    pub fn encode(&self, value: &Value) -> f64 {
        if value.is_missing() {
            return self.fallback;
        }
        self.codes
            .get(value.to_string().as_str())
            .copied()
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_codes() {
        let encoding = CategoryEncoding::default();
        let sex = encoding.get("Sex").unwrap();
        assert_eq!(sex.encode(&Value::infer("male")), 0.0);
        assert_eq!(sex.encode(&Value::infer("female")), 1.0);
        assert_eq!(sex.encode(&Value::Missing), 1.0);

        let embarked = encoding.get("Embarked").unwrap();
        assert_eq!(embarked.encode(&Value::infer("C")), 0.0);
        assert_eq!(embarked.encode(&Value::infer("Q")), 1.0);
        assert_eq!(embarked.encode(&Value::infer("S")), 2.0);
        assert_eq!(embarked.encode(&Value::Missing), 2.0);

        assert!(encoding.get("Age").is_none());
    }

    #[test]
    fn test_numeric_looking_categories() {
        let encoding = ColumnEncoding {
            codes: BTreeMap::from([("1".to_owned(), 10.0)]),
            fallback: -1.0,
        };
        assert_eq!(encoding.encode(&Value::Number(1.0)), 10.0);
        assert_eq!(encoding.encode(&Value::Number(1.5)), -1.0);
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{"version":1,"columns":{"Sex":{"codes":{"female":0},"fallback":1}}}"#;
        let encoding: CategoryEncoding = serde_json::from_str(json).unwrap();
        assert_eq!(encoding.version, CategoryEncoding::VERSION);
        assert_eq!(encoding.get("Sex").unwrap().encode(&Value::infer("male")), 1.0);
    }
}
