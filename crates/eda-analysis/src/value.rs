//! Cell values and record origin tags

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell of a loaded table.
///
/// Type inference happens once at load time (see [`Value::infer`]). Numbers are
/// always finite; literals such as `NaN` or `inf` are kept as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent cell (empty field, or a column the source file did not have).
    #[default]
    Missing,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Value {
    /// Converts a raw field into a typed value.
    ///
    /// Blank fields become [`Value::Missing`], `true`/`false` (any of the
    /// common casings) become [`Value::Bool`], finite numeric literals become
    /// [`Value::Number`] and everything else is kept verbatim as text.
    #[must_use]
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        match trimmed {
            "true" | "True" | "TRUE" => return Self::Bool(true),
            "false" | "False" | "FALSE" => return Self::Bool(false),
            _ => {}
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::Text(raw.to_owned()),
        }
    }

    /// Converts a raw field without type inference.
    #[must_use]
    pub fn text(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Self::Missing
        } else {
            Self::Text(raw.to_owned())
        }
    }

    /// Returns `true` for absent cells and blank text.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) | Self::Bool(_) => false,
        }
    }

    /// Returns the numeric reading of this value, if it has one.
    ///
    /// Text that parses as a finite number counts as numeric so that tables
    /// loaded without type inference behave the same as inferred ones.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Self::Missing | Self::Bool(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// The input file a record was loaded from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    #[display("train")]
    Train,
    #[display("test")]
    Test,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer() {
        assert_eq!(Value::infer(""), Value::Missing);
        assert_eq!(Value::infer("   "), Value::Missing);
        assert_eq!(Value::infer("22"), Value::Number(22.0));
        assert_eq!(Value::infer("7.25"), Value::Number(7.25));
        assert_eq!(Value::infer("TRUE"), Value::Bool(true));
        assert_eq!(Value::infer("male"), Value::Text("male".into()));
        assert_eq!(Value::infer("NaN"), Value::Text("NaN".into()));
        assert_eq!(Value::infer("inf"), Value::Text("inf".into()));
    }

    #[test]
    fn test_missing_and_numeric_readings() {
        assert!(Value::Missing.is_missing());
        assert!(Value::Text(" ".into()).is_missing());
        assert!(!Value::Number(0.0).is_missing());
        assert!(!Value::Bool(false).is_missing());

        assert_eq!(Value::Text("3".into()).as_number(), Some(3.0));
        assert_eq!(Value::Text("S".into()).as_number(), None);
        assert_eq!(Value::Bool(true).as_number(), None);
        assert_eq!(Value::Missing.as_number(), None);
    }

    #[test]
    fn test_display_drops_trailing_zero_fraction() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(71.2833).to_string(), "71.2833");
        assert_eq!(Value::Missing.to_string(), "");
        assert_eq!(Origin::Test.to_string(), "test");
    }
}
