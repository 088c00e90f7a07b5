//! Column roles for the analyzed dataset
//!
//! Column roles are configured, never inferred from the data. [`Schema`] is
//! the single place to adapt when pointing the tool at a dataset with
//! different column names; its [`Default`] describes the passenger dataset:
//!
//! | role        | columns                       |
//! |-------------|-------------------------------|
//! | identifier  | `PassengerId`                 |
//! | outcome     | `Survived` (train file only)  |
//! | numeric     | `Age`, `Fare`, `SibSp`, `Parch` |
//! | categorical | `Pclass`, `Sex`, `Embarked`   |
//!
//! The schema also owns the missing-value rule for each column (see
//! [`MissingRule`]), so every aggregate agrees on what "missing" means.

use serde::{Deserialize, Serialize};

use crate::value::{Origin, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ColumnRole {
    #[display("identifier")]
    Identifier,
    #[display("outcome")]
    Outcome,
    #[display("numeric")]
    Numeric,
    #[display("categorical")]
    Categorical,
}

/// How a column decides whether a value is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRule {
    /// Absent or blank.
    Blank,
    /// Absent, blank, or not a finite number.
    NonNumeric,
}

impl MissingRule {
    #[must_use]
    pub fn is_missing(self, value: &Value) -> bool {
        match self {
            Self::Blank => value.is_missing(),
            Self::NonNumeric => value.as_number().is_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// Row identifier column.
    pub identifier: String,
    /// Outcome (label) column, present only in the train file.
    pub outcome: String,
    /// Outcome value counted as a positive outcome (survived).
    pub positive_outcome: f64,
    /// Columns summarized with descriptive statistics.
    pub numeric: Vec<String>,
    /// Columns summarized with frequency tables.
    pub categorical: Vec<String>,
    /// Feature columns, in display order. Also the correlation feature set
    /// (together with the outcome).
    pub features: Vec<String>,
    /// Columns used to break the outcome down by group.
    pub outcome_groups: Vec<String>,
}

impl Default for Schema {
    fn default() -> Self {
        let strings = |names: &[&str]| names.iter().map(|&s| s.to_owned()).collect::<Vec<_>>();
        Self {
            identifier: "PassengerId".to_owned(),
            outcome: "Survived".to_owned(),
            positive_outcome: 1.0,
            numeric: strings(&["Age", "Fare", "SibSp", "Parch"]),
            categorical: strings(&["Pclass", "Sex", "Embarked"]),
            features: strings(&["Pclass", "Sex", "Age", "SibSp", "Parch", "Fare", "Embarked"]),
            outcome_groups: strings(&["Sex", "Pclass"]),
        }
    }
}

impl Schema {
    #[must_use]
    pub fn role(&self, column: &str) -> Option<ColumnRole> {
        if column == self.identifier {
            Some(ColumnRole::Identifier)
        } else if column == self.outcome {
            Some(ColumnRole::Outcome)
        } else if self.numeric.iter().any(|c| c == column) {
            Some(ColumnRole::Numeric)
        } else if self.categorical.iter().any(|c| c == column) {
            Some(ColumnRole::Categorical)
        } else {
            None
        }
    }

    #[must_use]
    pub fn missing_rule(&self, column: &str) -> MissingRule {
        match self.role(column) {
            Some(ColumnRole::Numeric) => MissingRule::NonNumeric,
            _ => MissingRule::Blank,
        }
    }

    /// Returns `true` if `value` is the positive outcome.
    #[must_use]
    pub fn is_positive_outcome(&self, value: &Value) -> bool {
        value.as_number() == Some(self.positive_outcome)
    }

    /// Feature columns followed by the outcome column.
    pub fn correlation_features(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .map(String::as_str)
            .chain([self.outcome.as_str()])
    }

    /// Columns a file from `origin` must contain, without duplicates.
    #[must_use]
    pub fn required_columns(&self, origin: Origin) -> Vec<&str> {
        let mut required = vec![self.identifier.as_str()];
        if origin == Origin::Train {
            required.push(self.outcome.as_str());
        }
        let declared = self
            .numeric
            .iter()
            .chain(&self.categorical)
            .chain(&self.features)
            .chain(&self.outcome_groups);
        for column in declared {
            if !required.contains(&column.as_str()) {
                required.push(column);
            }
        }
        required
    }
}
