//! Merged train/test working dataset
//!
//! This module provides [`AnalysisSession`], the immutable value every
//! analysis reads from. A session is built once per load from the two parsed
//! files and is replaced wholesale by the next load; nothing mutates it.
//!
//! # Merge
//!
//! ```text
//! train Table ─┐   schema check    ┌─ train records (origin = train) ─┐
//!              ├──────────────────►│                                   ├─ Dataset
//! test Table ──┘                   └─ test records  (origin = test)  ─┘
//! ```
//!
//! - Column order is the train file's header, followed by `origin`.
//! - Records keep file order: all train records, then all test records.
//! - Test records have no outcome value; it reads as missing.
//!
//! # Schema Check
//!
//! The column layout is validated exactly once, here. A file that lacks a
//! configured column, or a test file with a column the train file does not
//! have, is rejected with a [`SchemaMismatchError`] before any record is built.
//!
//! # Examples
//!
//! ```
//! use eda_analysis::{
//!     load::{ParseOptions, parse_table},
//!     schema::Schema,
//!     session::AnalysisSession,
//! };
//!
//! let header = "PassengerId,Pclass,Sex,Age,SibSp,Parch,Fare,Embarked";
//! let train = format!("{header},Survived\n1,3,male,22,1,0,7.25,S,0\n");
//! let test = format!("{header}\n892,3,male,34.5,0,0,7.8292,Q\n");
//!
//! let options = ParseOptions::default();
//! let train = parse_table(train.as_bytes(), &options).unwrap();
//! let test = parse_table(test.as_bytes(), &options).unwrap();
//! let session = AnalysisSession::new(Schema::default(), train, test).unwrap();
//!
//! let info = session.info();
//! assert_eq!(info.total_records, 2);
//! assert_eq!(info.train_records, 1);
//! assert_eq!(info.test_records, 1);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    dataset::{Dataset, DatasetView, ORIGIN_COLUMN, Record},
    load::Table,
    schema::Schema,
    value::{Origin, Value},
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SchemaMismatchError {
    #[display("{origin} file is missing required column '{column}'")]
    MissingColumn { origin: Origin, column: String },
    #[display("{origin} file has column '{column}' that the train file does not have")]
    UnexpectedColumn { origin: Origin, column: String },
    #[display("{origin} file has duplicate column '{column}'")]
    DuplicateColumn { origin: Origin, column: String },
    #[display("{origin} file uses reserved column name '{column}'")]
    ReservedColumn { origin: Origin, column: String },
}

/// Record counts and feature list of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfo {
    pub total_records: usize,
    pub train_records: usize,
    pub test_records: usize,
    pub features: Vec<String>,
}

/// The merged, validated dataset of one load.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    schema: Schema,
    dataset: Dataset,
    train_len: usize,
}

impl AnalysisSession {
    /// Validates both tables against `schema` and merges them.
    pub fn new(schema: Schema, train: Table, test: Table) -> Result<Self, SchemaMismatchError> {
        check_header(&schema, Origin::Train, &train.columns)?;
        check_header(&schema, Origin::Test, &test.columns)?;
        if let Some(column) = test.columns.iter().find(|c| !train.columns.contains(c)) {
            return Err(SchemaMismatchError::UnexpectedColumn {
                origin: Origin::Test,
                column: column.clone(),
            });
        }

        let train_len = train.rows.len();
        let mut records = Vec::with_capacity(train.rows.len() + test.rows.len());
        records.extend(
            train
                .rows
                .into_iter()
                .map(|row| Record::new(Origin::Train, row)),
        );

        // Position of each train column in the test header, if present.
        let test_positions = train
            .columns
            .iter()
            .map(|column| test.columns.iter().position(|c| c == column))
            .collect::<Vec<_>>();
        records.extend(test.rows.into_iter().map(|row| {
            let values = test_positions
                .iter()
                .map(|pos| pos.and_then(|i| row.get(i)).cloned().unwrap_or_default())
                .collect::<Vec<Value>>();
            Record::new(Origin::Test, values)
        }));

        let dataset = Dataset::new(train.columns, records);
        log::debug!(
            "merged {} train and {} test records over {} columns",
            train_len,
            dataset.len() - train_len,
            dataset.columns().len()
        );

        Ok(Self {
            schema,
            dataset,
            train_len,
        })
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// All records, train first.
    #[must_use]
    pub fn all(&self) -> DatasetView<'_> {
        self.dataset.view()
    }

    /// Train records only (the records that carry an outcome).
    #[must_use]
    pub fn train(&self) -> DatasetView<'_> {
        self.dataset.view_range(0..self.train_len)
    }

    /// Test records only.
    #[must_use]
    pub fn test(&self) -> DatasetView<'_> {
        self.dataset.view_range(self.train_len..self.dataset.len())
    }

    #[must_use]
    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            total_records: self.dataset.len(),
            train_records: self.train_len,
            test_records: self.dataset.len() - self.train_len,
            features: self.schema.features.clone(),
        }
    }
}

fn check_header(
    schema: &Schema,
    origin: Origin,
    columns: &[String],
) -> Result<(), SchemaMismatchError> {
    let mut seen = HashSet::new();
    for column in columns {
        if column == ORIGIN_COLUMN {
            return Err(SchemaMismatchError::ReservedColumn {
                origin,
                column: column.clone(),
            });
        }
        if !seen.insert(column.as_str()) {
            return Err(SchemaMismatchError::DuplicateColumn {
                origin,
                column: column.clone(),
            });
        }
    }
    if let Some(column) = schema
        .required_columns(origin)
        .into_iter()
        .find(|c| !seen.contains(c))
    {
        return Err(SchemaMismatchError::MissingColumn {
            origin,
            column: column.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::load::{ParseOptions, parse_table};

    const TRAIN: &str = "\
PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Fare,Embarked
1,0,3,\"Braund, Mr. Owen Harris\",male,22,1,0,7.25,S
2,1,1,\"Cumings, Mrs. John Bradley\",female,38,1,0,71.2833,C
3,1,3,\"Heikkinen, Miss. Laina\",female,26,0,0,7.925,S
";

    const TEST: &str = "\
PassengerId,Pclass,Name,Sex,Age,SibSp,Parch,Fare,Embarked
892,3,\"Kelly, Mr. James\",male,34.5,0,0,7.8292,Q
893,3,\"Wilkes, Mrs. James\",female,47,1,0,7,S
";

    fn table(text: &str) -> Table {
        parse_table(text.as_bytes(), &ParseOptions::default()).unwrap()
    }

    fn session() -> AnalysisSession {
        AnalysisSession::new(Schema::default(), table(TRAIN), table(TEST)).unwrap()
    }

    #[test]
    fn test_merge_counts_and_order() {
        let session = session();
        let info = session.info();
        assert_eq!(info.total_records, 5);
        assert_eq!(info.train_records, 3);
        assert_eq!(info.test_records, 2);

        let origins = session
            .dataset()
            .records()
            .iter()
            .map(Record::origin)
            .collect::<Vec<_>>();
        assert_eq!(
            origins,
            [
                Origin::Train,
                Origin::Train,
                Origin::Train,
                Origin::Test,
                Origin::Test
            ]
        );

        let ids = session
            .all()
            .values(0)
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(ids, ["1", "2", "3", "892", "893"]);
    }

    #[test]
    fn test_columns_follow_train_header() {
        let session = session();
        assert_eq!(
            session.dataset().columns(),
            [
                "PassengerId",
                "Survived",
                "Pclass",
                "Name",
                "Sex",
                "Age",
                "SibSp",
                "Parch",
                "Fare",
                "Embarked",
                "origin"
            ]
        );
    }

    #[test]
    fn test_test_records_are_realigned() {
        let session = session();
        let view = session.test();
        let survived = view.require_column("Survived").unwrap();
        let fare = view.require_column("Fare").unwrap();
        assert!(view.values(survived).all(Value::is_missing));
        let fares = view.values(fare).filter_map(Value::as_number).collect::<Vec<_>>();
        assert_eq!(fares, [7.8292, 7.0]);
    }

    #[test]
    fn test_train_and_test_views() {
        let session = session();
        assert_eq!(session.train().len(), 3);
        assert_eq!(session.test().len(), 2);
        assert!(
            session
                .train()
                .records()
                .iter()
                .all(|r| r.origin() == Origin::Train)
        );
    }

    #[test]
    fn test_missing_required_column() {
        let train = table("PassengerId,Survived\n1,0\n");
        let err = AnalysisSession::new(Schema::default(), train, table(TEST)).unwrap_err();
        assert_eq!(
            err,
            SchemaMismatchError::MissingColumn {
                origin: Origin::Train,
                column: "Age".to_owned()
            }
        );
    }

    #[test]
    fn test_unexpected_test_column() {
        let test = TEST
            .replacen("Embarked", "Embarked,Cabin", 1)
            .replace(",Q\n", ",Q,C85\n")
            .replace(",S\n", ",S,\n");
        let err =
            AnalysisSession::new(Schema::default(), table(TRAIN), table(&test)).unwrap_err();
        assert_eq!(
            err,
            SchemaMismatchError::UnexpectedColumn {
                origin: Origin::Test,
                column: "Cabin".to_owned()
            }
        );
    }

    #[test]
    fn test_reserved_and_duplicate_columns() {
        let reserved = TRAIN.replacen("Name", "origin", 1);
        let err =
            AnalysisSession::new(Schema::default(), table(&reserved), table(TEST)).unwrap_err();
        assert!(matches!(err, SchemaMismatchError::ReservedColumn { .. }));

        let duplicate = TRAIN.replacen("Name", "Age", 1);
        let err =
            AnalysisSession::new(Schema::default(), table(&duplicate), table(TEST)).unwrap_err();
        assert!(matches!(
            err,
            SchemaMismatchError::DuplicateColumn { column, .. } if column == "Age"
        ));
    }

    #[test]
    fn test_empty_test_file() {
        let test = table("PassengerId,Pclass,Name,Sex,Age,SibSp,Parch,Fare,Embarked\n");
        let session = AnalysisSession::new(Schema::default(), table(TRAIN), test).unwrap();
        assert_eq!(session.info().test_records, 0);
        assert!(session.test().is_empty());
    }
}
