//! Outcome counts broken down by group
//!
//! Only the train file carries the outcome, so this module always works on
//! the session's train records. Records whose outcome is missing are skipped;
//! every other record counts as survived if its outcome equals the schema's
//! positive value and as died otherwise.
//!
//! # Examples
//!
//! ## Group by a Column
//!
//! ```
//! use eda_analysis::{
//!     load::{ParseOptions, parse_table},
//!     outcome::GroupOutcomeReport,
//!     schema::Schema,
//!     session::AnalysisSession,
//! };
//!
//! let header = "PassengerId,Pclass,Sex,Age,SibSp,Parch,Fare,Embarked";
//! let train = format!(
//!     "{header},Survived\n1,3,male,22,1,0,7.25,S,0\n2,1,female,38,1,0,71.28,C,1\n3,1,male,35,0,0,53.1,S,1\n"
//! );
//! let options = ParseOptions::default();
//! let train = parse_table(train.as_bytes(), &options).unwrap();
//! let test = parse_table(header.as_bytes(), &options).unwrap();
//! let session = AnalysisSession::new(Schema::default(), train, test).unwrap();
//!
//! let by_sex = GroupOutcomeReport::by_column(&session, "Sex").unwrap();
//! let male = by_sex.get("male").unwrap();
//! assert_eq!((male.survived, male.died), (1, 1));
//! ```
//!
//! ## Group by a Derived Key
//!
//! ```
//! # use eda_analysis::{
//! #     load::{ParseOptions, parse_table},
//! #     outcome::GroupOutcomeReport,
//! #     schema::Schema,
//! #     session::AnalysisSession,
//! # };
//! # let header = "PassengerId,Pclass,Sex,Age,SibSp,Parch,Fare,Embarked";
//! # let train = format!("{header},Survived\n1,3,male,22,1,0,7.25,S,0\n2,1,female,8,1,0,71.28,C,1\n");
//! # let options = ParseOptions::default();
//! # let train = parse_table(train.as_bytes(), &options).unwrap();
//! # let test = parse_table(header.as_bytes(), &options).unwrap();
//! # let session = AnalysisSession::new(Schema::default(), train, test).unwrap();
//! let age = session.train().require_column("Age").unwrap();
//! let by_child = GroupOutcomeReport::collect_by_group(session.train(), session.schema(), |record| {
//!     record.get(age).and_then(|v| v.as_number()).is_some_and(|a| a < 16.0)
//! })
//! .unwrap();
//! assert_eq!(by_child.get(&true).unwrap().survived, 1);
//! ```

use std::hash::Hash;

use indexmap::IndexMap;

use crate::{
    AnalysisError,
    categorical::{UNKNOWN_LABEL, group_label},
    dataset::{DatasetView, Record},
    schema::Schema,
    session::AnalysisSession,
};

/// Survived/died counts of one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub survived: usize,
    pub died: usize,
}

impl OutcomeCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.survived + self.died
    }

    /// Fraction of the group that survived, `None` for an empty group.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn survival_rate(&self) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.survived as f64 / total as f64)
    }
}

/// Outcome counts per group key, in order of first appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupOutcomeReport<K> {
    pub groups: Vec<(K, OutcomeCounts)>,
}

impl<K> GroupOutcomeReport<K> {
    /// Collects outcome counts grouped by a custom key.
    ///
    /// `group` is called once per record with a known outcome.
    pub fn collect_by_group<F>(
        view: DatasetView<'_>,
        schema: &Schema,
        mut group: F,
    ) -> Result<Self, AnalysisError>
    where
        F: FnMut(&Record) -> K,
        K: Eq + Hash,
    {
        let outcome = view.require_column(&schema.outcome)?;
        let mut groups = IndexMap::<K, OutcomeCounts>::new();
        let mut skipped = 0;

        for record in view.records() {
            let value = record.get(outcome).filter(|v| !v.is_missing());
            let Some(value) = value else {
                skipped += 1;
                continue;
            };
            let counts = groups.entry(group(record)).or_default();
            if schema.is_positive_outcome(value) {
                counts.survived += 1;
            } else {
                counts.died += 1;
            }
        }

        if skipped > 0 {
            log::debug!("skipped {skipped} records without an outcome value");
        }
        Ok(Self {
            groups: groups.into_iter().collect(),
        })
    }

    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&OutcomeCounts>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.groups.iter().find(|(k, _)| k == key).map(|(_, c)| c)
    }
}

impl GroupOutcomeReport<String> {
    /// Outcome counts of the session's train records, grouped by the value
    /// of `column`. Missing values are grouped under
    /// [`UNKNOWN_LABEL`](crate::categorical::UNKNOWN_LABEL).
    pub fn by_column(session: &AnalysisSession, column: &str) -> Result<Self, AnalysisError> {
        let view = session.train();
        let index = view.require_column(column)?;
        Self::collect_by_group(view, session.schema(), |record| {
            record
                .get(index)
                .map_or_else(|| UNKNOWN_LABEL.to_owned(), group_label)
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::load::{ParseOptions, parse_table};

    const HEADER: &str = "PassengerId,Pclass,Sex,Age,SibSp,Parch,Fare,Embarked";

    fn session(train_rows: &str) -> AnalysisSession {
        let options = ParseOptions::default();
        let train = format!("{HEADER},Survived\n{train_rows}");
        let test = format!("{HEADER}\n4,3,female,30,0,0,8,S\n");
        AnalysisSession::new(
            Schema::default(),
            parse_table(train.as_bytes(), &options).unwrap(),
            parse_table(test.as_bytes(), &options).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_survival_by_sex() {
        let session = session(
            "1,3,male,22,1,0,7.25,S,0\n2,1,female,38,1,0,71.28,C,1\n3,1,male,35,0,0,53.1,S,1\n",
        );
        let report = GroupOutcomeReport::by_column(&session, "Sex").unwrap();
        assert_eq!(
            report.groups,
            [
                (
                    "male".to_owned(),
                    OutcomeCounts {
                        survived: 1,
                        died: 1
                    }
                ),
                (
                    "female".to_owned(),
                    OutcomeCounts {
                        survived: 1,
                        died: 0
                    }
                ),
            ]
        );
        // Test records never contribute.
        assert_eq!(
            report.groups.iter().map(|(_, c)| c.total()).sum::<usize>(),
            3
        );
    }

    #[test]
    fn test_missing_outcome_and_group() {
        let session = session(
            "1,3,male,22,1,0,7.25,S,\n2,,female,38,1,0,71.28,C,1\n3,3,male,35,0,0,53.1,S,0\n",
        );
        let report = GroupOutcomeReport::by_column(&session, "Pclass").unwrap();
        let groups = report
            .groups
            .iter()
            .map(|(k, c)| (k.as_str(), c.survived, c.died))
            .collect::<Vec<_>>();
        assert_eq!(groups, [("Unknown", 1, 0), ("3", 0, 1)]);
    }

    #[test]
    fn test_survival_rate() {
        let counts = OutcomeCounts {
            survived: 1,
            died: 3,
        };
        assert_eq!(counts.survival_rate(), Some(0.25));
        assert_eq!(OutcomeCounts::default().survival_rate(), None);
    }

    #[test]
    fn test_unknown_column() {
        let session = session("1,3,male,22,1,0,7.25,S,0\n");
        assert!(matches!(
            GroupOutcomeReport::by_column(&session, "Cabin"),
            Err(AnalysisError::MissingColumn { .. })
        ));
    }
}
