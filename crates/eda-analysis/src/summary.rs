//! Exportable JSON summary of a session
//!
//! The summary is a fixed-shape document:
//!
//! ```json
//! {
//!   "datasetInfo": { "totalRecords": 5, "trainRecords": 3, "testRecords": 2, "features": ["Pclass", "..."] },
//!   "missingValues": { "PassengerId": 0.0, "Age": 20.0, "...": 0.0 },
//!   "numericStats": { "Age": { "mean": 29.7, "median": 28.0, "stdDev": 14.53 } },
//!   "categoricalStats": { "Sex": { "male": 3, "female": 2 } }
//! }
//! ```
//!
//! Object keys keep dataset order (columns) or first-appearance order
//! (categories). Every fractional number is rounded to two decimal places
//! and serialized as a JSON number.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    AnalysisError,
    categorical::CategoricalSummary,
    missing::MissingValueReport,
    numeric::NumericSummary,
    report::AnalysisReport,
    session::{AnalysisSession, DatasetInfo},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub dataset_info: DatasetInfo,
    /// Missing-value percentage per column.
    pub missing_values: IndexMap<String, f64>,
    pub numeric_stats: IndexMap<String, NumericStatsEntry>,
    /// Value counts per categorical column.
    pub categorical_stats: IndexMap<String, IndexMap<String, usize>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericStatsEntry {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Rounds half away from zero to two decimal places.
///
/// Values too large to scale are returned unchanged; they have no fractional
/// part left to round.
#[must_use]
pub fn round2(x: f64) -> f64 {
    let scaled = x * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        x
    }
}

impl Summary {
    /// Computes the analyses the summary needs directly from a session.
    pub fn from_session(session: &AnalysisSession) -> Result<Self, AnalysisError> {
        let all = session.all();
        let schema = session.schema();
        Ok(Self::from_parts(
            session.info(),
            &MissingValueReport::from_dataset(all, schema)?,
            &NumericSummary::from_dataset(all, schema)?,
            &CategoricalSummary::from_dataset(all, schema)?,
        ))
    }

    /// Builds the summary from an already computed report.
    #[must_use]
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self::from_parts(
            report.info.clone(),
            &report.missing_values,
            &report.numeric,
            &report.categorical,
        )
    }

    fn from_parts(
        dataset_info: DatasetInfo,
        missing: &MissingValueReport,
        numeric: &NumericSummary,
        categorical: &CategoricalSummary,
    ) -> Self {
        let missing_values = missing
            .entries
            .iter()
            .map(|e| (e.column.clone(), round2(e.percentage)))
            .collect();
        let numeric_stats = numeric
            .columns
            .iter()
            .map(|c| {
                let entry = NumericStatsEntry {
                    mean: round2(c.stats.mean),
                    median: round2(c.stats.median),
                    std_dev: round2(c.stats.std_dev),
                };
                (c.column.clone(), entry)
            })
            .collect();
        let categorical_stats = categorical
            .tables
            .iter()
            .map(|t| {
                let counts = t
                    .entries
                    .iter()
                    .map(|e| (e.value.clone(), e.count))
                    .collect();
                (t.column.clone(), counts)
            })
            .collect();
        Self {
            dataset_info,
            missing_values,
            numeric_stats,
            categorical_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        load::{ParseOptions, parse_table},
        schema::Schema,
    };

    const HEADER: &str = "PassengerId,Pclass,Sex,Age,SibSp,Parch,Fare,Embarked";

    fn session() -> AnalysisSession {
        let options = ParseOptions::default();
        let train = format!(
            "{HEADER},Survived\n1,3,male,22,1,0,7.25,S,0\n2,1,female,38,1,0,71.2833,C,1\n3,3,female,26,0,0,7.925,S,1\n"
        );
        let test = format!("{HEADER}\n892,3,male,34.5,0,0,7.8292,Q\n893,3,female,,1,0,7,S\n");
        AnalysisSession::new(
            Schema::default(),
            parse_table(train.as_bytes(), &options).unwrap(),
            parse_table(test.as_bytes(), &options).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(14.534), 14.53);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-1.005), -1.0);
        assert_eq!(round2(20.0), 20.0);
        assert_eq!(round2(1.5e308), 1.5e308);
        assert_eq!(round2(-f64::MAX), -f64::MAX);
    }

    #[test]
    fn test_huge_fares_survive_json_round_trip() {
        let options = ParseOptions::default();
        let train = format!(
            "{HEADER},Survived\n1,3,male,22,1,0,1e308,S,0\n2,1,female,38,1,0,1.5e308,C,1\n"
        );
        let session = AnalysisSession::new(
            Schema::default(),
            parse_table(train.as_bytes(), &options).unwrap(),
            parse_table(HEADER.as_bytes(), &options).unwrap(),
        )
        .unwrap();
        let summary = Summary::from_session(&session).unwrap();
        let fare = summary.numeric_stats["Fare"];
        assert!(fare.mean.is_finite());
        assert!(fare.median.is_finite());
        assert!(fare.std_dev.is_finite());

        let json = serde_json::to_vec(&summary).unwrap();
        let back: Summary = serde_json::from_slice(&json).unwrap();
        let back_fare = back.numeric_stats["Fare"];
        assert!((back_fare.mean / fare.mean - 1.0).abs() < 1e-12);
        assert!((back_fare.std_dev / fare.std_dev - 1.0).abs() < 1e-12);
        assert_eq!(back.categorical_stats, summary.categorical_stats);
    }

    #[test]
    fn test_summary_values() {
        let summary = Summary::from_session(&session()).unwrap();
        assert_eq!(summary.dataset_info.total_records, 5);
        assert_eq!(summary.missing_values.get("Age"), Some(&20.0));
        assert_eq!(summary.missing_values.get("Survived"), Some(&40.0));
        assert_eq!(summary.missing_values.get("origin"), Some(&0.0));

        let age = summary.numeric_stats.get("Age").unwrap();
        assert_eq!(age.mean, 30.13);
        assert_eq!(age.median, 26.0);

        let sex = summary.categorical_stats.get("Sex").unwrap();
        let sex = sex
            .iter()
            .map(|(value, &count)| (value.as_str(), count))
            .collect::<Vec<_>>();
        assert_eq!(sex, [("male", 2), ("female", 3)]);
    }

    #[test]
    fn test_json_shape() {
        let summary = Summary::from_session(&session()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        let mut keys = json
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "categoricalStats",
                "datasetInfo",
                "missingValues",
                "numericStats"
            ]
        );
        assert_eq!(json["datasetInfo"]["trainRecords"], 3);
        assert!(json["numericStats"]["Fare"]["stdDev"].is_f64());
        assert_eq!(json["categoricalStats"]["Embarked"]["Q"], 1);
    }

    #[test]
    fn test_json_round_trip_reproduces_numeric_stats() {
        let session = session();
        let summary = Summary::from_session(&session).unwrap();
        let json = serde_json::to_string_pretty(&summary).unwrap();
        let back: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);

        let direct = NumericSummary::from_dataset(session.all(), session.schema()).unwrap();
        for column in &direct.columns {
            let entry = back.numeric_stats.get(&column.column).unwrap();
            assert!((entry.mean - column.stats.mean).abs() <= 0.005 + 1e-9);
            assert!((entry.median - column.stats.median).abs() <= 0.005 + 1e-9);
            assert!((entry.std_dev - column.stats.std_dev).abs() <= 0.005 + 1e-9);
        }
    }
}
