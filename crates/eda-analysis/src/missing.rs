//! Missing-value rates per column

use crate::{AnalysisError, dataset::DatasetView, percentage, schema::Schema};

#[derive(Debug, Clone, PartialEq)]
pub struct MissingValueReport {
    pub total_records: usize,
    /// One entry per dataset column, in column order.
    pub entries: Vec<MissingValueEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MissingValueEntry {
    pub column: String,
    pub missing_count: usize,
    /// `100 * missing_count / total_records`.
    pub percentage: f64,
}

impl MissingValueReport {
    /// Counts missing values in every column of `view`.
    ///
    /// Each column uses the schema's [`MissingRule`](crate::schema::MissingRule),
    /// so numeric columns also count unparseable text as missing.
    pub fn from_dataset(view: DatasetView<'_>, schema: &Schema) -> Result<Self, AnalysisError> {
        if view.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }
        let total_records = view.len();
        let entries = view
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let rule = schema.missing_rule(column);
                let missing_count = view.values(index).filter(|v| rule.is_missing(v)).count();
                MissingValueEntry {
                    column: column.clone(),
                    missing_count,
                    percentage: percentage(missing_count, total_records),
                }
            })
            .collect();
        Ok(Self {
            total_records,
            entries,
        })
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&MissingValueEntry> {
        self.entries.iter().find(|e| e.column == column)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        dataset::Dataset,
        load::{ParseOptions, parse_table},
        value::Origin,
    };

    fn dataset() -> Dataset {
        let text = "Sex,Age,Embarked\nmale,22,S\nfemale,,C\n ,n/a,\nmale,40,S\n";
        let table = parse_table(text.as_bytes(), &ParseOptions::default()).unwrap();
        Dataset::from_table(table, Origin::Train)
    }

    #[test]
    fn test_counts_and_percentages() {
        let dataset = dataset();
        let report = MissingValueReport::from_dataset(dataset.view(), &Schema::default()).unwrap();
        assert_eq!(report.total_records, 4);

        let counts = report
            .entries
            .iter()
            .map(|e| (e.column.as_str(), e.missing_count, e.percentage))
            .collect::<Vec<_>>();
        assert_eq!(
            counts,
            [
                ("Sex", 1, 25.0),
                ("Age", 2, 50.0),
                ("Embarked", 1, 25.0),
                ("origin", 0, 0.0),
            ]
        );
    }

    #[test]
    fn test_numeric_column_counts_text_as_missing() {
        let dataset = dataset();
        let report = MissingValueReport::from_dataset(dataset.view(), &Schema::default()).unwrap();
        // "n/a" is present text, but Age is numeric.
        assert_eq!(report.get("Age").unwrap().missing_count, 2);
        assert!(report.get("Fare").is_none());
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert_eq!(
            MissingValueReport::from_dataset(dataset.view(), &Schema::default()),
            Err(AnalysisError::EmptyDataset)
        );
    }
}
