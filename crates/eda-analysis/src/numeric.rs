//! Descriptive statistics for numeric columns

use eda_stats::descriptive::DescriptiveStats;

use crate::{AnalysisError, dataset::DatasetView, schema::Schema};

#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    /// One entry per numeric column that has at least one value, in schema order.
    pub columns: Vec<NumericColumnSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumnSummary {
    pub column: String,
    pub stats: DescriptiveStats,
}

impl NumericSummary {
    /// Summarizes every numeric column of the schema.
    ///
    /// Only values with a numeric reading are used. A column with no such
    /// value is left out of the summary instead of being reported with
    /// undefined statistics.
    pub fn from_dataset(view: DatasetView<'_>, schema: &Schema) -> Result<Self, AnalysisError> {
        let mut columns = vec![];
        for column in &schema.numeric {
            let index = view.require_column(column)?;
            let Some(stats) = DescriptiveStats::new(view.values(index).filter_map(|v| v.as_number()))
            else {
                log::warn!("numeric column '{column}' has no values; omitted from summary");
                continue;
            };
            columns.push(NumericColumnSummary {
                column: column.clone(),
                stats,
            });
        }
        Ok(Self { columns })
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&DescriptiveStats> {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| &c.stats)
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

    fn dataset(text: &str) -> Dataset {
        let table = parse_table(text.as_bytes(), &ParseOptions::default()).unwrap();
        Dataset::from_table(table, Origin::Train)
    }

    #[test]
    fn test_statistics_skip_missing_values() {
        let dataset = dataset("Age,Fare,SibSp,Parch\n22,7.25,1,0\n,71.5,1,0\n38,8,0,0\nabc,10,0,2\n");
        let summary = NumericSummary::from_dataset(dataset.view(), &Schema::default()).unwrap();

        let age = summary.get("Age").unwrap();
        assert_eq!(age.count, 2);
        assert_eq!(age.mean, 30.0);
        assert_eq!(age.median, 22.0);
        assert_eq!(age.std_dev, 8.0);

        let parch = summary.get("Parch").unwrap();
        assert_eq!(parch.count, 4);
        assert_eq!(parch.median, 0.0);
    }

    #[test]
    fn test_empty_column_is_omitted() {
        let dataset = dataset("Age,Fare,SibSp,Parch\n,7.25,1,0\n,8,0,0\n");
        let summary = NumericSummary::from_dataset(dataset.view(), &Schema::default()).unwrap();
        assert!(summary.get("Age").is_none());
        let columns = summary
            .columns
            .iter()
            .map(|c| c.column.as_str())
            .collect::<Vec<_>>();
        assert_eq!(columns, ["Fare", "SibSp", "Parch"]);
    }

    #[test]
    fn test_missing_column() {
        let dataset = dataset("Age,Fare\n1,2\n");
        assert_eq!(
            NumericSummary::from_dataset(dataset.view(), &Schema::default()),
            Err(AnalysisError::MissingColumn {
                column: "SibSp".to_owned()
            })
        );
    }
}
