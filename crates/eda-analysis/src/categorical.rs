//! Value frequencies for categorical columns

use indexmap::IndexMap;

use crate::{AnalysisError, dataset::DatasetView, percentage, schema::Schema, value::Value};

/// Label under which missing values are counted.
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalSummary {
    pub tables: Vec<FrequencyTable>,
}

/// Frequencies of one column's values, in order of first appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    pub column: String,
    pub total: usize,
    pub entries: Vec<Frequency>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frequency {
    pub value: String,
    pub count: usize,
    /// Share of all records, in percent.
    pub percentage: f64,
}

/// Display label of a grouping value; missing values map to [`UNKNOWN_LABEL`].
pub(crate) fn group_label(value: &Value) -> String {
    if value.is_missing() {
        UNKNOWN_LABEL.to_owned()
    } else {
        value.to_string()
    }
}

impl CategoricalSummary {
    pub fn from_dataset(view: DatasetView<'_>, schema: &Schema) -> Result<Self, AnalysisError> {
        if view.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }
        let tables = schema
            .categorical
            .iter()
            .map(|column| FrequencyTable::from_column(view, column))
            .collect::<Result<_, _>>()?;
        Ok(Self { tables })
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&FrequencyTable> {
        self.tables.iter().find(|t| t.column == column)
    }
}

impl FrequencyTable {
    /// Counts the values of one column in a single pass.
    pub fn from_column(view: DatasetView<'_>, column: &str) -> Result<Self, AnalysisError> {
        let index = view.require_column(column)?;
        let mut counts = IndexMap::<String, usize>::new();
        for value in view.values(index) {
            *counts.entry(group_label(value)).or_insert(0) += 1;
        }

        let total = view.len();
        let entries = counts
            .into_iter()
            .map(|(value, count)| Frequency {
                value,
                count,
                percentage: percentage(count, total),
            })
            .collect();
        Ok(Self {
            column: column.to_owned(),
            total,
            entries,
        })
    }

    #[must_use]
    pub fn get(&self, value: &str) -> Option<&Frequency> {
        self.entries.iter().find(|e| e.value == value)
    }
}
