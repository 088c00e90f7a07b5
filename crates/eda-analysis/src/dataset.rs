//! Record model: records, datasets and borrowed dataset views
//!
//! A [`Dataset`] is an ordered list of [`Record`]s that share one column
//! list. Every record carries the [`Origin`] it was loaded from, both as a
//! typed tag and as the trailing [`ORIGIN_COLUMN`] value, so that generic
//! column code (missing-value analysis, CSV export) sees the origin like any
//! other column.
//!
//! Records are immutable once built. Analyses read the data through a
//! [`DatasetView`], a cheap borrowed window over a contiguous run of records
//! (for example the train-only prefix of a merged dataset).

use std::ops::Range;

use crate::{
    AnalysisError,
    load::Table,
    value::{Origin, Value},
};

/// Name of the column holding each record's origin tag.
pub const ORIGIN_COLUMN: &str = "origin";

static MISSING: Value = Value::Missing;

/// A single row of the working dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    origin: Origin,
    values: Vec<Value>,
}

impl Record {
    /// Creates a record from data values; the origin value is appended.
    pub(crate) fn new(origin: Origin, mut values: Vec<Value>) -> Self {
        values.push(Value::Text(origin.to_string()));
        Self { origin, values }
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// All values including the trailing origin value, in column order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, column_index: usize) -> Option<&Value> {
        self.values.get(column_index)
    }
}

/// An ordered, schema-homogeneous sequence of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Creates a dataset from data columns and records built against them.
    ///
    /// `columns` must not contain [`ORIGIN_COLUMN`]; it is appended here.
    pub(crate) fn new(mut columns: Vec<String>, records: Vec<Record>) -> Self {
        debug_assert!(records.iter().all(|r| r.values.len() == columns.len() + 1));
        columns.push(ORIGIN_COLUMN.to_owned());
        Self { columns, records }
    }

    /// Creates a single-origin dataset from a loaded table.
    ///
    /// Rows shorter than the header are padded with [`Value::Missing`].
    #[must_use]
    pub fn from_table(table: Table, origin: Origin) -> Self {
        let width = table.columns.len();
        let records = table
            .rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Value::Missing);
                Record::new(origin, row)
            })
            .collect();
        Self::new(table.columns, records)
    }

    /// Column names in order, ending with [`ORIGIN_COLUMN`].
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the first `n` records (or all of them if there are fewer).
    #[must_use]
    pub fn preview(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    /// Borrows the whole dataset as a view.
    #[must_use]
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView {
            columns: &self.columns,
            records: &self.records,
        }
    }

    /// Borrows a contiguous run of records as a view.
    #[must_use]
    pub(crate) fn view_range(&self, range: Range<usize>) -> DatasetView<'_> {
        DatasetView {
            columns: &self.columns,
            records: &self.records[range],
        }
    }
}

/// A borrowed window over a contiguous run of a dataset's records.
#[derive(Debug, Clone, Copy)]
pub struct DatasetView<'a> {
    columns: &'a [String],
    records: &'a [Record],
}

impl<'a> DatasetView<'a> {
    #[must_use]
    pub fn columns(&self) -> &'a [String] {
        self.columns
    }

    #[must_use]
    pub fn records(&self) -> &'a [Record] {
        self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Like [`column_index`](Self::column_index), but absence is an error.
    pub fn require_column(&self, column: &str) -> Result<usize, AnalysisError> {
        self.column_index(column)
            .ok_or_else(|| AnalysisError::MissingColumn {
                column: column.to_owned(),
            })
    }

    /// Iterates over one column's values, in record order.
    pub fn values(&self, column_index: usize) -> impl Iterator<Item = &'a Value> + use<'a> {
        self.records
            .iter()
            .map(move |record| record.get(column_index).unwrap_or(&MISSING))
    }
}
