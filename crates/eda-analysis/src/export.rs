//! Merged-dataset CSV and summary JSON exports
//!
//! Both exports refuse to write anything for an empty dataset.

use std::io::{self, Write};

use crate::{AnalysisError, dataset::Dataset, session::AnalysisSession, summary::Summary};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ExportError {
    #[display("no data to export")]
    EmptyDataset,
    #[display("failed to compute summary: {source}")]
    Analysis { source: AnalysisError },
    #[display("failed to write CSV: {source}")]
    Csv { source: csv::Error },
    #[display("failed to write JSON: {source}")]
    Json { source: serde_json::Error },
    #[display("failed to write output: {source}")]
    Io { source: io::Error },
}

/// Writes the dataset as CSV: a header row, then one line per record.
///
/// Missing values are written as empty fields. The trailing `origin` column
/// is included.
///
/// # Examples
///
/// ```
/// use eda_analysis::{
///     dataset::Dataset,
///     export::write_dataset_csv,
///     load::{ParseOptions, parse_table},
///     value::Origin,
/// };
///
/// let table = parse_table("Sex,Age\nmale,22\nfemale,\n".as_bytes(), &ParseOptions::default()).unwrap();
/// let dataset = Dataset::from_table(table, Origin::Train);
///
/// let mut out = vec![];
/// write_dataset_csv(&dataset, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Sex,Age,origin\nmale,22,train\nfemale,,train\n");
/// ```
pub fn write_dataset_csv<W>(dataset: &Dataset, writer: W) -> Result<(), ExportError>
where
    W: Write,
{
    if dataset.is_empty() {
        return Err(ExportError::EmptyDataset);
    }
    let mut writer = csv::Writer::from_writer(writer);
    writer
        .write_record(dataset.columns())
        .map_err(|source| ExportError::Csv { source })?;
    for record in dataset.records() {
        writer
            .write_record(record.values().iter().map(ToString::to_string))
            .map_err(|source| ExportError::Csv { source })?;
    }
    writer.flush().map_err(|source| ExportError::Io { source })?;
    log::debug!("exported {} records as CSV", dataset.len());
    Ok(())
}

/// Writes the pretty-printed summary JSON, followed by a newline.
pub fn write_summary_json<W>(session: &AnalysisSession, mut writer: W) -> Result<(), ExportError>
where
    W: Write,
{
    if session.dataset().is_empty() {
        return Err(ExportError::EmptyDataset);
    }
    let summary =
        Summary::from_session(session).map_err(|source| ExportError::Analysis { source })?;
    serde_json::to_writer_pretty(&mut writer, &summary)
        .map_err(|source| ExportError::Json { source })?;
    writeln!(writer).map_err(|source| ExportError::Io { source })?;
    writer.flush().map_err(|source| ExportError::Io { source })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        load::{ParseOptions, parse_table},
        schema::Schema,
        value::Origin,
    };

    const HEADER: &str = "PassengerId,Pclass,Name,Sex,Age,SibSp,Parch,Fare,Embarked";

    fn session(train_rows: &str) -> AnalysisSession {
        let options = ParseOptions::default();
        let train = format!("{HEADER},Survived\n{train_rows}");
        let test = format!("{HEADER}\n892,3,\"Kelly, Mr. James\",male,34.5,0,0,7.8292,Q\n");
        AnalysisSession::new(
            Schema::default(),
            parse_table(train.as_bytes(), &options).unwrap(),
            parse_table(test.as_bytes(), &options).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_csv_quotes_and_origin() {
        let session = session("1,3,\"Braund, Mr. Owen\",male,,1,0,7.25,S,0\n");
        let mut out = vec![];
        write_dataset_csv(session.dataset(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            [
                "PassengerId,Pclass,Name,Sex,Age,SibSp,Parch,Fare,Embarked,Survived,origin",
                "1,3,\"Braund, Mr. Owen\",male,,1,0,7.25,S,0,train",
                "892,3,\"Kelly, Mr. James\",male,34.5,0,0,7.8292,Q,,test",
            ]
        );
    }

    #[test]
    fn test_csv_reloads_to_same_values() {
        let session = session("1,3,\"Braund, Mr. Owen\",male,22,1,0,7.25,S,0\n");
        let mut out = vec![];
        write_dataset_csv(session.dataset(), &mut out).unwrap();
        let table = parse_table(out.as_slice(), &ParseOptions::default()).unwrap();
        assert_eq!(table.columns, session.dataset().columns());
        let reloaded = table.rows.iter().flatten().collect::<Vec<_>>();
        let original = session
            .dataset()
            .records()
            .iter()
            .flat_map(|r| r.values())
            .collect::<Vec<_>>();
        assert_eq!(reloaded, original);
    }

    #[test]
    fn test_empty_dataset_is_refused() {
        let dataset = Dataset::from_table(
            parse_table(HEADER.as_bytes(), &ParseOptions::default()).unwrap(),
            Origin::Train,
        );
        let mut out = vec![];
        assert!(matches!(
            write_dataset_csv(&dataset, &mut out),
            Err(ExportError::EmptyDataset)
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_summary_json() {
        let session = session("1,3,\"Braund, Mr. Owen\",male,22,1,0,7.25,S,0\n");
        let mut out = vec![];
        write_summary_json(&session, &mut out).unwrap();
        assert!(out.ends_with(b"}\n"));
        let summary: Summary = serde_json::from_slice(&out).unwrap();
        assert_eq!(summary.dataset_info.total_records, 2);
        assert_eq!(summary.numeric_stats.get("Age").unwrap().mean, 28.25);
    }
}
