//! Delimited-text loading
//!
//! Turns a CSV (or other single-byte-delimited) file into a [`Table`]: a
//! header plus rows of typed [`Value`]s. Parsing is strict about structure:
//! a row whose field count differs from the header is a parse error rather
//! than being silently padded or truncated.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

use crate::value::{Origin, Value};

/// Options controlling how a delimited-text file is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treat the first row as column names. Without a header, columns are
    /// named `Column1`, `Column2`, ...
    pub header: bool,
    /// Convert fields to numbers/booleans where they look like one.
    pub infer_types: bool,
    /// Drop rows in which every field is blank.
    pub skip_blank_lines: bool,
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            header: true,
            infer_types: true,
            skip_blank_lines: true,
            delimiter: b',',
        }
    }
}

/// A parsed file: column names and rows of values, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("{origin} file not found: {}", path.display())]
    MissingInputFile { origin: Origin, path: PathBuf },
    #[display("failed to open {origin} file {}: {source}", path.display())]
    Io {
        origin: Origin,
        path: PathBuf,
        source: io::Error,
    },
    #[display("failed to parse {origin} file {}: {source}", path.display())]
    Parse {
        origin: Origin,
        path: PathBuf,
        source: csv::Error,
    },
}

/// Parses delimited text from any reader.
///
/// # Examples
///
/// ```
/// use eda_analysis::{load::{ParseOptions, parse_table}, value::Value};
///
/// let text = "PassengerId,Sex,Age\n1,male,22\n2,female,\n";
/// let table = parse_table(text.as_bytes(), &ParseOptions::default()).unwrap();
/// assert_eq!(table.columns, ["PassengerId", "Sex", "Age"]);
/// assert_eq!(table.rows[1][2], Value::Missing);
/// ```
pub fn parse_table<R>(reader: R, options: &ParseOptions) -> Result<Table, csv::Error>
where
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.header)
        .from_reader(reader);

    let mut columns = if options.header {
        reader
            .headers()?
            .iter()
            .map(|name| name.trim().to_owned())
            .collect::<Vec<_>>()
    } else {
        vec![]
    };

    let convert = if options.infer_types {
        Value::infer
    } else {
        Value::text
    };

    let mut rows = vec![];
    for record in reader.records() {
        let record = record?;
        if options.skip_blank_lines && record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(convert).collect::<Vec<_>>());
    }

    if !options.header {
        let width = rows.first().map_or(0, Vec::len);
        columns = (1..=width).map(|i| format!("Column{i}")).collect();
    }

    Ok(Table { columns, rows })
}

/// Opens and parses one input file.
pub fn load_table<P>(origin: Origin, path: P, options: &ParseOptions) -> Result<Table, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::MissingInputFile {
                origin,
                path: path.to_owned(),
            }
        } else {
            LoadError::Io {
                origin,
                path: path.to_owned(),
                source,
            }
        }
    })?;

    let table = parse_table(BufReader::new(file), options).map_err(|source| LoadError::Parse {
        origin,
        path: path.to_owned(),
        source,
    })?;
    log::debug!(
        "parsed {origin} file {}: {} columns, {} rows",
        path.display(),
        table.columns.len(),
        table.rows.len()
    );
    Ok(table)
}
