use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock},
    path::{Path, PathBuf},
};

use anyhow::Context;
use eda_analysis::{
    config::AnalysisConfig,
    load::{self, ParseOptions},
    session::AnalysisSession,
    value::Origin,
};

/// Destination of an export: a file, or stdout when no path is given.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File(BufWriter<File>, PathBuf),
}

impl Output {
    pub fn from_output_path(output_path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = output_path else {
            return Ok(Self::Stdout(io::stdout().lock()));
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self::File(BufWriter::new(file), path.to_owned()))
    }

    pub fn display_path(&self) -> String {
        match self {
            Self::Stdout(_) => "stdout".to_owned(),
            Self::File(_, path) => path.display().to_string(),
        }
    }

    fn writer(&mut self) -> &mut dyn io::Write {
        match self {
            Self::Stdout(writer) => writer,
            Self::File(writer, _) => writer,
        }
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer().flush()
    }
}

fn read_json_file<T>(file_kind: &str, path: &Path) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;
    serde_json::from_reader(io::BufReader::new(file))
        .with_context(|| format!("Failed to parse {file_kind} file: {}", path.display()))
}

/// Read and validate an analysis configuration, or use the defaults.
pub fn read_config_file(path: Option<&Path>) -> anyhow::Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };
    let config: AnalysisConfig = read_json_file("configuration", path)?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration: {}", path.display()))?;
    log::info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Load both input files and merge them into a session.
///
/// The train file is parsed first; a failure there aborts before the test
/// file is read.
pub fn load_session(
    train: &Path,
    test: &Path,
    options: &ParseOptions,
    config: &AnalysisConfig,
) -> anyhow::Result<AnalysisSession> {
    let train_table = load::load_table(Origin::Train, train, options)?;
    log::info!(
        "Loaded {} train records from {}",
        train_table.rows.len(),
        train.display()
    );
    let test_table = load::load_table(Origin::Test, test, options)?;
    log::info!(
        "Loaded {} test records from {}",
        test_table.rows.len(),
        test.display()
    );

    let session = AnalysisSession::new(config.schema.clone(), train_table, test_table)
        .context("Input files do not match the configured schema")?;
    Ok(session)
}
