use crate::core::classify::classify;
use crate::core::{Classification, ConfigProvider, Pipeline, Record, Storage};
use crate::domain::model::ReportRow;
use crate::utils::error::{ClassifyError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub struct ClassifierPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ClassifierPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Splits each line of `data` on single spaces. Every line, blank ones
/// included, needs at least `<id> <domain> <score>`.
pub fn parse_records(data: &[u8]) -> Result<Vec<Record>> {
    let text = std::str::from_utf8(data)
        .map_err(|e| ClassifyError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

    text.lines()
        .enumerate()
        .map(|(index, line)| {
            let fields: Vec<&str> = line.split(' ').collect();
            match fields.as_slice() {
                [id, domain, score, ..] => Ok(Record::new(*id, *domain, *score)),
                _ => Err(ClassifyError::MalformedRecord {
                    line: index as u64 + 1,
                    fields: fields.len(),
                }),
            }
        })
        .collect()
}

pub fn render_report(classification: &Classification) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.serialize(ReportRow::from(classification))?;
    let buf = writer.into_inner().map_err(|e| e.into_error())?;

    String::from_utf8(buf)
        .map_err(|e| ClassifyError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

impl<S: Storage, C: ConfigProvider> Pipeline for ClassifierPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Record>> {
        let path = self.config.input_path();
        tracing::debug!("Reading records from: {}", path.display());

        // The file handle is closed once the bytes are in memory.
        let data = self.storage.read_file(path)?;
        parse_records(&data)
    }

    fn transform(&self, records: Vec<Record>) -> Result<Classification> {
        classify(self.config.pattern(), &records)
    }

    fn load(&self, classification: Classification) -> Result<String> {
        render_report(&classification)
    }
}
