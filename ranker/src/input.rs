use std::io::Read;

use thiserror::Error;
use topsis_ranking::Decision;

#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("line {line}: '{field}' is not a number")]
    NotANumber { line: u64, field: String },
    #[error("line {line}: {source}")]
    Rejected {
        line: u64,
        #[source]
        source: topsis_ranking::Error,
    },
}

/// Save every CSV row of criterion values into `decision`, in order. A first line with no numeric
/// field is treated as a header. Returns the number of alternatives saved.
pub fn load_alternatives<R: Read>(reader: R, decision: &mut Decision) -> Result<usize, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(index as u64 + 1);
        if index == 0 && is_header(&record) {
            tracing::debug!(header = ?record, "skipping header");
            continue;
        }
        let values = parse_record(&record, line)?;
        decision
            .append_alternative(&values)
            .map_err(|source| InputError::Rejected { line, source })?;
    }
    Ok(decision.len())
}

fn is_header(record: &csv::StringRecord) -> bool {
    record.iter().all(|field| field.parse::<f64>().is_err())
}

fn parse_record(record: &csv::StringRecord, line: u64) -> Result<Vec<f64>, InputError> {
    record
        .iter()
        .map(|field| {
            field.parse::<f64>().map_err(|_| InputError::NotANumber {
                line,
                field: field.to_string(),
            })
        })
        .collect()
}
