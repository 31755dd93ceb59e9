use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while scraping and converting ClickHouse responses.
#[derive(Debug, Error)]
pub enum Error {
    /// The request to the ClickHouse HTTP interface failed.
    #[error("clickhouse request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// A non-blank response row did not have the column count the schema
    /// expects. `row` indexes raw input lines, blank lines included.
    #[error("unexpected field count on line {row}: {line}")]
    Format { row: usize, line: String },

    /// A column expected to hold a number could not be parsed.
    #[error("invalid numeric value {text:?} in column {column}")]
    Parse { column: usize, text: String },

    #[error("metric registration failed: {0}")]
    Prometheus(#[from] prometheus::Error),
}
