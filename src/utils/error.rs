use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("{statistic}: no qualifying flight records")]
    EmptyInput { statistic: &'static str },
    #[error("malformed timestamp: {date:?} {time:?}")]
    MalformedTimestamp { date: String, time: String },
    #[error("missing field: {field}")]
    MissingField { field: &'static str },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP status: {0}")]
    HttpStatus(u16),
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Serde JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
