use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("aws-sdk error: {0}")]
    SdkError(Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("failed to convert item: {0}")]
    Serde(#[from] serde_dynamo::Error),
    #[error("not found item from table {table}: {key}")]
    NotFound { table: String, key: String },
    #[error("missing key attribute: {0}")]
    MissingKey(&'static str),
    #[error("unknown event type: {0}")]
    UnknownEventType(String),
    #[error("invalid event config {file}: {source}")]
    InvalidEventConfig {
        file: &'static str,
        source: serde_json::Error,
    },
}
