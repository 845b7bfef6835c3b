use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dataset: {0}")]
    Dataset(#[source] serde_json::Error),
    #[error("classification {key:?}, row {row}: {source}")]
    Row {
        key: String,
        row: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("classification {key:?}, row {row}: expected a {kind} row")]
    KindMismatch {
        key: String,
        row: usize,
        kind: &'static str,
    },
    #[error("duplicate classification key {0:?}")]
    DuplicateKey(String),
    #[error("failed to encode output: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("terminal I/O failed: {0}")]
    Terminal(#[source] std::io::Error),
    #[error("unknown classification {0:?}")]
    UnknownClassification(String),
}
