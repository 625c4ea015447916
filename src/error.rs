use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("{field} must be greater than zero")]
    ZeroIteration { field: &'static str },

    #[error("failed to write report to '{path}': {source}")]
    ReportIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("report serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;
