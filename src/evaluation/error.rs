use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("measurement set has no '{name}' value to order the entry by")]
    MissingOrderingMeasurement { name: String },

    #[error("entry index {index} out of range (curve holds {len} entries)")]
    EntryOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
