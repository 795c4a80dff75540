use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MeasureError {
    #[error("no reference points to evaluate against")]
    EmptyPoints,

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}
