use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure taxonomy for the measurement engine.
///
/// Every variant is a permanent input problem: the operations are
/// deterministic and side-effect free, so nothing here is worth retrying.
/// The serde representation is the bare variant name, which is exactly the
/// error code the serving layer puts on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MeasureError {
    /// Non-positive image dimension, zero/non-finite focal length, or a
    /// non-positive baseline.
    #[error("invalid image dimension, focal length, or baseline")]
    InvalidDimension,
    /// Horizontal disparity too small to resolve depth; the two clicks
    /// land on (nearly) the same pixel column.
    #[error("disparity too small to resolve depth")]
    DegenerateDisparity,
    /// Non-positive or non-finite depth supplied to size estimation.
    #[error("depth must be positive")]
    InvalidDepth,
    /// Point coordinates outside the declared image bounds.
    #[error("point outside declared image bounds")]
    OutOfBounds,
}
