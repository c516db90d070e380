//! Wire-shaped records for the measurement operations.

use serde::{Deserialize, Serialize};
use stereo_core::{MeasureError, Real};

/// A user click in the working image's pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickPoint {
    /// Column coordinate (pixels).
    pub x: Real,
    /// Row coordinate (pixels).
    pub y: Real,
}

/// Input for the depth operation: one click per stereo view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DepthRequest {
    /// Click in the left image.
    pub p_left: ClickPoint,
    /// Corresponding click in the right image.
    pub p_right: ClickPoint,
    /// Working image width in pixels.
    pub img_w: u32,
    /// Working image height in pixels.
    pub img_h: u32,
}

/// Result payload for the depth operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthReport {
    /// Estimated depth in centimetres.
    pub z_cm: Real,
    /// Disparity that produced it, in pixels.
    pub disparity_px: Real,
}

/// Input for the size operation: two clicks on the same image plus the
/// depth obtained in the preceding depth step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SizeRequest {
    /// First endpoint of the measured extent.
    pub p1: ClickPoint,
    /// Second endpoint of the measured extent.
    pub p2: ClickPoint,
    /// Shared depth of both endpoints in centimetres.
    pub z_cm: Real,
    /// Working image width in pixels.
    pub img_w: u32,
    /// Working image height in pixels.
    pub img_h: u32,
}

/// Result payload for the size operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeReport {
    /// Euclidean planar distance between the endpoints, cm.
    pub size_cm: Real,
    /// Signed X extent, cm.
    pub dx_cm: Real,
    /// Signed Y extent, cm.
    pub dy_cm: Real,
}

/// Wire-shaped outcome: either a report or a structured error payload.
///
/// Serializes a success as the report itself and a failure as
/// `{ "error": "<code>" }`, so the serving layer can pass either straight
/// through to the client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasureOutcome<T> {
    /// Successful measurement.
    Ok(T),
    /// Structured failure code.
    Err {
        /// Which check or computation rejected the request.
        error: MeasureError,
    },
}

impl<T> From<Result<T, MeasureError>> for MeasureOutcome<T> {
    fn from(res: Result<T, MeasureError>) -> Self {
        match res {
            Ok(report) => MeasureOutcome::Ok(report),
            Err(error) => MeasureOutcome::Err { error },
        }
    }
}

/// Which click the caller collects next.
///
/// The measurement engine is stateless; a serving layer that walks a user
/// through the four-click flow passes this value out with each response and
/// back in with the next request, advancing it on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureStep {
    /// Awaiting the left-image click of the depth pair.
    DepthLeft,
    /// Awaiting the right-image click of the depth pair.
    DepthRight,
    /// Awaiting the first endpoint of the size measurement.
    SizeFirst,
    /// Awaiting the second endpoint of the size measurement.
    SizeSecond,
}

impl MeasureStep {
    /// The step that follows a successful click at this one. Wraps around
    /// after the final size click so a new measurement can begin.
    pub fn next(self) -> MeasureStep {
        match self {
            MeasureStep::DepthLeft => MeasureStep::DepthRight,
            MeasureStep::DepthRight => MeasureStep::SizeFirst,
            MeasureStep::SizeFirst => MeasureStep::SizeSecond,
            MeasureStep::SizeSecond => MeasureStep::DepthLeft,
        }
    }

    /// Whether this step belongs to the depth half of the flow.
    pub fn is_depth_phase(self) -> bool {
        matches!(self, MeasureStep::DepthLeft | MeasureStep::DepthRight)
    }
}
