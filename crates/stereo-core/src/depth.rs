use log::debug;
use serde::{Deserialize, Serialize};

use crate::{MeasureError, Pt2, Real, ScaledIntrinsics};

/// Minimum horizontal disparity (pixels) considered resolvable.
///
/// Below this the two clicks sit on effectively the same pixel column and
/// the depth estimate diverges.
pub const MIN_DISPARITY_PX: Real = 1.0;

/// Depth estimate together with the disparity that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthEstimate {
    /// Estimated depth in centimetres.
    pub z_cm: Real,
    /// Horizontal disparity in pixels.
    pub disparity_px: Real,
}

/// Horizontal pixel disparity between corresponding points.
///
/// Only the column coordinates enter: the pair is assumed rectified, so
/// corresponding points share a row and any vertical mismatch is ignored
/// rather than corrected. Symmetric under swapping the two points.
pub fn disparity(p_left: &Pt2, p_right: &Pt2) -> Real {
    (p_left.x - p_right.x).abs()
}

/// Estimate the depth of a scene point from a rectified stereo
/// correspondence.
///
/// Applies `Z = fx' * B / d` with the disparity `d` in pixels and the
/// baseline `B` in centimetres; the result carries the baseline's unit.
/// Fails with [`MeasureError::DegenerateDisparity`] when the disparity is
/// below [`MIN_DISPARITY_PX`] instead of returning an unbounded depth, and
/// with [`MeasureError::InvalidDimension`] when the baseline is not a
/// positive finite distance.
pub fn estimate_depth(
    p_left: &Pt2,
    p_right: &Pt2,
    intrinsics: &ScaledIntrinsics,
    baseline_cm: Real,
) -> Result<DepthEstimate, MeasureError> {
    if !intrinsics.has_valid_focals() {
        return Err(MeasureError::InvalidDimension);
    }
    if !baseline_cm.is_finite() || baseline_cm <= 0.0 {
        return Err(MeasureError::InvalidDimension);
    }

    let d = disparity(p_left, p_right);
    if !d.is_finite() || d < MIN_DISPARITY_PX {
        return Err(MeasureError::DegenerateDisparity);
    }

    let z_cm = intrinsics.fx * baseline_cm / d;
    debug!("disparity={d:.2} px, z={z_cm:.2} cm");

    Ok(DepthEstimate {
        z_cm,
        disparity_px: d,
    })
}
