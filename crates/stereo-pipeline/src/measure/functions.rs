use stereo_core::{estimate_depth, estimate_size, MeasureError};

use super::types::{DepthReport, DepthRequest, SizeReport, SizeRequest};
use super::validate::{validate_depth_request, validate_size_request};
use crate::RigConfig;

/// Run the depth operation end to end: validate the request, rescale the
/// rig's reference intrinsics to the working resolution, and estimate depth
/// from the stereo click pair.
pub fn run_compute_depth(
    rig: &RigConfig,
    req: &DepthRequest,
) -> Result<DepthReport, MeasureError> {
    let input = validate_depth_request(req)?;
    let k = rig.reference.scale_to(input.img_w, input.img_h)?;
    let est = estimate_depth(&input.p_left, &input.p_right, &k, rig.baseline_cm)?;
    Ok(DepthReport {
        z_cm: est.z_cm,
        disparity_px: est.disparity_px,
    })
}

/// Run the size operation end to end: validate the request, rescale the
/// rig's reference intrinsics, and measure the planar extent between the
/// two clicks at the supplied depth.
pub fn run_compute_size(rig: &RigConfig, req: &SizeRequest) -> Result<SizeReport, MeasureError> {
    let input = validate_size_request(req)?;
    let k = rig.reference.scale_to(input.img_w, input.img_h)?;
    let est = estimate_size(&input.p1, &input.p2, input.z_cm, &k)?;
    Ok(SizeReport {
        size_cm: est.size_cm,
        dx_cm: est.dx_cm,
        dy_cm: est.dy_cm,
    })
}
