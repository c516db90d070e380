use log::debug;
use serde::{Deserialize, Serialize};

use crate::{MeasureError, Pt2, Pt3, Real, ScaledIntrinsics};

/// Planar size measurement between two back-projected points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeEstimate {
    /// Euclidean distance between the two points in the X-Y plane, cm.
    pub size_cm: Real,
    /// Signed X extent `X2 - X1`, cm.
    pub dx_cm: Real,
    /// Signed Y extent `Y2 - Y1`, cm.
    pub dy_cm: Real,
}

/// Back-project a pixel to a 3D camera-space point at a known depth.
///
/// `X = (u - cx') * Z / fx'`, `Y = (v - cy') * Z / fy'`, with Z passed
/// through unchanged. Fails with [`MeasureError::InvalidDepth`] unless
/// `z_cm` is positive and finite.
pub fn back_project(p: &Pt2, z_cm: Real, k: &ScaledIntrinsics) -> Result<Pt3, MeasureError> {
    if !z_cm.is_finite() || z_cm <= 0.0 {
        return Err(MeasureError::InvalidDepth);
    }
    if !k.has_valid_focals() {
        return Err(MeasureError::InvalidDimension);
    }

    let x = (p.x - k.cx) * z_cm / k.fx;
    let y = (p.y - k.cy) * z_cm / k.fy;
    Ok(Pt3::new(x, y, z_cm))
}

/// Measure the real-world distance between two pixels assumed to lie at the
/// same depth.
///
/// Both points are back-projected with the shared `z_cm` (single-plane
/// assumption: the measured object is treated as parallel to the image
/// plane, which is not re-validated against the scene). The result is the
/// Euclidean distance in the X-Y plane at that depth.
pub fn estimate_size(
    p1: &Pt2,
    p2: &Pt2,
    z_cm: Real,
    k: &ScaledIntrinsics,
) -> Result<SizeEstimate, MeasureError> {
    let a = back_project(p1, z_cm, k)?;
    let b = back_project(p2, z_cm, k)?;

    let dx_cm = b.x - a.x;
    let dy_cm = b.y - a.y;
    let size_cm = dx_cm.hypot(dy_cm);
    debug!("size={size_cm:.2} cm (dx={dx_cm:.2}, dy={dy_cm:.2}) at z={z_cm:.2} cm");

    Ok(SizeEstimate {
        size_cm,
        dx_cm,
        dy_cm,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn identity_scaled() -> ScaledIntrinsics {
        ScaledIntrinsics {
            fx: 1000.0,
            fy: 1000.0,
            cx: 640.0,
            cy: 360.0,
        }
    }

    #[test]
    fn back_projection_at_known_depth() {
        let k = identity_scaled();
        let p = back_project(&Pt2::new(700.0, 400.0), 300.0, &k).unwrap();
        assert_relative_eq!(p.x, 18.0);
        assert_relative_eq!(p.y, 12.0);
        assert_relative_eq!(p.z, 300.0);
    }

    #[test]
    fn horizontal_extent_at_known_depth() {
        // (700-640)*300/1000 = 18, (750-640)*300/1000 = 33 => dx = 15.
        let k = identity_scaled();
        let est = estimate_size(&Pt2::new(700.0, 400.0), &Pt2::new(750.0, 400.0), 300.0, &k)
            .unwrap();
        assert_relative_eq!(est.dx_cm, 15.0);
        assert_relative_eq!(est.dy_cm, 0.0);
        assert_relative_eq!(est.size_cm, 15.0);
    }

    #[test]
    fn coincident_points_measure_zero() {
        let k = identity_scaled();
        let p = Pt2::new(700.0, 400.0);
        let est = estimate_size(&p, &p, 300.0, &k).unwrap();
        assert_relative_eq!(est.size_cm, 0.0);
    }

    #[test]
    fn extents_are_signed() {
        let k = identity_scaled();
        let est = estimate_size(&Pt2::new(750.0, 400.0), &Pt2::new(700.0, 300.0), 300.0, &k)
            .unwrap();
        assert_relative_eq!(est.dx_cm, -15.0);
        assert_relative_eq!(est.dy_cm, -30.0);
        assert!(est.size_cm > 0.0);
    }

    #[test]
    fn non_positive_depth_rejected() {
        let k = identity_scaled();
        let p1 = Pt2::new(700.0, 400.0);
        let p2 = Pt2::new(750.0, 400.0);
        for z in [0.0, -1.0, Real::NAN, Real::INFINITY] {
            assert_eq!(
                estimate_size(&p1, &p2, z, &k),
                Err(MeasureError::InvalidDepth)
            );
        }
    }

    #[test]
    fn zero_focal_rejected() {
        let k = ScaledIntrinsics {
            fx: 1000.0,
            fy: 0.0,
            cx: 640.0,
            cy: 360.0,
        };
        assert_eq!(
            estimate_size(&Pt2::new(700.0, 400.0), &Pt2::new(750.0, 400.0), 300.0, &k),
            Err(MeasureError::InvalidDimension)
        );
    }
}
