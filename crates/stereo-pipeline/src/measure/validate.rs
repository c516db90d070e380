//! Request validation ahead of any geometry.
//!
//! Serde already guarantees the fields are present and numeric (and that
//! dimensions are non-negative integers); the checks here enforce the
//! semantic constraints: nonzero dimensions, finite coordinates, and points
//! inside the declared image bounds. Out-of-bounds points are rejected,
//! never clamped, so a bad click cannot silently fabricate a measurement.

use stereo_core::{MeasureError, Pt2, Real};

use super::types::{ClickPoint, DepthRequest, SizeRequest};

/// Bounds-checked inputs for the depth operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedDepthInput {
    pub p_left: Pt2,
    pub p_right: Pt2,
    pub img_w: u32,
    pub img_h: u32,
}

/// Bounds-checked inputs for the size operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedSizeInput {
    pub p1: Pt2,
    pub p2: Pt2,
    pub z_cm: Real,
    pub img_w: u32,
    pub img_h: u32,
}

fn check_dimensions(img_w: u32, img_h: u32) -> Result<(), MeasureError> {
    if img_w == 0 || img_h == 0 {
        return Err(MeasureError::InvalidDimension);
    }
    Ok(())
}

fn check_point(p: &ClickPoint, img_w: u32, img_h: u32) -> Result<Pt2, MeasureError> {
    if !p.x.is_finite() || !p.y.is_finite() {
        return Err(MeasureError::OutOfBounds);
    }
    let (w, h) = (Real::from(img_w), Real::from(img_h));
    if p.x < 0.0 || p.x > w || p.y < 0.0 || p.y > h {
        return Err(MeasureError::OutOfBounds);
    }
    Ok(Pt2::new(p.x, p.y))
}

/// Convert a raw depth request into validated, strongly-typed inputs.
pub fn validate_depth_request(req: &DepthRequest) -> Result<ValidatedDepthInput, MeasureError> {
    check_dimensions(req.img_w, req.img_h)?;
    Ok(ValidatedDepthInput {
        p_left: check_point(&req.p_left, req.img_w, req.img_h)?,
        p_right: check_point(&req.p_right, req.img_w, req.img_h)?,
        img_w: req.img_w,
        img_h: req.img_h,
    })
}

/// Convert a raw size request into validated, strongly-typed inputs.
///
/// The depth value itself is range-checked by the size estimator; this only
/// rejects values serde let through that are not finite numbers.
pub fn validate_size_request(req: &SizeRequest) -> Result<ValidatedSizeInput, MeasureError> {
    check_dimensions(req.img_w, req.img_h)?;
    if !req.z_cm.is_finite() {
        return Err(MeasureError::InvalidDepth);
    }
    Ok(ValidatedSizeInput {
        p1: check_point(&req.p1, req.img_w, req.img_h)?,
        p2: check_point(&req.p2, req.img_w, req.img_h)?,
        z_cm: req.z_cm,
        img_w: req.img_w,
        img_h: req.img_h,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth_req() -> DepthRequest {
        DepthRequest {
            p_left: ClickPoint { x: 700.0, y: 400.0 },
            p_right: ClickPoint { x: 680.0, y: 400.0 },
            img_w: 1280,
            img_h: 720,
        }
    }

    #[test]
    fn accepts_in_bounds_points() {
        let input = validate_depth_request(&depth_req()).unwrap();
        assert_eq!(input.p_left, Pt2::new(700.0, 400.0));
        assert_eq!(input.img_w, 1280);
    }

    #[test]
    fn validated_inputs_compare_equal() {
        let a = validate_depth_request(&depth_req()).unwrap();
        let b = validate_depth_request(&depth_req()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn boundary_coordinates_are_inside() {
        let mut req = depth_req();
        req.p_left = ClickPoint { x: 0.0, y: 0.0 };
        req.p_right = ClickPoint {
            x: 1280.0,
            y: 720.0,
        };
        assert!(validate_depth_request(&req).is_ok());
    }

    #[test]
    fn rejects_out_of_bounds_point() {
        let mut req = depth_req();
        req.p_right = ClickPoint {
            x: 1280.5,
            y: 400.0,
        };
        assert_eq!(
            validate_depth_request(&req),
            Err(MeasureError::OutOfBounds)
        );

        req.p_right = ClickPoint { x: 680.0, y: -1.0 };
        assert_eq!(
            validate_depth_request(&req),
            Err(MeasureError::OutOfBounds)
        );
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let mut req = depth_req();
        req.p_left = ClickPoint {
            x: Real::NAN,
            y: 400.0,
        };
        assert_eq!(
            validate_depth_request(&req),
            Err(MeasureError::OutOfBounds)
        );
    }

    #[test]
    fn rejects_zero_dimensions() {
        let mut req = depth_req();
        req.img_w = 0;
        assert_eq!(
            validate_depth_request(&req),
            Err(MeasureError::InvalidDimension)
        );
    }

    #[test]
    fn size_request_needs_finite_depth() {
        let req = SizeRequest {
            p1: ClickPoint { x: 10.0, y: 10.0 },
            p2: ClickPoint { x: 20.0, y: 10.0 },
            z_cm: Real::INFINITY,
            img_w: 1280,
            img_h: 720,
        };
        assert_eq!(
            validate_size_request(&req),
            Err(MeasureError::InvalidDepth)
        );
    }
}
