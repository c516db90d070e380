use serde::{Deserialize, Serialize};

use crate::{MeasureError, Real};

/// Pinhole intrinsics measured at a fixed reference resolution.
///
/// Calibration is performed once at `calib_width` x `calib_height`; working
/// images at other resolutions get their own [`ScaledIntrinsics`] via
/// [`scale_to`](CalibrationReference::scale_to).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationReference {
    /// Focal length in pixels along X.
    pub fx: Real,
    /// Focal length in pixels along Y.
    pub fy: Real,
    /// Principal point X coordinate in pixels.
    pub cx: Real,
    /// Principal point Y coordinate in pixels.
    pub cy: Real,
    /// Image width the intrinsics were calibrated at.
    pub calib_width: u32,
    /// Image height the intrinsics were calibrated at.
    pub calib_height: u32,
}

impl CalibrationReference {
    /// Check that focal lengths and the calibration resolution are positive
    /// and finite.
    pub fn validate(&self) -> Result<(), MeasureError> {
        let focals_ok =
            self.fx.is_finite() && self.fy.is_finite() && self.fx > 0.0 && self.fy > 0.0;
        let centers_ok = self.cx.is_finite() && self.cy.is_finite();
        if !focals_ok || !centers_ok || self.calib_width == 0 || self.calib_height == 0 {
            return Err(MeasureError::InvalidDimension);
        }
        Ok(())
    }

    /// Rescale the reference calibration to a working image resolution.
    ///
    /// Each intrinsic scales linearly with the ratio of target to reference
    /// resolution: `fx' = fx * img_width / calib_width`, and analogously for
    /// `fy`, `cx`, `cy`. Valid for uniformly resized (not cropped) images,
    /// where the pinhole proportions are preserved.
    pub fn scale_to(
        &self,
        img_width: u32,
        img_height: u32,
    ) -> Result<ScaledIntrinsics, MeasureError> {
        self.validate()?;
        if img_width == 0 || img_height == 0 {
            return Err(MeasureError::InvalidDimension);
        }

        let sx = Real::from(img_width) / Real::from(self.calib_width);
        let sy = Real::from(img_height) / Real::from(self.calib_height);

        Ok(ScaledIntrinsics {
            fx: self.fx * sx,
            fy: self.fy * sy,
            cx: self.cx * sx,
            cy: self.cy * sy,
        })
    }
}

/// Intrinsics rescaled to the working image resolution.
///
/// Derived per request and never cached; recomputing is a handful of
/// multiplications and keeps the engine stateless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledIntrinsics {
    /// Focal length in pixels along X at the working resolution.
    pub fx: Real,
    /// Focal length in pixels along Y at the working resolution.
    pub fy: Real,
    /// Principal point X at the working resolution.
    pub cx: Real,
    /// Principal point Y at the working resolution.
    pub cy: Real,
}

impl ScaledIntrinsics {
    /// Returns `true` when both focal lengths are finite and non-zero,
    /// i.e. safe to divide by.
    pub fn has_valid_focals(&self) -> bool {
        self.fx.is_finite()
            && self.fy.is_finite()
            && self.fx.abs() > Real::EPSILON
            && self.fy.abs() > Real::EPSILON
    }
}
