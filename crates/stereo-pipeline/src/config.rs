use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use stereo_core::{CalibrationReference, Real};

/// Stereo rig description: reference calibration plus physical baseline.
///
/// Supplied once at startup (typically from a JSON file) and read-only for
/// the lifetime of the process. The serde defaults carry the rig the system
/// was originally calibrated on: a 1280x720 capture moved 10 cm between the
/// left and right shots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigConfig {
    /// Intrinsics at the calibration resolution.
    #[serde(default = "default_reference")]
    pub reference: CalibrationReference,
    /// Distance between the two camera viewpoints in centimetres.
    #[serde(default = "default_baseline_cm")]
    pub baseline_cm: Real,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            reference: default_reference(),
            baseline_cm: default_baseline_cm(),
        }
    }
}

fn default_reference() -> CalibrationReference {
    CalibrationReference {
        fx: 991.396,
        fy: 991.628,
        cx: 671.244,
        cy: 371.286,
        calib_width: 1280,
        calib_height: 720,
    }
}

fn default_baseline_cm() -> Real {
    10.0
}

impl RigConfig {
    /// Reject rigs that cannot produce a meaningful measurement.
    pub fn validate(&self) -> Result<()> {
        self.reference
            .validate()
            .map_err(|e| anyhow::anyhow!("reference calibration: {e}"))?;
        ensure!(
            self.baseline_cm.is_finite() && self.baseline_cm > 0.0,
            "baseline must be a positive distance in cm (got {})",
            self.baseline_cm
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rig_is_valid() {
        RigConfig::default().validate().unwrap();
    }

    #[test]
    fn empty_json_fills_defaults() {
        let rig: RigConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(rig.reference.calib_width, 1280);
        assert_eq!(rig.reference.calib_height, 720);
        assert!((rig.baseline_cm - 10.0).abs() < 1e-12);
    }

    #[test]
    fn partial_json_overrides_baseline_only() {
        let rig: RigConfig = serde_json::from_str(r#"{ "baseline_cm": 6.0 }"#).unwrap();
        assert!((rig.baseline_cm - 6.0).abs() < 1e-12);
        assert!((rig.reference.fx - 991.396).abs() < 1e-9);
    }

    #[test]
    fn non_positive_baseline_rejected() {
        let rig = RigConfig {
            baseline_cm: 0.0,
            ..RigConfig::default()
        };
        assert!(rig.validate().is_err());
    }
}
