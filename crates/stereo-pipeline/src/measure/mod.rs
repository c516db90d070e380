//! Depth and size measurement from user clicks.
//!
//! Two operations are exposed, shaped as request/report pairs:
//!
//! ```ignore
//! use stereo_pipeline::{run_compute_depth, run_compute_size, RigConfig};
//!
//! let rig = RigConfig::default();
//! let depth = run_compute_depth(&rig, &depth_request)?;
//! let size = run_compute_size(&rig, &size_request)?;
//! ```
//!
//! Requests arrive in the working image's pixel space together with that
//! image's dimensions; validation and intrinsics rescaling happen per call.
//! Failures come back as [`stereo_core::MeasureError`] codes, which
//! [`MeasureOutcome`] serializes into the `{ "error": "..." }` payload the
//! serving layer returns to the client.

mod functions;
mod types;
mod validate;

pub use functions::{run_compute_depth, run_compute_size};
pub use types::{
    ClickPoint, DepthReport, DepthRequest, MeasureOutcome, MeasureStep, SizeReport, SizeRequest,
};
pub use validate::{
    validate_depth_request, validate_size_request, ValidatedDepthInput, ValidatedSizeInput,
};
