//! Request/response layer over the `stereo-core` geometry.
//!
//! This crate turns loosely-shaped click payloads into validated, strongly
//! typed inputs, runs the depth or size computation against a fixed rig
//! configuration, and shapes the result (or a structured error code) for a
//! serving layer to marshal.
//!
//! The engine itself is stateless: any multi-click sequencing is carried by
//! the caller as an explicit [`MeasureStep`] value passed back and forth on
//! each request.

/// Rig configuration supplied once at startup.
pub mod config;
/// Measurement requests, validation, and entry points.
pub mod measure;

pub use config::RigConfig;
pub use measure::{
    run_compute_depth, run_compute_size, ClickPoint, DepthReport, DepthRequest, MeasureOutcome,
    MeasureStep, SizeReport, SizeRequest,
};
