//! Core geometry for `stereo-measure`.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Pt2`, `Pt3`),
//! - pinhole intrinsics and their rescaling to a working resolution,
//! - disparity-based depth estimation for rectified stereo pairs,
//! - back-projection size measurement at a known depth.
//!
//! Every operation is a pure function over immutable value types; nothing
//! in this crate holds state across calls, so all entry points are safe to
//! invoke concurrently without synchronization.

/// Disparity-based depth estimation.
pub mod depth;
/// Failure taxonomy shared by all estimators.
pub mod error;
/// Pinhole intrinsics and resolution rescaling.
pub mod intrinsics;
/// Linear algebra type aliases.
pub mod math;
/// Back-projection and planar size measurement.
pub mod size;

pub use depth::*;
pub use error::*;
pub use intrinsics::*;
pub use math::*;
pub use size::*;
