//! Mathematical type definitions shared across the measurement crates.

use nalgebra::{Point2, Point3, Vector2, Vector3};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 3D vector with [`Real`] components.
pub type Vec3 = Vector3<Real>;
/// 2D point with [`Real`] coordinates (pixel space).
pub type Pt2 = Point2<Real>;
/// 3D point with [`Real`] coordinates (camera space, centimetres).
pub type Pt3 = Point3<Real>;
