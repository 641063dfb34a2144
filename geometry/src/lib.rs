//! Infinite lines in 3D space and their intersection.

mod intersection;
mod line3;

pub use intersection::*;
pub use line3::*;

pub type Matrix3 = glam::DMat3;
pub type Vector3 = glam::DVec3;
pub type Point3 = glam::DVec3;
