//! Builders for the matrices the transform commands right-multiply onto the selected matrix.
//!
//! Projection matrices are computed in f64, since the command surface takes doubles, and narrowed
//! to f32 at the very end.

use nalgebra as na;
use na::{vector, Matrix4, Point3, Rotation3, Unit, Vector3, Vector4};

use crate::error::{GlError, GlResult};

/// Perspective projection for the given clip planes.
/// Degenerate planes and non-positive near/far distances are `InvalidValue`.
pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> GlResult<Matrix4<f32>> {
    if left == right || bottom == top || near == far {
        return Err(GlError::InvalidValue);
    }
    if near <= 0.0 || far <= 0.0 {
        return Err(GlError::InvalidValue);
    }

    let a = (right + left) / (right - left);
    let b = (top + bottom) / (top - bottom);
    let c = -(far + near) / (far - near);
    let d = -(2.0 * far * near) / (far - near);
    let projection = Matrix4::<f64>::new(
        2.0 * near / (right - left), 0.0,                         a,    0.0,
        0.0,                         2.0 * near / (top - bottom), b,    0.0,
        0.0,                         0.0,                         c,    d,
        0.0,                         0.0,                         -1.0, 0.0,
    );
    return Ok(projection.cast::<f32>());
}

/// Orthographic projection for the given clip planes. Degenerate planes are `InvalidValue`.
pub fn ortho(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> GlResult<Matrix4<f32>> {
    if left == right || bottom == top || near == far {
        return Err(GlError::InvalidValue);
    }

    let rl = right - left;
    let tb = top - bottom;
    let fn_ = far - near;
    let projection = Matrix4::<f64>::new(
        2.0 / rl, 0.0,      0.0,       -(right + left) / rl,
        0.0,      2.0 / tb, 0.0,       -(top + bottom) / tb,
        0.0,      0.0,      -2.0 / fn_, -(far + near) / fn_,
        0.0,      0.0,      0.0,       1.0,
    );
    return Ok(projection.cast::<f32>());
}

/// Rotation by `angle` degrees around the axis (x, y, z).
/// Returns `None` for an axis too short to normalize.
pub fn rotation(angle: f64, x: f64, y: f64, z: f64) -> Option<Matrix4<f32>> {
    let axis = Unit::try_new(vector![x as f32, y as f32, z as f32], f32::EPSILON)?;
    let rotation = Rotation3::from_axis_angle(&axis, (angle as f32).to_radians());
    return Some(rotation.to_homogeneous());
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix4<f32> {
    return Matrix4::new_nonuniform_scaling(&Vector3::new(x as f32, y as f32, z as f32));
}

pub fn translation(x: f64, y: f64, z: f64) -> Matrix4<f32> {
    return Matrix4::new_translation(&Vector3::new(x as f32, y as f32, z as f32));
}

/// Transformation of a point to homogenous coordinates.
pub fn to_hom_point(p: &Point3<f32>) -> Vector4<f32> {
    return vector![p.x, p.y, p.z, 1.0];
}

/// Transformation of a point from homogenous coordinates.
/// A w of exactly zero skips the division and keeps x, y, z as they are.
pub fn from_hom_point(v: &Vector4<f32>) -> Point3<f32> {
    if v.w == 0.0 {
        return Point3::new(v.x, v.y, v.z);
    }
    return Point3::new(v.x / v.w, v.y / v.w, v.z / v.w);
}
