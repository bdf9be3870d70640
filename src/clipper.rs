//! Frustum clipping in homogeneous clip space.

use nalgebra as na;
use na::{Vector3, Vector4};

use crate::vertex::Triangle;

/// Vertex of a clipped polygon. `weights` are the barycentric coordinates of the vertex relative
/// to the source triangle, so attributes can be interpolated after clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedVertex {
    pub position: Vector4<f32>,
    pub weights: Vector3<f32>,
}

impl ClippedVertex {
    fn lerp(a: &ClippedVertex, b: &ClippedVertex, t: f32) -> ClippedVertex {
        return ClippedVertex {
            position: a.position.lerp(&b.position, t),
            weights: a.weights.lerp(&b.weights, t),
        };
    }
}

/// Intersects a clip-space triangle with the view volume.
///
/// Implementations return a convex polygon in the winding order of the input, either empty
/// (triangle fully outside) or with at least 3 vertices.
pub trait Clipper {
    fn clip_triangle(&self, triangle: &Triangle<Vector4<f32>>) -> Vec<ClippedVertex>;
}

/// Planes of the canonical view volume, -w <= x, y, z <= w, as (a, b, c, d) with
/// a point inside when a*x + b*y + c*z + d*w >= 0.
const CLIP_PLANES: [[f32; 4]; 6] = [
    [1.0, 0.0, 0.0, 1.0],  // left
    [-1.0, 0.0, 0.0, 1.0], // right
    [0.0, 1.0, 0.0, 1.0],  // bottom
    [0.0, -1.0, 0.0, 1.0], // top
    [0.0, 0.0, 1.0, 1.0],  // near
    [0.0, 0.0, -1.0, 1.0], // far
];

/// Sutherland-Hodgman clipper against the six frustum planes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrustumClipper;

impl FrustumClipper {
    fn distance(plane: &[f32; 4], p: &Vector4<f32>) -> f32 {
        return plane[0] * p.x + plane[1] * p.y + plane[2] * p.z + plane[3] * p.w;
    }

    fn clip_against_plane(polygon: &[ClippedVertex], plane: &[f32; 4]) -> Vec<ClippedVertex> {
        let mut output = Vec::with_capacity(polygon.len() + 1);
        for (i, current) in polygon.iter().enumerate() {
            let next = &polygon[(i + 1) % polygon.len()];
            let d_current = Self::distance(plane, &current.position);
            let d_next = Self::distance(plane, &next.position);
            if d_current >= 0.0 {
                output.push(*current);
            }
            // Edge crosses the plane, emitting the intersection point.
            if (d_current >= 0.0) != (d_next >= 0.0) {
                let t = d_current / (d_current - d_next);
                output.push(ClippedVertex::lerp(current, next, t));
            }
        }
        return output;
    }
}

impl Clipper for FrustumClipper {
    fn clip_triangle(&self, triangle: &Triangle<Vector4<f32>>) -> Vec<ClippedVertex> {
        let mut polygon: Vec<ClippedVertex> = triangle
            .iter()
            .zip([Vector3::x(), Vector3::y(), Vector3::z()])
            .map(|(position, weights)| ClippedVertex { position: *position, weights })
            .collect();

        for plane in &CLIP_PLANES {
            polygon = Self::clip_against_plane(&polygon, plane);
            if polygon.len() < 3 {
                return Vec::new();
            }
        }
        return polygon;
    }
}
