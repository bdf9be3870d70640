use nalgebra as na;
use na::{Point3, Vector4};

/// Three vertices in caller-significant winding order.
pub type Triangle<V> = [V; 3];

/// Vertex as submitted between `begin` and `end`: object-space position and the color
/// that was current at submission time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub color: Vector4<f32>,
}

/// Vertex after perspective divide and viewport mapping.
/// x, y are in pixels with the origin at the top left, z is the normalized device depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenVertex {
    pub position: Point3<f32>,
    pub color: Vector4<f32>,
}
