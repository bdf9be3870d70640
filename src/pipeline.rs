//! End-of-primitive pipeline: everything `end()` does between the raw vertex list and the
//! triangles handed to the rasterizer.

use nalgebra as na;
use na::{Matrix4, Point3, Vector4};

use crate::assembly::assemble;
use crate::clipper::{ClippedVertex, Clipper};
use crate::cull::CullState;
use crate::error::GlResult;
use crate::gl::DrawMode;
use crate::transform::{from_hom_point, to_hom_point};
use crate::vertex::{ScreenVertex, Triangle, Vertex};

/// Rectangle of the frame buffer that normalized device coordinates map onto.
/// (x, y) is the lower left corner, in GL convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Viewport covering the whole frame buffer.
    pub fn full(width: u32, height: u32) -> Self {
        return Self { x: 0, y: 0, width, height };
    }

    /// NDC to screen pixels with the origin at the top left of a frame buffer `frame_height`
    /// pixels tall. Depth passes through.
    pub fn map(&self, ndc: &Point3<f32>, frame_height: u32) -> Point3<f32> {
        let half_width = self.width as f32 / 2.0;
        let half_height = self.height as f32 / 2.0;
        let x = self.x as f32 + (ndc.x + 1.0) * half_width;
        let y = frame_height as f32 - (self.y as f32 + (ndc.y + 1.0) * half_height);
        return Point3::new(x, y, ndc.z);
    }
}

/// Everything the pipeline reads from the context for one batch.
pub struct Stages<'a, C: Clipper + ?Sized> {
    pub model_view: &'a Matrix4<f32>,
    pub projection: &'a Matrix4<f32>,
    pub clipper: &'a C,
    pub viewport: Viewport,
    pub frame_height: u32,
    pub cull: CullState,
}

/// Buffers of one begin/end bracket. Filled during the bracket, drained by `clear`
/// when the bracket closes.
#[derive(Debug, Default)]
pub struct PrimitiveBatch {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle<Vertex>>,
    pub processed: Vec<Triangle<ScreenVertex>>,
}

impl PrimitiveBatch {
    pub fn push(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.processed.clear();
    }

    /// Runs assembly, transform, clip, divide, viewport mapping, re-triangulation and culling.
    /// Survivors end up in `processed`. On failure nothing is left in `processed`.
    pub fn process<C: Clipper + ?Sized>(&mut self, mode: DrawMode, stages: &Stages<C>) -> GlResult<()> {
        assemble(mode, &self.vertices, &mut self.triangles)?;

        let mut polygon = Vec::new();
        for triangle in &self.triangles {
            polygon.clear();
            project_triangle(triangle, stages, &mut polygon);
            for screen_triangle in fan(&polygon) {
                if !stages.cull.should_discard(&screen_triangle) {
                    self.processed.push(screen_triangle);
                }
            }
        }

        log::trace!(
            "batch {:?}: {} vertices, {} triangles assembled, {} submitted",
            mode,
            self.vertices.len(),
            self.triangles.len(),
            self.processed.len()
        );
        return Ok(());
    }
}

/// Object space to clip space: projection * (model_view * (x, y, z, 1)).
pub fn to_clip_space(position: &Point3<f32>, model_view: &Matrix4<f32>, projection: &Matrix4<f32>) -> Vector4<f32> {
    return projection * (model_view * to_hom_point(position));
}

/// Color at a clipped vertex, interpolated from the source triangle.
fn interpolate_color(triangle: &Triangle<Vertex>, clipped: &ClippedVertex) -> Vector4<f32> {
    let w = &clipped.weights;
    return triangle[0].color * w.x + triangle[1].color * w.y + triangle[2].color * w.z;
}

/// Stages B to E for one triangle: the clipped polygon in screen space, appended to `polygon`.
fn project_triangle<C: Clipper + ?Sized>(
    triangle: &Triangle<Vertex>,
    stages: &Stages<C>,
    polygon: &mut Vec<ScreenVertex>,
) {
    let clip_positions = triangle.map(|v| to_clip_space(&v.position, stages.model_view, stages.projection));
    for clipped in stages.clipper.clip_triangle(&clip_positions) {
        let ndc = from_hom_point(&clipped.position);
        polygon.push(ScreenVertex {
            position: stages.viewport.map(&ndc, stages.frame_height),
            color: interpolate_color(triangle, &clipped),
        });
    }
}

/// Fan triangulation of a convex polygon: (0, i, i + 1). Fewer than 3 vertices yield nothing.
pub fn fan(polygon: &[ScreenVertex]) -> impl Iterator<Item = Triangle<ScreenVertex>> + '_ {
    let root = polygon.first().copied();
    return polygon
        .get(1..)
        .unwrap_or(&[])
        .windows(2)
        .filter_map(move |e| root.map(|r| [r, e[0], e[1]]));
}
