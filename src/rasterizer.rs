use std::cmp::{max, min};

use image::{imageops, Rgba, RgbaImage};
use nalgebra as na;
use na::{Vector3, Vector4};

use crate::vertex::{ScreenVertex, Triangle};

/// Pixel-level back end fed by the geometry pipeline.
pub trait Rasterizer {
    /// Fills the whole color buffer with `color`.
    fn clear(&mut self, color: Vector4<f32>);
    /// Fills one screen-space triangle.
    fn submit_triangle(&mut self, triangle: &Triangle<ScreenVertex>);
    /// Copies the color buffer into `target`, clipped to the smaller of the two.
    fn blit_to(&self, target: &mut RgbaImage);
}

/// Conversion of a float color with components in [0, 1] to rgba8.
pub fn to_rgba8(color: &Vector4<f32>) -> Rgba<u8> {
    let c = color.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8);
    return Rgba([c.x, c.y, c.z, c.w]);
}

/// Rasterizer writing into its own rgba8 color buffer, (0, 0) being the top left pixel.
pub struct SoftwareRasterizer {
    color_buffer: RgbaImage,
}

impl SoftwareRasterizer {
    pub fn new(width: u32, height: u32) -> Self {
        return Self {
            color_buffer: RgbaImage::new(width, height),
        };
    }

    pub fn color_buffer(&self) -> &RgbaImage {
        return &self.color_buffer;
    }
}

/// Barycentric coordinates of (px, py) in the triangle, or `None` for a degenerate triangle.
fn to_barycentric_coord(px: f32, py: f32, triangle: &Triangle<ScreenVertex>) -> Option<Vector3<f32>> {
    let [a, b, c] = triangle.map(|v| v.position);
    let area = (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y);
    if area == 0.0 {
        return None;
    }
    let w_b = ((px - a.x) * (c.y - a.y) - (c.x - a.x) * (py - a.y)) / area;
    let w_c = ((b.x - a.x) * (py - a.y) - (px - a.x) * (b.y - a.y)) / area;
    return Some(Vector3::new(1.0 - w_b - w_c, w_b, w_c));
}

impl Rasterizer for SoftwareRasterizer {
    fn clear(&mut self, color: Vector4<f32>) {
        let pixel = to_rgba8(&color);
        for p in self.color_buffer.pixels_mut() {
            *p = pixel;
        }
    }

    /// Bounding box scan, sampling pixel centers. Colors are interpolated with the barycentric
    /// coordinates of the sample. Both windings are filled, facing is decided upstream.
    fn submit_triangle(&mut self, triangle: &Triangle<ScreenVertex>) {
        let (width, height) = self.color_buffer.dimensions();
        if width == 0 || height == 0 {
            return;
        }
        let xs = triangle.map(|v| v.position.x.floor() as i64);
        let ys = triangle.map(|v| v.position.y.floor() as i64);
        let x_min = max(min(min(xs[0], xs[1]), xs[2]), 0);
        let x_max = min(max(max(xs[0], xs[1]), xs[2]), width as i64 - 1);
        let y_min = max(min(min(ys[0], ys[1]), ys[2]), 0);
        let y_max = min(max(max(ys[0], ys[1]), ys[2]), height as i64 - 1);

        for j in y_min..=y_max {
            for i in x_min..=x_max {
                let bar_coord = match to_barycentric_coord(i as f32 + 0.5, j as f32 + 0.5, triangle) {
                    Some(bar_coord) => bar_coord,
                    None => return,
                };
                if bar_coord.x < 0.0 || bar_coord.y < 0.0 || bar_coord.z < 0.0 {
                    // Outside of the triangle.
                    continue;
                }
                let color = triangle[0].color * bar_coord.x
                    + triangle[1].color * bar_coord.y
                    + triangle[2].color * bar_coord.z;
                self.color_buffer.put_pixel(i as u32, j as u32, to_rgba8(&color));
            }
        }
    }

    fn blit_to(&self, target: &mut RgbaImage) {
        imageops::replace(target, &self.color_buffer, 0, 0);
    }
}
