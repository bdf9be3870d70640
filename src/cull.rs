use crate::gl::{CullSides, FrontFace};
use crate::vertex::{ScreenVertex, Triangle};

/// Signed area (doubled) of a screen-space triangle:
/// (Ax - Bx)(By - Cy) - (Bx - Cx)(Ay - By).
pub fn signed_area(triangle: &Triangle<ScreenVertex>) -> f32 {
    let [a, b, c] = triangle;
    let dx_ab = a.position.x - b.position.x;
    let dx_bc = b.position.x - c.position.x;
    let dy_ab = a.position.y - b.position.y;
    let dy_bc = b.position.y - c.position.y;
    return dx_ab * dy_bc - dx_bc * dy_ab;
}

/// Face culling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CullState {
    pub enabled: bool,
    pub front_face: FrontFace,
    pub culled_sides: CullSides,
}

impl Default for CullState {
    fn default() -> Self {
        return Self {
            enabled: false,
            front_face: FrontFace::CounterClockwise,
            culled_sides: CullSides::Back,
        };
    }
}

impl CullState {
    /// Degenerate triangles are always discarded, whether culling is enabled or not.
    pub fn should_discard(&self, triangle: &Triangle<ScreenVertex>) -> bool {
        let area = signed_area(triangle);
        if area == 0.0 {
            return true;
        }
        if !self.enabled {
            return false;
        }

        let is_front = match self.front_face {
            FrontFace::CounterClockwise => area > 0.0,
            FrontFace::Clockwise => area < 0.0,
        };
        return self.culled_sides.culls(is_front);
    }
}
