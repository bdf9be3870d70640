//! Raw GL symbolic values and the closed enumerations they convert into.
//!
//! The command surface takes raw `GLenum` values, the same way a C GL binding would.
//! Each conversion is an explicit allow-list: anything not named here is `InvalidEnum`.

use crate::error::GlError;

pub type GLenum = u32;
pub type GLbitfield = u32;

// Errors.
pub const GL_NO_ERROR: GLenum = 0;
pub const GL_INVALID_ENUM: GLenum = 0x0500;
pub const GL_INVALID_VALUE: GLenum = 0x0501;
pub const GL_INVALID_OPERATION: GLenum = 0x0502;
pub const GL_STACK_OVERFLOW: GLenum = 0x0503;
pub const GL_STACK_UNDERFLOW: GLenum = 0x0504;

// Primitives.
pub const GL_POINTS: GLenum = 0x0000;
pub const GL_LINES: GLenum = 0x0001;
pub const GL_LINE_LOOP: GLenum = 0x0002;
pub const GL_LINE_STRIP: GLenum = 0x0003;
pub const GL_TRIANGLES: GLenum = 0x0004;
pub const GL_TRIANGLE_STRIP: GLenum = 0x0005;
pub const GL_TRIANGLE_FAN: GLenum = 0x0006;
pub const GL_QUADS: GLenum = 0x0007;
pub const GL_QUAD_STRIP: GLenum = 0x0008;
pub const GL_POLYGON: GLenum = 0x0009;

// Matrix modes.
pub const GL_MODELVIEW: GLenum = 0x1700;
pub const GL_PROJECTION: GLenum = 0x1701;

// Capabilities.
pub const GL_CULL_FACE: GLenum = 0x0B44;
pub const GL_DEPTH_TEST: GLenum = 0x0B71;

// Face selection.
pub const GL_FRONT: GLenum = 0x0404;
pub const GL_BACK: GLenum = 0x0405;
pub const GL_FRONT_AND_BACK: GLenum = 0x0408;
pub const GL_CW: GLenum = 0x0900;
pub const GL_CCW: GLenum = 0x0901;

// Clear mask bits.
pub const GL_DEPTH_BUFFER_BIT: GLbitfield = 0x0000_0100;
pub const GL_COLOR_BUFFER_BIT: GLbitfield = 0x0000_4000;

// String queries.
pub const GL_VENDOR: GLenum = 0x1F00;
pub const GL_RENDERER: GLenum = 0x1F01;
pub const GL_VERSION: GLenum = 0x1F02;

pub const VENDOR_STRING: &str = "The tiny_gl Developers";
pub const RENDERER_STRING: &str = "tiny_gl software rasterizer";
pub const VERSION_STRING: &str = "OpenGL 1.2 tiny_gl";

/// Primitive topologies accepted by `begin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Triangles,
    TriangleStrip,
    TriangleFan,
    Quads,
    QuadStrip,
    Polygon,
}

impl TryFrom<GLenum> for DrawMode {
    type Error = GlError;

    fn try_from(value: GLenum) -> Result<Self, Self::Error> {
        return match value {
            GL_TRIANGLES => Ok(DrawMode::Triangles),
            GL_TRIANGLE_STRIP => Ok(DrawMode::TriangleStrip),
            GL_TRIANGLE_FAN => Ok(DrawMode::TriangleFan),
            GL_QUADS => Ok(DrawMode::Quads),
            GL_QUAD_STRIP => Ok(DrawMode::QuadStrip),
            GL_POLYGON => Ok(DrawMode::Polygon),
            _ => Err(GlError::InvalidEnum),
        };
    }
}

/// Which of the two live matrices transform commands target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixMode {
    ModelView,
    Projection,
}

impl TryFrom<GLenum> for MatrixMode {
    type Error = GlError;

    fn try_from(value: GLenum) -> Result<Self, Self::Error> {
        return match value {
            GL_MODELVIEW => Ok(MatrixMode::ModelView),
            GL_PROJECTION => Ok(MatrixMode::Projection),
            _ => Err(GlError::InvalidEnum),
        };
    }
}

/// Toggles for `enable`/`disable`. Face culling is the only one implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    CullFace,
}

impl TryFrom<GLenum> for Capability {
    type Error = GlError;

    fn try_from(value: GLenum) -> Result<Self, Self::Error> {
        return match value {
            GL_CULL_FACE => Ok(Capability::CullFace),
            _ => Err(GlError::InvalidEnum),
        };
    }
}

/// Screen-space winding that counts as front facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontFace {
    Clockwise,
    CounterClockwise,
}

impl TryFrom<GLenum> for FrontFace {
    type Error = GlError;

    fn try_from(value: GLenum) -> Result<Self, Self::Error> {
        return match value {
            GL_CW => Ok(FrontFace::Clockwise),
            GL_CCW => Ok(FrontFace::CounterClockwise),
            _ => Err(GlError::InvalidEnum),
        };
    }
}

/// Set of facings discarded when culling is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullSides {
    Front,
    Back,
    FrontAndBack,
}

impl CullSides {
    /// Whether a triangle with the given facing belongs to the culled set.
    pub fn culls(self, is_front: bool) -> bool {
        return match self {
            CullSides::Front => is_front,
            CullSides::Back => !is_front,
            CullSides::FrontAndBack => true,
        };
    }
}

impl TryFrom<GLenum> for CullSides {
    type Error = GlError;

    fn try_from(value: GLenum) -> Result<Self, Self::Error> {
        return match value {
            GL_FRONT => Ok(CullSides::Front),
            GL_BACK => Ok(CullSides::Back),
            GL_FRONT_AND_BACK => Ok(CullSides::FrontAndBack),
            _ => Err(GlError::InvalidEnum),
        };
    }
}

/// Implementation identity queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringName {
    Vendor,
    Renderer,
    Version,
}

impl StringName {
    pub fn value(self) -> &'static str {
        return match self {
            StringName::Vendor => VENDOR_STRING,
            StringName::Renderer => RENDERER_STRING,
            StringName::Version => VERSION_STRING,
        };
    }
}

impl TryFrom<GLenum> for StringName {
    type Error = GlError;

    fn try_from(value: GLenum) -> Result<Self, Self::Error> {
        return match value {
            GL_VENDOR => Ok(StringName::Vendor),
            GL_RENDERER => Ok(StringName::Renderer),
            GL_VERSION => Ok(StringName::Version),
            _ => Err(GlError::InvalidEnum),
        };
    }
}
