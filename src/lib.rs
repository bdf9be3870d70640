//! Fixed-function immediate-mode GL core.
//!
//! A [`GlContext`] takes stateful commands (matrix manipulation, vertex submission,
//! `begin`/`end` brackets) and turns each closed primitive into screen-space triangles:
//! assembly, transform, clipping, perspective divide, viewport mapping, re-triangulation and
//! culling, before handing the survivors to a [`Rasterizer`](rasterizer::Rasterizer).
//!
//! ```no_run
//! use tiny_gl::gl::*;
//! use tiny_gl::{ContextConfig, GlContext};
//!
//! let mut gl = GlContext::new(ContextConfig::new(640, 480));
//! gl.matrix_mode(GL_PROJECTION);
//! gl.frustum(-1.0, 1.0, -0.75, 0.75, 1.0, 100.0);
//! gl.matrix_mode(GL_MODELVIEW);
//! gl.translate(0.0, 0.0, -3.0);
//!
//! gl.begin(GL_TRIANGLES);
//! gl.color(1.0, 0.0, 0.0, 1.0);
//! gl.vertex3(-1.0, -1.0, 0.0);
//! gl.vertex3(1.0, -1.0, 0.0);
//! gl.vertex3(0.0, 1.0, 0.0);
//! gl.end();
//! assert_eq!(gl.get_error(), GL_NO_ERROR);
//! ```

pub mod assembly;
pub mod clipper;
pub mod context;
pub mod cull;
pub mod error;
pub mod gl;
pub mod logging;
pub mod matrix_stack;
pub mod pipeline;
pub mod rasterizer;
pub mod transform;
pub mod vertex;

pub use context::{ContextConfig, GlContext};
pub use error::{GlError, GlResult};
