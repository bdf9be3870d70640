//! The GL context: command surface, begin/end state machine and the error register.
//!
//! Every command records its outcome in a single-slot error register, overwriting whatever
//! was there before. A failing command changes nothing else.

use image::RgbaImage;
use nalgebra as na;
use na::{Matrix4, Point3, Vector4};

use crate::clipper::{Clipper, FrustumClipper};
use crate::cull::CullState;
use crate::error::{GlError, GlResult};
use crate::gl::{
    Capability, CullSides, DrawMode, FrontFace, GLbitfield, GLenum, MatrixMode, StringName,
    GL_COLOR_BUFFER_BIT, GL_INVALID_OPERATION, GL_NO_ERROR,
};
use crate::matrix_stack::{MatrixStack, MATRIX_STACK_LIMIT};
use crate::pipeline::{PrimitiveBatch, Stages, Viewport};
use crate::rasterizer::{Rasterizer, SoftwareRasterizer};
use crate::transform;
use crate::vertex::Vertex;

/// Construction parameters of a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextConfig {
    pub width: u32,  // Width of the frame buffer.
    pub height: u32, // Height of the frame buffer.
    pub matrix_stack_limit: usize,
}

impl ContextConfig {
    pub fn new(width: u32, height: u32) -> Self {
        return Self {
            width,
            height,
            matrix_stack_limit: MATRIX_STACK_LIMIT,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawState {
    Idle,
    InPrimitive(DrawMode),
}

pub struct GlContext<R: Rasterizer = SoftwareRasterizer, C: Clipper = FrustumClipper> {
    width: u32,
    height: u32,
    rasterizer: R,
    clipper: C,
    // Transform state.
    model_view: MatrixStack,
    projection: MatrixStack,
    matrix_mode: MatrixMode,
    // Immediate mode state.
    draw_state: DrawState,
    batch: PrimitiveBatch,
    current_color: Vector4<f32>,
    clear_color: Vector4<f32>,
    cull: CullState,
    viewport: Viewport,
    error: Option<GlError>, // `None` is GL_NO_ERROR.
}

impl GlContext<SoftwareRasterizer, FrustumClipper> {
    /// Context drawing into a software rasterizer the size of the frame buffer.
    pub fn new(config: ContextConfig) -> Self {
        let rasterizer = SoftwareRasterizer::new(config.width, config.height);
        return Self::with_backend(config, rasterizer, FrustumClipper);
    }
}

impl<R: Rasterizer, C: Clipper> GlContext<R, C> {
    pub fn with_backend(config: ContextConfig, rasterizer: R, clipper: C) -> Self {
        return Self {
            width: config.width,
            height: config.height,
            rasterizer,
            clipper,
            model_view: MatrixStack::new(config.matrix_stack_limit),
            projection: MatrixStack::new(config.matrix_stack_limit),
            matrix_mode: MatrixMode::ModelView,
            draw_state: DrawState::Idle,
            batch: PrimitiveBatch::default(),
            current_color: Vector4::new(1.0, 1.0, 1.0, 1.0),
            clear_color: Vector4::zeros(),
            cull: CullState::default(),
            viewport: Viewport::full(config.width, config.height),
            error: None,
        };
    }

    /// Runs a command body and stores its outcome in the error register.
    fn execute<F>(&mut self, command: &str, body: F)
    where
        F: FnOnce(&mut Self) -> GlResult<()>,
    {
        let result = body(self);
        if let Err(error) = result {
            log::debug!("{}(): {}", command, error);
        }
        self.error = result.err();
    }

    fn require_idle(&self) -> GlResult<()> {
        return match self.draw_state {
            DrawState::Idle => Ok(()),
            DrawState::InPrimitive(_) => Err(GlError::InvalidOperation),
        };
    }

    fn current_stack_mut(&mut self) -> &mut MatrixStack {
        return match self.matrix_mode {
            MatrixMode::ModelView => &mut self.model_view,
            MatrixMode::Projection => &mut self.projection,
        };
    }

    /// Right-multiplies `matrix` onto the selected matrix, outside of a primitive only.
    fn multiply_current<F>(&mut self, command: &str, build: F)
    where
        F: FnOnce() -> GlResult<Matrix4<f32>>,
    {
        self.execute(command, |ctx| {
            ctx.require_idle()?;
            let matrix = build()?;
            ctx.current_stack_mut().multiply(&matrix);
            return Ok(());
        });
    }

    pub fn begin(&mut self, mode: GLenum) {
        self.execute("begin", |ctx| {
            ctx.require_idle()?;
            ctx.draw_state = DrawState::InPrimitive(DrawMode::try_from(mode)?);
            return Ok(());
        });
    }

    /// Closes the primitive and pushes the whole batch through the pipeline.
    /// The batch is discarded and the context is back to idle whatever the outcome.
    pub fn end(&mut self) {
        self.execute("end", |ctx| {
            let mode = match ctx.draw_state {
                DrawState::InPrimitive(mode) => mode,
                DrawState::Idle => return Err(GlError::InvalidOperation),
            };
            let result = ctx.flush_batch(mode);
            ctx.batch.clear();
            ctx.draw_state = DrawState::Idle;
            return result;
        });
    }

    fn flush_batch(&mut self, mode: DrawMode) -> GlResult<()> {
        let stages = Stages {
            model_view: self.model_view.current(),
            projection: self.projection.current(),
            clipper: &self.clipper,
            viewport: self.viewport,
            frame_height: self.height,
            cull: self.cull,
        };
        self.batch.process(mode, &stages)?;
        for triangle in &self.batch.processed {
            self.rasterizer.submit_triangle(triangle);
        }
        return Ok(());
    }

    /// Adds a vertex with the current color to the pending batch. Accepted in any state.
    /// `w` is ignored, positions are promoted with w = 1 when transformed.
    pub fn vertex(&mut self, x: f64, y: f64, z: f64, _w: f64) {
        let vertex = Vertex {
            position: Point3::new(x as f32, y as f32, z as f32),
            color: self.current_color,
        };
        self.batch.push(vertex);
        self.error = None;
    }

    pub fn vertex3(&mut self, x: f64, y: f64, z: f64) {
        self.vertex(x, y, z, 1.0);
    }

    /// Sets the color of subsequent vertices. Accepted in any state.
    pub fn color(&mut self, r: f64, g: f64, b: f64, a: f64) {
        self.current_color = Vector4::new(r as f32, g as f32, b as f32, a as f32);
        self.error = None;
    }

    pub fn clear(&mut self, mask: GLbitfield) {
        self.execute("clear", |ctx| {
            ctx.require_idle()?;
            if mask & GL_COLOR_BUFFER_BIT == 0 {
                return Err(GlError::InvalidEnum);
            }
            ctx.rasterizer.clear(ctx.clear_color);
            return Ok(());
        });
    }

    pub fn clear_color(&mut self, r: f64, g: f64, b: f64, a: f64) {
        self.execute("clear_color", |ctx| {
            ctx.require_idle()?;
            let color = Vector4::new(r as f32, g as f32, b as f32, a as f32);
            ctx.clear_color = color.map(|c| c.clamp(0.0, 1.0));
            return Ok(());
        });
    }

    pub fn matrix_mode(&mut self, mode: GLenum) {
        self.execute("matrix_mode", |ctx| {
            ctx.require_idle()?;
            ctx.matrix_mode = MatrixMode::try_from(mode)?;
            return Ok(());
        });
    }

    pub fn load_identity(&mut self) {
        self.execute("load_identity", |ctx| {
            ctx.require_idle()?;
            ctx.current_stack_mut().load(Matrix4::identity());
            return Ok(());
        });
    }

    pub fn load_matrix(&mut self, matrix: &Matrix4<f32>) {
        self.execute("load_matrix", |ctx| {
            ctx.require_idle()?;
            ctx.current_stack_mut().load(*matrix);
            return Ok(());
        });
    }

    pub fn mult_matrix(&mut self, matrix: &Matrix4<f32>) {
        self.multiply_current("mult_matrix", || Ok(*matrix));
    }

    pub fn push_matrix(&mut self) {
        self.execute("push_matrix", |ctx| {
            ctx.require_idle()?;
            log::trace!("push_matrix(): {:?}", ctx.matrix_mode);
            return ctx.current_stack_mut().push();
        });
    }

    pub fn pop_matrix(&mut self) {
        self.execute("pop_matrix", |ctx| {
            ctx.require_idle()?;
            log::trace!("pop_matrix(): {:?}", ctx.matrix_mode);
            return ctx.current_stack_mut().pop();
        });
    }

    pub fn frustum(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) {
        self.multiply_current("frustum", || transform::frustum(left, right, bottom, top, near, far));
    }

    pub fn ortho(&mut self, left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) {
        self.multiply_current("ortho", || transform::ortho(left, right, bottom, top, near, far));
    }

    /// Rotation by `angle` degrees. A zero axis leaves the matrix as it is.
    pub fn rotate(&mut self, angle: f64, x: f64, y: f64, z: f64) {
        self.multiply_current("rotate", || {
            let rotation = transform::rotation(angle, x, y, z).unwrap_or_else(|| {
                log::warn!("rotate(): zero-length axis, rotation ignored");
                return Matrix4::identity();
            });
            return Ok(rotation);
        });
    }

    pub fn scale(&mut self, x: f64, y: f64, z: f64) {
        self.multiply_current("scale", || Ok(transform::scaling(x, y, z)));
    }

    pub fn translate(&mut self, x: f64, y: f64, z: f64) {
        self.multiply_current("translate", || Ok(transform::translation(x, y, z)));
    }

    /// Area of the frame buffer the normalized device coordinates map onto.
    pub fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.execute("viewport", |ctx| {
            ctx.require_idle()?;
            let width = u32::try_from(width).map_err(|_| GlError::InvalidValue)?;
            let height = u32::try_from(height).map_err(|_| GlError::InvalidValue)?;
            ctx.viewport = Viewport { x, y, width, height };
            return Ok(());
        });
    }

    pub fn enable(&mut self, capability: GLenum) {
        self.set_capability("enable", capability, true);
    }

    pub fn disable(&mut self, capability: GLenum) {
        self.set_capability("disable", capability, false);
    }

    fn set_capability(&mut self, command: &str, capability: GLenum, enabled: bool) {
        self.execute(command, |ctx| {
            ctx.require_idle()?;
            match Capability::try_from(capability)? {
                Capability::CullFace => ctx.cull.enabled = enabled,
            }
            return Ok(());
        });
    }

    pub fn front_face(&mut self, mode: GLenum) {
        self.execute("front_face", |ctx| {
            ctx.cull.front_face = FrontFace::try_from(mode)?;
            return Ok(());
        });
    }

    pub fn cull_face(&mut self, mode: GLenum) {
        self.execute("cull_face", |ctx| {
            ctx.cull.culled_sides = CullSides::try_from(mode)?;
            return Ok(());
        });
    }

    /// Code of the last command's outcome. Reading does not reset it.
    /// Inside a primitive this is always GL_INVALID_OPERATION.
    pub fn get_error(&self) -> GLenum {
        if let DrawState::InPrimitive(_) = self.draw_state {
            return GL_INVALID_OPERATION;
        }
        return self.error.map_or(GL_NO_ERROR, GlError::code);
    }

    pub fn get_string(&mut self, name: GLenum) -> Option<&'static str> {
        let mut value = None;
        self.execute("get_string", |ctx| {
            ctx.require_idle()?;
            value = Some(StringName::try_from(name)?.value());
            return Ok(());
        });
        return value;
    }

    /// Copies the rendered image into `target`.
    pub fn present(&mut self, target: &mut RgbaImage) {
        self.rasterizer.blit_to(target);
    }

    pub fn model_view_matrix(&self) -> &Matrix4<f32> {
        return self.model_view.current();
    }

    pub fn projection_matrix(&self) -> &Matrix4<f32> {
        return self.projection.current();
    }

    /// Number of saved matrices on the stack of `mode`.
    pub fn matrix_stack_depth(&self, mode: MatrixMode) -> usize {
        return match mode {
            MatrixMode::ModelView => self.model_view.depth(),
            MatrixMode::Projection => self.projection.depth(),
        };
    }

    pub fn is_in_primitive(&self) -> bool {
        return self.draw_state != DrawState::Idle;
    }

    pub fn pending_vertex_count(&self) -> usize {
        return self.batch.vertices.len();
    }

    pub fn frame_size(&self) -> (u32, u32) {
        return (self.width, self.height);
    }

    pub fn rasterizer(&self) -> &R {
        return &self.rasterizer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::*;
    use crate::vertex::{ScreenVertex, Triangle};
    use approx::assert_relative_eq;
    use std::cell::Cell;

    #[derive(Default)]
    struct RecordingRasterizer {
        submitted: Vec<Triangle<ScreenVertex>>,
        clears: Vec<Vector4<f32>>,
    }

    impl Rasterizer for RecordingRasterizer {
        fn clear(&mut self, color: Vector4<f32>) {
            self.clears.push(color);
        }
        fn submit_triangle(&mut self, triangle: &Triangle<ScreenVertex>) {
            self.submitted.push(*triangle);
        }
        fn blit_to(&self, _target: &mut RgbaImage) {}
    }

    type TestContext = GlContext<RecordingRasterizer>;

    fn context() -> TestContext {
        return GlContext::with_backend(ContextConfig::new(100, 100), RecordingRasterizer::default(), FrustumClipper);
    }

    #[test]
    fn begin_twice_is_an_invalid_operation() {
        let mut gl = context();
        gl.begin(GL_TRIANGLES);
        gl.vertex3(0.0, 0.0, 0.0);
        assert_eq!(gl.error, None);
        gl.begin(GL_QUADS);
        assert_eq!(gl.error, Some(GlError::InvalidOperation));
        assert!(gl.is_in_primitive());
        assert_eq!(gl.pending_vertex_count(), 1);
        // Inside the primitive the register can't be read.
        assert_eq!(gl.get_error(), GL_INVALID_OPERATION);
        gl.end();
        assert_eq!(gl.get_error(), GL_NO_ERROR);
    }

    #[test]
    fn begin_rejects_unsupported_topologies() {
        let mut gl = context();
        gl.begin(GL_LINES);
        assert_eq!(gl.get_error(), GL_INVALID_ENUM);
        assert!(!gl.is_in_primitive());
    }

    #[test]
    fn end_while_idle_is_an_invalid_operation() {
        let mut gl = context();
        gl.vertex3(1.0, 2.0, 3.0);
        gl.end();
        assert_eq!(gl.get_error(), GL_INVALID_OPERATION);
        assert_eq!(gl.pending_vertex_count(), 1);
    }

    #[test]
    fn state_commands_are_rejected_inside_a_primitive() {
        let mut gl = context();
        gl.begin(GL_TRIANGLES);
        let commands: [(&str, fn(&mut TestContext)); 14] = [
            ("clear", |gl: &mut TestContext| gl.clear(GL_COLOR_BUFFER_BIT)),
            ("clear_color", |gl: &mut TestContext| gl.clear_color(1.0, 0.0, 0.0, 1.0)),
            ("matrix_mode", |gl: &mut TestContext| gl.matrix_mode(GL_PROJECTION)),
            ("load_identity", |gl: &mut TestContext| gl.load_identity()),
            ("load_matrix", |gl: &mut TestContext| gl.load_matrix(&Matrix4::new_scaling(2.0))),
            ("push_matrix", |gl: &mut TestContext| gl.push_matrix()),
            ("pop_matrix", |gl: &mut TestContext| gl.pop_matrix()),
            ("frustum", |gl: &mut TestContext| gl.frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0)),
            ("ortho", |gl: &mut TestContext| gl.ortho(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0)),
            ("rotate", |gl: &mut TestContext| gl.rotate(45.0, 0.0, 0.0, 1.0)),
            ("scale", |gl: &mut TestContext| gl.scale(2.0, 2.0, 2.0)),
            ("translate", |gl: &mut TestContext| gl.translate(1.0, 0.0, 0.0)),
            ("viewport", |gl: &mut TestContext| gl.viewport(0, 0, 10, 10)),
            ("enable", |gl: &mut TestContext| gl.enable(GL_CULL_FACE)),
        ];
        for (name, command) in commands {
            command(&mut gl);
            assert_eq!(gl.error, Some(GlError::InvalidOperation), "{}", name);
        }
        assert_eq!(*gl.model_view_matrix(), Matrix4::identity());
        assert_eq!(gl.matrix_stack_depth(MatrixMode::ModelView), 0);
        assert!(!gl.cull.enabled);
        assert!(gl.rasterizer().clears.is_empty());
        assert_eq!(gl.get_string(GL_VENDOR), None);
    }

    #[test]
    fn push_pop_restores_each_matrix_kind() {
        let mut gl = context();
        for mode in [GL_MODELVIEW, GL_PROJECTION] {
            gl.matrix_mode(mode);
            gl.rotate(33.0, 1.0, 2.0, 3.0);
            gl.translate(0.3, 0.1, -7.0);
            let before = (*gl.model_view_matrix(), *gl.projection_matrix());
            gl.push_matrix();
            gl.scale(3.0, 0.5, 1.0);
            gl.pop_matrix();
            assert_eq!(gl.get_error(), GL_NO_ERROR);
            assert_eq!((*gl.model_view_matrix(), *gl.projection_matrix()), before);
        }
    }

    #[test]
    fn stack_bounds_are_reported() {
        let mut gl = context();
        gl.matrix_mode(GL_PROJECTION);
        gl.pop_matrix();
        assert_eq!(gl.get_error(), GL_STACK_UNDERFLOW);
        for _ in 0..MATRIX_STACK_LIMIT {
            gl.push_matrix();
        }
        assert_eq!(gl.get_error(), GL_NO_ERROR);
        gl.push_matrix();
        assert_eq!(gl.get_error(), GL_STACK_OVERFLOW);
        assert_eq!(gl.matrix_stack_depth(MatrixMode::Projection), MATRIX_STACK_LIMIT);
        assert_eq!(gl.matrix_stack_depth(MatrixMode::ModelView), 0);
    }

    #[test]
    fn degenerate_ortho_changes_nothing() {
        let mut gl = context();
        gl.matrix_mode(GL_PROJECTION);
        gl.ortho(1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        assert_eq!(gl.get_error(), GL_INVALID_VALUE);
        assert_eq!(*gl.projection_matrix(), Matrix4::identity());
        assert_eq!(*gl.model_view_matrix(), Matrix4::identity());
    }

    #[test]
    fn projections_target_the_selected_matrix() {
        let mut gl = context();
        gl.ortho(-2.0, 2.0, -2.0, 2.0, -1.0, 1.0);
        assert_eq!(*gl.projection_matrix(), Matrix4::identity());
        assert_relative_eq!(gl.model_view_matrix()[(0, 0)], 0.5);

        gl.load_identity();
        gl.frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        assert_eq!(*gl.projection_matrix(), Matrix4::identity());
        assert_relative_eq!(gl.model_view_matrix()[(3, 2)], -1.0);
    }

    #[test]
    fn transforms_compose_on_the_right() {
        let mut gl = context();
        gl.translate(1.0, 0.0, 0.0);
        gl.scale(2.0, 2.0, 2.0);
        let p = gl.model_view_matrix() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        // Scale applies first, then translation.
        assert_relative_eq!(p, Vector4::new(3.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn transforms_are_built_only_outside_a_primitive() {
        let mut gl = context();
        gl.begin(GL_TRIANGLES);
        let built = Cell::new(false);
        gl.multiply_current("rotate", || {
            built.set(true);
            return Ok(Matrix4::identity());
        });
        assert_eq!(gl.error, Some(GlError::InvalidOperation));
        assert!(!built.get());
        gl.rotate(90.0, 0.0, 0.0, 0.0);
        assert_eq!(gl.error, Some(GlError::InvalidOperation));
        gl.end();

        // Zero axis outside a primitive is a no-op, not an error.
        gl.rotate(90.0, 0.0, 0.0, 0.0);
        assert_eq!(gl.get_error(), GL_NO_ERROR);
        assert_eq!(*gl.model_view_matrix(), Matrix4::identity());
    }

    #[test]
    fn capabilities_and_face_modes_are_closed_sets() {
        let mut gl = context();
        gl.enable(GL_DEPTH_TEST);
        assert_eq!(gl.get_error(), GL_INVALID_ENUM);
        gl.enable(GL_CULL_FACE);
        assert_eq!(gl.get_error(), GL_NO_ERROR);
        assert!(gl.cull.enabled);
        gl.front_face(GL_FRONT);
        assert_eq!(gl.get_error(), GL_INVALID_ENUM);
        gl.cull_face(GL_CCW);
        assert_eq!(gl.get_error(), GL_INVALID_ENUM);
        gl.front_face(GL_CW);
        gl.cull_face(GL_FRONT_AND_BACK);
        assert_eq!(gl.get_error(), GL_NO_ERROR);
        assert_eq!(gl.cull.front_face, FrontFace::Clockwise);
        assert_eq!(gl.cull.culled_sides, CullSides::FrontAndBack);
        gl.disable(GL_CULL_FACE);
        assert!(!gl.cull.enabled);
    }

    #[test]
    fn get_string_identity() {
        let mut gl = context();
        assert_eq!(gl.get_string(GL_VENDOR), Some(VENDOR_STRING));
        assert_eq!(gl.get_string(GL_RENDERER), Some(RENDERER_STRING));
        assert_eq!(gl.get_string(GL_VERSION), Some(VERSION_STRING));
        assert_eq!(gl.get_error(), GL_NO_ERROR);
        assert_eq!(gl.get_string(0x1F03), None);
        assert_eq!(gl.get_error(), GL_INVALID_ENUM);
        // Register is not cleared by reading it.
        assert_eq!(gl.get_error(), GL_INVALID_ENUM);
    }

    #[test]
    fn malformed_quads_are_reported_without_submission() {
        let mut gl = context();
        gl.begin(GL_QUADS);
        for (x, y) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5), (0.0, 0.0)] {
            gl.vertex3(x, y, 0.0);
        }
        gl.end();
        assert_eq!(gl.get_error(), GL_INVALID_OPERATION);
        assert!(!gl.is_in_primitive());
        assert_eq!(gl.pending_vertex_count(), 0);
        assert!(gl.rasterizer().submitted.is_empty());

        // Context is usable again right away.
        gl.begin(GL_QUADS);
        for (x, y) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            gl.vertex3(x, y, 0.0);
        }
        gl.end();
        assert_eq!(gl.get_error(), GL_NO_ERROR);
        assert_eq!(gl.rasterizer().submitted.len(), 2);
    }

    #[test]
    fn clear_uses_the_clamped_clear_color() {
        let mut gl = context();
        gl.clear_color(2.0, 0.5, -1.0, 1.0);
        gl.clear(GL_DEPTH_BUFFER_BIT);
        assert_eq!(gl.get_error(), GL_INVALID_ENUM);
        gl.clear(GL_COLOR_BUFFER_BIT | GL_DEPTH_BUFFER_BIT);
        assert_eq!(gl.get_error(), GL_NO_ERROR);
        assert_eq!(gl.rasterizer().clears, vec![Vector4::new(1.0, 0.5, 0.0, 1.0)]);
    }

    #[test]
    fn viewport_rejects_negative_sizes_and_remaps_output() {
        let mut gl = context();
        assert_eq!(gl.frame_size(), (100, 100));
        gl.viewport(0, 0, -1, 10);
        assert_eq!(gl.get_error(), GL_INVALID_VALUE);

        gl.viewport(0, 0, 50, 50);
        gl.begin(GL_TRIANGLES);
        gl.vertex3(-1.0, -1.0, 0.0);
        gl.vertex3(1.0, -1.0, 0.0);
        gl.vertex3(1.0, 1.0, 0.0);
        gl.end();
        let [a, b, c] = gl.rasterizer().submitted[0];
        // Lower left quarter of a 100x100 frame with the origin at the top left.
        assert_relative_eq!(a.position, Point3::new(0.0, 100.0, 0.0));
        assert_relative_eq!(b.position, Point3::new(50.0, 100.0, 0.0));
        assert_relative_eq!(c.position, Point3::new(50.0, 50.0, 0.0));
    }

    #[test]
    fn vertices_capture_the_current_color() {
        let mut gl = context();
        gl.begin(GL_TRIANGLES);
        gl.color(1.0, 0.0, 0.0, 1.0);
        gl.vertex3(-0.5, -0.5, 0.0);
        gl.color(0.0, 1.0, 0.0, 1.0);
        gl.vertex3(0.5, -0.5, 0.0);
        gl.vertex3(0.0, 0.5, 0.0);
        gl.end();
        let [a, b, c] = gl.rasterizer().submitted[0];
        assert_eq!(a.color, Vector4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(b.color, Vector4::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(c.color, Vector4::new(0.0, 1.0, 0.0, 1.0));
    }
}
