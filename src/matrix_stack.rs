use nalgebra as na;
use na::Matrix4;

use crate::error::{GlError, GlResult};

pub const MATRIX_STACK_LIMIT: usize = 1024;

/// One live matrix together with the bounded stack of its saved states.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    current: Matrix4<f32>,
    saved: Vec<Matrix4<f32>>,
    limit: usize,
}

impl MatrixStack {
    /// Identity matrix with an empty stack of at most `limit` saved entries.
    pub fn new(limit: usize) -> Self {
        return Self {
            current: Matrix4::identity(),
            saved: Vec::new(),
            limit,
        };
    }

    pub fn current(&self) -> &Matrix4<f32> {
        return &self.current;
    }

    /// Number of saved entries.
    pub fn depth(&self) -> usize {
        return self.saved.len();
    }

    /// Replaces the live matrix verbatim.
    pub fn load(&mut self, matrix: Matrix4<f32>) {
        self.current = matrix;
    }

    /// Right-multiplies the live matrix: `current = current * matrix`.
    pub fn multiply(&mut self, matrix: &Matrix4<f32>) {
        self.current = self.current * matrix;
    }

    /// Saves a copy of the live matrix.
    pub fn push(&mut self) -> GlResult<()> {
        if self.saved.len() >= self.limit {
            return Err(GlError::StackOverflow);
        }
        self.saved.push(self.current);
        return Ok(());
    }

    /// Restores the most recently saved matrix.
    pub fn pop(&mut self) -> GlResult<()> {
        self.current = self.saved.pop().ok_or(GlError::StackUnderflow)?;
        return Ok(());
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        return Self::new(MATRIX_STACK_LIMIT);
    }
}
