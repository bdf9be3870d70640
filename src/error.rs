use thiserror::Error;

use crate::gl::{
    GLenum, GL_INVALID_ENUM, GL_INVALID_OPERATION, GL_INVALID_VALUE, GL_STACK_OVERFLOW,
    GL_STACK_UNDERFLOW,
};

/// Recoverable command failures. Every one of them leaves the context state untouched
/// apart from the error register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GlError {
    #[error("symbolic argument is not in the accepted set")]
    InvalidEnum,
    #[error("numeric argument is out of range")]
    InvalidValue,
    #[error("command is not allowed in the current state")]
    InvalidOperation,
    #[error("matrix stack is full")]
    StackOverflow,
    #[error("matrix stack is empty")]
    StackUnderflow,
}

impl GlError {
    /// Raw GL error code, as reported by `get_error`.
    pub fn code(self) -> GLenum {
        return match self {
            GlError::InvalidEnum => GL_INVALID_ENUM,
            GlError::InvalidValue => GL_INVALID_VALUE,
            GlError::InvalidOperation => GL_INVALID_OPERATION,
            GlError::StackOverflow => GL_STACK_OVERFLOW,
            GlError::StackUnderflow => GL_STACK_UNDERFLOW,
        };
    }
}

pub type GlResult<T> = Result<T, GlError>;
