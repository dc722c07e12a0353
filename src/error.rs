//! Error type shared by every setup step.

use std::fmt;

/// A shader pipeline stage, reported alongside compile errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// `GL_VERTEX_SHADER`.
    Vertex,
    /// `GL_FRAGMENT_SHADER`.
    Fragment,
}

impl ShaderStage {
    /// The GL enum passed to `glCreateShader`.
    #[must_use]
    pub fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// Errors that end the program. Each variant names the step that failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The window configuration was rejected before touching any library.
    #[error("invalid window config: {0}")]
    InvalidConfig(&'static str),

    /// The winit event loop could not be created or exited abnormally.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// Window creation or GL framebuffer config selection failed.
    #[error("failed to create window and pick a GL config: {0}")]
    Display(String),

    /// The window exposed no usable raw window handle.
    #[error("window handle unavailable: {0}")]
    WindowHandle(#[from] raw_window_handle::HandleError),

    /// A glutin call (context, surface, swap interval, swap) failed.
    #[error("GL context error: {0}")]
    Context(#[from] glutin::error::Error),

    /// glow failed to create a GL object.
    #[error("failed to create GL object: {0}")]
    GlObject(String),

    /// A shader stage did not compile. `log` is the driver's info log.
    #[error("{stage} shader compile error: {log}")]
    ShaderCompile {
        /// Stage that failed.
        stage: ShaderStage,
        /// Compiler info log.
        log: String,
    },

    /// The program did not link. Carries the linker info log.
    #[error("program link error: {0}")]
    ProgramLink(String),
}
