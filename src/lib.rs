//! A minimal OpenGL window built on [winit], [glutin] and [glow].
//!
//! The program runs three phases on one thread:
//!
//! 1. **Bootstrap**: [`GlWindow`] opens a fixed-size window, creates a core
//!    profile context, makes it current, enables vsync, and loads the GL
//!    procedure table.
//! 2. **Shader setup**: [`Renderer`] compiles the embedded vertex/fragment
//!    pair, links it, and uploads a single triangle.
//! 3. **Render loop**: [`run`] polls events, clears and draws, checks the
//!    close flag, and presents, until the window is closed.
//!
//! Any failure is returned as an [`Error`] naming the step, and nothing is
//! retried.
//!
//! # Safety
//!
//! [`Renderer`] and the helpers in [`shaders`] issue raw GL calls and are
//! `unsafe`: they require the context they were created with to be current.
//! [`run`] upholds this for the whole program.
//!
//! [winit]: https://docs.rs/winit
//! [glutin]: https://docs.rs/glutin
//! [glow]: https://docs.rs/glow

mod app;
mod config;
mod context;
mod error;
pub mod logging;
mod renderer;
pub mod shaders;

pub use app::{run, FrameLoop};
pub use config::{WindowConfig, MIN_GL_VERSION};
pub use context::GlWindow;
pub use error::{Error, ShaderStage};
pub use renderer::{Renderer, Vertex, TRIANGLE};
