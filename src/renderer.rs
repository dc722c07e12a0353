//! Per-frame drawing: owns the shader program and the triangle geometry.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glow::HasContext;

use crate::{
    error::Error,
    shaders::{self, ShaderProgram},
};

/// A vertex in clip space, uploaded as-is.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    /// `a_position`, attribute location 0.
    pub position: [f32; 2],
}

/// The one triangle drawn every frame.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex { position: [-0.5, -0.5] },
    Vertex { position: [0.5, -0.5] },
    Vertex { position: [0.0, 0.5] },
];

/// Byte stride of [`Vertex`], pre-cast to the `i32` GL expects.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const VERTEX_STRIDE: i32 = std::mem::size_of::<Vertex>() as i32;

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const TRIANGLE_LEN: i32 = TRIANGLE.len() as i32;

/// Clears the frame and draws [`TRIANGLE`] with the embedded shader pair.
///
/// Field order matters: the program and buffers are released in [`Drop`]
/// while the context is still current, so a `Renderer` must be dropped before
/// the [`GlWindow`](crate::GlWindow) that owns the context.
pub struct Renderer {
    gl: Arc<glow::Context>,
    program: ShaderProgram,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    clear_color: [f32; 4],
}

impl Renderer {
    /// Compile the shader program and upload the triangle.
    ///
    /// # Safety
    ///
    /// The `gl` context must be current and valid.
    ///
    /// # Errors
    ///
    /// Returns an error if shader compilation, program linking, or buffer
    /// creation fails. Nothing created here outlives a failed call.
    pub unsafe fn new(gl: Arc<glow::Context>, clear_color: [f32; 4]) -> Result<Self, Error> {
        let program =
            unsafe { shaders::compile_program(&gl, shaders::VERTEX_SRC, shaders::FRAGMENT_SRC)? };

        let (vao, vbo) = unsafe {
            let vao = gl.create_vertex_array().map_err(Error::GlObject)?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(err) => {
                    gl.delete_vertex_array(vao);
                    return Err(Error::GlObject(err));
                }
            };

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&TRIANGLE),
                glow::STATIC_DRAW,
            );
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, VERTEX_STRIDE, 0);
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            (vao, vbo)
        };

        Ok(Self {
            gl,
            program,
            vao,
            vbo,
            clear_color,
        })
    }

    /// Clear the bound framebuffer and draw the triangle.
    ///
    /// # Safety
    ///
    /// Requires the context passed to [`new`](Self::new) to be current.
    pub unsafe fn render(&self) {
        let gl = &self.gl;
        let [r, g, b, a] = self.clear_color;
        unsafe {
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);

            self.program.bind();
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::TRIANGLES, 0, TRIANGLE_LEN);
            gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
        }
        log::debug!("renderer resources released");
    }
}
