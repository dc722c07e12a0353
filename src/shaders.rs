//! GLSL shader sources and compilation helpers.
//!
//! Both shaders target GLSL 3.30 core, matching the default context request.

use std::sync::Arc;

use glow::HasContext;

use crate::error::{Error, ShaderStage};

/// Vertex shader: passes a 2D clip-space position straight through.
///
/// # Attributes
///
/// | Location | Name         | Type   |
/// |----------|--------------|--------|
/// | `0`      | `a_position` | `vec2` |
pub const VERTEX_SRC: &str = r"#version 330 core

layout (location = 0) in vec2 a_position;

void main() {
    gl_Position = vec4(a_position, 0.0, 1.0);
}
";

/// Fragment shader: fills every fragment with a fixed orange.
pub const FRAGMENT_SRC: &str = r"#version 330 core

out vec4 frag_color;

void main() {
    frag_color = vec4(1.0, 0.5, 0.2, 1.0);
}
";

/// A linked GL program, deleted when dropped.
///
/// The context it was created on must still be current when this is dropped.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    program: glow::Program,
}

impl ShaderProgram {
    /// Bind this program for subsequent draw calls.
    ///
    /// # Safety
    ///
    /// Requires the owning GL context to be current.
    pub unsafe fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.program)) };
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.program) };
    }
}

/// Compile a shader program from vertex and fragment source strings.
///
/// The compiled shader objects are detached and deleted after successful
/// linking, so the returned [`ShaderProgram`] is the only live handle.
///
/// # Safety
///
/// Requires a valid, current OpenGL context.
///
/// # Errors
///
/// Returns [`Error::ShaderCompile`] or [`Error::ProgramLink`] with the
/// driver's info log. Every object created so far is deleted first.
pub unsafe fn compile_program(
    gl: &Arc<glow::Context>,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<ShaderProgram, Error> {
    let vs = unsafe { compile_shader(gl, ShaderStage::Vertex, vertex_src) }?;
    let fs = match unsafe { compile_shader(gl, ShaderStage::Fragment, fragment_src) } {
        Ok(fs) => fs,
        Err(err) => {
            unsafe { gl.delete_shader(vs) };
            return Err(err);
        }
    };

    unsafe {
        let program = match gl.create_program() {
            Ok(program) => program,
            Err(err) => {
                gl.delete_shader(vs);
                gl.delete_shader(fs);
                return Err(Error::GlObject(err));
            }
        };

        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.link_program(program);

        let linked = gl.get_program_link_status(program);
        let link_log = if linked {
            String::new()
        } else {
            gl.get_program_info_log(program)
        };

        gl.detach_shader(program, vs);
        gl.detach_shader(program, fs);
        gl.delete_shader(vs);
        gl.delete_shader(fs);

        if !linked {
            gl.delete_program(program);
            return Err(Error::ProgramLink(link_log));
        }

        log::debug!("linked shader program {program:?}");

        Ok(ShaderProgram {
            gl: Arc::clone(gl),
            program,
        })
    }
}

/// Compile a single shader stage from source.
///
/// # Safety
///
/// Requires a valid, current OpenGL context.
unsafe fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, Error> {
    unsafe {
        let shader = gl.create_shader(stage.gl_enum()).map_err(Error::GlObject)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(Error::ShaderCompile { stage, log });
        }

        Ok(shader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_target_glsl_330_core() {
        for src in [VERTEX_SRC, FRAGMENT_SRC] {
            assert_eq!(src.lines().next(), Some("#version 330 core"));
            assert!(src.contains("void main()"));
        }
    }

    #[test]
    fn vertex_shader_reads_position_at_location_zero() {
        assert!(VERTEX_SRC.contains("layout (location = 0) in vec2 a_position;"));
        assert!(VERTEX_SRC.contains("gl_Position"));
    }

    #[test]
    fn fragment_shader_writes_one_output() {
        assert_eq!(FRAGMENT_SRC.matches("out vec4").count(), 1);
    }
}
