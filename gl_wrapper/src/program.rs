use gl::types::{GLenum, GLuint};
use std::ffi::{c_char, CString};
use thiserror::Error;

const INFO_LOG_LEN: usize = 1024;

pub struct ProgramBuilder<'a> {
    vert: &'a str,
    frag: &'a str,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(vert_src: &'a str, frag_src: &'a str) -> Self {
        Self {
            vert: vert_src,
            frag: frag_src,
        }
    }

    pub fn build(self) -> Result<Program, PBError> {
        let vert = compile_shader(gl::VERTEX_SHADER, self.vert)?;
        let frag = match compile_shader(gl::FRAGMENT_SHADER, self.frag) {
            Ok(frag) => frag,
            Err(e) => {
                unsafe { gl::DeleteShader(vert) };
                return Err(e);
            }
        };

        let mut success: i32 = 0;

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                let mut buf = [0_u8; INFO_LOG_LEN];

                gl::GetProgramInfoLog(
                    program,
                    INFO_LOG_LEN as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                gl::DeleteProgram(program);

                return Err(PBError::Linking(info_log(&buf)));
            }

            log::debug!("linked program {program}");

            Ok(Program { id: program })
        }
    }
}

fn compile_shader(kind: GLenum, src: &str) -> Result<GLuint, PBError> {
    let src = CString::new(src).map_err(|_| PBError::InvalidSource)?;
    let mut success: i32 = 0;

    unsafe {
        let shader = gl::CreateShader(kind);

        gl::ShaderSource(
            shader,
            1,
            (&src.as_ptr()) as *const *const c_char,
            std::ptr::null(),
        );

        gl::CompileShader(shader);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut i32);
        if success != 1 {
            let mut buf = [0_u8; INFO_LOG_LEN];

            gl::GetShaderInfoLog(
                shader,
                INFO_LOG_LEN as i32,
                std::ptr::null_mut(),
                buf.as_mut_ptr() as *mut c_char,
            );
            gl::DeleteShader(shader);

            return Err(PBError::Compilation(info_log(&buf)));
        }

        Ok(shader)
    }
}

/// Info log up to the first nul.
fn info_log(buf: &[u8]) -> String {
    let end = buf.iter().position(|b| *b == 0).unwrap_or(buf.len());

    String::from_utf8_lossy(&buf[..end]).trim_end().to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("shader source contains a nul byte")]
    InvalidSource,
    #[error("{0}")]
    Compilation(String),
    #[error("{0}")]
    Linking(String),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_stops_at_nul() {
        let mut buf = [0_u8; 16];
        buf[..9].copy_from_slice(b"0:1 oops\n");

        assert_eq!(info_log(&buf), "0:1 oops");
        assert_eq!(info_log(b"no terminator"), "no terminator");
    }
}
