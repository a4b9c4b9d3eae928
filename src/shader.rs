use std::{
    collections::HashMap,
    ffi::{CString, NulError},
    fs,
    path::Path,
    ptr,
};

use gl::types::{GLchar, GLenum, GLint, GLuint};
use glam::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("Shader compilation failed: {0}")]
    CompilationFailed(String),

    #[error("Program linking failed: {0}")]
    LinkingFailed(String),

    #[error("Failed to read shader source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Shader source contains an interior NUL byte: {0}")]
    Nul(#[from] NulError),
}

/// A linked GL shader program with name-keyed uniform setters.
///
/// Uniform locations are cached on first lookup; a name that does not
/// resolve to an active uniform is warned about once and silently
/// ignored afterwards.
pub struct ShaderProgram {
    id: GLuint,
    uniforms: HashMap<String, GLint>,
}

impl ShaderProgram {
    pub fn from_files<P: AsRef<Path>>(
        vertex_path: P,
        fragment_path: P,
    ) -> Result<Self, ShaderError> {
        let vertex_source = fs::read_to_string(vertex_path)?;
        let fragment_source = fs::read_to_string(fragment_path)?;
        Self::from_source(&vertex_source, &fragment_source)
    }

    pub fn from_source(vertex_source: &str, fragment_source: &str) -> Result<Self, ShaderError> {
        let vertex_shader = Self::compile_stage(vertex_source, gl::VERTEX_SHADER)?;
        let fragment_shader = Self::compile_stage(fragment_source, gl::FRAGMENT_SHADER)?;

        let program = unsafe { gl::CreateProgram() };
        unsafe {
            gl::AttachShader(program, vertex_shader);
            gl::AttachShader(program, fragment_shader);
            gl::LinkProgram(program);
            gl::DeleteShader(vertex_shader);
            gl::DeleteShader(fragment_shader);
        }

        let mut success = 1;
        unsafe {
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
        }
        if success == 0 {
            let log = Self::program_info_log(program);
            unsafe {
                gl::DeleteProgram(program);
            }
            return Err(ShaderError::LinkingFailed(log));
        }

        Ok(Self {
            id: program,
            uniforms: HashMap::new(),
        })
    }

    fn compile_stage(source: &str, stage: GLenum) -> Result<GLuint, ShaderError> {
        let source = CString::new(source.as_bytes())?;
        let shader = unsafe { gl::CreateShader(stage) };
        unsafe {
            gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
            gl::CompileShader(shader);
        }

        let mut success = 1;
        unsafe {
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
        }
        if success == 0 {
            let mut len = 0;
            unsafe {
                gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            }
            let log = Self::whitespace_cstring(len as usize);
            unsafe {
                gl::GetShaderInfoLog(shader, len, ptr::null_mut(), log.as_ptr() as *mut GLchar);
                gl::DeleteShader(shader);
            }
            return Err(ShaderError::CompilationFailed(
                log.to_string_lossy().into_owned(),
            ));
        }

        Ok(shader)
    }

    fn program_info_log(program: GLuint) -> String {
        let mut len = 0;
        unsafe {
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        }
        let log = Self::whitespace_cstring(len as usize);
        unsafe {
            gl::GetProgramInfoLog(program, len, ptr::null_mut(), log.as_ptr() as *mut GLchar);
        }
        log.to_string_lossy().into_owned()
    }

    fn whitespace_cstring(len: usize) -> CString {
        let mut buffer: Vec<u8> = Vec::with_capacity(len + 1);
        buffer.extend([b' '].iter().cycle().take(len));
        unsafe { CString::from_vec_unchecked(buffer) }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn use_program(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    fn uniform_location(&mut self, name: &str) -> GLint {
        if let Some(location) = self.uniforms.get(name) {
            return *location;
        }

        let location = match CString::new(name) {
            Ok(cname) => unsafe { gl::GetUniformLocation(self.id, cname.as_ptr()) },
            Err(_) => -1,
        };
        if location == -1 {
            log::warn!("Uniform '{}' not found in shader program {}", name, self.id);
        }
        self.uniforms.insert(name.to_string(), location);
        location
    }

    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.set_int(name, value as i32);
    }

    pub fn set_int(&mut self, name: &str, value: i32) {
        self.use_program();
        let location = self.uniform_location(name);
        unsafe {
            gl::Uniform1i(location, value);
        }
    }

    pub fn set_float(&mut self, name: &str, value: f32) {
        self.use_program();
        let location = self.uniform_location(name);
        unsafe {
            gl::Uniform1f(location, value);
        }
    }

    pub fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.use_program();
        let location = self.uniform_location(name);
        unsafe {
            gl::Uniform2fv(location, 1, value.to_array().as_ptr());
        }
    }

    pub fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.use_program();
        let location = self.uniform_location(name);
        unsafe {
            gl::Uniform3fv(location, 1, value.to_array().as_ptr());
        }
    }

    pub fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.use_program();
        let location = self.uniform_location(name);
        unsafe {
            gl::Uniform4fv(location, 1, value.to_array().as_ptr());
        }
    }

    pub fn set_mat2(&mut self, name: &str, value: &Mat2) {
        self.use_program();
        let location = self.uniform_location(name);
        unsafe {
            gl::UniformMatrix2fv(location, 1, gl::FALSE, value.to_cols_array().as_ptr());
        }
    }

    pub fn set_mat3(&mut self, name: &str, value: &Mat3) {
        self.use_program();
        let location = self.uniform_location(name);
        unsafe {
            gl::UniformMatrix3fv(location, 1, gl::FALSE, value.to_cols_array().as_ptr());
        }
    }

    pub fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.use_program();
        let location = self.uniform_location(name);
        unsafe {
            gl::UniformMatrix4fv(location, 1, gl::FALSE, value.to_cols_array().as_ptr());
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}
