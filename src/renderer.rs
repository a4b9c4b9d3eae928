use std::path::Path;

use gl::types::GLuint;
use glam::{Mat4, Vec3};
use thiserror::Error;

use crate::camera::Camera;
use crate::shader::{ShaderError, ShaderProgram};

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

const LIGHT_POSITION: Vec3 = Vec3::new(1.2, 1.0, 2.0);
const LIGHT_SCALE: f32 = 0.2;
const LIGHT_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const OBJECT_COLOR: Vec3 = Vec3::new(1.0, 0.5, 0.31);

/// Axis the lit cube spins around, normalized at draw time.
const SPIN_AXIS: Vec3 = Vec3::new(0.5, 1.0, 0.0);

/// Unit cube centered on the origin: 36 vertices, interleaved position
/// and face normal.
#[rustfmt::skip]
const CUBE_VERTICES: [f32; 216] = [
    // positions          // normals
    -0.5, -0.5, -0.5,  0.0,  0.0, -1.0,
     0.5, -0.5, -0.5,  0.0,  0.0, -1.0,
     0.5,  0.5, -0.5,  0.0,  0.0, -1.0,
     0.5,  0.5, -0.5,  0.0,  0.0, -1.0,
    -0.5,  0.5, -0.5,  0.0,  0.0, -1.0,
    -0.5, -0.5, -0.5,  0.0,  0.0, -1.0,

    -0.5, -0.5,  0.5,  0.0,  0.0,  1.0,
     0.5, -0.5,  0.5,  0.0,  0.0,  1.0,
     0.5,  0.5,  0.5,  0.0,  0.0,  1.0,
     0.5,  0.5,  0.5,  0.0,  0.0,  1.0,
    -0.5,  0.5,  0.5,  0.0,  0.0,  1.0,
    -0.5, -0.5,  0.5,  0.0,  0.0,  1.0,

    -0.5,  0.5,  0.5, -1.0,  0.0,  0.0,
    -0.5,  0.5, -0.5, -1.0,  0.0,  0.0,
    -0.5, -0.5, -0.5, -1.0,  0.0,  0.0,
    -0.5, -0.5, -0.5, -1.0,  0.0,  0.0,
    -0.5, -0.5,  0.5, -1.0,  0.0,  0.0,
    -0.5,  0.5,  0.5, -1.0,  0.0,  0.0,

     0.5,  0.5,  0.5,  1.0,  0.0,  0.0,
     0.5,  0.5, -0.5,  1.0,  0.0,  0.0,
     0.5, -0.5, -0.5,  1.0,  0.0,  0.0,
     0.5, -0.5, -0.5,  1.0,  0.0,  0.0,
     0.5, -0.5,  0.5,  1.0,  0.0,  0.0,
     0.5,  0.5,  0.5,  1.0,  0.0,  0.0,

    -0.5, -0.5, -0.5,  0.0, -1.0,  0.0,
     0.5, -0.5, -0.5,  0.0, -1.0,  0.0,
     0.5, -0.5,  0.5,  0.0, -1.0,  0.0,
     0.5, -0.5,  0.5,  0.0, -1.0,  0.0,
    -0.5, -0.5,  0.5,  0.0, -1.0,  0.0,
    -0.5, -0.5, -0.5,  0.0, -1.0,  0.0,

    -0.5,  0.5, -0.5,  0.0,  1.0,  0.0,
     0.5,  0.5, -0.5,  0.0,  1.0,  0.0,
     0.5,  0.5,  0.5,  0.0,  1.0,  0.0,
     0.5,  0.5,  0.5,  0.0,  1.0,  0.0,
    -0.5,  0.5,  0.5,  0.0,  1.0,  0.0,
    -0.5,  0.5, -0.5,  0.0,  1.0,  0.0,
];

const VERTEX_COUNT: i32 = 36;
const FLOATS_PER_VERTEX: usize = 6;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Shader setup failed: {0}")]
    Shader(#[from] ShaderError),
}

/// Owns the scene's GL objects: one vertex buffer shared by two vertex
/// arrays (the lit cube reads positions and normals, the light cube
/// positions only) and the two shader programs.
pub struct Renderer {
    cube_vao: GLuint,
    light_vao: GLuint,
    vbo: GLuint,
    cube_shader: ShaderProgram,
    light_shader: ShaderProgram,
}

impl Renderer {
    /// Compiles the scene shaders from `shader_dir` and uploads the cube
    /// geometry. Requires a current GL context.
    pub fn new(shader_dir: &Path) -> Result<Self, RenderError> {
        let cube_shader = ShaderProgram::from_files(
            shader_dir.join("cube.vert"),
            shader_dir.join("cube.frag"),
        )?;
        let light_shader = ShaderProgram::from_files(
            shader_dir.join("light.vert"),
            shader_dir.join("light.frag"),
        )?;

        let stride = (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as i32;
        let normal_offset = (3 * std::mem::size_of::<f32>()) as *const _;

        let mut vbo = 0;
        let mut cube_vao = 0;
        let mut light_vao = 0;
        unsafe {
            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(&CUBE_VERTICES) as isize,
                CUBE_VERTICES.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            gl::GenVertexArrays(1, &mut cube_vao);
            gl::BindVertexArray(cube_vao);
            gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, stride, std::ptr::null());
            gl::EnableVertexAttribArray(0);
            gl::VertexAttribPointer(1, 3, gl::FLOAT, gl::FALSE, stride, normal_offset);
            gl::EnableVertexAttribArray(1);

            gl::GenVertexArrays(1, &mut light_vao);
            gl::BindVertexArray(light_vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, stride, std::ptr::null());
            gl::EnableVertexAttribArray(0);

            gl::BindVertexArray(0);
        }

        Ok(Self {
            cube_vao,
            light_vao,
            vbo,
            cube_shader,
            light_shader,
        })
    }

    /// Draws one frame: the spinning lit cube, then the light marker.
    /// All camera mutation for the frame must have happened before this
    /// is called.
    pub fn draw(&mut self, camera: &Camera, aspect_ratio: f32, time_seconds: f32) {
        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        let projection = Mat4::perspective_rh(
            camera.zoom().to_radians(),
            aspect_ratio,
            NEAR_PLANE,
            FAR_PLANE,
        );
        let view = camera.view_matrix();

        let model = Mat4::from_axis_angle(SPIN_AXIS.normalize(), time_seconds);
        self.cube_shader.use_program();
        self.cube_shader.set_vec3("objectColor", OBJECT_COLOR);
        self.cube_shader.set_vec3("lightColor", LIGHT_COLOR);
        self.cube_shader.set_vec3("lightPos", LIGHT_POSITION);
        self.cube_shader.set_vec3("viewPos", camera.position);
        self.cube_shader.set_mat4("projection", &projection);
        self.cube_shader.set_mat4("view", &view);
        self.cube_shader.set_mat4("model", &model);
        unsafe {
            gl::BindVertexArray(self.cube_vao);
            gl::DrawArrays(gl::TRIANGLES, 0, VERTEX_COUNT);
        }

        let model =
            Mat4::from_translation(LIGHT_POSITION) * Mat4::from_scale(Vec3::splat(LIGHT_SCALE));
        self.light_shader.use_program();
        self.light_shader.set_mat4("projection", &projection);
        self.light_shader.set_mat4("view", &view);
        self.light_shader.set_mat4("model", &model);
        unsafe {
            gl::BindVertexArray(self.light_vao);
            gl::DrawArrays(gl::TRIANGLES, 0, VERTEX_COUNT);
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.cube_vao);
            gl::DeleteVertexArrays(1, &self.light_vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}
