use anyhow::{anyhow, Result};
use log::info;

use crate::cstr;
use crate::physic_engine::types::{Color, Vec2};
use crate::renderer_engine::batch::ShapeBatch;
use crate::renderer_engine::shader::try_compile_shader_program;
use crate::renderer_engine::tools::format_bytes;
use crate::renderer_engine::types::ShapeVertex;
use crate::renderer_engine::RendererEngine;

/// Capacité initiale du VBO de triangles (en sommets).
const INITIAL_VERTEX_CAPACITY: usize = 16 * 1024;

/// Renderer OpenGL immédiat : un seul shader plat, un VBO de flux réécrit à
/// chaque frame avec les triangles accumulés dans le `ShapeBatch`.
pub struct Renderer {
    vao: u32,
    vbo: u32,

    // Shader
    shader_program: u32,
    loc_size: i32,

    batch: ShapeBatch,
    vbo_capacity: usize, // en sommets

    window_size_f32: (f32, f32),
}

impl Renderer {
    /// Construit le renderer ; le contexte OpenGL doit déjà être actif.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let (vertex_src, fragment_src) = Renderer::src_shaders_shapes();
        let shader_program = unsafe {
            try_compile_shader_program(vertex_src, fragment_src)
                .map_err(|e| anyhow!("Compilation des shaders échouée :\n{}", e))?
        };

        let loc_size = unsafe { gl::GetUniformLocation(shader_program, cstr!("uSize")) };

        let (vao, vbo) = unsafe { Renderer::setup_gpu_buffers(INITIAL_VERTEX_CAPACITY) };

        Ok(Self {
            vao,
            vbo,
            shader_program,
            loc_size,
            batch: ShapeBatch::with_capacity(INITIAL_VERTEX_CAPACITY),
            vbo_capacity: INITIAL_VERTEX_CAPACITY,
            window_size_f32: (width as f32, height as f32),
        })
    }

    /// Shaders du rendu "formes pleines" : coordonnées écran (y vers le
    /// bas) converties en NDC dans le vertex shader.
    pub fn src_shaders_shapes() -> (&'static str, &'static str) {
        let vertex_src = r#"
        #version 330 core
        layout(location = 0) in vec2 aPos;
        layout(location = 1) in vec4 aColor;

        out vec4 vertexColor;

        uniform vec2 uSize;

        void main() {
            vertexColor = aColor;

            float x = aPos.x / uSize.x * 2.0 - 1.0;
            float y = 1.0 - aPos.y / uSize.y * 2.0;
            gl_Position = vec4(x, y, 0.0, 1.0);
        }
        "#;

        let fragment_src = r#"
        #version 330 core
        in vec4 vertexColor;
        out vec4 FragColor;

        void main() {
            FragColor = vertexColor;
        }
        "#;
        (vertex_src, fragment_src)
    }

    unsafe fn setup_gpu_buffers(capacity: usize) -> (u32, u32) {
        let (mut vao, mut vbo) = (0u32, 0u32);

        // === VAO ===
        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);

        // === VBO de flux ===
        gl::GenBuffers(1, &mut vbo);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

        let buffer_size = (capacity * std::mem::size_of::<ShapeVertex>()) as isize;
        info!(
            "🎮 Allocating shape vertex buffer: {} vertices → {}",
            capacity,
            format_bytes(buffer_size)
        );
        gl::BufferData(
            gl::ARRAY_BUFFER,
            buffer_size,
            std::ptr::null(),
            gl::STREAM_DRAW,
        );

        ShapeVertex::setup_vertex_attribs();
        // === Nettoyage ===
        gl::BindVertexArray(0);

        (vao, vbo)
    }

    /// Recrée le VBO quand une frame dépasse la capacité courante.
    unsafe fn grow_buffers(&mut self, needed: usize) {
        let new_capacity = needed.next_power_of_two();

        gl::DeleteBuffers(1, &self.vbo);
        gl::DeleteVertexArrays(1, &self.vao);

        let (vao, vbo) = Renderer::setup_gpu_buffers(new_capacity);
        self.vao = vao;
        self.vbo = vbo;
        self.vbo_capacity = new_capacity;
    }
}

impl RendererEngine for Renderer {
    fn clear(&mut self, color: Color) {
        self.batch.clear();
        unsafe {
            gl::ClearColor(color.x, color.y, color.z, color.w);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.batch.push_rect(pos, size, color);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.batch.push_polygon(points, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.batch.push_circle(center, radius, color);
    }

    fn flush(&mut self) -> usize {
        let count = self.batch.len();
        if count == 0 {
            return 0;
        }

        unsafe {
            if count > self.vbo_capacity {
                self.grow_buffers(count);
            }

            gl::UseProgram(self.shader_program);
            gl::Uniform2f(self.loc_size, self.window_size_f32.0, self.window_size_f32.1);

            gl::BindVertexArray(self.vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl::BufferSubData(
                gl::ARRAY_BUFFER,
                0,
                (count * std::mem::size_of::<ShapeVertex>()) as isize,
                self.batch.vertices().as_ptr() as *const _,
            );
            gl::DrawArrays(gl::TRIANGLES, 0, count as i32);
        }

        self.batch.clear();
        count
    }

    fn close(&mut self) {
        unsafe {
            if self.vbo != 0 {
                gl::DeleteBuffers(1, &self.vbo);
                self.vbo = 0;
            }
            if self.vao != 0 {
                gl::DeleteVertexArrays(1, &self.vao);
                self.vao = 0;
            }
            if self.shader_program != 0 {
                gl::DeleteProgram(self.shader_program);
                self.shader_program = 0;
            }
        }
    }
}
