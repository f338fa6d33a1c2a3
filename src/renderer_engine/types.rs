use gl::types::*;
use memoffset::offset_of;
use std::mem;

use crate::physic_engine::types::{Color, Vec2};

/// Sommet envoyé au GPU : position écran + couleur RGBA.
///
/// # Attributs GPU
///
/// | Location | Type   | Champs                             |
/// |:--------:|:-------|:-----------------------------------|
/// | `0`      | `vec2` | `pos_x`, `pos_y`                   |
/// | `1`      | `vec4` | `col_r`, `col_g`, `col_b`, `col_a` |
#[repr(C)] // garantit un layout C-compatible pour l’envoi GPU
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeVertex {
    /// Position horizontale, en coordonnées écran.
    pub pos_x: f32,

    /// Position verticale, en coordonnées écran (y vers le bas).
    pub pos_y: f32,

    /// Composante rouge de la couleur.
    pub col_r: f32,

    /// Composante verte de la couleur.
    pub col_g: f32,

    /// Composante bleue de la couleur.
    pub col_b: f32,

    /// Opacité.
    pub col_a: f32,
}

use bytemuck::{Pod, Zeroable};

unsafe impl Pod for ShapeVertex {}
unsafe impl Zeroable for ShapeVertex {}

impl ShapeVertex {
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self {
            pos_x: pos.x,
            pos_y: pos.y,
            col_r: color.x,
            col_g: color.y,
            col_b: color.z,
            col_a: color.w,
        }
    }

    /// Configure les attributs de sommets (vertex attributes) pour OpenGL.
    ///
    /// ⚠️ Pré-requis : un *Vertex Array Object (VAO)* doit déjà être lié
    /// avant l’appel.
    pub fn setup_vertex_attribs() {
        let stride = mem::size_of::<Self>() as GLsizei;

        unsafe {
            // Attribut 0 : position (x, y)
            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, pos_x) as *const _,
            );
            gl::EnableVertexAttribArray(0);

            // Attribut 1 : couleur (r, g, b, a)
            gl::VertexAttribPointer(
                1,
                4,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, col_r) as *const _,
            );
            gl::EnableVertexAttribArray(1);
        }
    }
}
