use glam::IVec2;
use rand::Rng;

use crate::physic_engine::types::WHITE;
use crate::renderer_engine::RendererEngine;

/// Rayon d'affichage d'une étoile.
pub const STAR_RADIUS: f32 = 1.0;

/// Une étoile du fond : coordonnée entière immuable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub pos: IVec2,
}

/// Fond étoilé purement décoratif, généré une fois au démarrage et jamais
/// régénéré ensuite.
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new(count: usize, window_size: (i32, i32), rng: &mut impl Rng) -> Self {
        let (width, height) = window_size;
        let stars = (0..count)
            .map(|_| Star {
                pos: IVec2::new(rng.random_range(0..=width), rng.random_range(0..=height)),
            })
            .collect();
        Self { stars }
    }

    pub fn draw<R: RendererEngine>(&self, renderer: &mut R) {
        for star in &self.stars {
            renderer.fill_circle(star.pos.as_vec2(), STAR_RADIUS, WHITE);
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
