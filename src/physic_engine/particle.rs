use rand::Rng;

use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::types::{Color, Vec2};
use crate::renderer_engine::RendererEngine;

/// Une bouffée d'échappement : position, vitesse, couleur, durée de vie.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// Compte à rebours en frames ; la particule meurt à 0.
    pub lifetime: i32,
}

impl Particle {
    /// Construit une particule à `pos`, vitesse tirée dans les plages
    /// configurées : dérive horizontale symétrique, chute vers le bas.
    pub fn spawn(
        pos: Vec2,
        color: Color,
        lifetime: i32,
        config: &PhysicConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let spread = config.particle_spread_x;
        Self {
            pos,
            vel: Vec2::new(
                rng.random_range(-spread..=spread),
                rng.random_range(config.particle_fall_min..=config.particle_fall_max),
            ),
            color,
            lifetime,
        }
    }

    /// Avance la particule d'une frame et consomme une unité de vie.
    pub fn step(&mut self) {
        self.pos += self.vel;
        self.lifetime -= 1;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lifetime > 0
    }

    pub fn draw<R: RendererEngine>(&self, renderer: &mut R, radius: f32) {
        renderer.fill_circle(self.pos.round(), radius, self.color);
    }
}
