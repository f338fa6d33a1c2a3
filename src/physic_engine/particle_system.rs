use rand::Rng;

use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::particle::Particle;
use crate::physic_engine::types::{Vec2, FLAME_PALETTE};
use crate::renderer_engine::RendererEngine;

/// Collection dynamique (non ordonnée) des particules d'échappement.
///
/// Propriétaire exclusif de ses particules : émission, avancement et
/// expiration passent tous par ici.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    config: PhysicConfig,
}

impl ParticleSystem {
    pub fn new(config: &PhysicConfig) -> Self {
        Self {
            particles: Vec::new(),
            config: config.clone(),
        }
    }

    /// Émet `particles_per_emit` nouvelles particules à `origin`, couleur
    /// et durée de vie tirées au sort.
    pub fn emit(&mut self, origin: Vec2, rng: &mut impl Rng) {
        for _ in 0..self.config.particles_per_emit {
            let color = FLAME_PALETTE[rng.random_range(0..FLAME_PALETTE.len())];
            let lifetime = rng.random_range(
                self.config.particle_lifetime_min..=self.config.particle_lifetime_max,
            );
            self.particles
                .push(Particle::spawn(origin, color, lifetime, &self.config, rng));
        }
    }

    /// Avance toutes les particules d'une frame puis retire les expirées.
    ///
    /// `retain_mut` combine avancement et expiration en un seul parcours,
    /// sans sauter ni re-traiter d'élément pendant le retrait.
    pub fn update(&mut self) {
        self.particles.retain_mut(|p| {
            p.step();
            p.is_alive()
        });
    }

    /// Dessine toutes les particules vivantes (pas d'ordre de profondeur,
    /// recouvrement opaque).
    pub fn draw<R: RendererEngine>(&self, renderer: &mut R) {
        for particle in &self.particles {
            particle.draw(renderer, self.config.particle_radius);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn reload_config(&mut self, config: &PhysicConfig) {
        self.config = config.clone();
    }
}
