use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::physic_engine::{
    config::PhysicConfig, particle::Particle, particle_system::ParticleSystem, rocket::Rocket,
    starfield::Starfield, types::Vec2, PhysicEngine, PhysicEngineFull, PhysicEngineIterator,
};

/// Distance entre le haut du corps de la fusée et le bas de la fenêtre à la
/// position de départ.
const SPAWN_BOTTOM_MARGIN: f32 = 100.0;

/// Moteur de simulation du décollage : une fusée, son panache de particules
/// et un fond étoilé, avancés d'un pas par frame.
///
/// Tout le hasard de la scène (vitesses, couleurs, durées de vie des
/// particules, placement des étoiles) passe par l'unique `StdRng` du
/// moteur ; une graine fixe rejoue donc une simulation à l'identique.
#[derive(Debug)]
pub struct PhysicEngineTakeoff {
    rocket: Rocket,
    particles: ParticleSystem,
    starfield: Starfield,

    rng: StdRng,
    config: PhysicConfig,
    window_size: (i32, i32),
}

impl PhysicEngineTakeoff {
    pub fn new(config: &PhysicConfig, window_size: (i32, i32)) -> Self {
        let mut rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // Fusée centrée horizontalement, proche du bord bas.
        let spawn_pos = Vec2::new(
            window_size.0 as f32 / 2.0 - config.rocket_width / 2.0,
            window_size.1 as f32 - SPAWN_BOTTOM_MARGIN,
        );

        let starfield = Starfield::new(config.star_count, window_size, &mut rng);

        Self {
            rocket: Rocket::new(spawn_pos, config),
            particles: ParticleSystem::new(config),
            starfield,
            rng,
            config: config.clone(),
            window_size,
        }
    }

    fn update(&mut self) {
        self.rocket.step();

        // Émission au point d'échappement courant, puis avancement et
        // expiration de tout le panache.
        let origin = self.rocket.exhaust_point();
        self.particles.emit(origin, &mut self.rng);
        self.particles.update();
    }
}

// ==================================
// Trait PhysicEngine
// ==================================
impl PhysicEngineIterator for PhysicEngineTakeoff {
    fn iter_live_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a> {
        Box::new(self.particles.particles().iter())
    }
}

impl PhysicEngine for PhysicEngineTakeoff {
    fn update(&mut self) {
        self.update();
    }

    fn rocket(&self) -> &Rocket {
        &self.rocket
    }

    fn particle_system(&self) -> &ParticleSystem {
        &self.particles
    }

    fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    fn reload_config(&mut self, config: &PhysicConfig) -> bool {
        let stars_changed = config.star_count != self.config.star_count;
        self.config = config.clone();

        self.rocket.reload_config(config);
        self.particles.reload_config(config);

        // Le fond n'est régénéré que si le nombre d'étoiles change.
        if stars_changed {
            self.starfield = Starfield::new(config.star_count, self.window_size, &mut self.rng);
        }
        stars_changed
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn close(&mut self) {
        self.particles.clear();
        debug!("PhysicEngineTakeoff closed and reset.");
    }
}

impl PhysicEngineFull for PhysicEngineTakeoff {}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait PhysicEngineTestHelpers {
    fn particles_count(&self) -> usize;
}

#[cfg(any(test, feature = "test_helpers"))]
impl PhysicEngineTestHelpers for PhysicEngineTakeoff {
    fn particles_count(&self) -> usize {
        self.particles.len()
    }
}
