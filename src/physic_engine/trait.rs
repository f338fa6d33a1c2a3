use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::particle::Particle;
use crate::physic_engine::particle_system::ParticleSystem;
use crate::physic_engine::rocket::Rocket;
use crate::physic_engine::starfield::Starfield;

pub trait PhysicEngineIterator {
    /// Retourne un itérateur sur les particules vivantes.
    ///
    /// `Box<dyn Iterator>` : signature simple et stable quelle que soit la
    /// complexité du type d'itérateur interne ; le coût du dispatch
    /// dynamique est négligeable devant le reste de la frame.
    fn iter_live_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a>;
}

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune aux moteurs de simulation : le `Simulator` et les
/// tests manipulent un moteur (réel ou mock) sans connaître son
/// implémentation concrète.
pub trait PhysicEngine {
    /// Avance la simulation d'exactement une frame.
    fn update(&mut self);

    fn rocket(&self) -> &Rocket;
    fn particle_system(&self) -> &ParticleSystem;
    fn starfield(&self) -> &Starfield;

    fn reload_config(&mut self, config: &PhysicConfig) -> bool;

    fn get_config(&self) -> &PhysicConfig;

    /// Ferme / libère le moteur physique.
    fn close(&mut self) {} // Par défaut, fait rien.
}

pub trait PhysicEngineFull: PhysicEngine + PhysicEngineIterator {}
