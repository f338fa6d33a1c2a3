pub mod r#trait;
pub use r#trait::{PhysicEngine, PhysicEngineFull, PhysicEngineIterator};

pub mod types;
pub use self::types::{Color, Vec2};

pub mod config;
pub use self::config::PhysicConfig;

pub mod rocket;
pub use self::rocket::Rocket;

pub mod particle;
pub use self::particle::Particle;

pub mod particle_system;
pub use self::particle_system::ParticleSystem;

pub mod starfield;
pub use self::starfield::{Star, Starfield};

pub mod physic_engine_takeoff;
pub use self::physic_engine_takeoff::PhysicEngineTakeoff;
