use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PhysicConfig {
    pub rocket_width: f32,
    pub rocket_height: f32,
    pub rocket_thrust: f32,
    pub rocket_gravity: f32,

    pub particles_per_emit: usize,
    pub particle_radius: f32,
    pub particle_lifetime_min: i32,
    pub particle_lifetime_max: i32,
    pub particle_spread_x: f32,
    pub particle_fall_min: f32,
    pub particle_fall_max: f32,

    pub star_count: usize,

    /// Graine optionnelle pour rejouer une simulation à l'identique.
    pub random_seed: Option<u64>,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            rocket_width: 30.0,
            rocket_height: 70.0,
            rocket_thrust: -0.2,  // accélération vers le haut (y écran vers le bas)
            rocket_gravity: 0.05, // accélération vers le bas
            particles_per_emit: 5,
            particle_radius: 3.0,
            particle_lifetime_min: 20,
            particle_lifetime_max: 40,
            particle_spread_x: 1.0,
            particle_fall_min: 2.0,
            particle_fall_max: 5.0,
            star_count: 100,
            random_seed: None,
        }
    }
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
