use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::types::{Color, Vec2, GRAY, WHITE};
use crate::renderer_engine::RendererEngine;

/// Hauteur du cône avant, au-dessus du corps de la fusée.
pub const NOSE_HEIGHT: f32 = 20.0;

/// Fusée : un corps rectangulaire et un cône, animés par une cinématique
/// à accélération constante (poussée + gravité, appliquées à chaque frame).
#[derive(Debug, Clone)]
pub struct Rocket {
    /// Coin haut-gauche du corps (coordonnées écran, y vers le bas).
    pub pos: Vec2,
    /// Largeur/hauteur du corps.
    pub size: Vec2,
    /// Vitesse verticale (négative = montée).
    pub velocity: f32,

    thrust: f32,
    gravity: f32,

    body_color: Color,
    nose_color: Color,
}

impl Rocket {
    pub fn new(pos: Vec2, config: &PhysicConfig) -> Self {
        Self {
            pos,
            size: Vec2::new(config.rocket_width, config.rocket_height),
            velocity: 0.0,
            thrust: config.rocket_thrust,
            gravity: config.rocket_gravity,
            body_color: WHITE,
            nose_color: GRAY,
        }
    }

    /// Avance la fusée d'une frame.
    ///
    /// La poussée domine la gravité : la vitesse décroît strictement et la
    /// fusée accélère vers le haut sans borne (pas de vitesse terminale ni
    /// de limite d'altitude, comportement assumé).
    pub fn step(&mut self) {
        self.velocity += self.thrust + self.gravity;
        self.pos.y += self.velocity;
    }

    /// Point d'émission des particules : milieu du bord inférieur du corps.
    pub fn exhaust_point(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y + self.size.y)
    }

    pub fn draw<R: RendererEngine>(&self, renderer: &mut R) {
        // Corps
        renderer.fill_rect(self.pos, self.size, self.body_color);
        // Cône, pointe centrée au-dessus du corps
        renderer.fill_polygon(
            &[
                self.pos,
                Vec2::new(self.pos.x + self.size.x, self.pos.y),
                Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y - NOSE_HEIGHT),
            ],
            self.nose_color,
        );
    }

    /// Applique une nouvelle configuration sans toucher à l'état cinématique.
    pub fn reload_config(&mut self, config: &PhysicConfig) {
        self.thrust = config.rocket_thrust;
        self.gravity = config.rocket_gravity;
        self.size = Vec2::new(config.rocket_width, config.rocket_height);
    }
}
