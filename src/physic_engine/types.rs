pub use glam::Vec2;

/// Couleur RGBA normalisée (composantes dans 0.0..=1.0).
pub type Color = glam::Vec4;

// Palette fixe de la scène (RGB 8 bits normalisés).
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const ORANGE: Color = Color::new(1.0, 165.0 / 255.0, 0.0, 1.0);
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
pub const GRAY: Color = Color::new(169.0 / 255.0, 169.0 / 255.0, 169.0 / 255.0, 1.0);

/// Couleurs de flamme possibles pour les particules d'échappement.
pub const FLAME_PALETTE: [Color; 3] = [RED, ORANGE, YELLOW];
