use crate::physic_engine::types::{Color, Vec2};

/// Interface de dessin consommée par la simulation.
///
/// Le rendu est un collaborateur boîte noire : remplissage du fond,
/// primitives pleines (rectangle, polygone convexe, cercle), puis `flush`
/// pour soumettre la géométrie de la frame.
pub trait RendererEngine {
    /// Efface la surface avec une couleur unie et oublie la géométrie
    /// éventuellement accumulée.
    fn clear(&mut self, color: Color);

    /// Rectangle plein aligné sur les axes ; `pos` = coin haut-gauche.
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);

    /// Polygone convexe plein ; ignoré s'il a moins de 3 sommets.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Cercle plein.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Soumet la géométrie accumulée ; retourne le nombre de sommets
    /// dessinés.
    fn flush(&mut self) -> usize;

    fn close(&mut self);
}
