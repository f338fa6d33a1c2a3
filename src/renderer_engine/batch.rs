use crate::physic_engine::types::{Color, Vec2};
use crate::renderer_engine::types::ShapeVertex;

/// Accumulateur CPU de triangles pleins pour une frame.
///
/// Toutes les primitives sont triangulées ici, côté CPU ; le `Renderer`
/// ne fait que pousser le lot dans un VBO et dessiner. L'ordre d'insertion
/// est l'ordre de peinture.
#[derive(Debug, Default)]
pub struct ShapeBatch {
    vertices: Vec<ShapeVertex>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.vertices.push(ShapeVertex::new(a, color));
        self.vertices.push(ShapeVertex::new(b, color));
        self.vertices.push(ShapeVertex::new(c, color));
    }

    pub fn push_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        let tr = Vec2::new(pos.x + size.x, pos.y);
        let br = pos + size;
        let bl = Vec2::new(pos.x, pos.y + size.y);
        self.push_triangle(pos, tr, br, color);
        self.push_triangle(pos, br, bl, color);
    }

    /// Triangulation en éventail depuis le premier sommet (suffisant pour
    /// un polygone convexe).
    pub fn push_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        for window in points[1..].windows(2) {
            self.push_triangle(points[0], window[0], window[1], color);
        }
    }

    /// Cercle approximé par un éventail de triangles ; le nombre de
    /// segments suit le rayon, les petites étoiles restent bon marché.
    pub fn push_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let segments = ((radius * 8.0).ceil() as usize).clamp(8, 48);
        let step = std::f32::consts::TAU / segments as f32;
        for i in 0..segments {
            let a0 = i as f32 * step;
            let a1 = (i + 1) as f32 * step;
            self.push_triangle(
                center,
                center + radius * Vec2::from_angle(a0),
                center + radius * Vec2::from_angle(a1),
                color,
            );
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[ShapeVertex] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physic_engine::types::{RED, WHITE};

    #[test]
    fn test_rect_is_two_triangles() {
        let mut batch = ShapeBatch::new();
        batch.push_rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 70.0), WHITE);
        assert_eq!(batch.len(), 6);
    }

    #[test]
    fn test_polygon_fan_vertex_count() {
        let mut batch = ShapeBatch::new();
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(-5.0, 5.0),
        ];
        batch.push_polygon(&points, WHITE);
        // n sommets -> (n - 2) triangles
        assert_eq!(batch.len(), 3 * (points.len() - 2));
    }

    #[test]
    fn test_degenerate_polygon_is_ignored() {
        let mut batch = ShapeBatch::new();
        batch.push_polygon(&[], WHITE);
        batch.push_polygon(&[Vec2::ZERO], WHITE);
        batch.push_polygon(&[Vec2::ZERO, Vec2::ONE], WHITE);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_circle_segments_follow_radius() {
        let mut small = ShapeBatch::new();
        small.push_circle(Vec2::ZERO, 1.0, WHITE);
        assert_eq!(small.len(), 3 * 8); // plancher de 8 segments

        let mut large = ShapeBatch::new();
        large.push_circle(Vec2::ZERO, 100.0, WHITE);
        assert_eq!(large.len(), 3 * 48); // plafond de 48 segments
    }

    #[test]
    fn test_vertices_carry_color() {
        let mut batch = ShapeBatch::new();
        batch.push_rect(Vec2::ZERO, Vec2::ONE, RED);
        for v in batch.vertices() {
            assert_eq!((v.col_r, v.col_g, v.col_b, v.col_a), (1.0, 0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn test_clear_empties_batch() {
        let mut batch = ShapeBatch::new();
        batch.push_circle(Vec2::ZERO, 3.0, WHITE);
        assert!(!batch.is_empty());
        batch.clear();
        assert!(batch.is_empty());
    }
}
