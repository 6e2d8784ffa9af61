//! Quantum foam scene - a stateless flicker of random dots
//!
//! Fresh uniform samples every frame; no point survives to the next one,
//! which is what makes it read as froth rather than a starfield.

use glam::Vec2;
use rand::Rng;

use super::Shape;

/// Dots per frame
const POINT_COUNT: u32 = 200;
/// Half-extent of the sampling square
const EXTENT: f32 = 200.0;

pub fn draw(rng: &mut impl Rng) -> Vec<Shape> {
    (0..POINT_COUNT)
        .map(|_| Shape::Circle {
            center: Vec2::new(
                rng.random_range(-EXTENT..EXTENT),
                rng.random_range(-EXTENT..EXTENT),
            ),
            radius: rng.random_range(0.5..2.0),
            color: [1.0, 1.0, 1.0, rng.random_range(0.39..1.0)],
        })
        .collect()
}
