//! Infinity scene - a tunnel of fading ellipses behind a random starfield

use glam::Vec2;
use rand::Rng;

use super::Shape;

/// Nested ellipses in the tunnel
const RING_COUNT: u32 = 10;
/// Largest ellipse radius; each deeper ring shrinks as 1/(i+1)
const TUNNEL_RADIUS: f32 = 100.0;
/// Center drift amplitude
const DRIFT: f32 = 50.0;

/// Stars scattered over the tunnel
const STAR_COUNT: u32 = 150;
/// Half-extent of the star field
const STAR_EXTENT: f32 = 250.0;

pub fn draw(time: f32, rng: &mut impl Rng) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity((RING_COUNT + STAR_COUNT) as usize);

    for i in 0..RING_COUNT {
        let phase = i as f32;
        let radius = TUNNEL_RADIUS / (phase + 1.0);
        let center = Vec2::new(
            (time * 2.0 + phase).sin() * DRIFT,
            (time * 2.0 + phase).cos() * DRIFT,
        );
        // Deeper rings fade out
        let alpha = (100.0 - phase * 8.0) / 255.0;

        shapes.push(Shape::Ring {
            center,
            rx: radius,
            ry: radius,
            thickness: 1.0,
            color: [1.0, 1.0, 1.0, alpha],
        });
    }

    for _ in 0..STAR_COUNT {
        shapes.push(Shape::Point {
            pos: Vec2::new(
                rng.random_range(-STAR_EXTENT..STAR_EXTENT),
                rng.random_range(-STAR_EXTENT..STAR_EXTENT),
            ),
            size: 1.0,
            color: [1.0, 1.0, 1.0, rng.random_range(0.39..1.0)],
        });
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_shape_counts() {
        let mut rng = Pcg32::seed_from_u64(1);
        let shapes = draw(0.0, &mut rng);
        let rings = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Ring { .. }))
            .count();
        let stars = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Point { .. }))
            .count();
        assert_eq!(rings, 10);
        assert_eq!(stars, 150);
    }

    #[test]
    fn test_rings_shrink_and_fade() {
        let mut rng = Pcg32::seed_from_u64(1);
        let shapes = draw(3.0, &mut rng);
        let mut last_radius = f32::INFINITY;
        let mut last_alpha = f32::INFINITY;
        for shape in shapes.iter().take(10) {
            let Shape::Ring { rx, color, .. } = shape else {
                panic!("tunnel comes first");
            };
            assert!(*rx < last_radius);
            assert!(color[3] < last_alpha);
            last_radius = *rx;
            last_alpha = color[3];
        }
    }

    #[test]
    fn test_stars_within_field() {
        let mut rng = Pcg32::seed_from_u64(5);
        for shape in draw(0.0, &mut rng) {
            if let Shape::Point { pos, .. } = shape {
                assert!(pos.x.abs() < STAR_EXTENT && pos.y.abs() < STAR_EXTENT);
            }
        }
    }
}
