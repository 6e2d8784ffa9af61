//! Soap bubble scene - iridescent circles drifting on sine orbits

use glam::Vec2;

use super::{Shape, hsb_to_rgba};

/// Number of bubbles
const BUBBLE_COUNT: u32 = 10;
/// Orbit amplitude
const ORBIT: f32 = 150.0;
/// Mean bubble radius, oscillating +/- RADIUS_SWING
const RADIUS_BASE: f32 = 80.0;
const RADIUS_SWING: f32 = 20.0;

/// Two shapes per bubble: the translucent body and a small highlight
/// offset toward the upper-left corner.
pub fn draw(time: f32) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(BUBBLE_COUNT as usize * 2);

    for i in 0..BUBBLE_COUNT {
        let phase = i as f32;
        let center = Vec2::new(
            (time + phase).sin() * ORBIT,
            (time * 0.8 + phase).cos() * ORBIT,
        );
        let radius = RADIUS_BASE + (time * 2.0 + phase).sin() * RADIUS_SWING;

        // Shimmering body: hue cycles through the full spectrum
        let hue = (time * 20.0 + phase * 30.0) % 360.0;
        shapes.push(Shape::Circle {
            center,
            radius,
            color: hsb_to_rgba(hue, 0.8, 0.8, 0.6),
        });

        shapes.push(Shape::Circle {
            center: center + Vec2::new(-5.0, 5.0),
            radius: radius * 0.3,
            color: [1.0, 1.0, 1.0, 0.3],
        });
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_count() {
        // 10 bubbles, each with a highlight
        assert_eq!(draw(0.0).len(), 20);
        assert_eq!(draw(123.4).len(), 20);
    }

    #[test]
    fn test_radius_oscillation_band() {
        for t in [0.0, 0.7, 3.1, 42.0] {
            for shape in draw(t).iter().step_by(2) {
                let Shape::Circle { radius, .. } = shape else {
                    panic!("bubble bodies are circles");
                };
                assert!((60.0..=100.0).contains(radius), "radius {radius}");
            }
        }
    }

    #[test]
    fn test_orbits_bounded() {
        for shape in draw(9.9) {
            let Shape::Circle { center, .. } = shape else {
                continue;
            };
            assert!(center.x.abs() <= ORBIT + 5.0);
            assert!(center.y.abs() <= ORBIT + 5.0);
        }
    }
}
