//! Atom scene - drifting nuclei, each with an orbit ring and one electron

use glam::Vec2;

use super::Shape;
use crate::polar_to_cartesian;

/// Number of atoms
const ATOM_COUNT: u32 = 5;
/// Amplitude of the nucleus drift
const DRIFT: f32 = 100.0;
/// Electron orbit radius
const ORBIT_RADIUS: f32 = 17.5;

const NUCLEUS_COLOR: [f32; 4] = [1.0, 0.0, 0.39, 0.8];
const RING_COLOR: [f32; 4] = [0.0, 0.78, 1.0, 0.4];
const ELECTRON_COLOR: [f32; 4] = [0.0, 1.0, 1.0, 1.0];

/// Angular rate of each electron, distinct per atom
fn electron_rate(i: u32) -> f32 {
    5.0 + i as f32 * 0.6
}

pub fn draw(time: f32) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(ATOM_COUNT as usize * 3);

    for i in 0..ATOM_COUNT {
        let phase = i as f32;
        let center = Vec2::new(
            (time * 2.0 + phase * 2.0).sin() * DRIFT,
            (time * 1.3 + phase).cos() * DRIFT,
        );

        shapes.push(Shape::Circle {
            center,
            radius: 7.5,
            color: NUCLEUS_COLOR,
        });

        shapes.push(Shape::Ring {
            center,
            rx: ORBIT_RADIUS,
            ry: ORBIT_RADIUS,
            thickness: 1.0,
            color: RING_COLOR,
        });

        let angle = time * electron_rate(i) + phase;
        shapes.push(Shape::Circle {
            center: center + polar_to_cartesian(ORBIT_RADIUS, angle),
            radius: 1.5,
            color: ELECTRON_COLOR,
        });
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_count() {
        // Nucleus + ring + electron per atom
        assert_eq!(draw(0.0).len(), 15);
    }

    #[test]
    fn test_electron_sits_on_orbit() {
        let shapes = draw(4.2);
        for atom in shapes.chunks(3) {
            let Shape::Circle { center: nucleus, .. } = atom[0] else {
                panic!("first shape per atom is the nucleus");
            };
            let Shape::Circle { center: electron, .. } = atom[2] else {
                panic!("third shape per atom is the electron");
            };
            let dist = (electron - nucleus).length();
            assert!((dist - ORBIT_RADIUS).abs() < 0.01);
        }
    }

    #[test]
    fn test_electron_rates_distinct() {
        for i in 0..ATOM_COUNT {
            for j in (i + 1)..ATOM_COUNT {
                assert_ne!(electron_rate(i), electron_rate(j));
            }
        }
    }
}
