//! Molecular lattice scene - a 7x7 grid of jittering nodes joined by bonds

use glam::Vec2;

use super::Shape;

/// Grid index range (inclusive), giving a 7x7 lattice
const GRID_HALF: i32 = 3;
/// Distance between neighboring nodes
const SPACING: f32 = 40.0;
/// Jitter amplitude per node
const JITTER: f32 = 5.0;

const BOND_COLOR: [f32; 4] = [0.39, 0.78, 1.0, 0.5];
const NODE_COLOR: [f32; 4] = [1.0, 0.59, 0.0, 0.9];

/// Node position with its time-dependent jitter
fn node_pos(i: i32, j: i32, time: f32) -> Vec2 {
    Vec2::new(
        i as f32 * SPACING + (time + i as f32).sin() * JITTER,
        j as f32 * SPACING + (time + j as f32).cos() * JITTER,
    )
}

pub fn draw(time: f32) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(49 + 84);

    for i in -GRID_HALF..=GRID_HALF {
        for j in -GRID_HALF..=GRID_HALF {
            let pos = node_pos(i, j, time);

            // Bonds extend rightward and downward only, so edge nodes
            // don't draw past the lattice
            if i < GRID_HALF {
                shapes.push(Shape::Line {
                    from: pos,
                    to: pos + Vec2::new(SPACING, 0.0),
                    width: 1.0,
                    color: BOND_COLOR,
                });
            }
            if j < GRID_HALF {
                shapes.push(Shape::Line {
                    from: pos,
                    to: pos + Vec2::new(0.0, SPACING),
                    width: 1.0,
                    color: BOND_COLOR,
                });
            }

            shapes.push(Shape::Circle {
                center: pos,
                radius: 5.0,
                color: NODE_COLOR,
            });
        }
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_and_bond_counts() {
        let shapes = draw(2.5);
        let nodes = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Circle { .. }))
            .count();
        let bonds = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Line { .. }))
            .count();
        assert_eq!(nodes, 49);
        // 6 horizontal bonds per row x 7 rows, same vertically
        assert_eq!(bonds, 84);
    }

    #[test]
    fn test_jitter_stays_small() {
        for i in -GRID_HALF..=GRID_HALF {
            for j in -GRID_HALF..=GRID_HALF {
                let rest = Vec2::new(i as f32 * SPACING, j as f32 * SPACING);
                let jittered = node_pos(i, j, 17.3);
                assert!((jittered - rest).length() <= JITTER * 1.5);
            }
        }
    }
}
