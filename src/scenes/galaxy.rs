//! Galaxy scene - a rotating spiral of point stars
//!
//! The linear angle/radius relation aliases into a two-armed spiral.

use super::Shape;
use crate::polar_to_cartesian;

/// Stars in the spiral
const STAR_COUNT: u32 = 300;
/// Angle step per star index
const ANGLE_STEP: f32 = 0.2;
/// Radius step per star index
const RADIUS_STEP: f32 = 1.5;
/// Spiral rotation rate
const SPIN: f32 = 5.0;

const STAR_COLOR: [f32; 4] = [1.0, 0.78, 1.0, 0.59];

pub fn draw(time: f32) -> Vec<Shape> {
    (0..STAR_COUNT)
        .map(|i| {
            let angle = i as f32 * ANGLE_STEP + time * SPIN;
            let radius = i as f32 * RADIUS_STEP;
            Shape::Point {
                pos: polar_to_cartesian(radius, angle),
                size: 1.0,
                color: STAR_COLOR,
            }
        })
        .collect()
}
