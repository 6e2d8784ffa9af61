//! Procedural scene generators
//!
//! Each scene is a pure function of the animation clock (plus an injected
//! RNG for the noise-driven scenes) producing primitive shapes in an
//! origin-centered coordinate frame. The camera transform is applied later
//! by the renderer; nothing here retains state between frames.

pub mod atoms;
pub mod galaxy;
pub mod infinity;
pub mod molecules;
pub mod quantum_foam;
pub mod soap;

use glam::Vec2;
use rand::Rng;

use crate::journey::SceneKind;

/// A primitive draw call in scene-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Stroked ellipse outline (rx == ry for plain rings)
    Ring {
        center: Vec2,
        rx: f32,
        ry: f32,
        thickness: f32,
        color: [f32; 4],
    },
    /// Line segment with width
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: [f32; 4],
    },
    /// Square dot (p5-style point with a stroke weight)
    Point {
        pos: Vec2,
        size: f32,
        color: [f32; 4],
    },
}

/// Generate the shape list for one frame of the selected scene
pub fn draw(kind: SceneKind, time: f32, rng: &mut impl Rng) -> Vec<Shape> {
    match kind {
        SceneKind::Soap => soap::draw(time),
        SceneKind::Molecules => molecules::draw(time),
        SceneKind::Atoms => atoms::draw(time),
        SceneKind::QuantumFoam => quantum_foam::draw(rng),
        SceneKind::Galaxy => galaxy::draw(time),
        SceneKind::Infinity => infinity::draw(time, rng),
    }
}

/// Convert HSB (hue in degrees, saturation/brightness/alpha in 0..1)
/// to the RGBA floats the renderer consumes
pub fn hsb_to_rgba(hue: f32, sat: f32, bri: f32, alpha: f32) -> [f32; 4] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = bri * sat;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = bri - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m, alpha]
}
