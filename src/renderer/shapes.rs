//! Tessellation of scene primitives into triangle lists

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::scenes::Shape;

/// Segment count for round shapes, scaled down for tiny ones
fn segments_for(radius: f32) -> u32 {
    if radius < 4.0 {
        8
    } else if radius < 30.0 {
        16
    } else {
        32
    }
}

/// Filled circle as a triangle fan around the center
pub fn circle(center: Vec2, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let segments = segments_for(radius);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Stroked ellipse outline as a band of quads straddling the edge
pub fn ellipse_ring(
    center: Vec2,
    rx: f32,
    ry: f32,
    thickness: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let segments = segments_for(rx.max(ry));
    let half = thickness / 2.0;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    let edge = |theta: f32, grow: f32| {
        Vec2::new(
            center.x + (rx + grow) * theta.cos(),
            center.y + (ry + grow) * theta.sin(),
        )
    };

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let inner1 = edge(theta1, -half);
        let outer1 = edge(theta1, half);
        let inner2 = edge(theta2, -half);
        let outer2 = edge(theta2, half);

        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Line segment as a quad of the given width
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Square dot
pub fn point(pos: Vec2, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let h = size / 2.0;
    vec![
        Vertex::new(pos.x - h, pos.y - h, color),
        Vertex::new(pos.x + h, pos.y - h, color),
        Vertex::new(pos.x - h, pos.y + h, color),
        Vertex::new(pos.x - h, pos.y + h, color),
        Vertex::new(pos.x + h, pos.y - h, color),
        Vertex::new(pos.x + h, pos.y + h, color),
    ]
}

/// Tessellate a frame's shape list into one triangle list
pub fn tessellate(shapes: &[Shape]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for shape in shapes {
        match *shape {
            Shape::Circle {
                center,
                radius,
                color,
            } => vertices.extend(circle(center, radius, color)),
            Shape::Ring {
                center,
                rx,
                ry,
                thickness,
                color,
            } => vertices.extend(ellipse_ring(center, rx, ry, thickness, color)),
            Shape::Line {
                from,
                to,
                width,
                color,
            } => vertices.extend(line(from, to, width, color)),
            Shape::Point { pos, size, color } => vertices.extend(point(pos, size, color)),
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_triangle_count() {
        let verts = circle(Vec2::ZERO, 50.0, [1.0; 4]);
        assert_eq!(verts.len(), 32 * 3);
        let verts = circle(Vec2::ZERO, 1.5, [1.0; 4]);
        assert_eq!(verts.len(), 8 * 3);
    }

    #[test]
    fn test_ring_straddles_edge() {
        let verts = ellipse_ring(Vec2::ZERO, 20.0, 20.0, 2.0, [1.0; 4]);
        for v in verts {
            let r = Vec2::new(v.position[0], v.position[1]).length();
            assert!((19.0..=21.0).contains(&r), "r = {r}");
        }
    }

    #[test]
    fn test_line_quad() {
        let verts = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!(v.position[1].abs() <= 1.0);
        }
    }

    #[test]
    fn test_tessellate_mixed() {
        let shapes = [
            Shape::Point {
                pos: Vec2::ZERO,
                size: 1.0,
                color: [1.0; 4],
            },
            Shape::Line {
                from: Vec2::ZERO,
                to: Vec2::ONE,
                width: 1.0,
                color: [1.0; 4],
            },
        ];
        assert_eq!(tessellate(&shapes).len(), 12);
    }
}
