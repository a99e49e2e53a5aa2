//! Triangle area
//!
//! Three ways to get the area of a triangle, picked by what is known about it.

use std::f64::consts::PI;

use crate::models::errors::{SimError, SimResult};

/// Area from three side lengths (Heron's formula, in Kahan's stable form).
///
/// # Errors
///
/// `SimError::InvalidTriangle` if a side is negative or not finite, or if the
/// sides violate the triangle inequality. Degenerate triangles give `0.0`.
pub fn area_from_sides(a: f64, b: f64, c: f64) -> SimResult<f64> {
    let invalid = || SimError::InvalidTriangle { a, b, c };

    if [a, b, c].iter().any(|side| !side.is_finite() || *side < 0.0) {
        return Err(invalid());
    }

    // Longest first: x >= y >= z.
    let mut sides = [a, b, c];
    sides.sort_by(|l, r| r.total_cmp(l));
    let [x, y, z] = sides;

    if z - (x - y) < 0.0 {
        return Err(invalid());
    }

    let product = (x + (y + z)) * (z - (x - y)) * (z + (x - y)) * (x + (y - z));
    Ok(0.25 * product.sqrt())
}

pub fn area_from_base_height(base: f64, height: f64) -> f64 {
    0.5 * base * height
}

/// Area from two sides and the angle between them, in degrees.
pub fn area_from_sides_and_angle(a: f64, b: f64, angle_degrees: f64) -> f64 {
    let radians = angle_degrees * PI / 180.0;
    0.5 * a * b * radians.sin()
}

/// What is known about a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriangleInput {
    Sides { a: f64, b: f64, c: f64 },
    BaseHeight { base: f64, height: f64 },
    SidesAngle { a: f64, b: f64, angle_degrees: f64 },
}

impl TriangleInput {
    pub fn area(&self) -> SimResult<f64> {
        match *self {
            TriangleInput::Sides { a, b, c } => area_from_sides(a, b, c),
            TriangleInput::BaseHeight { base, height } => Ok(area_from_base_height(base, height)),
            TriangleInput::SidesAngle { a, b, angle_degrees } => {
                Ok(area_from_sides_and_angle(a, b, angle_degrees))
            }
        }
    }
}
