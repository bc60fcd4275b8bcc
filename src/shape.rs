//! Shapes that know how to compute their own area.
//!
//! Each variant owns its formula, so adding a new shape means adding a new
//! type that implements [`Shape`]; no existing code has to change.

use crate::error::{Result, ShapeError};
use std::f64::consts::PI;
use std::fmt::Debug;

pub trait Shape: Debug + Send + Sync {
    fn area(&self) -> f64;

    fn name(&self) -> &'static str;
}

/// Dimensions must be finite and non-negative. Zero is allowed and yields a
/// zero area.
pub(crate) fn check_dimension(
    shape: &'static str,
    dimension: &'static str,
    value: f64,
) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::invalid_dimension(shape, dimension, value))
    }
}

/// Finite dimensions can still overflow once multiplied out.
fn check_area<S: Shape>(shape: S, dimension: &'static str, value: f64) -> Result<S> {
    if shape.area().is_finite() {
        Ok(shape)
    } else {
        Err(ShapeError::invalid_dimension(shape.name(), dimension, value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Result<Self> {
        let square = Square {
            side: check_dimension("Square", "side", side)?,
        };
        check_area(square, "side", side)
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn name(&self) -> &'static str {
        "Square"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        let circle = Circle {
            radius: check_dimension("Circle", "radius", radius)?,
        };
        check_area(circle, "radius", radius)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn name(&self) -> &'static str {
        "Circle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    base: f64,
    height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Result<Self> {
        let triangle = Triangle {
            base: check_dimension("Triangle", "base", base)?,
            height: check_dimension("Triangle", "height", height)?,
        };
        check_area(triangle, "height", height)
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    fn name(&self) -> &'static str {
        "Triangle"
    }
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 1e-9 * scale
}
