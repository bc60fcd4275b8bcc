//! The same calculator written the way the two principles warn against.
//!
//! `MonolithicAreaCalculator` inspects each shape's kind to pick a formula,
//! so every new shape forces an edit here (breaks Open-Closed). It also
//! formats its own output (breaks Single Responsibility). It is kept so the
//! two designs can be run and compared side by side.

use crate::error::Result;
use crate::outputter::TEXT_PREFIX;
use crate::shape::{Circle, Shape, Square, Triangle};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Square,
    Circle,
    Triangle,
}

/// A bare bag of dimensions with a tag. It carries no behavior of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaggedShape {
    Square { side: f64 },
    Circle { radius: f64 },
    Triangle { base: f64, height: f64 },
}

impl TaggedShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            TaggedShape::Square { .. } => ShapeKind::Square,
            TaggedShape::Circle { .. } => ShapeKind::Circle,
            TaggedShape::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    /// Converts to the polymorphic form, validating dimensions on the way.
    pub fn into_shape(self) -> Result<Box<dyn Shape>> {
        Ok(match self {
            TaggedShape::Square { side } => Box::new(Square::new(side)?),
            TaggedShape::Circle { radius } => Box::new(Circle::new(radius)?),
            TaggedShape::Triangle { base, height } => Box::new(Triangle::new(base, height)?),
        })
    }
}

#[derive(Debug, Default)]
pub struct MonolithicAreaCalculator {
    shapes: Vec<TaggedShape>,
}

impl MonolithicAreaCalculator {
    pub fn new(shapes: Vec<TaggedShape>) -> Self {
        MonolithicAreaCalculator { shapes }
    }

    /// Dimensions are taken as given: a negative side still contributes its
    /// square, where [`crate::shape::Square::new`] would reject it.
    pub fn sum(&self) -> f64 {
        let mut total = 0.0;
        for shape in &self.shapes {
            // Inspect the tag, then pick the formula.
            total += match *shape {
                TaggedShape::Square { side } => side * side,
                TaggedShape::Circle { radius } => PI * radius * radius,
                TaggedShape::Triangle { base, height } => 0.5 * base * height,
            };
        }
        total
    }

    pub fn output(&self) -> String {
        format!("{TEXT_PREFIX}{}", self.sum())
    }
}
