//! # SOLID Shapes
//!
//! A shape area calculator used to illustrate two design principles:
//!
//! ## Single Responsibility Principle
//! - [`calculator::AreaCalculator`] only sums areas
//! - [`outputter::SumCalculatorOutputter`] only presents the total, as text or JSON
//!
//! ## Open-Closed Principle
//! - every shape implements [`shape::Shape`] and owns its area formula
//! - new shapes plug in without touching the calculator
//!
//! The [`violations`] module keeps the type-checking, self-formatting
//! version for comparison.
//!
//! Run the lessons with: `cargo run --bin <name>`

pub mod calculator;
pub mod console;
pub mod error;
pub mod loader;
pub mod outputter;
pub mod shape;
pub mod violations;

pub use calculator::{AreaCalculator, AreaSource};
pub use error::{Result, ShapeError};
pub use outputter::{AreaReport, SumCalculatorOutputter};
pub use shape::{Circle, Shape, Square, Triangle};
