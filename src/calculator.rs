use crate::shape::Shape;

/// Anything that can report a total area. The outputter depends on this
/// rather than on a concrete calculator.
pub trait AreaSource {
    fn sum(&self) -> f64;
}

/// Sums the areas of an ordered collection of shapes.
///
/// The calculator only computes. Presenting the result is the job of
/// [`crate::outputter::SumCalculatorOutputter`].
#[derive(Debug, Default)]
pub struct AreaCalculator {
    shapes: Vec<Box<dyn Shape>>,
}

impl AreaCalculator {
    pub fn new(shapes: Vec<Box<dyn Shape>>) -> Self {
        AreaCalculator { shapes }
    }

    pub fn shapes(&self) -> &[Box<dyn Shape>] {
        &self.shapes
    }

    pub fn areas(&self) -> impl Iterator<Item = f64> + '_ {
        self.shapes.iter().map(|shape| shape.area())
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl AreaSource for AreaCalculator {
    // Fold from +0.0: an empty collection must print as "0", not "-0".
    fn sum(&self) -> f64 {
        self.areas().fold(0.0, |total, area| total + area)
    }
}

impl FromIterator<Box<dyn Shape>> for AreaCalculator {
    fn from_iter<I: IntoIterator<Item = Box<dyn Shape>>>(iter: I) -> Self {
        AreaCalculator::new(iter.into_iter().collect())
    }
}
