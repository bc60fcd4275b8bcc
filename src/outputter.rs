use crate::calculator::AreaSource;
use crate::error::{Result, ShapeError};
use serde::{Deserialize, Serialize};

pub const TEXT_PREFIX: &str = "Sum of the areas of provided shapes: ";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaReport {
    pub total_area: f64,
}

/// Presents the total of an [`AreaSource`] as text or JSON.
pub struct SumCalculatorOutputter<'a, S: AreaSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: AreaSource + ?Sized> SumCalculatorOutputter<'a, S> {
    pub fn new(source: &'a S) -> Self {
        SumCalculatorOutputter { source }
    }

    pub fn report(&self) -> AreaReport {
        AreaReport {
            total_area: self.source.sum(),
        }
    }

    pub fn to_text(&self) -> String {
        format!("{TEXT_PREFIX}{}", self.source.sum())
    }

    /// Serializes [`AreaReport`]. Non-finite totals become `null`, as
    /// serde_json does for NaN and infinity.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.report()).map_err(ShapeError::render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::AreaCalculator;
    use crate::shape::{approx_eq, Circle, Shape, Square};
    use serde_json::Value;
    use std::f64::consts::PI;

    struct Fixed(f64);

    impl AreaSource for Fixed {
        fn sum(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_text_for_empty_collection() {
        let calculator = AreaCalculator::default();
        let outputter = SumCalculatorOutputter::new(&calculator);
        assert_eq!(outputter.to_text(), "Sum of the areas of provided shapes: 0");
    }

    #[test]
    fn test_text_embeds_exact_sum() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Square::new(10.0).unwrap()),
            Box::new(Circle::new(5.0).unwrap()),
        ];
        let calculator = AreaCalculator::new(shapes);
        let outputter = SumCalculatorOutputter::new(&calculator);
        let expected = format!("{}{}", TEXT_PREFIX, calculator.sum());
        assert_eq!(outputter.to_text(), expected);
    }

    #[test]
    fn test_json_has_single_total_area_key() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new(2.0).unwrap()),
            Box::new(Square::new(3.0).unwrap()),
            Box::new(Circle::new(4.0).unwrap()),
        ];
        let calculator = AreaCalculator::new(shapes);
        let outputter = SumCalculatorOutputter::new(&calculator);

        let value: Value = serde_json::from_str(&outputter.to_json().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        let total = object["totalArea"].as_f64().unwrap();
        assert_eq!(total, calculator.sum());
        assert!(approx_eq(total, 20.0 * PI + 9.0));
    }

    #[test]
    fn test_json_total_is_a_number() {
        let outputter = SumCalculatorOutputter::new(&Fixed(12.5));
        assert_eq!(outputter.to_json().unwrap(), r#"{"totalArea":12.5}"#);
    }

    #[test]
    fn test_json_round_trips_into_report() {
        let outputter = SumCalculatorOutputter::new(&Fixed(71.5));
        let report: AreaReport = serde_json::from_str(&outputter.to_json().unwrap()).unwrap();
        assert_eq!(report, outputter.report());
    }

    #[test]
    fn test_non_finite_total_serializes_as_null() {
        let outputter = SumCalculatorOutputter::new(&Fixed(f64::NAN));
        assert_eq!(outputter.to_json().unwrap(), r#"{"totalArea":null}"#);
        assert_eq!(outputter.to_text(), "Sum of the areas of provided shapes: NaN");
    }

    #[test]
    fn test_json_keys_follow_report_fields() {
        let outputter = SumCalculatorOutputter::new(&Fixed(2.0));
        let from_report = serde_json::to_value(outputter.report()).unwrap();
        let rendered: Value = serde_json::from_str(&outputter.to_json().unwrap()).unwrap();
        assert_eq!(rendered, from_report);
    }

    #[test]
    fn test_works_through_trait_object() {
        let source: &dyn AreaSource = &Fixed(3.0);
        let outputter = SumCalculatorOutputter::new(source);
        assert_eq!(outputter.report().total_area, 3.0);
    }
}
