//! Open-Closed: new shapes extend the system without editing the calculator.
//!
//! Run with: cargo run --bin solid_02_ocp_shapes

use shape_area::console;
use shape_area::violations::{MonolithicAreaCalculator, TaggedShape};
use shape_area::{AreaCalculator, AreaSource, Circle, Shape, Square, SumCalculatorOutputter};

// =============================================================================
// A shape the library never heard of
// =============================================================================

#[derive(Debug)]
struct Rectangle {
    width: f64,
    height: f64,
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn name(&self) -> &'static str {
        "Rectangle"
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    console::init();

    console::section("Violating: type checks in the calculator");
    let tagged = vec![
        TaggedShape::Circle { radius: 2.0 },
        TaggedShape::Square { side: 3.0 },
        TaggedShape::Circle { radius: 4.0 },
    ];
    for shape in &tagged {
        eprintln!("  kind = {:?}", shape.kind());
    }
    let monolithic = MonolithicAreaCalculator::new(tagged.clone());
    // Adding a Rectangle here would mean a new TaggedShape variant and a new match arm.
    println!("{}", monolithic.output());

    console::section("Compliant: each shape owns its area");
    let shapes = tagged
        .iter()
        .map(|shape| shape.into_shape())
        .collect::<shape_area::Result<Vec<_>>>()?;
    let calculator = AreaCalculator::new(shapes);
    println!("{}", SumCalculatorOutputter::new(&calculator).to_json()?);

    console::section("Extended: Rectangle added without touching the calculator");
    let mut shapes = tagged
        .iter()
        .map(|shape| shape.into_shape())
        .collect::<shape_area::Result<Vec<_>>>()?;
    shapes.push(Box::new(Rectangle {
        width: 4.0,
        height: 2.5,
    }));
    shapes.push(Box::new(Square::new(1.0)?));
    shapes.push(Box::new(Circle::new(1.0)?));
    let extended = AreaCalculator::new(shapes);
    for shape in extended.shapes() {
        eprintln!("{}", console::detail(shape.name(), shape.area()));
    }

    let outputter = SumCalculatorOutputter::new(&extended);
    println!("{}", outputter.to_text());
    println!("{}", outputter.to_json()?);
    console::status(&format!(
        "{} shapes, {:.4} more area than before",
        extended.len(),
        extended.sum() - calculator.sum()
    ));

    Ok(())
}
