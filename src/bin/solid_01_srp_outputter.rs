//! Single Responsibility: the calculator sums, the outputter presents.
//!
//! Run with: cargo run --bin solid_01_srp_outputter [shapes.json|shapes.toml]

use shape_area::console;
use shape_area::loader::load_shapes;
use shape_area::violations::{MonolithicAreaCalculator, TaggedShape};
use shape_area::{
    AreaCalculator, AreaSource, Circle, Shape, Square, SumCalculatorOutputter, Triangle,
};
use std::path::PathBuf;

// =============================================================================
// Violating version: one type computes and formats
// =============================================================================

fn monolithic_demo() {
    console::section("Violating: calculator formats its own output");
    let calculator = MonolithicAreaCalculator::new(vec![
        TaggedShape::Square { side: 10.0 },
        TaggedShape::Circle { radius: 5.0 },
        TaggedShape::Triangle {
            base: 10.0,
            height: 5.0,
        },
    ]);
    println!("{}", calculator.output());
}

// =============================================================================
// Compliant version: separate collaborators
// =============================================================================

fn default_shapes() -> shape_area::Result<AreaCalculator> {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Square::new(10.0)?),
        Box::new(Circle::new(5.0)?),
        Box::new(Triangle::new(10.0, 5.0)?),
    ];
    Ok(AreaCalculator::new(shapes))
}

fn compliant_demo(calculator: &AreaCalculator) -> shape_area::Result<()> {
    console::section("Compliant: calculator + outputter");
    for shape in calculator.shapes() {
        eprintln!("{}", console::detail(shape.name(), shape.area()));
    }

    let outputter = SumCalculatorOutputter::new(calculator);
    println!("{}", outputter.to_text());
    println!("{}", outputter.to_json()?);
    console::status(&format!(
        "summed {} shapes, total {:.4}",
        calculator.len(),
        calculator.sum()
    ));
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    console::init();

    let calculator = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            let calculator = load_shapes(&path)?;
            console::status(&format!(
                "loaded {} shapes from {}",
                calculator.len(),
                path.display()
            ));
            calculator
        }
        None => {
            monolithic_demo();
            default_shapes()?
        }
    };

    compliant_demo(&calculator)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        console::report_error(err.as_ref());
        std::process::exit(1);
    }
}
