//! Built-in shape sets.
//!
//! Each set reproduces the shape list of one of the SOLID demo programs.
//! Sets are described as [`ShapeRecord`]s so they go through exactly the
//! same validation as shapes loaded from a file.
//!
//! | Set            | Shapes                                                      |
//! |----------------|-------------------------------------------------------------|
//! | `first-design` | square 100, circle ⌀100, square 200, triangle 100           |
//! | `srp`          | same as `first-design`                                      |
//! | `ocp`          | same as `first-design`                                      |
//! | `lsp`          | rectangle 100×100, circle r50, square 200, triangle 100     |
//! | `isp`          | cube 100, square 100                                        |

use shapes_core::domain::{DomainError, Shape, ShapeRecord};

/// A named, built-in list of shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSet {
    pub name: &'static str,
    pub title: &'static str,
    pub records: Vec<ShapeRecord>,
}

impl ShapeSet {
    /// Validate every record into a [`Shape`], preserving order.
    pub fn shapes(&self) -> Result<Vec<Shape>, DomainError> {
        self.records.iter().map(ShapeRecord::to_shape).collect()
    }
}

/// Names of all built-in sets, in display order.
pub const SET_NAMES: [&str; 5] = ["first-design", "srp", "ocp", "lsp", "isp"];

/// Every built-in set, in display order.
pub fn all_sets() -> Vec<ShapeSet> {
    SET_NAMES.iter().filter_map(|name| find(name)).collect()
}

/// Look up a built-in set by name (case-insensitive).
pub fn find(name: &str) -> Option<ShapeSet> {
    let set = match name.trim().to_ascii_lowercase().as_str() {
        "first-design" | "first" => ShapeSet {
            name: "first-design",
            title: "SOLID OOP Development (First Design)",
            records: mixed_flat_shapes(),
        },
        "srp" => ShapeSet {
            name: "srp",
            title: "Single Responsibility Principle (SRP)",
            records: mixed_flat_shapes(),
        },
        "ocp" => ShapeSet {
            name: "ocp",
            title: "Open closed principle (OCP)",
            records: mixed_flat_shapes(),
        },
        "lsp" => ShapeSet {
            name: "lsp",
            title: "Liskov Substitution Principle (LSP)",
            records: vec![
                ShapeRecord::new("rectangle").height(100.0).width(100.0),
                ShapeRecord::new("circle").radius(50.0),
                ShapeRecord::new("square").side(200.0),
                ShapeRecord::new("equilateral-triangle").side(100.0),
            ],
        },
        "isp" => ShapeSet {
            name: "isp",
            title: "Interface segregation principle (ISP)",
            records: vec![
                ShapeRecord::new("cube").side(100.0),
                ShapeRecord::new("square").side(100.0),
            ],
        },
        _ => return None,
    };
    Some(set)
}

/// The list shared by the first three demos; the circle is given by diameter.
fn mixed_flat_shapes() -> Vec<ShapeRecord> {
    vec![
        ShapeRecord::new("square").side(100.0),
        ShapeRecord::new("circle").diameter(100.0),
        ShapeRecord::new("square").side(200.0),
        ShapeRecord::new("equilateral-triangle").side(100.0),
    ]
}
