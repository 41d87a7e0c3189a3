pub mod record;
pub mod shapes;

pub use record::ShapeRecord;
pub use shapes::{Circle, Cube, EquilateralTriangle, Rectangle, Shape, Square};
