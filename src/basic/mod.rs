pub use grid::Grid;
pub use heading::Heading;
pub use position::Position;

mod grid;
mod heading;
mod position;
