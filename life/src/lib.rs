/*!
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* The world is a torus: the left edge touches the right edge and the top edge
* touches the bottom edge. Once a world repeats itself, one full period is
* captured and replayed until a timeout hands over to a fresh random world.
*/

pub mod config;
pub mod cycle;
pub mod display;
pub mod fingerprint;
pub mod grid;
pub mod rule;
pub mod simulation;
pub mod step;
pub mod torus;

pub use display::{DisplayMode, Renderer};
pub use grid::Grid;
pub use rule::TransitionTable;
pub use simulation::{Phase, Simulation};
