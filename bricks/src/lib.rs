//! Turns a crossword layout into draggable letter bricks.
//!
//! The pipeline is [`assemble`](assemble::assemble) →
//! [`is_connected`](connectivity::is_connected) →
//! [`Partitioner`](partition::Partitioner) → [`Packer`](pack::Packer),
//! driven end to end by [`PuzzleEngine`](engine::PuzzleEngine).

pub mod assemble;
pub mod brick;
pub mod cell;
pub mod config;
pub mod connectivity;
pub mod engine;
pub mod layout;
pub mod pack;
pub mod partition;

pub use brick::{Brick, PuzzleState};
pub use cell::{Cell, CellSet, Coord};
pub use config::GeneratorConfig;
pub use engine::{Generation, PuzzleEngine, PuzzleError};
pub use layout::{GreedyLayout, LayoutGenerator, Orientation, WordPlacement};
