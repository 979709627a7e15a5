//! Swipe maze: perfect mazes carved by a randomized depth first search, and
//! a player that walks them one cell at a time until it finds the exit.

pub mod config;
pub mod error;
pub mod generators;
pub mod gesture;
pub mod grids;
pub mod layout;
pub mod navigator;
pub mod renderer;
pub mod session;

pub use config::MazeConfig;
pub use error::{MazeError, Result};
pub use grids::{Cell, Dimensions, Direction, Position, WallGrid};
pub use session::{GameSession, GameState, MoveEvent};
