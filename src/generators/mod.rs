pub mod backtracker;

use crate::error::Result;
use crate::grids::WallGrid;
use rand::Rng;

pub use backtracker::RecursiveBacktracker;

pub trait Generator {
    /// Carves one passage or backtracks one cell.
    fn step_generation(&mut self) -> Result<()>;
    fn generate_maze(&mut self) -> Result<&WallGrid>;
    fn is_done(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorKind {
    RecursiveBacktracker,
}

impl Default for GeneratorKind {
    fn default() -> Self {
        GeneratorKind::RecursiveBacktracker
    }
}

pub fn new_generator<'g, R>(
    kind: GeneratorKind,
    grid: &'g mut WallGrid,
    rng: R,
) -> Result<Box<dyn Generator + 'g>>
where
    R: Rng + 'g,
{
    match kind {
        GeneratorKind::RecursiveBacktracker => {
            Ok(Box::new(RecursiveBacktracker::new(grid, rng)?))
        }
    }
}

/// Carves a full maze into a freshly reset grid.
pub fn generate<R: Rng>(grid: &mut WallGrid, rng: R) -> Result<()> {
    new_generator(GeneratorKind::default(), grid, rng)?.generate_maze()?;
    Ok(())
}
