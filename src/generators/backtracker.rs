use crate::error::{MazeError, Result};
use crate::generators::Generator;
use crate::grids::{Position, WallGrid};
use log::debug;
use rand::Rng;

/// Randomized depth first search with an explicit backtracking stack.
///
/// Walls are only cleared when stepping into an unvisited cell, so the
/// carved passages always form a spanning tree of the grid.
pub struct RecursiveBacktracker<'g, R> {
    grid: &'g mut WallGrid,
    // scratch state, the grid itself only stores walls
    visited: Vec<bool>,
    stack: Vec<Position>,
    rng: R,
    current: Position,
    carved: usize,
    pub done: bool,
}

impl<'g, R: Rng> RecursiveBacktracker<'g, R> {
    pub fn new(grid: &'g mut WallGrid, rng: R) -> Result<Self> {
        if !grid.is_pristine() {
            return Err(MazeError::Precondition(
                "grid must be reset before generating a maze",
            ));
        }

        let mut visited = vec![false; grid.dims().cell_count()];
        let current = Position::ORIGIN;
        visited[grid.dims().index_of(current)] = true;

        Ok(Self {
            stack: Vec::with_capacity(visited.len()),
            visited,
            grid,
            rng,
            current,
            carved: 0,
            done: false,
        })
    }

    #[inline]
    pub fn current(&self) -> Position {
        self.current
    }

    #[inline]
    pub fn carved(&self) -> usize {
        self.carved
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.grid.dims().contains(pos) && self.visited[self.grid.dims().index_of(pos)]
    }

    fn unvisited_neighbors(&self) -> Vec<Position> {
        self.grid
            .neighborhood_of(self.current)
            .map(|(pos, _)| pos)
            .filter(|pos| !self.visited[self.grid.dims().index_of(*pos)])
            .collect()
    }
}

impl<'g, R: Rng> Generator for RecursiveBacktracker<'g, R> {
    fn step_generation(&mut self) -> Result<()> {
        if self.done {
            return Ok(());
        }

        let neighbors = self.unvisited_neighbors();
        if !neighbors.is_empty() {
            let next = neighbors[self.rng.gen_range(0, neighbors.len())];

            self.grid.clear_wall_between(self.current, next)?;
            self.stack.push(self.current);
            self.current = next;
            let index = self.grid.dims().index_of(next);
            self.visited[index] = true;
            self.carved += 1;
        } else if let Some(previous) = self.stack.pop() {
            self.current = previous;
        } else {
            self.done = true;
            debug!(
                "generated {} maze with {} passages",
                self.grid.dims(), self.carved
            );
        }

        Ok(())
    }

    fn generate_maze(&mut self) -> Result<&WallGrid> {
        while !self.done {
            self.step_generation()?;
        }

        Ok(&*self.grid)
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
