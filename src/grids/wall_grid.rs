pub const DEFAULT_DIMS: (usize, usize) = (7, 10);

use crate::error::{MazeError, Result};
use crate::grids::{Dimensions, Direction, Neighborhood, Position};

/// Wall flags of a single cell, `true` means the wall is standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Cell {
    pub const WALLED: Cell = Cell {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };

    #[inline]
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    #[inline]
    fn remove_wall(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.top = false,
            Direction::Down => self.bottom = false,
            Direction::Left => self.left = false,
            Direction::Right => self.right = false,
        }
    }

    pub fn is_walled(&self) -> bool {
        *self == Cell::WALLED
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::WALLED
    }
}

pub struct WallGrid {
    dims: Dimensions,

    cells: Vec<Cell>,

    pub player: Position,
    exit: Position,
}

impl WallGrid {
    pub fn new() -> Self {
        Self {
            dims: Dimensions {
                columns: DEFAULT_DIMS.0,
                rows: DEFAULT_DIMS.1,
            },
            cells: vec![Cell::WALLED; DEFAULT_DIMS.0 * DEFAULT_DIMS.1],
            player: Position::ORIGIN,
            exit: Position::new(DEFAULT_DIMS.0 - 1, DEFAULT_DIMS.1 - 1),
        }
    }

    pub fn with_dims(columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(MazeError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                columns, rows
            )));
        }
        let count = columns.checked_mul(rows).ok_or_else(|| {
            MazeError::Config(format!("grid of {}x{} cells is too large", columns, rows))
        })?;

        Ok(Self {
            dims: Dimensions { columns, rows },
            cells: vec![Cell::WALLED; count],
            player: Position::ORIGIN,
            exit: Position::new(columns - 1, rows - 1),
        })
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn exit(&self) -> Position {
        self.exit
    }

    fn check_bounds(&self, pos: Position) -> Result<usize> {
        if self.dims.contains(pos) {
            Ok(self.dims.index_of(pos))
        } else {
            Err(MazeError::OutOfBounds {
                pos,
                dims: self.dims,
            })
        }
    }

    pub fn cell_at(&self, column: usize, row: usize) -> Result<Cell> {
        let index = self.check_bounds(Position::new(column, row))?;
        Ok(self.cells[index])
    }

    /// Every cell in row-major order together with its position.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let columns = self.dims.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (Position::new(index % columns, index / columns), *cell))
    }

    /// Puts every wall back and the player at the origin. The grid keeps its
    /// allocation and dimensions.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::WALLED;
        }
        self.player = Position::ORIGIN;
    }

    pub fn is_pristine(&self) -> bool {
        self.cells.iter().all(Cell::is_walled)
    }

    #[inline]
    pub fn neighborhood_of(&self, pos: Position) -> Neighborhood {
        Neighborhood::of(self.dims, pos)
    }

    pub fn neighbor_of(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.step(direction).filter(|n| self.dims.contains(*n))
    }

    pub fn clear_wall_between(&mut self, one: Position, two: Position) -> Result<()> {
        let index_one = self.check_bounds(one)?;
        let index_two = self.check_bounds(two)?;
        let dir = one
            .direction_to(two)
            .ok_or(MazeError::NotAdjacent(one, two))?;

        // both sides, walls are never one-way
        self.cells[index_one].remove_wall(dir);
        self.cells[index_two].remove_wall(-dir);

        Ok(())
    }

    /// Number of neighboring pairs with the shared wall removed.
    pub fn open_passages(&self) -> usize {
        // only look right and down so each pair is counted once
        self.cells()
            .map(|(pos, cell)| {
                let right = !cell.right && self.neighbor_of(pos, Direction::Right).is_some();
                let down = !cell.bottom && self.neighbor_of(pos, Direction::Down).is_some();
                right as usize + down as usize
            })
            .sum()
    }

    /// Whether the player may leave its cell in `direction`.
    pub fn is_open(&self, pos: Position, direction: Direction) -> Result<bool> {
        let index = self.check_bounds(pos)?;
        Ok(!self.cells[index].has_wall(direction) && self.neighbor_of(pos, direction).is_some())
    }
}

impl Default for WallGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test_wall_grid {
    use super::*;

    #[test]
    fn it_works() {
        let mut grid = WallGrid::with_dims(7, 10).unwrap();

        assert!(grid.is_pristine());
        assert_eq!(grid.exit(), Position::new(6, 9));
        assert_eq!(grid.player, Position::ORIGIN);
        assert_eq!(grid.cells().count(), 70);

        grid.clear_wall_between(Position::new(2, 3), Position::new(2, 2))
            .unwrap();
        assert!(!grid.cell_at(2, 3).unwrap().top);
        assert!(!grid.cell_at(2, 2).unwrap().bottom);
        assert!(grid.cell_at(2, 3).unwrap().left);
        assert_eq!(grid.open_passages(), 1);
        assert!(!grid.is_pristine());

        grid.clear_wall_between(Position::new(2, 3), Position::new(3, 3))
            .unwrap();
        assert!(!grid.cell_at(2, 3).unwrap().right);
        assert!(!grid.cell_at(3, 3).unwrap().left);
        assert_eq!(grid.open_passages(), 2);
    }

    #[test]
    fn default_matches_seven_by_ten() {
        let grid = WallGrid::new();
        assert_eq!(grid.dims(), Dimensions { columns: 7, rows: 10 });
        assert_eq!(grid.exit(), Position::new(6, 9));
        assert!(grid.is_pristine());
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(WallGrid::with_dims(0, 10), Err(MazeError::Config(_))));
        assert!(matches!(WallGrid::with_dims(7, 0), Err(MazeError::Config(_))));
        assert!(matches!(
            WallGrid::with_dims(usize::MAX, 2),
            Err(MazeError::Config(_))
        ));
    }

    #[test]
    fn single_cell_grid_is_its_own_exit() {
        let grid = WallGrid::with_dims(1, 1).unwrap();
        assert_eq!(grid.exit(), Position::ORIGIN);
        assert_eq!(grid.player, grid.exit());
    }

    #[test]
    fn cell_at_checks_bounds() {
        let grid = WallGrid::with_dims(7, 10).unwrap();
        assert!(grid.cell_at(6, 9).is_ok());
        assert_eq!(
            grid.cell_at(7, 0),
            Err(MazeError::OutOfBounds {
                pos: Position::new(7, 0),
                dims: grid.dims(),
            })
        );
        assert!(grid.cell_at(0, 10).is_err());
    }

    #[test]
    fn clear_wall_rejects_non_neighbors() {
        let mut grid = WallGrid::with_dims(4, 4).unwrap();
        let a = Position::new(1, 1);
        assert_eq!(
            grid.clear_wall_between(a, Position::new(2, 2)),
            Err(MazeError::NotAdjacent(a, Position::new(2, 2)))
        );
        assert!(grid.clear_wall_between(a, a).is_err());
        assert!(grid
            .clear_wall_between(Position::new(3, 3), Position::new(4, 3))
            .is_err());
        assert!(grid.is_pristine());
    }

    #[test]
    fn reset_restores_walls_and_player() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();
        grid.clear_wall_between(Position::ORIGIN, Position::new(1, 0))
            .unwrap();
        grid.player = Position::new(1, 0);

        grid.reset();

        assert!(grid.is_pristine());
        assert_eq!(grid.player, Position::ORIGIN);
        assert_eq!(grid.exit(), Position::new(2, 2));
        assert_eq!(grid.open_passages(), 0);
        assert_eq!(grid.dims(), Dimensions { columns: 3, rows: 3 });
        assert_eq!(grid.cells().count(), 9);
    }

    #[test]
    fn border_is_never_open() {
        let grid = WallGrid::with_dims(2, 2).unwrap();
        assert_eq!(grid.is_open(Position::ORIGIN, Direction::Up), Ok(false));
        assert!(grid.is_open(Position::new(5, 5), Direction::Up).is_err());
    }
}
