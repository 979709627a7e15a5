pub mod wall_grid;

pub use wall_grid::{Cell, WallGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub columns: usize,
    pub rows: usize,
}

impl Dimensions {
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.column < self.columns && pos.row < self.rows
    }

    /// row-major index, caller checks bounds
    #[inline]
    pub fn index_of(&self, pos: Position) -> usize {
        (self.columns * pos.row) + pos.column
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// `(column, row)` with the origin in the top left corner, rows grow downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { column: 0, row: 0 };

    #[inline]
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Neighbor in `direction`, ignoring the upper bound of the grid.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let Position { column, row } = self;
        match direction {
            Direction::Up => row.checked_sub(1).map(|row| Position { column, row }),
            Direction::Down => row.checked_add(1).map(|row| Position { column, row }),
            Direction::Left => column.checked_sub(1).map(|column| Position { column, row }),
            Direction::Right => column.checked_add(1).map(|column| Position { column, row }),
        }
    }

    /// Direction leading from `self` to `other` if the two are orthogonally adjacent.
    pub fn direction_to(self, other: Position) -> Option<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .find(|dir| self.step(*dir) == Some(other))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// scan order used when collecting neighbors
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

pub type Neighbor = (Position, Direction);

/// In-bounds neighbors of a cell, yielded left, right, up, down.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub up: Option<Position>,
    pub down: Option<Position>,
    pub left: Option<Position>,
    pub right: Option<Position>,

    counter: usize,
}

impl Neighborhood {
    pub fn of(dims: Dimensions, pos: Position) -> Self {
        let in_bounds = |dir| pos.step(dir).filter(|n| dims.contains(*n));

        Self {
            up: in_bounds(Direction::Up),
            down: in_bounds(Direction::Down),
            left: in_bounds(Direction::Left),
            right: in_bounds(Direction::Right),
            counter: 0,
        }
    }

    pub fn get(&self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

impl Iterator for Neighborhood {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Self::Item> {
        while self.counter < Direction::ALL.len() {
            let dir = Direction::ALL[self.counter];
            self.counter += 1;
            if let Some(pos) = self.get(dir) {
                return Some((pos, dir));
            }
        }

        None
    }
}
