use crate::error::Result;
use crate::grids::{Direction, Position, WallGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// A wall is in the way, the player did not move.
    Blocked,
    Moved { from: Position, to: Position },
    ReachedExit { from: Position, to: Position },
}

impl MoveResult {
    pub fn position(&self, before: Position) -> Position {
        match *self {
            MoveResult::Blocked => before,
            MoveResult::Moved { to, .. } | MoveResult::ReachedExit { to, .. } => to,
        }
    }
}

/// Moves the player one cell in `direction` unless a wall blocks it.
///
/// Walking into a wall is part of normal play and is reported as
/// [`MoveResult::Blocked`], not as an error. Errors only come from a player
/// position that is outside the grid.
pub fn attempt_move(grid: &mut WallGrid, direction: Direction) -> Result<MoveResult> {
    let from = grid.player;
    let cell = grid.cell_at(from.column, from.row)?;
    if cell.has_wall(direction) {
        return Ok(MoveResult::Blocked);
    }

    // an open wall always has a cell behind it
    let to = match grid.neighbor_of(from, direction) {
        Some(to) => to,
        None => return Ok(MoveResult::Blocked),
    };
    grid.player = to;

    if is_at_exit(to, grid.exit()) {
        Ok(MoveResult::ReachedExit { from, to })
    } else {
        Ok(MoveResult::Moved { from, to })
    }
}

#[inline]
pub fn is_at_exit(player: Position, exit: Position) -> bool {
    player == exit
}
