//! Turning raw pointer and key input into [`Direction`]s.

use crate::grids::{Direction, Position};
use crate::layout::Layout;

/// Direction of a drag that has travelled more than one cell away from the
/// center of the player's cell, along its dominant axis.
///
/// Returns `None` while the pointer stays within a cell of the player.
pub fn direction_from_drag(layout: &Layout, player: Position, x: f32, y: f32) -> Option<Direction> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    let (center_x, center_y) = layout.cell_center(player);
    let dx = x - center_x;
    let dy = y - center_y;

    if dx.abs() <= layout.cell_size && dy.abs() <= layout.cell_size {
        return None;
    }

    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    } else if dy > 0.0 {
        Some(Direction::Down)
    } else {
        Some(Direction::Up)
    }
}

/// arrows are handled by the host, this covers wasd and hjkl
pub fn direction_from_char(c: char) -> Option<Direction> {
    match c.to_ascii_lowercase() {
        'w' | 'k' => Some(Direction::Up),
        's' | 'j' => Some(Direction::Down),
        'a' | 'h' => Some(Direction::Left),
        'd' | 'l' => Some(Direction::Right),
        _ => None,
    }
}
