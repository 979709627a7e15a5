use crate::error::{MazeError, Result};
use crate::grids::{Dimensions, Position};

/// Cells of padding kept around the maze, split between both sides.
pub const BORDER_CELLS: f32 = 3.0;
/// Markers are inset by this fraction of a cell on every side.
pub const MARKER_INSET: f32 = 0.1;

/// Placement of a grid on a drawing surface, in surface units with y growing
/// downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub dims: Dimensions,
    pub cell_size: f32,
    pub h_margin: f32,
    pub v_margin: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Layout {
    pub fn compute(dims: Dimensions, width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(MazeError::Config(format!(
                "surface must have a positive size, got {}x{}",
                width, height
            )));
        }
        if dims.columns == 0 || dims.rows == 0 {
            return Err(MazeError::Config(format!("cannot lay out a {} grid", dims)));
        }

        let columns = dims.columns as f32;
        let rows = dims.rows as f32;

        // the tighter axis decides the cell size
        let cell_size = if width / height < columns / rows {
            width / (columns + BORDER_CELLS)
        } else {
            height / (rows + BORDER_CELLS)
        };

        Ok(Self {
            dims,
            cell_size,
            h_margin: (width - columns * cell_size) / 2.0,
            v_margin: (height - rows * cell_size) / 2.0,
        })
    }

    /// Top left corner of the cell.
    pub fn cell_origin(&self, pos: Position) -> (f32, f32) {
        (
            self.h_margin + pos.column as f32 * self.cell_size,
            self.v_margin + pos.row as f32 * self.cell_size,
        )
    }

    pub fn cell_center(&self, pos: Position) -> (f32, f32) {
        let (x, y) = self.cell_origin(pos);
        (x + self.cell_size / 2.0, y + self.cell_size / 2.0)
    }

    /// Rectangle used to highlight the player or exit cell.
    pub fn marker_rect(&self, pos: Position) -> Rect {
        let (x, y) = self.cell_origin(pos);
        let inset = self.cell_size * MARKER_INSET;

        Rect {
            left: x + inset,
            top: y + inset,
            right: x + self.cell_size - inset,
            bottom: y + self.cell_size - inset,
        }
    }

    pub fn cell_at_point(&self, x: f32, y: f32) -> Option<Position> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        let x = x - self.h_margin;
        let y = y - self.v_margin;

        if x < 0. || y < 0. {
            return None;
        }

        let pos = Position::new(
            (x / self.cell_size) as usize,
            (y / self.cell_size) as usize,
        );

        if self.dims.contains(pos) {
            Some(pos)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test_layout {
    use super::*;

    const DIMS: Dimensions = Dimensions { columns: 7, rows: 10 };

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn portrait_surface_is_width_bound() {
        // 0.5 < 0.7, integer division would have compared 0 < 0
        let layout = Layout::compute(DIMS, 500.0, 1000.0).unwrap();

        assert!(close(layout.cell_size, 50.0));
        assert!(close(layout.h_margin, 75.0));
        assert!(close(layout.v_margin, 250.0));
    }

    #[test]
    fn landscape_surface_is_height_bound() {
        let layout = Layout::compute(DIMS, 1600.0, 1300.0).unwrap();

        assert!(close(layout.cell_size, 100.0));
        assert!(close(layout.h_margin, 450.0));
        assert!(close(layout.v_margin, 150.0));
    }

    #[test]
    fn maze_fits_inside_surface() {
        for &(w, h) in &[(320.0, 480.0), (1920.0, 1080.0), (700.0, 1000.0), (10.0, 2000.0)] {
            let layout = Layout::compute(DIMS, w, h).unwrap();
            assert!(layout.h_margin > 0.0, "{}x{}", w, h);
            assert!(layout.v_margin > 0.0, "{}x{}", w, h);
        }
    }

    #[test]
    fn rejects_empty_surface() {
        assert!(Layout::compute(DIMS, 0.0, 100.0).is_err());
        assert!(Layout::compute(DIMS, 100.0, -1.0).is_err());
        assert!(Layout::compute(DIMS, f32::NAN, 100.0).is_err());
        assert!(Layout::compute(Dimensions { columns: 0, rows: 3 }, 100.0, 100.0).is_err());
    }

    #[test]
    fn hit_testing() {
        let layout = Layout::compute(DIMS, 500.0, 1000.0).unwrap();

        let (cx, cy) = layout.cell_center(Position::new(3, 4));
        assert!(close(cx, 75.0 + 175.0));
        assert!(close(cy, 250.0 + 225.0));
        assert_eq!(layout.cell_at_point(cx, cy), Some(Position::new(3, 4)));

        assert_eq!(layout.cell_at_point(10.0, 10.0), None);
        assert_eq!(layout.cell_at_point(499.0, 999.0), None);
    }

    #[test]
    fn non_finite_points_hit_nothing() {
        let layout = Layout::compute(DIMS, 500.0, 1000.0).unwrap();

        assert_eq!(layout.cell_at_point(f32::NAN, f32::NAN), None);
        assert_eq!(layout.cell_at_point(f32::NAN, 300.0), None);
        assert_eq!(layout.cell_at_point(100.0, f32::INFINITY), None);
    }

    #[test]
    fn marker_is_inset() {
        let layout = Layout::compute(DIMS, 500.0, 1000.0).unwrap();
        let rect = layout.marker_rect(Position::ORIGIN);

        assert!(close(rect.left, 80.0));
        assert!(close(rect.top, 255.0));
        assert!(close(rect.right, 120.0));
        assert!(close(rect.bottom, 295.0));
    }
}
