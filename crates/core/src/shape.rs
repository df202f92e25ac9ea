//! Shape module - immutable binary block masks
//!
//! A shape is a `rows x cols` mask (at most 4x4) stored as a 16-bit set, so it is
//! `Copy` and rotating it never allocates. Rotation always produces a new mask.

use crate::error::CoreError;
use crate::types::MAX_SHAPE_DIM;

/// Immutable occupancy mask of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    /// Bit `row * MAX_SHAPE_DIM + col` is set when that sub-cell is occupied
    bits: u16,
}

impl Shape {
    /// Build a shape from a fixed 4x4 mask, reading only the top-left `rows x cols` block.
    ///
    /// Used for the built-in archetypes; `rows` and `cols` must not exceed 4.
    pub(crate) const fn from_mask(
        rows: usize,
        cols: usize,
        mask: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    ) -> Shape {
        let mut bits = 0u16;
        let mut r = 0;
        while r < rows {
            let mut c = 0;
            while c < cols {
                if mask[r][c] != 0 {
                    bits |= 1 << (r * MAX_SHAPE_DIM + c);
                }
                c += 1;
            }
            r += 1;
        }
        Shape {
            rows: rows as u8,
            cols: cols as u8,
            bits,
        }
    }

    /// Build a shape from row slices where any non-zero entry marks an occupied cell
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let t = Shape::from_rows(&[[0u8, 1, 0], [1, 1, 1]]).unwrap();
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert_eq!(t.count(), 4);
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Shape, CoreError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

        if height == 0 || width == 0 || height > MAX_SHAPE_DIM || width > MAX_SHAPE_DIM {
            return Err(CoreError::InvalidShape {
                rows: height,
                cols: width,
                max: MAX_SHAPE_DIM,
            });
        }
        if rows.iter().any(|r| r.as_ref().len() != width) {
            return Err(CoreError::RaggedShape);
        }

        let mut bits = 0u16;
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.as_ref().iter().enumerate() {
                if v != 0 {
                    bits |= 1 << (r * MAX_SHAPE_DIM + c);
                }
            }
        }
        if bits == 0 {
            return Err(CoreError::EmptyShape);
        }

        Ok(Shape {
            rows: height as u8,
            cols: width as u8,
            bits,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the sub-cell at (row, col) is occupied; out of range is empty
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits & (1 << (row * MAX_SHAPE_DIM + col)) != 0
    }

    /// Number of occupied sub-cells
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Occupied sub-cells as (row, col), row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let shape = *self;
        (0..shape.rows())
            .flat_map(move |r| (0..shape.cols()).map(move |c| (r, c)))
            .filter(move |&(r, c)| shape.is_filled(r, c))
    }

    /// Rotate 90° clockwise: `new[col][rows - 1 - row] = old[row][col]`
    pub fn rotate_cw(&self) -> Shape {
        let rows = self.rows();
        let mut bits = 0u16;
        for (r, c) in self.cells() {
            let nr = c;
            let nc = rows - 1 - r;
            bits |= 1 << (nr * MAX_SHAPE_DIM + nc);
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Apply `times` clockwise quarter turns (only `times % 4` matters)
    pub fn rotated(&self, times: u8) -> Shape {
        let mut shape = *self;
        for _ in 0..times % 4 {
            shape = shape.rotate_cw();
        }
        shape
    }

    /// Expand to a boolean matrix (for snapshots and debugging)
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows())
            .map(|r| (0..self.cols()).map(|c| self.is_filled(r, c)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_bad_masks() {
        let empty: [[u8; 0]; 0] = [];
        assert!(matches!(
            Shape::from_rows(&empty),
            Err(CoreError::InvalidShape { .. })
        ));
        assert!(matches!(
            Shape::from_rows(&[[1u8, 1, 1, 1, 1]]),
            Err(CoreError::InvalidShape { cols: 5, .. })
        ));
        assert_eq!(
            Shape::from_rows(&[vec![1u8, 1], vec![1u8]]),
            Err(CoreError::RaggedShape)
        );
        assert_eq!(Shape::from_rows(&[[0u8, 0]]), Err(CoreError::EmptyShape));
    }

    #[test]
    fn test_const_mask_matches_from_rows() {
        let a = Shape::from_mask(2, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
        let b = Shape::from_rows(&[[0u8, 1, 0], [1, 1, 1]]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rotate_cw_t_shape() {
        // 010      10
        // 111  ->  11
        //          10
        let t = Shape::from_rows(&[[0u8, 1, 0], [1, 1, 1]]).unwrap();
        let east = t.rotate_cw();
        assert_eq!((east.rows(), east.cols()), (3, 2));
        assert_eq!(
            east.to_rows(),
            vec![
                vec![true, false],
                vec![true, true],
                vec![true, false],
            ]
        );
    }

    #[test]
    fn test_rotate_bar_swaps_dimensions() {
        let bar = Shape::from_rows(&[[1u8, 1, 1, 1]]).unwrap();
        let upright = bar.rotate_cw();
        assert_eq!((upright.rows(), upright.cols()), (4, 1));
        assert_eq!(upright.count(), 4);
    }

    #[test]
    fn test_four_rotations_is_identity() {
        let l = Shape::from_rows(&[[0u8, 0, 1], [1, 1, 1]]).unwrap();
        assert_eq!(l.rotated(4), l);
        assert_eq!(l.rotated(2), l.rotate_cw().rotate_cw());
        assert_eq!(l.rotated(5), l.rotate_cw());
    }

    #[test]
    fn test_cells_row_major() {
        let s = Shape::from_rows(&[[1u8, 1, 0], [0, 1, 1]]).unwrap();
        let cells: Vec<_> = s.cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 1), (1, 2)]);
    }
}
