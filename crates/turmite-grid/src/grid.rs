//! The toroidal `W × H` cell-state array.

use crate::error::GridError;
use crate::wrap::wrap_axis;

/// A two-dimensional toroidal grid of cell states.
///
/// Each cell has coordinate `(x, y)` where `0 <= x < width` and
/// `0 <= y < height`, stored row-major (`y * width + x`). Every cell starts
/// in state 0. Dimensions are fixed at construction.
///
/// The grid does not know how many states a rule set defines; keeping
/// every state below that count is the caller's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    width: u32,
    height: u32,
    cells: Vec<u32>,
}

impl GridState {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a `width × height` grid with every cell in state 0.
    ///
    /// Returns `Err(GridError::InvalidDimensions)` if either dimension is 0,
    /// or `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`
    /// or the cell count overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use turmite_grid::GridState;
    ///
    /// let grid = GridState::new(16, 8).unwrap();
    /// assert_eq!(grid.cell_count(), 128);
    /// assert_eq!(grid.center(), (8, 4));
    /// assert!(GridState::new(0, 8).is_err());
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let cell_count = Self::validate_dims(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![0; cell_count],
        })
    }

    /// Check dimensions without allocating; returns the cell count.
    pub fn validate_dims(width: u32, height: u32) -> Result<usize, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width as u64,
                max: Self::MAX_DIM as u64,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height as u64,
                max: Self::MAX_DIM as u64,
            });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(GridError::DimensionTooLarge {
                name: "cell_count",
                value: width as u64 * height as u64,
                max: usize::MAX as u64,
            })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The center cell `(width / 2, height / 2)`, using integer division.
    pub fn center(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(
            self.contains(x, y),
            "({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// State of the cell at `(x, y)`.
    ///
    /// Callers wrap coordinates before calling. Passing an out-of-range
    /// coordinate is a bug: debug builds panic, release builds may panic
    /// or read an unrelated cell. Use [`get_checked`](Self::get_checked)
    /// for untrusted input.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> u32 {
        self.cells[self.index(x, y)]
    }

    /// State of the cell at `(x, y)`, or `None` if out of range.
    pub fn get_checked(&self, x: i32, y: i32) -> Option<u32> {
        if self.contains(x, y) {
            Some(self.get(x, y))
        } else {
            None
        }
    }

    /// Overwrite the state of the cell at `(x, y)`.
    ///
    /// Same range contract as [`get`](Self::get).
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, state: u32) {
        let i = self.index(x, y);
        self.cells[i] = state;
    }

    /// Set every cell back to state 0.
    pub fn reset(&mut self) {
        self.cells.fill(0);
    }

    /// Move `(x, y)` by `(dx, dy)` and wrap each axis against its own
    /// dimension.
    ///
    /// Deltas are expected to be unit steps; see [`wrap_axis`].
    #[inline]
    pub fn offset(&self, x: i32, y: i32, dx: i32, dy: i32) -> (i32, i32) {
        (
            wrap_axis(x + dx, self.width),
            wrap_axis(y + dy, self.height),
        )
    }

    /// All cell states in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Whether every cell is in state 0.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&s| s == 0)
    }
}
