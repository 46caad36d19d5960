//! Toroidal coordinate wrapping.

/// Bring one axis value back into `[0, len)` with a single correction.
///
/// Ants move one cell per step, so a coordinate can leave the grid by at
/// most one cell; adding or subtracting `len` once is enough. Values
/// further out of range are not normalized.
///
/// # Examples
///
/// ```
/// use turmite_grid::wrap_axis;
///
/// assert_eq!(wrap_axis(-1, 8), 7);
/// assert_eq!(wrap_axis(8, 8), 0);
/// assert_eq!(wrap_axis(3, 8), 3);
/// ```
#[inline]
pub fn wrap_axis(value: i32, len: u32) -> i32 {
    let n = len as i32;
    if value < 0 {
        value + n
    } else if value >= n {
        value - n
    } else {
        value
    }
}
