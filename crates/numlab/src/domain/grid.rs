//! Rectangular grid storage and diagonal scans
//!
//! `Grid<T>` is a row-major rectangular array whose row and column
//! counts are fixed at construction. The scan functions cover the
//! coverage exercises: whole-grid maximum, maximum on or above the
//! secondary diagonal, and the sum of odd values strictly above the
//! main diagonal.

use crate::error::NumericError;

/// Row-major rectangular grid
///
/// Rectangularity (every row has the same length) is enforced by the
/// constructors, so scans may index freely within `rows x cols`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid filled with a single value
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Build a grid from nested rows
    ///
    /// The first row fixes the column count.
    ///
    /// # Errors
    /// `RaggedRows` if any later row's length differs from the first's
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, NumericError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(row_count * cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(NumericError::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the grid has zero cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if the row count equals the column count
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Cell at (row, col), if inside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    // Internal scans stay within rows x cols by construction.
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }
}

/// Maximum value over all cells, scanning in row-major order
///
/// # Errors
/// - `NullArgument` if the grid reference is absent
/// - `EmptyGrid` if the grid has zero cells
pub fn max_in_grid(grid: Option<&Grid<f64>>) -> Result<f64, NumericError> {
    let grid = grid.ok_or(NumericError::NullArgument { name: "grid" })?;
    if grid.is_empty() {
        return Err(NumericError::EmptyGrid);
    }

    let mut max = grid.at(0, 0);
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            if grid.at(i, j) > max {
                max = grid.at(i, j);
            }
        }
    }

    Ok(max)
}

/// Maximum among cells on or above the secondary diagonal
///
/// Qualifying cells satisfy `i + j <= rows - 1`; the grid must be
/// square.
///
/// # Errors
/// - `NullArgument` if the grid reference is absent
/// - `EmptyGrid` if the grid has zero cells
/// - `NonSquareGrid` if the row count differs from the column count
/// - `NoQualifyingCell` if no cell satisfied the scan condition
///   (unreachable for a non-empty square grid, kept as a defensive
///   check)
pub fn max_above_secondary_diagonal(grid: Option<&Grid<f64>>) -> Result<f64, NumericError> {
    let grid = grid.ok_or(NumericError::NullArgument { name: "grid" })?;
    if grid.is_empty() {
        return Err(NumericError::EmptyGrid);
    }
    if !grid.is_square() {
        return Err(NumericError::NonSquareGrid {
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }

    let mut max = f64::MIN;
    let mut found = false;

    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            if i + j <= grid.rows() - 1 {
                let value = grid.at(i, j);
                if !found || value > max {
                    max = value;
                    found = true;
                }
            }
        }
    }

    if !found {
        return Err(NumericError::NoQualifyingCell);
    }

    Ok(max)
}

/// Sum of odd values strictly above the main diagonal
///
/// Qualifying cells satisfy `j > i`; oddness uses the truncating
/// remainder, so negative odd values are counted. Rectangular grids
/// are allowed; a grid with no qualifying cells sums to 0.
///
/// # Errors
/// `NullArgument` if the grid reference is absent
pub fn sum_odd_above_main_diagonal(grid: Option<&Grid<i64>>) -> Result<i64, NumericError> {
    let grid = grid.ok_or(NumericError::NullArgument { name: "grid" })?;

    let mut sum = 0;
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            if j > i && grid.at(i, j) % 2 != 0 {
                sum += grid.at(i, j);
            }
        }
    }

    Ok(sum)
}
