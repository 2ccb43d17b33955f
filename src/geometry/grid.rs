// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! GridState: an immutable snapshot of a toroidal board.
//!
//! Cells are stored as a row-major bitset, where bit `i * width + j` is set
//! if cell `(i, j)` is alive. Two states are equal exactly when their
//! dimensions and every cell agree, and the derived hash is consistent with
//! that, so states can be used directly as set members.
//!
//! # Examples
//!
//! ```
//! use life_oscillators::geometry::GridState;
//!
//! let blinker = GridState::new(&[[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]).unwrap();
//! assert_eq!(blinker.population(), 3);
//! assert_eq!(blinker.to_string(), ".o../.o../.o..");
//!
//! let parsed: GridState = ".o../.o../.o..".parse().unwrap();
//! assert_eq!(parsed, blinker);
//! ```

use crate::error::GridError;
use crate::geometry::constants::{ALIVE, DEAD, MAX_CELLS, ROW_SEPARATOR};
use crate::symmetry::Remapping;
use std::fmt;
use std::str::FromStr;

/// One configuration of a `height` x `width` toroidal board.
///
/// Ordering is by dimensions then by the raw bitset; it carries no meaning
/// beyond giving reports a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridState {
    height: usize,
    width: usize,
    cells: u64,
}

/// Bitmask with the low `cells` bits set.
#[inline]
pub(crate) fn board_mask(cells: usize) -> u64 {
    if cells >= MAX_CELLS {
        u64::MAX
    } else {
        (1u64 << cells) - 1
    }
}

fn check_capacity(height: usize, width: usize) -> Result<(), GridError> {
    let cells = height.saturating_mul(width);
    if cells > MAX_CELLS {
        return Err(GridError::TooManyCells {
            cells,
            max: MAX_CELLS,
        });
    }
    Ok(())
}

impl GridState {
    /// Build a state from a rectangular 0/1 matrix.
    ///
    /// # Errors
    ///
    /// - [`GridError::RaggedRows`] if the rows differ in length
    /// - [`GridError::NonBinaryCell`] if a cell is not 0 or 1
    /// - [`GridError::TooManyCells`] if the board has more than 64 cells
    pub fn new<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRows {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            if let Some((j, &value)) = row.iter().enumerate().find(|&(_, &v)| v > 1) {
                return Err(GridError::NonBinaryCell {
                    row: i,
                    col: j,
                    value,
                });
            }
        }
        check_capacity(height, width)?;

        let mut cells = 0u64;
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.as_ref().iter().enumerate() {
                if value == 1 {
                    cells |= 1 << (i * width + j);
                }
            }
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Build a state from a row-major bitset. Bits beyond the board are ignored.
    ///
    /// # Errors
    ///
    /// [`GridError::TooManyCells`] if the board has more than 64 cells.
    pub fn from_bits(height: usize, width: usize, bits: u64) -> Result<Self, GridError> {
        check_capacity(height, width)?;
        Ok(Self {
            height,
            width,
            cells: bits & board_mask(height * width),
        })
    }

    /// The all-dead board.
    ///
    /// # Errors
    ///
    /// [`GridError::TooManyCells`] if the board has more than 64 cells.
    pub fn empty(height: usize, width: usize) -> Result<Self, GridError> {
        Self::from_bits(height, width, 0)
    }

    /// A state with the same dimensions as `self` and the given cells.
    #[inline]
    pub(crate) fn with_bits(&self, bits: u64) -> Self {
        Self {
            cells: bits & board_mask(self.cell_count()),
            ..*self
        }
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells (`height * width`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    /// Bit index of cell `(i, j)`.
    #[inline]
    pub(crate) fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.height && j < self.width);
        i * self.width + j
    }

    /// Whether cell `(i, j)` is alive.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` lies outside the board.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        assert!(
            i < self.height && j < self.width,
            "cell ({}, {}) outside {}x{} board",
            i,
            j,
            self.height,
            self.width
        );
        (self.cells >> self.index(i, j)) & 1 != 0
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.count_ones() as usize
    }

    /// True if every cell is dead.
    pub fn is_empty(&self) -> bool {
        self.cells == 0
    }

    /// The raw row-major bitset.
    pub fn bits(&self) -> u64 {
        self.cells
    }

    /// Copy the board out as a 0/1 matrix.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        (0..self.height)
            .map(|i| (0..self.width).map(|j| self.get(i, j) as u8).collect())
            .collect()
    }

    /// Render the board as one line of text per row (`o` alive, `.` dead).
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(move |i| {
            (0..self.width)
                .map(|j| if self.get(i, j) { ALIVE } else { DEAD })
                .collect()
        })
    }

    /// Return the image of this state under a board symmetry, where cell
    /// `(i, j)` of the result is cell `remap.source(i, j)` of `self`.
    ///
    /// # Panics
    ///
    /// Panics if `remap` was generated for a board of different dimensions.
    pub fn apply_symmetry(&self, remap: &Remapping) -> Self {
        assert_eq!(
            (remap.height(), remap.width()),
            (self.height, self.width),
            "symmetry for a {}x{} board applied to a {}x{} board",
            remap.height(),
            remap.width(),
            self.height,
            self.width
        );
        let mut bits = 0u64;
        for (dest, &source) in remap.permutation().iter().enumerate() {
            bits |= ((self.cells >> source) & 1) << dest;
        }
        self.with_bits(bits)
    }

    /// The successor of this state under the toroidal Life rule.
    ///
    /// Convenience for [`crate::rule::step`]; repeated stepping is cheaper
    /// through a shared [`crate::rule::Torus`].
    pub fn step(&self) -> Self {
        crate::rule::step(self)
    }
}

impl fmt::Display for GridState {
    /// Format the board on one line, rows separated by `/`, e.g. `.oo./.oo./.oo.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.render().enumerate() {
            if i > 0 {
                write!(f, "{}", ROW_SEPARATOR)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl FromStr for GridState {
    type Err = GridError;

    /// Parse the text notation produced by `Display`.
    ///
    /// Rows are separated by `/` or newlines. `o`, `O`, `#` and `1` are alive;
    /// `.` and `0` are dead. Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for line in s.split(|c| c == ROW_SEPARATOR || c == '\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row_index = rows.len();
            let row = line
                .chars()
                .map(|ch| match ch {
                    'o' | 'O' | '#' | '1' => Ok(1),
                    '.' | '0' => Ok(0),
                    _ => Err(GridError::InvalidCharacter { row: row_index, ch }),
                })
                .collect::<Result<Vec<u8>, _>>()?;
            rows.push(row);
        }
        GridState::new(&rows)
    }
}
