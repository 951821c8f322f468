//! Common types for skillboard: errors, overlay origins and overlay reports.

use crate::cellset::CellSetError;
use core::fmt;
use core::str::FromStr;

/// Errors returned by board, mask and ship operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying cell set error (grid too large or index out of range).
    CellSet(CellSetError),
    /// Pattern side has no unique center cell (even or zero).
    InvalidDimension { side: usize },
    /// Supplied rows do not form a grid of the expected side.
    DimensionMismatch { expected: usize, found: usize },
    /// A ship segment would fall outside the board.
    ShipOutOfBounds,
    /// A ship segment would land on a cell that is not water.
    ShipOverlaps { row: usize, col: usize },
}

impl From<CellSetError> for BoardError {
    fn from(err: CellSetError) -> Self {
        BoardError::CellSet(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::CellSet(e) => write!(f, "cell set error: {}", e),
            BoardError::InvalidDimension { side } => {
                write!(f, "pattern side {} has no center cell; it must be odd", side)
            }
            BoardError::DimensionMismatch { expected, found } => {
                write!(f, "expected {} cells per side, found {}", expected, found)
            }
            BoardError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            BoardError::ShipOverlaps { row, col } => {
                write!(f, "ship placement overlaps occupied cell ({}, {})", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Board coordinate where the center of a mask is placed.
///
/// Signed so that origins off the board can still be expressed; whatever part
/// of the mask lands outside is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Origin {
    pub row: isize,
    pub col: isize,
}

impl Origin {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

impl From<(isize, isize)> for Origin {
    fn from((row, col): (isize, isize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error parsing an [`Origin`] from `"row,col"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOriginError;

impl fmt::Display for ParseOriginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected an origin of the form ROW,COL")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseOriginError {}

impl FromStr for Origin {
    type Err = ParseOriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',').ok_or(ParseOriginError)?;
        let row = row.trim().parse().map_err(|_| ParseOriginError)?;
        let col = col.trim().parse().map_err(|_| ParseOriginError)?;
        Ok(Origin { row, col })
    }
}

/// Outcome of stamping one mask onto a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayReport {
    /// Affected mask cells that landed on the board.
    pub marked: usize,
    /// Of those, cells whose state actually changed.
    pub changed: usize,
    /// Affected mask cells that fell outside the board.
    pub clipped: usize,
}
