//! Ship definitions and footprints on an N×N board.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::cellset::{CellSet, Cells};
use crate::common::BoardError;

/// Direction a ship extends from its origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends to the right along the row.
    Horizontal,
    /// Extends down along the column.
    Vertical,
    /// Extends down and to the right.
    Diagonal,
    /// Extends down and to the left.
    AntiDiagonal,
}

impl Orientation {
    /// Row and column step between consecutive segments.
    pub const fn step(&self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
            Orientation::AntiDiagonal => (1, -1),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship footprint on an N×N board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    ship_type: ShipType,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: CellSet<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Lay out a ship from (`row`, `col`) along `orientation`.
    /// Fails with `ShipOutOfBounds` if any segment leaves the board.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let (dr, dc) = orientation.step();
        let mut mask = CellSet::<T, N>::try_new()?;
        for i in 0..ship_type.length() as isize {
            let r = row as isize + dr * i;
            let c = col as isize + dc * i;
            if r < 0 || c < 0 || r >= N as isize || c >= N as isize {
                return Err(BoardError::ShipOutOfBounds);
            }
            mask.insert(r as usize, c as usize)?;
        }
        Ok(Ship {
            ship_type,
            orientation,
            row,
            col,
            mask,
        })
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> CellSet<T, N> {
        self.mask
    }

    /// Cells covered by the ship, row-major.
    pub fn cells(&self) -> Cells<T, N> {
        self.mask.cells()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.contains(row, col).unwrap_or(false)
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, cells: {:?} }}",
            self.ship_type.name(),
            self.row,
            self.col,
            self.orientation,
            self.mask,
        )
    }
}
