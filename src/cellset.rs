//! A fixed-size set of grid cells using const generics.
//!
//! Cells of an `N×N` grid are packed into the unsigned integer `T`, one bit
//! per cell in row-major order. The type is `no_std` friendly and never
//! allocates. Boards keep one set per layer and masks keep one set of
//! affected cells.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by cell set operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellSetError {
    /// Requested grid size N*N exceeds the bit capacity of `T`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is outside [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for CellSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSetError::SizeTooLarge { n, capacity } => {
                write!(f, "grid of {}x{} cells exceeds capacity of {} bits", n, n, capacity)
            }
            CellSetError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is out of bounds", row, col)
            }
        }
    }
}

/// A set of cells on an N×N grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSet<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of bits actually addressed by the grid.
    const CELLS: usize = N * N;

    #[inline]
    fn capacity() -> usize {
        T::zero().count_zeros() as usize
    }

    /// Create an empty set without checking that the grid fits in `T`.
    #[inline]
    pub fn new() -> Self {
        CellSet { bits: T::zero() }
    }

    /// Create an empty set, failing with `SizeTooLarge` if `N*N` bits do not
    /// fit in `T`.
    pub fn try_new() -> Result<Self, CellSetError> {
        let capacity = Self::capacity();
        if Self::CELLS > capacity {
            Err(CellSetError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Side length of the grid.
    #[inline]
    pub const fn side(&self) -> usize {
        N
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `(row, col)` is in the set.
    pub fn contains(&self, row: usize, col: usize) -> Result<bool, CellSetError> {
        let idx = Self::index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Add `(row, col)` to the set.
    pub fn insert(&mut self, row: usize, col: usize) -> Result<(), CellSetError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Build a set from `(row, col)` pairs, failing on the first pair outside
    /// the grid.
    pub fn from_cells<I>(cells: I) -> Result<Self, CellSetError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut set = Self::try_new()?;
        for (r, c) in cells {
            set.insert(r, c)?;
        }
        Ok(set)
    }

    /// Iterate the cells in the set in row-major order.
    #[inline]
    pub fn cells(&self) -> Cells<T, N> {
        Cells { bits: self.bits, idx: 0 }
    }

    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, CellSetError> {
        if row >= N || col >= N {
            Err(CellSetError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * N + col)
        }
    }
}

impl<T, const N: usize> Default for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.cells()).finish()
    }
}

impl<T, const N: usize> fmt::Display for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let on = ((self.bits >> (r * N + c)) & T::one()) != T::zero();
                write!(f, "{} ", if on { '■' } else { '□' })?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the cells of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet { bits: self.bits & rhs.bits }
    }
}

impl<T, const N: usize> BitOr for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet { bits: self.bits | rhs.bits }
    }
}

impl<T, const N: usize> BitOrAssign for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
