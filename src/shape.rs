//! Skill shapes: fixed-size pattern masks centered on their middle cell.

use crate::cellset::{CellSet, Cells};
use crate::common::BoardError;
use core::fmt;

/// Named skill area shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillShape {
    /// Wedge with its apex on the top row, widening down to the center row.
    Cone,
    /// Full center row and full center column.
    Cross,
    /// Cells within Manhattan distance `center` of the center.
    Diamond,
}

impl SkillShape {
    /// All shapes, in the order the demo applies them.
    pub const ALL: [SkillShape; 3] = [SkillShape::Cone, SkillShape::Cross, SkillShape::Diamond];

    pub fn name(&self) -> &'static str {
        match self {
            SkillShape::Cone => "cone",
            SkillShape::Cross => "cross",
            SkillShape::Diamond => "diamond",
        }
    }

    /// Build this shape as an `M×M` mask.
    pub fn mask<const M: usize>(&self) -> Result<PatternMask<M>, BoardError> {
        match self {
            SkillShape::Cone => PatternMask::cone(),
            SkillShape::Cross => PatternMask::cross(),
            SkillShape::Diamond => PatternMask::diamond(),
        }
    }
}

impl fmt::Display for SkillShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An `M×M` grid of affected flags with a unique center cell.
///
/// Every constructor checks that `M` is odd and that the grid fits the
/// backing cell set, so a mask that exists can always be applied.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PatternMask<const M: usize> {
    cells: CellSet<u128, M>,
}

impl<const M: usize> PatternMask<M> {
    /// Index of the center row and column.
    pub const CENTER: usize = M / 2;

    fn validate() -> Result<CellSet<u128, M>, BoardError> {
        if M % 2 == 0 {
            return Err(BoardError::InvalidDimension { side: M });
        }
        Ok(CellSet::try_new()?)
    }

    /// Build a mask by evaluating `affected(row, col, center)` for every cell.
    pub fn generate<F>(affected: F) -> Result<Self, BoardError>
    where
        F: Fn(usize, usize, usize) -> bool,
    {
        let mut cells = Self::validate()?;
        let c = Self::CENTER;
        for i in 0..M {
            for j in 0..M {
                if affected(i, j, c) {
                    cells.insert(i, j)?;
                }
            }
        }
        Ok(PatternMask { cells })
    }

    /// Apex on row 0, widening by one cell per side each row until the
    /// center row. Rows below the center stay empty.
    pub fn cone() -> Result<Self, BoardError> {
        Self::generate(|i, j, c| i <= c && j + i >= c && j <= c + i)
    }

    pub fn cross() -> Result<Self, BoardError> {
        Self::generate(|i, j, c| i == c || j == c)
    }

    /// Manhattan disk of radius `center`, touching all four edge midpoints.
    pub fn diamond() -> Result<Self, BoardError> {
        Self::generate(|i, j, c| i.abs_diff(c) + j.abs_diff(c) <= c)
    }

    /// Build a custom mask from `M` rows of `M` flags each.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, BoardError> {
        let mut cells = Self::validate()?;
        if rows.len() != M {
            return Err(BoardError::DimensionMismatch { expected: M, found: rows.len() });
        }
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != M {
                return Err(BoardError::DimensionMismatch { expected: M, found: row.len() });
            }
            for (j, _) in row.iter().enumerate().filter(|(_, on)| **on) {
                cells.insert(i, j)?;
            }
        }
        Ok(PatternMask { cells })
    }

    /// Side length of the mask.
    pub const fn side(&self) -> usize {
        M
    }

    pub const fn center(&self) -> usize {
        Self::CENTER
    }

    /// Whether mask cell `(row, col)` is affected. Cells outside the mask
    /// are not.
    pub fn is_affected(&self, row: usize, col: usize) -> bool {
        self.cells.contains(row, col).unwrap_or(false)
    }

    /// Affected cells in row-major order.
    pub fn affected(&self) -> Cells<u128, M> {
        self.cells.cells()
    }

    /// Number of affected cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The affected cells as a set.
    pub fn cells(&self) -> CellSet<u128, M> {
        self.cells
    }
}

impl<const M: usize> fmt::Debug for PatternMask<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PatternMask<{}>:", M)?;
        write!(f, "{}", self.cells)
    }
}

/// Rows of `1` (affected) and `0` (not affected).
impl<const M: usize> fmt::Display for PatternMask<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..M {
            for j in 0..M {
                write!(f, "{} ", if self.is_affected(i, j) { 1 } else { 0 })?;
            }
            if i + 1 < M {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
