//! Board state: ship layer, area effect layer, and overlay compositing.

use crate::cellset::CellSet;
use crate::common::{BoardError, Origin, OverlayReport};
use crate::shape::{PatternMask, SkillShape};
use crate::ship::Ship;
use core::fmt;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Water,
    Ship,
    AreaEffect,
    ShipUnderAreaEffect,
}

impl CellState {
    /// All states, from least to most marked.
    pub const ALL: [CellState; 4] = [
        CellState::Water,
        CellState::Ship,
        CellState::AreaEffect,
        CellState::ShipUnderAreaEffect,
    ];

    fn from_layers(ship: bool, effect: bool) -> Self {
        match (ship, effect) {
            (false, false) => CellState::Water,
            (true, false) => CellState::Ship,
            (false, true) => CellState::AreaEffect,
            (true, true) => CellState::ShipUnderAreaEffect,
        }
    }

    /// State after an area effect lands on this cell. Already affected cells
    /// keep their state.
    pub const fn under_area_effect(self) -> Self {
        match self {
            CellState::Water | CellState::AreaEffect => CellState::AreaEffect,
            CellState::Ship | CellState::ShipUnderAreaEffect => CellState::ShipUnderAreaEffect,
        }
    }

    pub const fn has_ship(self) -> bool {
        matches!(self, CellState::Ship | CellState::ShipUnderAreaEffect)
    }

    pub const fn is_affected(self) -> bool {
        matches!(self, CellState::AreaEffect | CellState::ShipUnderAreaEffect)
    }

    /// Numeric display code: 0 water, 3 ship, 5 area, 8 ship under area.
    pub const fn code(self) -> u8 {
        match self {
            CellState::Water => 0,
            CellState::Ship => 3,
            CellState::AreaEffect => 5,
            CellState::ShipUnderAreaEffect => 8,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            CellState::Water => '~',
            CellState::Ship => 'S',
            CellState::AreaEffect => '*',
            CellState::ShipUnderAreaEffect => 'X',
        }
    }
}

/// An N×N board. Cell state is derived from two layers: ship occupancy and
/// area effect coverage. Both layers only ever gain cells.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board<const N: usize> {
    ships: CellSet<u128, N>,
    effects: CellSet<u128, N>,
}

impl<const N: usize> Board<N> {
    /// Both layers are packed into a `u128`.
    const FITS: () = assert!(N * N <= 128, "board side too large for a u128 cell layer");

    /// An all-water board. A side whose `N*N` cells do not fit the layers
    /// fails to compile.
    ///
    /// ```compile_fail
    /// let _ = skillboard::Board::<12>::new();
    /// ```
    pub fn new() -> Self {
        let () = Self::FITS;
        Board {
            ships: CellSet::new(),
            effects: CellSet::new(),
        }
    }

    /// An all-water board, failing if the grid does not fit the cell layers.
    pub fn try_new() -> Result<Self, BoardError> {
        Ok(Board {
            ships: CellSet::try_new()?,
            effects: CellSet::try_new()?,
        })
    }

    /// Side length of the board.
    pub const fn side(&self) -> usize {
        N
    }

    /// State of cell (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        let ship = self.ships.contains(row, col)?;
        let effect = self.effects.contains(row, col)?;
        Ok(CellState::from_layers(ship, effect))
    }

    /// Every cell with its state, row-major.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), CellState)> + '_ {
        (0..N).flat_map(move |r| (0..N).map(move |c| ((r, c), self.state_at(r, c))))
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells().filter(|(_, s)| *s == state).count()
    }

    /// Cells holding a ship, affected or not.
    pub fn ship_map(&self) -> CellSet<u128, N> {
        self.ships
    }

    /// Cells covered by any area effect.
    pub fn effect_map(&self) -> CellSet<u128, N> {
        self.effects
    }

    /// Whether every cell of `ship` is still water.
    pub fn can_place(&self, ship: &Ship<u128, N>) -> bool {
        ((self.ships | self.effects) & ship.mask()).is_empty()
    }

    /// Write `ship` onto the board. Nothing is written if any of its cells is
    /// not water.
    pub fn place(&mut self, ship: &Ship<u128, N>) -> Result<(), BoardError> {
        if let Some((row, col)) = ((self.ships | self.effects) & ship.mask()).cells().next() {
            return Err(BoardError::ShipOverlaps { row, col });
        }
        self.ships |= ship.mask();
        log::debug!(
            "placed {} at {:?} ({:?})",
            ship.ship_type().name(),
            ship.origin(),
            ship.orientation()
        );
        Ok(())
    }

    /// Stamp `mask` onto the board with its center at `origin`.
    ///
    /// Affected mask cells that land outside the board are clipped. Each
    /// in-bounds affected cell moves to [`CellState::under_area_effect`].
    pub fn apply<const M: usize>(&mut self, mask: &PatternMask<M>, origin: Origin) -> OverlayReport {
        let c = mask.center() as isize;
        let mut report = OverlayReport::default();
        for (i, j) in mask.affected() {
            let target = origin
                .row
                .checked_add(i as isize - c)
                .zip(origin.col.checked_add(j as isize - c))
                .filter(|&(r, col)| r >= 0 && col >= 0 && r < N as isize && col < N as isize);
            let Some((r, col)) = target else {
                report.clipped += 1;
                continue;
            };
            let (r, col) = (r as usize, col as usize);
            let current = self.state_at(r, col);
            let next = current.under_area_effect();
            if next != current {
                self.write(r, col, next);
                report.changed += 1;
            }
            report.marked += 1;
        }
        log::debug!("applied {}x{} mask at {}: {:?}", M, M, origin, report);
        report
    }

    /// Build `shape` as an `M×M` mask and apply it at `origin`. The board is
    /// untouched if the mask cannot be built.
    pub fn apply_shape<const M: usize>(
        &mut self,
        shape: SkillShape,
        origin: Origin,
    ) -> Result<OverlayReport, BoardError> {
        let mask = shape.mask::<M>()?;
        Ok(self.apply(&mask, origin))
    }

    fn state_at(&self, row: usize, col: usize) -> CellState {
        CellState::from_layers(
            self.ships.contains(row, col).unwrap_or(false),
            self.effects.contains(row, col).unwrap_or(false),
        )
    }

    // Layers only gain cells, so writing a state never clears anything.
    fn write(&mut self, row: usize, col: usize, state: CellState) {
        if state.has_ship() {
            let _ = self.ships.insert(row, col);
        }
        if state.is_affected() {
            let _ = self.effects.insert(row, col);
        }
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("side", &N)
            .field("ships", &self.ships)
            .field("effects", &self.effects)
            .finish()
    }
}
