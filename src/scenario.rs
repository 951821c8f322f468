//! Scripted setup: place a fleet, then stamp overlays in order.

use crate::board::Board;
use crate::common::{BoardError, OverlayReport};
use crate::config::{Overlay, Placement, BOARD_SIZE, DEMO_FLEET, DEMO_OVERLAYS, SKILL_SIZE};
use crate::ship::Ship;

/// Board size used by scenarios.
pub type StandardBoard = Board<BOARD_SIZE>;

/// Ships to place and overlays to apply, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub placements: Vec<Placement>,
    pub overlays: Vec<Overlay>,
}

/// Final board plus what happened on the way there.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub board: StandardBoard,
    pub placed: Vec<Placement>,
    pub skipped: Vec<(Placement, BoardError)>,
    pub reports: Vec<(Overlay, OverlayReport)>,
}

impl Scenario {
    /// The built-in demonstration fleet and overlays.
    pub fn demo() -> Self {
        Scenario {
            placements: DEMO_FLEET.to_vec(),
            overlays: DEMO_OVERLAYS.to_vec(),
        }
    }

    /// Run the scenario on a fresh board.
    ///
    /// Placements that are out of bounds or overlap an earlier ship are
    /// skipped and reported. Overlays are applied after all placements.
    pub fn run(&self) -> Result<ScenarioOutcome, BoardError> {
        let mut board = StandardBoard::try_new()?;
        let mut placed = Vec::new();
        let mut skipped = Vec::new();

        for p in &self.placements {
            let result = Ship::new(p.ship_type, p.orientation, p.row, p.col)
                .and_then(|ship| board.place(&ship));
            match result {
                Ok(()) => placed.push(*p),
                Err(e) => {
                    log::warn!("skipping {:?} at ({}, {}): {}", p.orientation, p.row, p.col, e);
                    skipped.push((*p, e));
                }
            }
        }

        let mut reports = Vec::with_capacity(self.overlays.len());
        for overlay in &self.overlays {
            let report = board.apply_shape::<SKILL_SIZE>(overlay.shape, overlay.origin)?;
            log::info!(
                "{} at {}: {} cells marked, {} clipped",
                overlay.shape,
                overlay.origin,
                report.marked,
                report.clipped
            );
            reports.push((*overlay, report));
        }

        Ok(ScenarioOutcome {
            board,
            placed,
            skipped,
            reports,
        })
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::demo()
    }
}
