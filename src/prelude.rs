//! Commonly used types for ease of import.

pub use crate::{
    Board, BoardError, CellState, Orientation, Origin, OverlayReport, PatternMask, Ship,
    ShipType, SkillMask, SkillShape, BOARD_SIZE, SKILL_SIZE,
};

#[cfg(feature = "std")]
pub use crate::{print_board, print_mask, Scenario, ScenarioOutcome, StandardBoard};
