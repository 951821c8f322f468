use crate::common::Origin;
use crate::shape::SkillShape;
use crate::ship::{Orientation, ShipType};

pub const BOARD_SIZE: usize = 10;
pub const SKILL_SIZE: usize = 5;

/// Every demo ship is three cells long.
pub const DEMO_SHIP: ShipType = ShipType::new("Cruiser", 3);

/// A ship to place: type, origin row and column, and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Placement {
    pub ship_type: ShipType,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(ship_type: ShipType, row: usize, col: usize, orientation: Orientation) -> Self {
        Self { ship_type, row, col, orientation }
    }
}

/// A skill shape stamped at an origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Overlay {
    pub shape: SkillShape,
    pub origin: Origin,
}

impl Overlay {
    pub const fn new(shape: SkillShape, origin: Origin) -> Self {
        Self { shape, origin }
    }
}

pub const DEMO_FLEET: [Placement; 4] = [
    Placement::new(DEMO_SHIP, 2, 1, Orientation::Horizontal),
    Placement::new(DEMO_SHIP, 5, 7, Orientation::Vertical),
    Placement::new(DEMO_SHIP, 0, 0, Orientation::Diagonal),
    Placement::new(DEMO_SHIP, 0, 9, Orientation::AntiDiagonal),
];

pub const DEMO_OVERLAYS: [Overlay; 3] = [
    Overlay::new(SkillShape::Cone, Origin::new(3, 3)),
    Overlay::new(SkillShape::Cross, Origin::new(6, 2)),
    Overlay::new(SkillShape::Diamond, Origin::new(4, 7)),
];
