#![cfg_attr(not(feature = "std"), no_std)]

mod board;
mod cellset;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod render;
#[cfg(feature = "std")]
mod scenario;
mod shape;
mod ship;

pub use board::*;
pub use cellset::{CellSet, CellSetError, Cells};
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use render::*;
#[cfg(feature = "std")]
pub use scenario::*;
pub use shape::*;
pub use ship::*;

/// Mask of the configured skill size.
pub type SkillMask = PatternMask<SKILL_SIZE>;
