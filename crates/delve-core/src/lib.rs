//! delve-core: blob-room dungeon generation
//!
//! This crate contains all generation logic with no I/O beyond option file
//! loading. Rendering is left to consumers, which read a finished
//! [`dungeon::Dungeon`] through `tile_at` and the room list.

pub mod dungeon;
pub mod options;

mod rng;

pub use options::{GeneratorOptions, OptionsError};
pub use rng::{GameRng, RandomSource, ScriptedRng};
