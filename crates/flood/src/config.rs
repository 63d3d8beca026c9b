use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::solver::Strategy;

pub const DEFAULT_WATER_LEVEL: f32 = 0.35;
/// Logical extent of the default terrain per axis.
pub const DEFAULT_TERRAIN_SIZE: [usize; 2] = [128, 128];
pub const DEFAULT_SEED: u64 = 42;

pub const TERRAIN_OCTAVES: i32 = 5;
pub const TERRAIN_PERSISTENCE: f32 = 0.5;
pub const TERRAIN_LACUNARITY: f32 = 2.0;
pub const TERRAIN_BASE_FREQUENCY: f32 = 0.03;

/// Step applied by [`FloodConfig::raise_level`] per notch.
pub const WATER_LEVEL_STEP: f32 = 0.01;
/// Largest height change a single edit may apply.
pub const MAX_EDIT_DELTA: f32 = 0.25;
/// Edits produced per call to `scripted_edits`.
pub const SCRIPTED_EDIT_COUNT: usize = 16;

/// Runtime flood settings.
#[derive(
    Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize, bitcode::Encode, bitcode::Decode,
)]
pub struct FloodConfig {
    /// Level of the water touching the terrain from outside.
    pub water_level: f32,
    pub strategy: Strategy,
}

impl Default for FloodConfig {
    fn default() -> Self {
        Self {
            water_level: DEFAULT_WATER_LEVEL,
            strategy: Strategy::default(),
        }
    }
}

impl FloodConfig {
    /// Nudge the water level by `notches` steps of [`WATER_LEVEL_STEP`].
    /// Negative notches lower it.
    pub fn raise_level(&mut self, notches: i32) {
        self.water_level += notches as f32 * WATER_LEVEL_STEP;
    }
}
