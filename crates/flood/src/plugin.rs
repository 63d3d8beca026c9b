//! Engine integration: terrain and flood state as resources, edits as events.
//!
//! Each `Update` applies pending water-level nudges and terrain edits, then
//! re-solves the flood if the terrain or the config changed since the last
//! solve.

use bevy::prelude::*;

use crate::config::{FloodConfig, DEFAULT_SEED, DEFAULT_TERRAIN_SIZE, MAX_EDIT_DELTA};
use crate::editing::{HeightChanged, HeightEdit};
use crate::grid::Grid;
use crate::solver::{solve_with, FloodResult};
use crate::terrain::generate_heights;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Terrain being flooded.
#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct FloodTerrain(pub Grid<f32>);

impl Default for FloodTerrain {
    fn default() -> Self {
        Self(generate_heights(&DEFAULT_TERRAIN_SIZE, DEFAULT_SEED))
    }
}

/// Result of the most recent solve.
#[derive(Resource, Debug, Clone, Deref)]
pub struct FloodMap(pub FloodResult<f32>);

impl Default for FloodMap {
    fn default() -> Self {
        Self(FloodResult::dry(0))
    }
}

/// Summary of the most recent solve.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct FloodStats {
    pub flooded_cells: usize,
    pub volume: f64,
    pub max_depth: f32,
    /// Solves run since startup.
    pub solves: u32,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Request to change one terrain height.
#[derive(Event, Debug, Clone)]
pub struct EditTerrain(pub HeightEdit<f32>);

/// Emitted for every edit that was applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct TerrainChanged(pub HeightChanged<f32>);

/// Move the water level by a number of notches (negative lowers it).
#[derive(Event, Debug, Clone, Copy)]
pub struct AdjustWaterLevel(pub i32);

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub fn adjust_water_level(
    mut requests: EventReader<AdjustWaterLevel>,
    mut config: ResMut<FloodConfig>,
) {
    for AdjustWaterLevel(notches) in requests.read() {
        config.raise_level(*notches);
    }
}

pub fn apply_terrain_edits(
    mut edits: EventReader<EditTerrain>,
    mut terrain: ResMut<FloodTerrain>,
    mut changed: EventWriter<TerrainChanged>,
) {
    for EditTerrain(edit) in edits.read() {
        if !edit.delta.is_finite() || edit.delta.abs() > MAX_EDIT_DELTA {
            warn!("Rejected terrain edit at {:?}: delta {} out of range", edit.coords, edit.delta);
            continue;
        }
        // a rejected edit writes nothing, so it must not trigger a re-solve
        match terrain.bypass_change_detection().apply_edit(edit) {
            Ok(change) => {
                terrain.set_changed();
                changed.send(TerrainChanged(change));
            }
            Err(err) => warn!("Rejected terrain edit: {err}"),
        }
    }
}

pub fn recompute_flood(
    terrain: Res<FloodTerrain>,
    config: Res<FloodConfig>,
    mut map: ResMut<FloodMap>,
    mut stats: ResMut<FloodStats>,
) {
    if !terrain.is_changed() && !config.is_changed() {
        return;
    }

    let result = solve_with(&terrain, config.water_level, config.strategy);
    stats.flooded_cells = result.flooded_count;
    stats.volume = result.volume;
    stats.max_depth = result.max_depth();
    stats.solves += 1;
    info!(
        "Flood recomputed at level {:.3}: {} cells flooded, volume {:.3}, max depth {:.3}",
        config.water_level, stats.flooded_cells, stats.volume, stats.max_depth
    );
    map.0 = result;
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct FloodPlugin;

impl Plugin for FloodPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FloodTerrain>()
            .init_resource::<FloodConfig>()
            .init_resource::<FloodMap>()
            .init_resource::<FloodStats>()
            .add_event::<EditTerrain>()
            .add_event::<TerrainChanged>()
            .add_event::<AdjustWaterLevel>()
            .add_systems(
                Update,
                (adjust_water_level, apply_terrain_edits, recompute_flood).chain(),
            );
    }
}
