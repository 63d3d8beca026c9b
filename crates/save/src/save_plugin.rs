use std::path::PathBuf;

use bevy::prelude::*;

use flood::plugin::{recompute_flood, FloodTerrain};
use flood::FloodConfig;

use crate::file_io::{load_snapshot_file, save_snapshot_file};
use crate::snapshot::TerrainSnapshot;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[derive(Resource, Debug, Clone)]
pub struct SaveSettings {
    /// lz4-compress snapshot payloads.
    pub compress: bool,
}

impl Default for SaveSettings {
    fn default() -> Self {
        Self { compress: true }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Event, Debug, Clone)]
pub struct SaveTerrainEvent(pub PathBuf);

#[derive(Event, Debug, Clone)]
pub struct LoadTerrainEvent(pub PathBuf);

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Saves and loads the flooded terrain. Expects `FloodPlugin` to be added.
pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SaveSettings>()
            .add_event::<SaveTerrainEvent>()
            .add_event::<LoadTerrainEvent>()
            .add_systems(
                Update,
                (handle_save_event, handle_load_event)
                    .chain()
                    .before(recompute_flood),
            );
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

fn handle_save_event(
    mut events: EventReader<SaveTerrainEvent>,
    terrain: Res<FloodTerrain>,
    config: Res<FloodConfig>,
    settings: Res<SaveSettings>,
) {
    for SaveTerrainEvent(path) in events.read() {
        let snapshot = TerrainSnapshot::capture(&terrain, &config);
        match save_snapshot_file(path, &snapshot, settings.compress) {
            Ok(()) => info!("Saved terrain to {}", path.display()),
            Err(e) => warn!("Failed to save terrain to {}: {e}", path.display()),
        }
    }
}

/// Replaces terrain and config from disk. A failed load keeps the current
/// state untouched.
fn handle_load_event(
    mut events: EventReader<LoadTerrainEvent>,
    mut terrain: ResMut<FloodTerrain>,
    mut config: ResMut<FloodConfig>,
) {
    for LoadTerrainEvent(path) in events.read() {
        match load_snapshot_file(path).and_then(TerrainSnapshot::restore) {
            Ok((grid, loaded)) => {
                info!(
                    "Loaded terrain {:?} at water level {} from {}",
                    grid.sizes(),
                    loaded.water_level,
                    path.display()
                );
                terrain.0 = grid;
                *config = loaded;
            }
            Err(e) => warn!("Failed to load terrain from {}: {e}", path.display()),
        }
    }
}
