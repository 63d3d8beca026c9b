//! Terrain snapshot persistence for the flood engine.

pub mod file_header;
pub mod file_io;
pub mod save_error;
mod save_plugin;
pub mod snapshot;

pub use file_io::{load_snapshot_file, save_snapshot_file};
pub use save_error::SaveError;
pub use save_plugin::{LoadTerrainEvent, SavePlugin, SaveSettings, SaveTerrainEvent};
pub use snapshot::{decode_snapshot, encode_snapshot, TerrainSnapshot};
