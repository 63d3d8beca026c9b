//! Terrain snapshots: grid, water level and strategy as one bitcode payload.

use bevy::log::warn;
use bitcode::{Decode, Encode};

use flood::{FloodConfig, Grid, Strategy};

use crate::file_header::{unwrap_header, wrap_with_header, FLAG_COMPRESSED, KNOWN_FLAGS};
use crate::save_error::SaveError;

/// Everything needed to rebuild a flooded terrain.
#[derive(Debug, Clone, PartialEq, Encode, Decode)]
pub struct TerrainSnapshot {
    /// Logical sizes per axis.
    pub sizes: Vec<usize>,
    /// Full padded height storage, sentinels included.
    pub heights: Vec<f32>,
    pub water_level: f32,
    pub strategy: Strategy,
}

impl TerrainSnapshot {
    pub fn capture(grid: &Grid<f32>, config: &FloodConfig) -> Self {
        Self {
            sizes: grid.sizes(),
            heights: grid.heights().to_vec(),
            water_level: config.water_level,
            strategy: config.strategy,
        }
    }

    /// Rebuild the grid and config. Fails if the sizes cannot be addressed,
    /// the heights do not fit them, or a height is not finite.
    pub fn restore(self) -> Result<(Grid<f32>, FloodConfig), SaveError> {
        let grid = Grid::with_heights(self.sizes, self.heights)?;
        let config = FloodConfig {
            water_level: self.water_level,
            strategy: self.strategy,
        };
        Ok((grid, config))
    }
}

/// Encode a snapshot into header-wrapped bytes, lz4-compressing the payload
/// when `compress` is set.
pub fn encode_snapshot(snapshot: &TerrainSnapshot, compress: bool) -> Vec<u8> {
    let encoded = bitcode::encode(snapshot);
    if compress {
        let packed = lz4_flex::compress(&encoded);
        wrap_with_header(&packed, FLAG_COMPRESSED, encoded.len())
    } else {
        wrap_with_header(&encoded, 0, encoded.len())
    }
}

/// Validate the header and decode a snapshot.
pub fn decode_snapshot(bytes: &[u8]) -> Result<TerrainSnapshot, SaveError> {
    let (header, payload) = unwrap_header(bytes)?;

    let unknown = header.flags & !KNOWN_FLAGS;
    if unknown != 0 {
        warn!("Snapshot carries unknown header flags {unknown:#x}; ignoring them");
    }

    if header.is_compressed() {
        let raw = lz4_flex::decompress(payload, header.uncompressed_size as usize)?;
        Ok(bitcode::decode(&raw)?)
    } else {
        Ok(bitcode::decode(payload)?)
    }
}
