//! Snapshot files on disk.
//!
//! Writes go to `{path}.tmp`, are synced, then renamed over `path`, so a crash
//! mid-write leaves any previous snapshot intact.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::save_error::SaveError;
use crate::snapshot::{decode_snapshot, encode_snapshot, TerrainSnapshot};

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write `data` to `path` through a synced temporary file and a rename.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn save_snapshot_file(
    path: &Path,
    snapshot: &TerrainSnapshot,
    compress: bool,
) -> Result<(), SaveError> {
    atomic_write(path, &encode_snapshot(snapshot, compress))?;
    Ok(())
}

pub fn load_snapshot_file(path: &Path) -> Result<TerrainSnapshot, SaveError> {
    let bytes = fs::read(path)?;
    decode_snapshot(&bytes)
}
