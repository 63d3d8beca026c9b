// ---------------------------------------------------------------------------
// SaveError: error types for terrain save/load
// ---------------------------------------------------------------------------

use std::fmt;

use flood::GridError;

/// Errors that can occur while saving or loading a terrain snapshot.
#[derive(Debug)]
pub enum SaveError {
    /// I/O error (file not found, permission denied, disk full, etc.)
    Io(std::io::Error),
    /// Bitcode decoding failed (corrupt or invalid payload).
    Decode(String),
    /// LZ4 decompression failed.
    Decompress(String),
    /// The bytes do not start with the snapshot magic.
    BadMagic,
    /// Fewer bytes than a header needs.
    Truncated { len: usize },
    /// Header format is newer than this build supports.
    VersionMismatch { expected_max: u32, found: u32 },
    /// Payload checksum does not match the header.
    ChecksumMismatch { stored: u32, computed: u32 },
    /// Decoded heights do not fit the decoded sizes.
    Grid(GridError),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "I/O error: {e}"),
            SaveError::Decode(msg) => write!(f, "Decoding error: {msg}"),
            SaveError::Decompress(msg) => write!(f, "Decompression error: {msg}"),
            SaveError::BadMagic => write!(f, "Not a terrain snapshot: missing magic bytes"),
            SaveError::Truncated { len } => {
                write!(f, "Snapshot is too short ({len} bytes) to hold a header")
            }
            SaveError::VersionMismatch {
                expected_max,
                found,
            } => write!(
                f,
                "Version mismatch: snapshot is v{found}, but this build only supports up to v{expected_max}"
            ),
            SaveError::ChecksumMismatch { stored, computed } => write!(
                f,
                "Snapshot is corrupted: checksum mismatch (expected {stored:#010X}, got {computed:#010X})"
            ),
            SaveError::Grid(e) => write!(f, "Invalid terrain: {e}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            SaveError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<bitcode::Error> for SaveError {
    fn from(e: bitcode::Error) -> Self {
        SaveError::Decode(e.to_string())
    }
}

impl From<lz4_flex::block::DecompressError> for SaveError {
    fn from(e: lz4_flex::block::DecompressError) -> Self {
        SaveError::Decompress(e.to_string())
    }
}

impl From<GridError> for SaveError {
    fn from(e: GridError) -> Self {
        SaveError::Grid(e)
    }
}
