// ---------------------------------------------------------------------------
// file_header – Snapshot header with magic bytes, version, and checksum
// ---------------------------------------------------------------------------
//
// Header format (20 bytes, fixed-size, little-endian):
//   [0..4]   Magic bytes: "FLOD"
//   [4..8]   Format version (u32)
//   [8..12]  Flags (u32: bit 0 = lz4-compressed payload)
//   [12..16] Uncompressed payload size (u32)
//   [16..20] xxHash32 checksum of the stored payload (everything after the header)

use xxhash_rust::xxh32::xxh32;

use crate::save_error::SaveError;

/// Magic bytes identifying a terrain snapshot.
pub const MAGIC: [u8; 4] = *b"FLOD";

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 20;

/// Current header layout version.
pub const HEADER_FORMAT_VERSION: u32 = 1;

/// Payload is lz4 block-compressed.
pub const FLAG_COMPRESSED: u32 = 1;

/// Flags this build understands.
pub const KNOWN_FLAGS: u32 = FLAG_COMPRESSED;

/// Seed for xxHash32 checksum.
const XXHASH_SEED: u32 = 0;

/// Parsed file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub format_version: u32,
    pub flags: u32,
    pub uncompressed_size: u32,
    pub checksum: u32,
}

impl FileHeader {
    /// Header for a stored `payload` that expands to `uncompressed_size` bytes.
    pub fn new(payload: &[u8], flags: u32, uncompressed_size: usize) -> Self {
        Self {
            format_version: HEADER_FORMAT_VERSION,
            flags,
            uncompressed_size: uncompressed_size as u32,
            checksum: xxh32(payload, XXHASH_SEED),
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.flags & FLAG_COMPRESSED != 0
    }
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Prepend a header to a stored payload.
pub fn wrap_with_header(payload: &[u8], flags: u32, uncompressed_size: usize) -> Vec<u8> {
    let header = FileHeader::new(payload, flags, uncompressed_size);
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());

    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&header.format_version.to_le_bytes());
    out.extend_from_slice(&header.flags.to_le_bytes());
    out.extend_from_slice(&header.uncompressed_size.to_le_bytes());
    out.extend_from_slice(&header.checksum.to_le_bytes());

    out.extend_from_slice(payload);
    out
}

/// Parse and validate the header, returning it with the payload that follows.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes do not start with "FLOD"
/// - The buffer is shorter than a header
/// - The header format version is from a newer build
/// - The checksum does not match (data corruption)
pub fn unwrap_header(bytes: &[u8]) -> Result<(FileHeader, &[u8]), SaveError> {
    if bytes.len() >= MAGIC.len() && bytes[..4] != MAGIC {
        return Err(SaveError::BadMagic);
    }
    if bytes.len() < HEADER_SIZE {
        return Err(SaveError::Truncated { len: bytes.len() });
    }

    let header = FileHeader {
        format_version: read_u32(bytes, 4),
        flags: read_u32(bytes, 8),
        uncompressed_size: read_u32(bytes, 12),
        checksum: read_u32(bytes, 16),
    };

    if header.format_version > HEADER_FORMAT_VERSION {
        return Err(SaveError::VersionMismatch {
            expected_max: HEADER_FORMAT_VERSION,
            found: header.format_version,
        });
    }

    let payload = &bytes[HEADER_SIZE..];
    let computed = xxh32(payload, XXHASH_SEED);
    if computed != header.checksum {
        return Err(SaveError::ChecksumMismatch {
            stored: header.checksum,
            computed,
        });
    }

    Ok((header, payload))
}
