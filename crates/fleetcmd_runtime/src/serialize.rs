//! Game-state snapshot serialization using `MessagePack`.
//!
//! Snapshots are produced by the game client and loaded by the console with
//! `--state`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use fleetcmd_foundation::{Error, ErrorContext, GameState, Result};

/// Serializes a snapshot to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(state: &GameState) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(state).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a snapshot from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<GameState> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Saves a snapshot to a file, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(state: &GameState, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| io_error("create", path, &e))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(state)?;

    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| io_error("write to", path, &e))
}

/// Loads a snapshot from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<GameState> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error("open", path, &e))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| io_error("read", path, &e))?;

    let context = ErrorContext::new().with_source(path.display().to_string());
    from_bytes(&bytes).map_err(|e| e.with_context(context))
}

fn io_error(action: &str, path: &Path, e: &std::io::Error) -> Error {
    Error::io(format!("failed to {action} file '{}': {e}", path.display()))
}
