use super::{ProgressStore, SavedProgress};
use crate::constants::{PROGRESS_FILE_EXTENSION, PROGRESS_VERSION_MAGIC};
use crate::utils::persistence::{arcade_dir, file_for, write_atomically};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

const CHECKSUM_LEN: usize = 32;

/// Progress saved in a checksummed binary format, one file per game.
pub struct ChecksummedProgressStore {
    dir: PathBuf,
}

impl ChecksummedProgressStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Sets up the store under the platform data directory from the `directories` crate.
    pub fn in_default_dir() -> io::Result<Self> {
        Ok(Self::new(arcade_dir()?))
    }

    fn path_for(&self, game_id: &str) -> PathBuf {
        file_for(&self.dir, game_id, PROGRESS_FILE_EXTENSION)
    }

    /// Checks if a save file exists for the game
    pub fn save_exists(&self, game_id: &str) -> bool {
        self.path_for(game_id).exists()
    }
}

/// Encode a record.
///
/// File format:
/// - Version magic (8 bytes)
/// - Data length (4 bytes)
/// - Serialized record (variable length)
/// - SHA256 checksum (32 bytes)
pub fn encode(progress: &SavedProgress) -> io::Result<Vec<u8>> {
    let data =
        bincode::serialize(progress).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let data_len = data.len() as u32;

    // Checksum covers version + length + data
    let mut hasher = Sha256::new();
    hasher.update(PROGRESS_VERSION_MAGIC.to_le_bytes());
    hasher.update(data_len.to_le_bytes());
    hasher.update(&data);
    let checksum = hasher.finalize();

    let mut bytes = Vec::with_capacity(8 + 4 + data.len() + CHECKSUM_LEN);
    bytes.extend_from_slice(&PROGRESS_VERSION_MAGIC.to_le_bytes());
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.extend_from_slice(&data);
    bytes.extend_from_slice(&checksum);
    Ok(bytes)
}

/// Decode a record, verifying the magic and checksum.
///
/// Returns an `InvalidData` error if:
/// - The version magic is incorrect
/// - The length header disagrees with the bytes that follow it
/// - The checksum verification fails
/// - The data cannot be deserialized
pub fn decode(mut reader: impl Read) -> io::Result<SavedProgress> {
    let mut version_bytes = [0u8; 8];
    reader.read_exact(&mut version_bytes)?;
    let version = u64::from_le_bytes(version_bytes);
    if version != PROGRESS_VERSION_MAGIC {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Invalid progress version: expected 0x{:016X}, got 0x{:016X}",
                PROGRESS_VERSION_MAGIC, version
            ),
        ));
    }

    let mut length_bytes = [0u8; 4];
    reader.read_exact(&mut length_bytes)?;
    let data_len = u32::from_le_bytes(length_bytes) as usize;

    // The header's length is only trusted once the bytes are actually there
    let mut body = Vec::new();
    reader.read_to_end(&mut body)?;
    if body.len() != data_len + CHECKSUM_LEN {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Progress length mismatch: header says {} bytes, file holds {}",
                data_len,
                body.len().saturating_sub(CHECKSUM_LEN)
            ),
        ));
    }
    let (data, stored_checksum) = body.split_at(data_len);

    let mut hasher = Sha256::new();
    hasher.update(version_bytes);
    hasher.update(length_bytes);
    hasher.update(data);
    let computed_checksum = hasher.finalize();
    if stored_checksum != computed_checksum.as_slice() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Checksum verification failed",
        ));
    }

    bincode::deserialize(data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

impl ProgressStore for ChecksummedProgressStore {
    fn get_progress(&self, game_id: &str) -> io::Result<Option<SavedProgress>> {
        let file = match fs::File::open(self.path_for(game_id)) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        // A truncated file surfaces as UnexpectedEof from read_exact
        let progress = decode(io::BufReader::new(file)).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => io::Error::new(io::ErrorKind::InvalidData, e),
            _ => e,
        })?;
        if progress.game_id != game_id {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Progress file belongs to {}", progress.game_id),
            ));
        }
        Ok(Some(progress))
    }

    fn set_progress(&mut self, progress: &SavedProgress) -> io::Result<()> {
        let bytes = encode(progress)?;
        write_atomically(&self.path_for(&progress.game_id), &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(name: &str) -> (ChecksummedProgressStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("arcade-checksum-{}", name));
        let _ = fs::remove_dir_all(&dir);
        (ChecksummedProgressStore::new(&dir), dir)
    }

    #[test]
    fn test_save_and_load() {
        let (mut store, dir) = scratch_store("roundtrip");

        let mut original = SavedProgress::new("tic-tac-toe");
        original.current_level_index = 3;
        original.cumulative_score = 125;
        original.stats.levels_solved = 3;
        original.stats.seconds_played = 3600;

        store.set_progress(&original).unwrap();
        assert!(store.save_exists("tic-tac-toe"));

        let loaded = store.get_progress("tic-tac-toe").unwrap().unwrap();
        assert_eq!(loaded, original);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_load_nonexistent() {
        let (store, dir) = scratch_store("missing");
        assert!(!store.save_exists("maze-runner"));
        assert!(store.get_progress("maze-runner").unwrap().is_none());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_tampered_file_rejected() {
        let (mut store, dir) = scratch_store("tampered");
        store.set_progress(&SavedProgress::new("pattern-fill")).unwrap();

        let path = dir.join("pattern-fill.progress");
        let mut bytes = fs::read(&path).unwrap();
        // Flip a payload byte; the checksum no longer matches
        bytes[14] ^= 0xFF;
        fs::write(&path, &bytes).unwrap();

        let err = store.get_progress("pattern-fill").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_wrong_magic_and_truncation_rejected() {
        let mut bytes = encode(&SavedProgress::new("bug-fix")).unwrap();
        let truncated = bytes[..bytes.len() - 5].to_vec();
        bytes[0] ^= 0x01;
        assert_eq!(
            decode(bytes.as_slice()).unwrap_err().kind(),
            io::ErrorKind::InvalidData
        );
        assert_eq!(
            decode(truncated.as_slice()).unwrap_err().kind(),
            io::ErrorKind::InvalidData
        );
        assert_eq!(
            decode(&bytes[..6]).unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_oversized_length_header_rejected() {
        let mut bytes = PROGRESS_VERSION_MAGIC.to_le_bytes().to_vec();
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 40]);
        let err = decode(bytes.as_slice()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("length mismatch"));
    }
}
