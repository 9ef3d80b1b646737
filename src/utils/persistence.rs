//! Generic JSON file helpers shared by the level loader and the JSON progress store.

use crate::constants::APP_DIR_NAME;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the per-user data directory for the arcade, creating it if needed.
pub fn arcade_dir() -> io::Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", APP_DIR_NAME).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine data directory",
        )
    })?;
    let dir = project_dirs.data_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Build `<dir>/<stem>.<extension>` for a game identifier.
///
/// Game identifiers are kebab-case ASCII; anything else is replaced so a hostile
/// identifier cannot escape `dir`.
pub fn file_for(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    let safe: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    dir.join(format!("{}.{}", safe, extension))
}

/// Load a JSON file. A missing file is `Ok(None)`; unreadable or malformed data is an error.
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> io::Result<Option<T>> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let value = serde_json::from_str(&json)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(Some(value))
}

/// Save a value as pretty-printed JSON.
///
/// Writes to a sibling temp file first and renames it into place, so a crash
/// mid-write leaves the previous snapshot intact.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    write_atomically(path, json.as_bytes())
}

/// Replace `path` with `bytes` via a temp file + rename.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("arcade-persistence-{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_file_for_sanitizes_stem() {
        let dir = PathBuf::from("/tmp/x");
        assert_eq!(
            file_for(&dir, "maze-runner", "json"),
            dir.join("maze-runner.json")
        );
        assert_eq!(
            file_for(&dir, "../etc/passwd", "json"),
            dir.join("___etc_passwd.json")
        );
    }

    #[test]
    fn test_load_missing_returns_none() {
        let dir = scratch_dir("missing");
        let val: Option<Vec<String>> = load_json(&dir.join("nope.json")).unwrap();
        assert!(val.is_none());
    }

    #[test]
    fn test_load_malformed_is_invalid_data() {
        let dir = scratch_dir("malformed");
        let path = dir.join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_json::<Vec<String>>(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_save_and_load() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("words.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Option<Vec<String>> = load_json(&path).unwrap();
        assert_eq!(loaded, Some(data));
        assert!(!path.with_extension("tmp").exists());

        fs::remove_dir_all(dir).ok();
    }
}
