use super::FavoritesSlot;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::PathBuf;

/// A favourites slot backed by a single file on disk.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous payload intact rather than a
/// truncated one.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl FavoritesSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == IoErrorKind::NotFound => Ok(None),
            Err(err) => Err(exn::Exn::from(ErrorKind::from(err))),
        }
    }

    fn write(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).or_raise(|| ErrorKind::Unavailable(self.path.clone()))?;
        }
        let temp = self.temp_path();
        fs::write(&temp, payload).or_raise(|| ErrorKind::Unavailable(self.path.clone()))?;
        fs::rename(&temp, &self.path).or_raise(|| ErrorKind::Unavailable(self.path.clone()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_absent_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("favorites.json"));
        assert!(slot.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("favorites.json"));
        slot.write(r#"["1","2"]"#).unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some(r#"["1","2"]"#));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested/deeper/favorites.json"));
        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_overwrite_replaces_payload() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("favorites.json"));
        slot.write(r#"["1"]"#).unwrap();
        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
    }
}
