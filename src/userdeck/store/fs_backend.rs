use super::backend::KeyValueBackend;
use crate::error::{Result, UserdeckError};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Filesystem key-value backend.
///
/// Every key maps to one `<key>.json` file inside `root`. The directory is
/// created lazily on the first write.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file holding `key`.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(UserdeckError::Io)?;
        }
        Ok(())
    }
}

/// Keys become file names, so they are limited to a safe character set.
pub fn check_key(key: &str) -> Result<()> {
    // `config` is taken by config.json in the same directory.
    let valid = !key.is_empty()
        && key != "config"
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(UserdeckError::Config(format!("Invalid storage key: '{}'", key)))
    }
}

impl KeyValueBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(UserdeckError::Io)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let target_path = self.key_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, value) {
            let _ = fs::remove_file(&tmp_path);
            return Err(UserdeckError::Io(e));
        }
        fs::rename(&tmp_path, target_path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            UserdeckError::Io(e)
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_keys_that_escape_the_root() {
        let backend = FsBackend::new("/tmp/userdeck-unused");
        assert!(backend.key_path("users").is_ok());
        assert!(backend.key_path("users.v2").is_ok());
        assert!(backend.key_path("").is_err());
        assert!(backend.key_path("../users").is_err());
        assert!(backend.key_path("a/b").is_err());
        assert!(backend.key_path(".hidden").is_err());
        assert!(backend.key_path("config").is_err());
    }
}
