//! Disk side of a localization run: the fonts directory and the rewritten stylesheet.
//!
//! Nothing is cached between runs. Every save truncates and overwrites.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::url_model::local_reference;

/// Directory that receives downloaded font files.
///
/// References written into the stylesheet are built from `reference_base`,
/// which is the directory itself unless overridden.
#[derive(Debug, Clone)]
pub struct FontStore {
    dir: PathBuf,
    reference_base: PathBuf,
}

impl FontStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            reference_base: dir.clone(),
            dir,
        }
    }

    /// Use `base` instead of the on-disk directory when building references.
    pub fn with_reference_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.reference_base = base.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the directory (and parents) if missing.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create fonts dir: {}", self.dir.display()))
    }

    /// Write `bytes` to `<dir>/<file_name>`, replacing any existing file.
    pub fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        write_truncate(&path, bytes)
            .with_context(|| format!("failed to write font: {}", path.display()))?;
        Ok(path)
    }

    /// Stylesheet reference for a saved font (forward slashes).
    pub fn local_reference(&self, file_name: &str) -> String {
        local_reference(&self.reference_base, file_name)
    }
}

/// Write the rewritten stylesheet, creating parent directories as needed.
pub fn write_stylesheet(path: &Path, css: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir: {}", parent.display()))?;
    }
    write_truncate(path, css.as_bytes())
        .with_context(|| format!("failed to write stylesheet: {}", path.display()))
}

fn write_truncate(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(bytes)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_nested() {
        let root = tempfile::tempdir().unwrap();
        let store = FontStore::new(root.path().join("a/b/fonts"));
        store.ensure_dir().unwrap();
        assert!(store.dir().is_dir());
        // Second call on an existing dir is fine.
        store.ensure_dir().unwrap();
    }

    #[test]
    fn save_overwrites_existing_file() {
        let root = tempfile::tempdir().unwrap();
        let store = FontStore::new(root.path());
        store.save("f.woff2", b"first version, longer").unwrap();
        let path = store.save("f.woff2", b"second").unwrap();
        assert_eq!(fs::read(path).unwrap(), b"second");
    }

    #[test]
    fn save_into_missing_dir_fails() {
        let root = tempfile::tempdir().unwrap();
        let store = FontStore::new(root.path().join("missing"));
        let err = store.save("f.woff2", b"x").unwrap_err();
        assert!(format!("{:#}", err).contains("failed to write font"));
    }

    #[test]
    fn write_stylesheet_creates_parent() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("public/css/fonts.css");
        write_stylesheet(&out, "body{}").unwrap();
        assert_eq!(fs::read_to_string(out).unwrap(), "body{}");
    }

    #[test]
    fn reference_is_relative_to_configured_dir() {
        let store = FontStore::new("fonts");
        assert_eq!(store.local_reference("x.woff2"), "fonts/x.woff2");
    }

    #[test]
    fn reference_base_overrides_dir() {
        let store = FontStore::new("/srv/site/public/fonts").with_reference_base("fonts");
        assert_eq!(store.local_reference("x.woff2"), "fonts/x.woff2");
        assert_eq!(store.dir(), Path::new("/srv/site/public/fonts"));
    }
}
