// src/filesystem/mod.rs
pub mod dir;
pub mod file;

pub use dir::collect_names;
pub use file::{has_hidden_attribute, permission_string};

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;

/// One stat of a directory child, captured for rendering.
///
/// Hidden status is settled while collecting names and is not kept here.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Display form of the name; lossy for names that are not valid Unicode.
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: Option<chrono::DateTime<chrono::Local>>,
    pub permissions: String,
    pub extension: String,
}

impl FileEntry {
    /// Stats `dir/name`, following symlinks.
    pub fn stat(dir: &Path, name: &OsStr) -> Result<Self> {
        let path = dir.join(name);
        let metadata = std::fs::metadata(&path).map_err(|e| Error::entry_stat(&path, e))?;
        let name = name.to_string_lossy().into_owned();
        let modified = metadata
            .modified()
            .ok()
            .map(chrono::DateTime::<chrono::Local>::from);
        let extension = extension_of(&name);

        Ok(FileEntry {
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            modified,
            permissions: permission_string(&metadata),
            extension,
            name,
        })
    }
}

/// Lowercase text after the final `.` of `name`, or empty when there is none.
///
/// Unlike `Path::extension`, a leading dot counts: `.bashrc` yields `bashrc`.
pub fn extension_of(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}
