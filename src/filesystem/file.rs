// src/filesystem/file.rs
use std::fs::Metadata;
use std::path::Path;

#[cfg(windows)]
const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

/// Reports whether `path` carries the platform hidden attribute.
///
/// Query failures are treated as "not hidden". Only Windows has such an
/// attribute; elsewhere this is always false.
#[cfg(windows)]
pub fn has_hidden_attribute(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0,
        Err(e) => {
            log::debug!("attribute query failed for {}: {}", path.display(), e);
            false
        }
    }
}

#[cfg(not(windows))]
pub fn has_hidden_attribute(_path: &Path) -> bool {
    false
}

/// Renders followed `metadata` as a ten character mode string, e.g.
/// `drwxr-xr-x`.
pub fn permission_string(metadata: &Metadata) -> String {
    let kind = if metadata.is_dir() { 'd' } else { '-' };

    let bits = mode_bits(metadata);
    let mut out = String::with_capacity(10);
    out.push(kind);
    for (i, ch) in "rwxrwxrwx".chars().enumerate() {
        if bits & (1 << (8 - i)) != 0 {
            out.push(ch);
        } else {
            out.push('-');
        }
    }
    out
}

#[cfg(unix)]
fn mode_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o777
}

// Windows only knows the read-only flag; directories are always traversable.
#[cfg(not(unix))]
fn mode_bits(metadata: &Metadata) -> u32 {
    let mut bits = if metadata.permissions().readonly() { 0o444 } else { 0o666 };
    if metadata.is_dir() {
        bits |= 0o111;
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::{extension_of, FileEntry};
    use std::ffi::OsStr;
    use std::fs;

    #[test]
    fn test_file_entry_stat() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.TXT"), "hello").unwrap();

        let entry = FileEntry::stat(dir.path(), OsStr::new("notes.TXT")).unwrap();
        assert_eq!(entry.name, "notes.TXT");
        assert_eq!(entry.size, 5);
        assert!(!entry.is_dir);
        assert_eq!(entry.extension, "txt");
        assert!(entry.modified.is_some());
        assert!(entry.permissions.starts_with('-'));
        assert_eq!(entry.permissions.len(), 10);
    }

    #[test]
    fn test_file_entry_stat_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileEntry::stat(dir.path(), OsStr::new("ghost")).unwrap_err();
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_dot_name_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".secret"), "x").unwrap();

        let entry = FileEntry::stat(dir.path(), OsStr::new(".secret")).unwrap();
        assert_eq!(entry.extension, "secret");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_stat_non_unicode_name() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let raw = OsStr::from_bytes(b"bad\xFF.txt");
        fs::write(dir.path().join(raw), "x").unwrap();

        let entry = FileEntry::stat(dir.path(), raw).unwrap();
        assert_eq!(entry.name, "bad\u{FFFD}.txt");
        assert_eq!(entry.extension, "txt");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_mode_follows_target() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let entry = FileEntry::stat(dir.path(), OsStr::new("link")).unwrap();
        assert!(entry.is_dir);
        assert!(entry.permissions.starts_with('d'));
    }

    #[test]
    fn test_directory_permission_string() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = fs::metadata(dir.path()).unwrap();
        let perms = permission_string(&metadata);
        assert!(perms.starts_with('d'));
        assert_eq!(perms.chars().nth(1), Some('r'));
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_mode_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.sh");
        fs::write(&path, "#!/bin/sh").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o754)).unwrap();

        let metadata = fs::metadata(&path).unwrap();
        assert_eq!(permission_string(&metadata), "-rwxr-xr--");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("a.JPG"), "jpg");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of("."), "");
        assert_eq!(extension_of(".."), "");
    }

    #[test]
    fn test_plain_file_not_hidden_by_attribute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        fs::write(&path, "x").unwrap();
        assert!(!has_hidden_attribute(&path));
        assert!(!has_hidden_attribute(&dir.path().join("missing")));
    }
}
