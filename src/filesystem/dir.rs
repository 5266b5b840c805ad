// src/filesystem/dir.rs
use super::has_hidden_attribute;
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::Path;
use walkdir::WalkDir;

const SELF_ENTRY: &str = ".";
const PARENT_ENTRY: &str = "..";

/// Returns the names of `dir`'s children that are visible under the hidden
/// policy, sorted ordinally.
///
/// Names stay `OsString` so that ones which are not valid Unicode can still
/// be opened again by the caller.
///
/// With `show_hidden` every child is kept and `.` and `..` are guaranteed to
/// appear exactly once. Without it, dot-names and entries carrying the hidden
/// attribute are dropped.
pub fn collect_names(dir: &Path, show_hidden: bool) -> Result<Vec<OsString>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(Error::directory_access(dir, err)),
            Err(err) => {
                log::warn!("skipping unreadable entry in {}: {}", dir.display(), err);
                continue;
            }
        };

        if entry.depth() == 0 {
            if !entry.path().is_dir() {
                return Err(Error::NotADirectory { path: dir.to_path_buf() });
            }
            continue;
        }

        let name = entry.file_name();
        let dotted = name.as_encoded_bytes().starts_with(b".");
        if !show_hidden && (dotted || has_hidden_attribute(entry.path())) {
            continue;
        }
        names.push(name.to_os_string());
    }

    if show_hidden {
        for special in [SELF_ENTRY, PARENT_ENTRY] {
            if !names.iter().any(|n| n == special) {
                names.push(OsString::from(special));
            }
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("A.EXE"), "a").unwrap();
        fs::write(dir.path().join(".secret"), "s").unwrap();
        dir
    }

    #[test]
    fn test_hidden_excluded_by_default() {
        let dir = fixture();
        let names = collect_names(dir.path(), false).unwrap();
        assert_eq!(names, vec!["A.EXE", "b.txt"]);
    }

    #[test]
    fn test_show_hidden_adds_self_and_parent() {
        let dir = fixture();
        let names = collect_names(dir.path(), true).unwrap();
        assert_eq!(names, vec![".", "..", ".secret", "A.EXE", "b.txt"]);
    }

    #[test]
    fn test_no_duplicates_with_show_hidden() {
        let dir = fixture();
        let names = collect_names(dir.path(), true).unwrap();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped);
        assert_eq!(names.iter().filter(|n| *n == ".").count(), 1);
        assert_eq!(names.iter().filter(|n| *n == "..").count(), 1);
    }

    #[test]
    fn test_subdirectory_contents_not_listed() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("nested.txt"), "n").unwrap();

        let names = collect_names(dir.path(), false).unwrap();
        assert_eq!(names, vec!["sub"]);
    }

    #[test]
    fn test_hidden_directory_excluded() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();

        assert_eq!(collect_names(dir.path(), false).unwrap(), vec!["src"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_names(dir.path(), false).unwrap().is_empty());
        assert_eq!(collect_names(dir.path(), true).unwrap(), vec![".", ".."]);
    }

    #[test]
    fn test_ordinal_sort_puts_uppercase_first() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zeta", "Alpha", "beta", "Zulu", "_under"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let names = collect_names(dir.path(), false).unwrap();
        assert_eq!(names, vec!["Alpha", "Zulu", "_under", "beta", "zeta"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_unicode_name_kept_intact() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let raw = OsStr::from_bytes(b"caf\xE9");
        fs::write(dir.path().join(raw), "x").unwrap();

        let names = collect_names(dir.path(), false).unwrap();
        assert_eq!(names, vec![raw.to_os_string()]);
        assert!(dir.path().join(&names[0]).is_file());
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = collect_names(&dir.path().join("nope"), false).unwrap_err();
        assert!(matches!(err, Error::DirectoryAccess { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_file_path_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let err = collect_names(&file, true).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }
}
