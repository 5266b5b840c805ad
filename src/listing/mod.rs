// src/listing/mod.rs
use crate::error::Result;
use crate::filesystem::{self, extension_of, FileEntry};
use crate::utils::formatter::format_long_line;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

pub mod layout;

pub use layout::GridLayout;

const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "bat", "cmd", "com", "ps1"];
const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "tar", "gz", "tgz", "7z", "rar"];
const MEDIA_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "mp4", "mkv", "mov", "avi",
];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "aac", "ogg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayCategory {
    Directory,
    Executable,
    Archive,
    Media,
    Audio,
    Plain,
}

impl DisplayCategory {
    /// Looks up a lowercase, dotless extension.
    pub fn from_extension(ext: &str) -> Self {
        if EXECUTABLE_EXTENSIONS.contains(&ext) {
            DisplayCategory::Executable
        } else if ARCHIVE_EXTENSIONS.contains(&ext) {
            DisplayCategory::Archive
        } else if MEDIA_EXTENSIONS.contains(&ext) {
            DisplayCategory::Media
        } else if AUDIO_EXTENSIONS.contains(&ext) {
            DisplayCategory::Audio
        } else {
            DisplayCategory::Plain
        }
    }

    /// Wraps `name` in this category's color. Never touches padding.
    pub fn paint(self, name: &str) -> String {
        match self {
            DisplayCategory::Directory => name.blue().to_string(),
            DisplayCategory::Executable => name.green().to_string(),
            DisplayCategory::Archive => name.red().to_string(),
            DisplayCategory::Media => name.magenta().to_string(),
            DisplayCategory::Audio => name.cyan().to_string(),
            DisplayCategory::Plain => name.to_string(),
        }
    }
}

/// Classifies an entry by name; directories win over any extension.
pub fn classify(name: &str, is_dir: bool) -> DisplayCategory {
    if is_dir {
        return DisplayCategory::Directory;
    }
    DisplayCategory::from_extension(&extension_of(name))
}

/// Same as [`classify`], reusing the extension captured with the entry.
pub fn category_of(entry: &FileEntry) -> DisplayCategory {
    if entry.is_dir {
        return DisplayCategory::Directory;
    }
    DisplayCategory::from_extension(&entry.extension)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingOptions {
    pub show_hidden: bool,
    pub long_format: bool,
    pub target_directory: PathBuf,
}

impl Default for ListingOptions {
    fn default() -> Self {
        ListingOptions {
            show_hidden: false,
            long_format: false,
            target_directory: PathBuf::from("."),
        }
    }
}

pub struct Lister {
    options: ListingOptions,
    width: usize,
}

impl Lister {
    pub fn new(options: ListingOptions, width: usize) -> Self {
        Lister { options, width }
    }

    /// Lists the target directory to `out`.
    ///
    /// Only directory access and output failures are returned. Per-entry stat
    /// failures in long mode go to `err` and the entry is skipped.
    pub fn run<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> Result<()> {
        let dir = &self.options.target_directory;
        let names = filesystem::collect_names(dir, self.options.show_hidden)?;

        if self.options.long_format {
            for name in &names {
                match FileEntry::stat(dir, name) {
                    Ok(entry) => {
                        let painted = category_of(&entry).paint(&entry.name);
                        writeln!(out, "{}", format_long_line(&entry, &painted))?;
                    }
                    Err(e) if e.is_fatal() => return Err(e),
                    Err(e) => writeln!(err, "error: {}", e)?,
                }
            }
            return Ok(());
        }

        let display: Vec<String> = names
            .iter()
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        let Some(grid) = GridLayout::compute(&display, self.width) else {
            return Ok(());
        };
        grid.render(&display, out, |index, shown| {
            // Entries that vanish between the scan and the stat stay undecorated.
            match std::fs::metadata(dir.join(&names[index])) {
                Ok(metadata) => classify(shown, metadata.is_dir()).paint(shown),
                Err(_) => shown.to_string(),
            }
        })?;
        Ok(())
    }
}
