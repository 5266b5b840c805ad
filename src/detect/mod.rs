// src/detect/mod.rs
use crate::error::{Error, Result};
use crate::filesystem::extension_of;
use std::fmt;
use std::path::Path;

pub mod mime;
pub mod sniff;

/// Friendly labels for common extensions, consulted before any MIME lookup.
const COMMON_TYPES: &[(&str, &str)] = &[
    ("txt", "Text File"),
    ("md", "Markdown"),
    ("jpg", "JPEG Image"),
    ("jpeg", "JPEG Image"),
    ("png", "PNG Image"),
    ("gif", "GIF Image"),
    ("exe", "Windows Executable"),
    ("dll", "Windows DLL"),
    ("zip", "ZIP Archive"),
    ("tar", "TAR Archive"),
    ("gz", "Gzip Archive"),
    ("pdf", "PDF Document"),
    ("docx", "Word Document"),
    ("xlsx", "Excel Workbook"),
    ("pptx", "PowerPoint Presentation"),
];

const DIRECTORY_TYPE: &str = "directory";
const UNKNOWN_TYPE: &str = "unknown";

/// One step of the detection chain. Returning `Ok(None)` passes the path on
/// to the next provider.
pub trait TypeProvider {
    fn detect(&self, path: &Path, ext: &str) -> Result<Option<String>>;
}

pub struct LabelTable;

impl TypeProvider for LabelTable {
    fn detect(&self, _path: &Path, ext: &str) -> Result<Option<String>> {
        let label = COMMON_TYPES
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, label)| label.to_string());
        Ok(label)
    }
}

pub struct MimeTable;

impl TypeProvider for MimeTable {
    fn detect(&self, _path: &Path, ext: &str) -> Result<Option<String>> {
        Ok(mime::mime_for_extension(ext).map(str::to_string))
    }
}

pub struct ContentSniffer;

impl TypeProvider for ContentSniffer {
    fn detect(&self, path: &Path, _ext: &str) -> Result<Option<String>> {
        let head = sniff::read_head(path).map_err(|e| Error::entry_stat(path, e))?;
        Ok(Some(sniff::detect_content_type(&head).to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Lowercase extension without the dot; empty when there is none.
    pub extension: String,
    pub file_type: String,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ext = if self.extension.is_empty() { "(none)" } else { &self.extension };
        write!(f, "Extension: {}, File Type: {}", ext, self.file_type)
    }
}

pub struct Detector {
    providers: Vec<Box<dyn TypeProvider>>,
}

impl Detector {
    /// Label table, then MIME table, then content sniffing.
    pub fn new() -> Self {
        let mut detector = Detector { providers: Vec::new() };
        detector.register(Box::new(LabelTable));
        detector.register(Box::new(MimeTable));
        detector.register(Box::new(ContentSniffer));
        detector
    }

    pub fn register(&mut self, provider: Box<dyn TypeProvider>) {
        self.providers.push(provider);
    }

    pub fn detect(&self, path: &Path) -> Result<Detection> {
        let metadata = std::fs::metadata(path).map_err(|e| Error::entry_stat(path, e))?;
        if metadata.is_dir() {
            return Ok(Detection {
                extension: String::new(),
                file_type: DIRECTORY_TYPE.to_string(),
            });
        }

        let extension = path
            .file_name()
            .map(|name| extension_of(&name.to_string_lossy()))
            .unwrap_or_default();

        for provider in &self.providers {
            if let Some(found) = provider.detect(path, &extension)? {
                let file_type = if found == sniff::OCTET_STREAM && extension.is_empty() {
                    UNKNOWN_TYPE.to_string()
                } else {
                    found
                };
                return Ok(Detection { extension, file_type });
            }
        }

        log::debug!("no provider recognised {}", path.display());
        Ok(Detection { extension, file_type: UNKNOWN_TYPE.to_string() })
    }
}

impl Default for Detector {
    fn default() -> Self {
        Detector::new()
    }
}
