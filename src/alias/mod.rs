// src/alias/mod.rs
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Program that `wla` forwards to.
pub const LISTER_PROGRAM: &str = "wls";

/// Flags `wla` puts in front of the caller's arguments.
pub const PRESET_FLAGS: &[&str] = &["-l", "-a"];

/// Re-invokes another program with preset arguments and reports its exit code.
#[derive(Debug, Clone)]
pub struct AliasForwarder {
    program: PathBuf,
    preset: Vec<String>,
}

impl AliasForwarder {
    pub fn new(program: impl Into<PathBuf>, preset: &[&str]) -> Self {
        AliasForwarder {
            program: program.into(),
            preset: preset.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Forwarder for `wls -l -a`.
    pub fn lister() -> Self {
        AliasForwarder::new(locate_program(LISTER_PROGRAM), PRESET_FLAGS)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn arguments(&self, forwarded: &[String]) -> Vec<String> {
        self.preset.iter().chain(forwarded).cloned().collect()
    }

    /// Spawns the program, waits for it and returns its exit code. A child
    /// that ends without a code (killed by a signal) maps to 1.
    pub fn run(&self, forwarded: &[String]) -> Result<i32> {
        let status = Command::new(&self.program)
            .args(self.arguments(forwarded))
            .status()
            .map_err(|source| Error::Spawn { program: self.program.clone(), source })?;

        Ok(status.code().unwrap_or(1))
    }
}

/// Looks for `name` beside the running executable, then on `PATH`. Falls back
/// to the bare name and lets the OS resolve it at spawn time.
pub fn locate_program(name: &str) -> PathBuf {
    let file_name = format!("{}{}", name, std::env::consts::EXE_SUFFIX);

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    if let Some(dir) = exe_dir {
        let sibling = dir.join(&file_name);
        if sibling.is_file() {
            return sibling;
        }
    }

    match which::which(name) {
        Ok(path) => path,
        Err(e) => {
            log::debug!("{} not found on PATH: {}", name, e);
            PathBuf::from(file_name)
        }
    }
}
