// src/cli/mod.rs
use crate::listing::ListingOptions;
use clap::Parser;
use std::path::PathBuf;

/// Splits combined short options (`-la`) into separate ones (`-l`, `-a`).
///
/// Tokens of exactly two characters, tokens starting with `--` and
/// non-option tokens pass through untouched. Any other single-dash token is
/// split per character, so `-la` is never read as a long option.
pub fn normalize_flags<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out = Vec::new();
    for arg in args {
        let arg: String = arg.into();
        if !arg.starts_with('-') || arg.starts_with("--") || arg.chars().count() <= 2 {
            out.push(arg);
            continue;
        }
        out.extend(arg.chars().skip(1).map(|ch| format!("-{}", ch)));
    }
    out
}

#[derive(Parser, Debug)]
#[command(name = "wls")]
#[command(about = "List directory contents in columns, like ls")]
pub struct WlsArgs {
    /// Long listing: permissions, size and modification time
    #[arg(short = 'l')]
    pub long: bool,

    /// Include hidden entries and the . and .. entries
    #[arg(short = 'a')]
    pub all: bool,

    /// Directory to list
    #[arg(default_value = ".")]
    pub directory: PathBuf,
}

impl WlsArgs {
    /// Parses a full argv (program name first) after normalizing its flags.
    pub fn try_parse_normalized<I, S>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| "wls".to_string());
        let args = std::iter::once(program).chain(normalize_flags(argv));
        WlsArgs::try_parse_from(args)
    }

    pub fn into_options(self) -> ListingOptions {
        ListingOptions {
            show_hidden: self.all,
            long_format: self.long,
            target_directory: self.directory,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "wfile")]
#[command(about = "Report the extension and file type of each path")]
pub struct WfileArgs {
    /// Files to inspect; glob patterns are expanded
    #[arg(required = true)]
    pub paths: Vec<String>,
}

impl WfileArgs {
    pub fn expanded_paths(&self) -> Vec<String> {
        expand_patterns(&self.paths)
    }
}

/// Expands arguments containing `*`, `?` or `[`, since the Windows shell does
/// not. A pattern that matches nothing, or is malformed, is kept as given.
pub fn expand_patterns(args: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for arg in args {
        if !arg.contains(['*', '?', '[']) {
            out.push(arg.clone());
            continue;
        }

        let matches: Vec<String> = match glob::glob(arg) {
            Ok(paths) => paths
                .filter_map(|entry| match entry {
                    Ok(path) => Some(path.display().to_string()),
                    Err(e) => {
                        log::warn!("skipping {}: {}", e.path().display(), e.error());
                        None
                    }
                })
                .collect(),
            Err(e) => {
                log::debug!("invalid pattern {}: {}", arg, e);
                Vec::new()
            }
        };

        if matches.is_empty() {
            out.push(arg.clone());
        } else {
            out.extend(matches);
        }
    }
    out
}
