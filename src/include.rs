//! Include resolution and ordered HTML accumulation.
//!
//! The `includes` metadata key lists secondary Markdown files whose rendered
//! HTML is appended after the main document body. Entries are either literal
//! paths or glob patterns — a pattern entry pulls in every match in
//! alphabetical order, which is how "include this whole directory" works:
//!
//! ```yaml
//! includes:
//!   - intro.md
//!   - chapters/*.md
//! ```
//!
//! Resolution order is deterministic: entries in list order, matches within
//! one pattern sorted ascending. A missing include is a warning, not an
//! error — the page still generates without that section.

use crate::markdown::Converter;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// One entry from the `includes` list, classified once at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum IncludeEntry {
    /// A plain path, resolved as exactly one file.
    Literal(PathBuf),
    /// A glob pattern, expanded against the filesystem.
    Pattern(String),
}

impl IncludeEntry {
    /// Classify an include string, resolving it against the source folder.
    ///
    /// A leading `/` on the entry is stripped first — includes are always
    /// relative to the document's folder, never to the filesystem root.
    pub fn parse(raw: &str, source_folder: &Path) -> Self {
        let relative = raw.trim_start_matches('/');
        let joined = source_folder.join(relative);
        if relative.contains(['*', '?', '[']) {
            Self::Pattern(joined.to_string_lossy().into_owned())
        } else {
            Self::Literal(joined)
        }
    }

    /// Expand this entry into the ordered list of existing files it names.
    fn expand(&self) -> Vec<PathBuf> {
        match self {
            Self::Literal(path) => {
                if path.is_file() {
                    vec![path.clone()]
                } else {
                    warn!("include file {} not found", path.display());
                    Vec::new()
                }
            }
            Self::Pattern(pattern) => {
                let mut matches: Vec<PathBuf> = match glob::glob(pattern) {
                    Ok(paths) => paths.filter_map(Result::ok).filter(|p| p.is_file()).collect(),
                    Err(err) => {
                        warn!("invalid include pattern {pattern}: {err}");
                        return Vec::new();
                    }
                };
                if matches.is_empty() {
                    warn!("include pattern {pattern} matched no files");
                }
                matches.sort();
                matches
            }
        }
    }
}

/// Result of resolving the full include list.
#[derive(Debug, Default)]
pub struct ResolvedIncludes {
    /// Converted HTML of every include, concatenated in resolution order.
    pub html: String,
    /// The files that were actually read, in the same order. Feeds the
    /// `last_updated` mtime computation.
    pub files: Vec<PathBuf>,
}

/// Read and convert every include entry, in order.
///
/// Files that vanish between expansion and read are downgraded to warnings
/// like missing literals — include resolution never aborts a generation.
pub fn resolve(entries: &[String], source_folder: &Path, converter: &Converter) -> ResolvedIncludes {
    let mut resolved = ResolvedIncludes::default();

    for raw in entries {
        for path in IncludeEntry::parse(raw, source_folder).expand() {
            match fs::read_to_string(&path) {
                Ok(text) => {
                    resolved.html.push_str(&converter.to_html(&text));
                    resolved.files.push(path);
                }
                Err(err) => warn!("could not read include {}: {err}", path.display()),
            }
        }
    }

    resolved
}
