//! Static asset publication.
//!
//! Two asset origins, decided by [`crate::source`]:
//!
//! - **Folder**: the user's docs directory. Its `images/`, `css/`, `js/`,
//!   and `fonts/` subdirectories are mirrored into the destination,
//!   overwriting whatever is there. Subdirectories the user never created
//!   are simply skipped — a docs folder with no `fonts/` is normal, not an
//!   error. An actual copy failure is fatal.
//!
//! - **Bundled**: the stock theme embedded in the binary at compile time.
//!   Used when the source is a bare `.md` file with no folder of its own.

use crate::source::AssetSource;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to copy asset {0}: {1}")]
    Copy(PathBuf, std::io::Error),
    #[error("failed to write bundled asset {0}: {1}")]
    Write(PathBuf, std::io::Error),
}

/// Asset subdirectories copied from a folder source, in copy order.
pub const ASSET_DIRS: &[&str] = &["images", "css", "js", "fonts"];

const SCREEN_CSS: &str = include_str!("../static/screen.css");
const PRINT_CSS: &str = include_str!("../static/print.css");
const APP_JS: &str = include_str!("../static/app.js");

/// Bundled theme files as (relative path, contents).
const BUNDLED: &[(&str, &str)] = &[
    ("css/screen.css", SCREEN_CSS),
    ("css/print.css", PRINT_CSS),
    ("js/app.js", APP_JS),
];

/// Publish assets into the destination directory.
///
/// Returns the destination-relative paths of the directories (folder case)
/// or files (bundled case) that were written, for the CLI report.
pub fn publish(assets: &AssetSource, destination: &Path) -> Result<Vec<String>, AssetError> {
    match assets {
        AssetSource::Bundled => publish_bundled(destination),
        AssetSource::Folder(folder) => publish_folder(folder, destination),
    }
}

fn publish_bundled(destination: &Path) -> Result<Vec<String>, AssetError> {
    let mut written = Vec::new();
    for (rel, contents) in BUNDLED {
        let target = destination.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| AssetError::Write(target.clone(), e))?;
        }
        fs::write(&target, contents).map_err(|e| AssetError::Write(target.clone(), e))?;
        written.push((*rel).to_string());
    }
    Ok(written)
}

fn publish_folder(folder: &Path, destination: &Path) -> Result<Vec<String>, AssetError> {
    // Destination defaults to the source folder itself, in which case the
    // assets are already in place and copying a tree onto itself would
    // truncate files mid-read.
    if same_dir(folder, destination) {
        return Ok(Vec::new());
    }

    let mut copied = Vec::new();
    for name in ASSET_DIRS {
        let src = folder.join(name);
        if !src.is_dir() {
            continue;
        }
        copy_tree(&src, &destination.join(name))?;
        copied.push((*name).to_string());
    }
    Ok(copied)
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => a == b,
    }
}

/// Recursively mirror `src` into `dst`, overwriting existing files.
fn copy_tree(src: &Path, dst: &Path) -> Result<(), AssetError> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            AssetError::Copy(path, e.into())
        })?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields children of its root");
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| AssetError::Copy(target.clone(), e))?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(|e| AssetError::Copy(entry.path().to_path_buf(), e))?;
        }
    }
    Ok(())
}
