//! Source and destination path resolution.
//!
//! The `source` argument is either a single `.md` file or a directory
//! containing `index.md`, and the two cases imply different asset origins:
//!
//! - **File source**: the document stands alone, so the stock theme bundled
//!   into the binary supplies css/js.
//! - **Directory source**: the directory is a self-contained docs folder —
//!   the document is `<source>/index.md` and the folder's own `images/`,
//!   `css/`, `js/`, `fonts/` subdirectories are the assets.
//!
//! When no destination is given, output lands next to the source. Resolution
//! is pure path computation plus fail-fast validation; nothing is written.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("source folder {0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("source directory {0} has no index.md")]
    MissingIndex(PathBuf),
}

/// Where the static assets for a generation come from.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetSource {
    /// Stock theme embedded in the binary (file-source case).
    Bundled,
    /// User-supplied docs folder whose asset subdirectories are copied.
    Folder(PathBuf),
}

/// Fully resolved input/output paths for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSource {
    /// The primary Markdown document.
    pub document: PathBuf,
    /// Directory that include entries are resolved against.
    pub source_folder: PathBuf,
    /// Origin of images/css/js/fonts.
    pub assets: AssetSource,
    /// Output directory (receives `index.html` and assets).
    pub destination: PathBuf,
}

/// Resolve the source argument and optional destination into concrete paths.
pub fn resolve(source: &Path, destination: Option<&Path>) -> Result<ResolvedSource, SourceError> {
    let (document, source_folder, assets) = if source
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
    {
        let folder = source
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        (source.to_path_buf(), folder, AssetSource::Bundled)
    } else {
        if !source.is_dir() {
            return Err(SourceError::NotADirectory(source.to_path_buf()));
        }
        let document = source.join("index.md");
        if !document.is_file() {
            return Err(SourceError::MissingIndex(source.to_path_buf()));
        }
        (
            document,
            source.to_path_buf(),
            AssetSource::Folder(source.to_path_buf()),
        )
    };

    let destination = match destination {
        Some(dest) if !dest.as_os_str().is_empty() => dest.to_path_buf(),
        _ => source_folder.clone(),
    };

    Ok(ResolvedSource {
        document,
        source_folder,
        assets,
        destination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_source_uses_bundled_assets() {
        let resolved = resolve(Path::new("docs/api.md"), None).unwrap();
        assert_eq!(resolved.document, PathBuf::from("docs/api.md"));
        assert_eq!(resolved.source_folder, PathBuf::from("docs"));
        assert_eq!(resolved.assets, AssetSource::Bundled);
    }

    #[test]
    fn file_source_defaults_destination_to_parent() {
        let resolved = resolve(Path::new("docs/api.md"), None).unwrap();
        assert_eq!(resolved.destination, PathBuf::from("docs"));
    }

    #[test]
    fn bare_filename_resolves_against_current_dir() {
        let resolved = resolve(Path::new("api.md"), None).unwrap();
        assert_eq!(resolved.source_folder, PathBuf::from("."));
    }

    #[test]
    fn directory_source_uses_index_md() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("index.md"), "# Docs").unwrap();

        let resolved = resolve(tmp.path(), None).unwrap();
        assert_eq!(resolved.document, tmp.path().join("index.md"));
        assert_eq!(resolved.assets, AssetSource::Folder(tmp.path().to_path_buf()));
        assert_eq!(resolved.destination, tmp.path());
    }

    #[test]
    fn explicit_destination_wins() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("index.md"), "# Docs").unwrap();

        let dest = tmp.path().join("out");
        let resolved = resolve(tmp.path(), Some(&dest)).unwrap();
        assert_eq!(resolved.destination, dest);
    }

    #[test]
    fn empty_destination_treated_as_unset() {
        let resolved = resolve(Path::new("docs/api.md"), Some(Path::new(""))).unwrap();
        assert_eq!(resolved.destination, PathBuf::from("docs"));
    }

    #[test]
    fn missing_directory_is_error() {
        let result = resolve(Path::new("/no/such/place"), None);
        assert!(matches!(result, Err(SourceError::NotADirectory(_))));
    }

    #[test]
    fn directory_without_index_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = resolve(tmp.path(), None);
        assert!(matches!(result, Err(SourceError::MissingIndex(_))));
    }

    #[test]
    fn uppercase_extension_counts_as_markdown() {
        let resolved = resolve(Path::new("docs/API.MD"), None).unwrap();
        assert_eq!(resolved.assets, AssetSource::Bundled);
    }
}
