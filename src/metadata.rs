//! Page metadata: defaults, frontmatter, CLI overrides, and the merge.
//!
//! Three layers feed the final metadata mapping, highest precedence last:
//!
//! ```text
//! built-in defaults  →  frontmatter  →  CLI -m overrides
//! ```
//!
//! The merge is shallow and happens at the `serde_yaml::Mapping` level: a
//! key present in a higher layer replaces the lower layer's value wholesale
//! (lists are not concatenated). The merged mapping then deserializes into
//! [`PageMetadata`], whose flattened `custom` map preserves any keys the
//! fixed template does not know about.
//!
//! ## `last_updated`
//!
//! When neither frontmatter nor an override sets `last_updated`, it is
//! derived from the filesystem: the maximum modification time across the
//! primary document and every resolved include, formatted as a
//! human-readable date ("August 23, 2026"). A supplied value is used
//! verbatim, never reformatted.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("invalid metadata value: {0}")]
    Invalid(#[from] serde_yaml::Error),
}

/// Metadata keys whose CLI override values are comma-split into lists.
///
/// An explicit table rather than type sniffing: only these three keys are
/// list-typed in the page template.
pub const LIST_KEYS: &[&str] = &["language_tabs", "toc_footers", "includes"];

/// The `logo` key accepts either a boolean switch or an image path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Logo {
    Path(String),
    Switch(bool),
}

impl Default for Logo {
    fn default() -> Self {
        Self::Switch(false)
    }
}

impl Logo {
    /// The image path to render, if any.
    ///
    /// `logo: true` has no path to point at and renders nothing, same as
    /// `false` — only a string value produces an `<img>`.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Path(p) if !p.is_empty() => Some(p),
            _ => None,
        }
    }
}

/// Final page metadata consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetadata {
    /// Page `<title>` and main heading.
    pub title: String,
    /// Code-example language tabs shown in the header.
    pub language_tabs: Vec<String>,
    /// Raw HTML snippets listed under the table of contents.
    pub toc_footers: Vec<String>,
    /// Optional logo image shown above the table of contents.
    pub logo: Logo,
    /// Include entries (paths or glob patterns) appended after the body.
    pub includes: Vec<String>,
    /// Display date; empty means "compute from file mtimes".
    pub last_updated: String,
    /// Frontmatter keys the template does not know about, passed through
    /// unmodified.
    #[serde(flatten)]
    pub custom: BTreeMap<String, Value>,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: "API Documentation".to_string(),
            language_tabs: Vec::new(),
            toc_footers: vec![
                "<a href='https://github.com/docpage/docpage'>Documentation powered by Docpage</a>"
                    .to_string(),
            ],
            logo: Logo::default(),
            includes: Vec::new(),
            last_updated: String::new(),
            custom: BTreeMap::new(),
        }
    }
}

/// The built-in defaults as a raw mapping — the base layer of the merge.
pub fn default_mapping() -> Mapping {
    match serde_yaml::to_value(PageMetadata::default()) {
        Ok(Value::Mapping(map)) => map,
        // A struct always serializes to a mapping
        _ => unreachable!("default metadata must serialize to a mapping"),
    }
}

/// Parse one `key=value` CLI override. Used as a clap value parser.
pub fn parse_override(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

/// Convert CLI overrides into a mapping, comma-splitting list-typed keys.
pub fn overrides_to_mapping(overrides: &[(String, String)]) -> Mapping {
    let mut map = Mapping::new();
    for (key, value) in overrides {
        let yaml_value = if LIST_KEYS.contains(&key.as_str()) {
            Value::Sequence(
                value
                    .split(',')
                    .map(|item| Value::String(item.trim().to_string()))
                    .collect(),
            )
        } else {
            Value::String(value.clone())
        };
        map.insert(Value::String(key.clone()), yaml_value);
    }
    map
}

/// Shallow merge: every key in `overlay` replaces the same key in `base`.
pub fn merge_mappings(mut base: Mapping, overlay: Mapping) -> Mapping {
    for (key, value) in overlay {
        base.insert(key, value);
    }
    base
}

/// Merge defaults, frontmatter, and CLI overrides into typed metadata.
pub fn merge(
    frontmatter: &Mapping,
    overrides: &[(String, String)],
) -> Result<PageMetadata, MetadataError> {
    let merged = merge_mappings(
        merge_mappings(default_mapping(), frontmatter.clone()),
        overrides_to_mapping(overrides),
    );
    let metadata = serde_yaml::from_value(Value::Mapping(merged))?;
    Ok(metadata)
}

/// Fill in `last_updated` from file mtimes when the merge left it empty.
///
/// Takes the maximum modification time across the document and all resolved
/// includes. Files whose metadata cannot be read simply do not participate,
/// so a vanished include never pushes the date around.
pub fn fill_last_updated(metadata: &mut PageMetadata, document: &Path, includes: &[PathBuf]) {
    if !metadata.last_updated.is_empty() {
        return;
    }
    let newest = std::iter::once(document)
        .chain(includes.iter().map(PathBuf::as_path))
        .filter_map(mtime)
        .max();
    if let Some(time) = newest {
        metadata.last_updated = format_date(time);
    }
}

fn mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Format a timestamp as a human-readable local date, e.g. "August 23, 2026".
pub fn format_date(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn yaml_mapping(source: &str) -> Mapping {
        serde_yaml::from_str(source).unwrap()
    }

    // =========================================================================
    // Defaults
    // =========================================================================

    #[test]
    fn stock_defaults() {
        let meta = PageMetadata::default();
        assert_eq!(meta.title, "API Documentation");
        assert!(meta.language_tabs.is_empty());
        assert_eq!(meta.toc_footers.len(), 1);
        assert!(meta.toc_footers[0].contains("Docpage"));
        assert_eq!(meta.logo, Logo::Switch(false));
        assert!(meta.includes.is_empty());
        assert!(meta.last_updated.is_empty());
    }

    #[test]
    fn default_mapping_contains_every_key() {
        let map = default_mapping();
        for key in ["title", "language_tabs", "toc_footers", "logo", "includes", "last_updated"] {
            assert!(
                map.contains_key(Value::String(key.to_string())),
                "missing default key {key}"
            );
        }
    }

    // =========================================================================
    // Merge precedence
    // =========================================================================

    #[test]
    fn frontmatter_overrides_defaults() {
        let fm = yaml_mapping("title: My Own Title");
        let meta = merge(&fm, &[]).unwrap();
        assert_eq!(meta.title, "My Own Title");
        // Untouched defaults survive
        assert_eq!(meta.toc_footers.len(), 1);
    }

    #[test]
    fn cli_override_beats_frontmatter() {
        let fm = yaml_mapping("title: From Frontmatter");
        let overrides = vec![("title".to_string(), "From CLI".to_string())];
        let meta = merge(&fm, &overrides).unwrap();
        assert_eq!(meta.title, "From CLI");
    }

    #[test]
    fn list_replacement_is_shallow() {
        let fm = yaml_mapping("toc_footers:\n  - '<a href=\"#\">Hey</a>'");
        let meta = merge(&fm, &[]).unwrap();
        // Replaces the default footer instead of appending to it
        assert_eq!(meta.toc_footers, vec!["<a href=\"#\">Hey</a>".to_string()]);
    }

    #[test]
    fn unknown_keys_pass_through() {
        let fm = yaml_mapping("company: ACME\ntitle: Docs");
        let meta = merge(&fm, &[]).unwrap();
        assert_eq!(
            meta.custom.get("company"),
            Some(&Value::String("ACME".to_string()))
        );
    }

    #[test]
    fn invalid_typed_value_is_error() {
        let fm = yaml_mapping("includes: 42");
        assert!(merge(&fm, &[]).is_err());
    }

    // =========================================================================
    // CLI overrides
    // =========================================================================

    #[test]
    fn parse_override_splits_on_first_equals() {
        assert_eq!(
            parse_override("title=A=B").unwrap(),
            ("title".to_string(), "A=B".to_string())
        );
        assert!(parse_override("no-equals").is_err());
        assert!(parse_override("=value").is_err());
    }

    #[test]
    fn list_keys_are_comma_split() {
        let overrides = vec![(
            "language_tabs".to_string(),
            "shell, python ,ruby".to_string(),
        )];
        let meta = merge(&Mapping::new(), &overrides).unwrap();
        assert_eq!(meta.language_tabs, vec!["shell", "python", "ruby"]);
    }

    #[test]
    fn scalar_keys_keep_commas() {
        let overrides = vec![("title".to_string(), "Docs, v2".to_string())];
        let meta = merge(&Mapping::new(), &overrides).unwrap();
        assert_eq!(meta.title, "Docs, v2");
    }

    #[test]
    fn includes_override_is_a_list() {
        let overrides = vec![("includes".to_string(), "a.md,b/*.md".to_string())];
        let meta = merge(&Mapping::new(), &overrides).unwrap();
        assert_eq!(meta.includes, vec!["a.md", "b/*.md"]);
    }

    // =========================================================================
    // Logo coercion
    // =========================================================================

    #[test]
    fn logo_false_renders_nothing() {
        let meta = merge(&yaml_mapping("logo: false"), &[]).unwrap();
        assert_eq!(meta.logo.path(), None);
    }

    #[test]
    fn logo_true_also_renders_nothing() {
        let meta = merge(&yaml_mapping("logo: true"), &[]).unwrap();
        assert_eq!(meta.logo.path(), None);
    }

    #[test]
    fn logo_path_is_kept() {
        let meta = merge(&yaml_mapping("logo: images/logo.png"), &[]).unwrap();
        assert_eq!(meta.logo.path(), Some("images/logo.png"));
    }

    // =========================================================================
    // last_updated
    // =========================================================================

    #[test]
    fn supplied_last_updated_used_verbatim() {
        let tmp = TempDir::new().unwrap();
        let doc = tmp.path().join("index.md");
        fs::write(&doc, "x").unwrap();

        let mut meta = merge(&yaml_mapping("last_updated: whenever"), &[]).unwrap();
        fill_last_updated(&mut meta, &doc, &[]);
        assert_eq!(meta.last_updated, "whenever");
    }

    #[test]
    fn computed_from_document_mtime() {
        let tmp = TempDir::new().unwrap();
        let doc = tmp.path().join("index.md");
        fs::write(&doc, "x").unwrap();

        let when = SystemTime::UNIX_EPOCH + Duration::from_secs(1_620_130_000); // 2021-05-04 noon UTC
        fs::File::options()
            .write(true)
            .open(&doc)
            .unwrap()
            .set_modified(when)
            .unwrap();

        let mut meta = PageMetadata::default();
        fill_last_updated(&mut meta, &doc, &[]);
        assert_eq!(meta.last_updated, format_date(when));
    }

    #[test]
    fn newest_include_wins() {
        let tmp = TempDir::new().unwrap();
        let doc = tmp.path().join("index.md");
        let inc = tmp.path().join("extra.md");
        fs::write(&doc, "x").unwrap();
        fs::write(&inc, "y").unwrap();

        let old = SystemTime::UNIX_EPOCH + Duration::from_secs(1_620_130_000);
        let new = SystemTime::UNIX_EPOCH + Duration::from_secs(1_720_130_000);
        fs::File::options().write(true).open(&doc).unwrap().set_modified(old).unwrap();
        fs::File::options().write(true).open(&inc).unwrap().set_modified(new).unwrap();

        let mut meta = PageMetadata::default();
        fill_last_updated(&mut meta, &doc, std::slice::from_ref(&inc));
        assert_eq!(meta.last_updated, format_date(new));
    }

    #[test]
    fn unreadable_files_are_ignored() {
        let tmp = TempDir::new().unwrap();
        let doc = tmp.path().join("index.md");
        fs::write(&doc, "x").unwrap();

        let ghost = tmp.path().join("ghost.md");
        let mut meta = PageMetadata::default();
        fill_last_updated(&mut meta, &doc, &[ghost]);
        // Still computed from the document alone
        assert!(!meta.last_updated.is_empty());
    }

    #[test]
    fn no_readable_files_leaves_empty() {
        let mut meta = PageMetadata::default();
        fill_last_updated(&mut meta, Path::new("/no/such/doc.md"), &[]);
        assert!(meta.last_updated.is_empty());
    }

    #[test]
    fn format_date_is_human_readable() {
        let when = SystemTime::UNIX_EPOCH + Duration::from_secs(1_620_130_000);
        let formatted = format_date(when);
        // "May 4, 2021" in most timezones; at minimum: month name, no padding
        assert!(formatted.contains("2021"));
        assert!(!formatted.contains(" 04,"));
    }
}
