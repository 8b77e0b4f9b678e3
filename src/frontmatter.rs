//! YAML frontmatter splitting.
//!
//! A document may open with a `---`-delimited YAML block supplying page
//! metadata. This module splits that block from the Markdown body:
//!
//! ```text
//! ---
//! title: My Docs
//! includes:
//!   - extra.md
//! ---
//! # Actual content starts here
//! ```
//!
//! Absence of frontmatter is not an error — the whole input becomes the
//! body and the metadata mapping is empty. A block that is present but not
//! valid YAML (or not a key/value mapping) is fatal: silently generating a
//! page with half its configuration ignored would be worse than failing.

use serde_yaml::Mapping;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("malformed frontmatter block: {0}")]
    Malformed(#[from] serde_yaml::Error),
    #[error("frontmatter block is not a key/value mapping")]
    NotAMapping,
}

/// A document split into its frontmatter mapping and Markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Parsed frontmatter keys. Empty when the document has no block.
    pub frontmatter: Mapping,
    /// Everything after the closing delimiter (or the full input).
    pub content: String,
}

/// Split a leading `---`-delimited YAML block from `text`.
///
/// The block must start at the very first byte of the document and end at
/// a line consisting of `---`. An empty block (`---` immediately followed
/// by `---`) yields an empty mapping.
pub fn parse(text: &str) -> Result<Document, FrontmatterError> {
    let Some(raw) = split_block(text) else {
        return Ok(Document {
            frontmatter: Mapping::new(),
            content: text.to_string(),
        });
    };

    let value: serde_yaml::Value = serde_yaml::from_str(raw.yaml)?;
    let frontmatter = match value {
        serde_yaml::Value::Mapping(map) => map,
        // An all-comment or whitespace-only block parses as null
        serde_yaml::Value::Null => Mapping::new(),
        _ => return Err(FrontmatterError::NotAMapping),
    };

    Ok(Document {
        frontmatter,
        content: raw.body.to_string(),
    })
}

struct RawSplit<'a> {
    yaml: &'a str,
    body: &'a str,
}

/// Locate the frontmatter block boundaries, tolerating CRLF line endings.
///
/// Returns `None` when the document does not open with a delimiter line or
/// the closing delimiter never appears (the "block" is then ordinary
/// content, e.g. a Markdown horizontal rule at the top of the file).
fn split_block(text: &str) -> Option<RawSplit<'_>> {
    let after_open = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))?;

    // The closing delimiter is a line equal to `---`, with or without a
    // trailing newline (block at end of file).
    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return Some(RawSplit { yaml, body });
        }
        offset += line.len();
    }
    None
}
