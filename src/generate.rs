//! Pipeline orchestration: one call turns a Markdown source into a
//! published documentation page.
//!
//! ```text
//! resolve paths → read document → split frontmatter → convert body
//!   → merge metadata → resolve includes → fill last_updated
//!   → render + write index.html → publish assets
//! ```
//!
//! Each stage is an explicitly constructed value or free function from its
//! own module; `generate` wires them together and owns the fatality policy:
//! source validation, frontmatter, metadata, output, and asset errors abort
//! (and abort *before* any write, for the validation group), while missing
//! includes only warn inside [`crate::include`].
//!
//! A run has no shared state with any other run. Re-generating into the
//! same destination overwrites the previous output.

use crate::markdown::Converter;
use crate::metadata::{self, MetadataError};
use crate::render::{self, RenderError};
use crate::source::{self, SourceError};
use crate::{assets, frontmatter, include};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("could not read {path}: {source}")]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Frontmatter(#[from] frontmatter::FrontmatterError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Assets(#[from] assets::AssetError),
}

/// What one generation run produced, for the CLI report.
#[derive(Debug)]
pub struct GenerateReport {
    /// The primary document that was read.
    pub document: PathBuf,
    /// Final page title after the metadata merge.
    pub title: String,
    /// Include files that contributed content, in render order.
    pub include_files: Vec<PathBuf>,
    /// The written `index.html`.
    pub output_file: PathBuf,
    /// Asset directories or files published into the destination.
    pub assets: Vec<String>,
}

/// Generate the documentation page for `source` into `destination`.
pub fn generate(
    source: &Path,
    destination: Option<&Path>,
    overrides: &[(String, String)],
) -> Result<GenerateReport, GenerateError> {
    let resolved = source::resolve(source, destination)?;

    let text = fs::read_to_string(&resolved.document).map_err(|e| GenerateError::ReadDocument {
        path: resolved.document.clone(),
        source: e,
    })?;
    let document = frontmatter::parse(&text)?;

    let mut metadata = metadata::merge(&document.frontmatter, overrides)?;

    let converter = Converter::new();
    let mut html = converter.to_html(&document.content);

    let includes = include::resolve(&metadata.includes, &resolved.source_folder, &converter);
    html.push_str(&includes.html);

    metadata::fill_last_updated(&mut metadata, &resolved.document, &includes.files);

    let page = render::render_page(&metadata, &html);
    let output_file = render::write_page(&resolved.destination, page)?;
    let published = assets::publish(&resolved.assets, &resolved.destination)?;

    Ok(GenerateReport {
        document: resolved.document,
        title: metadata.title,
        include_files: includes.files,
        output_file,
        assets: published,
    })
}
