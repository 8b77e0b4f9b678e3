//! Page rendering and output writing.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/) — compile-time
//! templates, auto-escaped interpolation. Two kinds of content deliberately
//! bypass escaping via `PreEscaped`: the converted Markdown body (already
//! HTML) and the `toc_footers` snippets, which are raw HTML by contract.
//!
//! The template is fixed: title, optional logo, search input, language tab
//! selector, table-of-contents footer list, last-updated line, and the
//! document body. Asset references use the small tag-helper functions at
//! the bottom of this module, which are pure string formatting shared with
//! nothing else.

use crate::metadata::PageMetadata;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the complete documentation page.
pub fn render_page(metadata: &PageMetadata, content_html: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (metadata.title) }
                (PreEscaped(css_link_tag("screen", "screen")))
                (PreEscaped(css_link_tag("print", "print")))
            }
            body {
                div.toc-wrapper {
                    @if let Some(path) = metadata.logo.path() {
                        (PreEscaped(image_tag(path, "logo")))
                    }
                    div.search {
                        input #input-search type="text" placeholder="Search";
                    }
                    @if !metadata.language_tabs.is_empty() {
                        ul.lang-selector {
                            @for lang in &metadata.language_tabs {
                                li { a href={ "#" (lang) } { (lang) } }
                            }
                        }
                    }
                    div #toc .toc-list {}
                    ul #toc-footer {
                        @for footer in &metadata.toc_footers {
                            li { (PreEscaped(footer.as_str())) }
                        }
                        @if !metadata.last_updated.is_empty() {
                            li.last-updated {
                                "Last updated: " (metadata.last_updated)
                            }
                        }
                    }
                }
                div.page-wrapper {
                    div.content {
                        (PreEscaped(content_html))
                    }
                }
                (PreEscaped(js_script_tag("app")))
            }
        }
    }
}

/// Write the rendered page as `index.html`, creating the destination
/// directory (recursively) first. Returns the path written.
pub fn write_page(destination: &Path, page: Markup) -> Result<PathBuf, RenderError> {
    fs::create_dir_all(destination)?;
    let path = destination.join("index.html");
    fs::write(&path, page.into_string())?;
    Ok(path)
}

// ============================================================================
// Asset tag helpers
// ============================================================================

/// `<link>` tag for a stylesheet under `css/`.
pub fn css_link_tag(name: &str, media: &str) -> String {
    format!(r#"<link rel="stylesheet" href="css/{name}.css" media="{media}" />"#)
}

/// `<script>` tag for a script under `js/`.
pub fn js_script_tag(name: &str) -> String {
    format!(r#"<script src="js/{name}.js"></script>"#)
}

/// `<img>` tag with a class-derived alt text.
pub fn image_tag(path: &str, class_name: &str) -> String {
    format!(r#"<img src="{path}" alt="{class_name}-image" class="{class_name}"/>"#)
}
