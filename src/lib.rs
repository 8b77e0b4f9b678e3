//! # Docpage
//!
//! A single-page HTML documentation generator. One Markdown document (with
//! optional YAML frontmatter and included sub-documents) in, one templated
//! `index.html` plus static assets out.
//!
//! # Architecture: A Straight-Line Pipeline
//!
//! Generation is a batch, single-pass transform with no persistent state:
//!
//! ```text
//! source arg → paths → frontmatter + body → HTML fragments
//!            → merged metadata → rendered page → written output + assets
//! ```
//!
//! Every stage is a plain function (or a small value like the Markdown
//! converter) constructed in [`generate::generate`] and passed down —
//! nothing in the pipeline is a process-wide singleton, so two runs in the
//! same process cannot observe each other.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`source`] | Resolves the source argument into document, asset origin, and destination paths |
//! | [`frontmatter`] | Splits the leading `---`-delimited YAML block from the Markdown body |
//! | [`markdown`] | Markdown → HTML fragments via pulldown-cmark |
//! | [`include`] | Expands the `includes` list (literal paths and globs) into ordered HTML |
//! | [`metadata`] | Merges defaults, frontmatter, and CLI overrides; derives `last_updated` |
//! | [`render`] | Maud page template, asset tag helpers, `index.html` writing |
//! | [`assets`] | Copies user asset directories or writes the bundled stock theme |
//! | [`generate`] | Wires the stages together and owns the error policy |
//! | [`output`] | CLI report formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! The page template is [Maud](https://maud.lambda.xyz/) markup compiled
//! into the binary — malformed HTML is a build error, interpolation is
//! escaped by default, and there is no template directory to ship or get
//! out of sync. The two deliberate escape hatches (`toc_footers` snippets
//! and converted Markdown) are visible as `PreEscaped` at the call site.
//!
//! ## Includes Are Warnings, Everything Else Is Fatal
//!
//! A missing include costs one section of the page; aborting the whole run
//! for it would punish a stale frontmatter entry out of proportion. Invalid
//! sources, malformed frontmatter, and write failures abort — those mean
//! the output would be wrong, not merely incomplete. The split lives in
//! [`generate`], not scattered across stages.
//!
//! ## Bundled Stock Theme
//!
//! When the source is a bare `.md` file there is no docs folder to copy
//! assets from, so the stock css/js theme is embedded with `include_str!`
//! and written into the destination. A directory source brings its own
//! `images/`, `css/`, `js/`, `fonts/` subdirectories instead.

pub mod assets;
pub mod frontmatter;
pub mod generate;
pub mod include;
pub mod markdown;
pub mod metadata;
pub mod output;
pub mod render;
pub mod source;
