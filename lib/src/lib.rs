//! A toolkit for generating the data behind a bilingual embroidery gallery.
//!
//! # Overview
//!
//! Every artwork in the gallery is described by one markdown file: a `---`
//! delimited header of `key: value` lines followed by `# ` titled sections
//! holding the Dutch and English descriptions. This crate turns those files
//! into [`EmbroideryItem`] records and a [`Catalog`] of them.
//!
//! A catalog is typically built as follows:
//!
//! 1. For each listed image, the [`Extractor`] reads the matching markdown
//!    file, parses its [`Frontmatter`](markdown::Frontmatter) and sections,
//!    and fills in placeholders for anything left out. A file that is
//!    missing or unusable yields a fallback record instead of an error.
//! 2. Each record is [`classify()`]d: a regional keyword may override the
//!    declared [`Category`], a [`Subcategory`] is derived from the Dutch text
//!    and tags are enriched from the category's vocabulary.
//! 3. The records are rendered into a script binding them to a global on
//!    `window`, which the site's scripts read.
//!
//! The [`audit`] module checks the same content without building anything.

#[macro_use]
pub mod error;
pub mod util;
pub mod value;
pub mod markdown;
pub mod taxonomy;
pub mod extract;
pub mod catalog;
pub mod audit;

pub use taxonomy::*;
pub use extract::Extractor;
pub use catalog::Catalog;
