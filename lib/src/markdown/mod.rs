//! Reading content files: a `---` delimited frontmatter header followed by
//! `# ` titled body sections.

pub mod frontmatter;
pub mod parts;

use std::borrow::Cow;

pub use frontmatter::Frontmatter;
pub use parts::{Descriptions, Section, SectionStrategy};

use crate::error::Failure;

/// A parsed content file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    pub frontmatter: Frontmatter,
    pub sections: Vec<Section>,
}

impl Document {
    /// Parses `input`. `\r\n` line endings are read as `\n`.
    pub fn parse(input: &str) -> Result<Document, Failure> {
        let input = match input.contains('\r') {
            true => Cow::Owned(input.replace("\r\n", "\n")),
            false => Cow::Borrowed(input),
        };

        let (block, rest) = frontmatter::split(&input).ok_or(Failure::MissingFrontmatter)?;
        Ok(Document {
            frontmatter: Frontmatter::parse(block),
            sections: parts::split(rest),
        })
    }

    pub fn descriptions(&self, strategy: SectionStrategy) -> Descriptions {
        strategy.assign(&self.sections, &self.frontmatter)
    }
}
