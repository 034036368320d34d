use serde::{Deserialize, Serialize};

use crate::markdown::Frontmatter;

/// The marker that opens a titled section at the start of a line.
pub const HEADING: &str = "# ";

/// A titled body section of a content file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    fn from_chunk(chunk: &str) -> Self {
        let chunk = chunk.trim();
        let (title, body) = chunk.split_once('\n').unwrap_or((chunk, ""));
        Section { title: title.trim_end().to_string(), body: body.trim().to_string() }
    }
}

/// Splits `text` at every line beginning with `# `, dropping the marker.
///
/// Blank chunks are discarded. Text before the first heading, if it is not
/// blank, forms a section of its own whose title is its first line.
pub fn split(text: &str) -> Vec<Section> {
    let bytes = text.as_bytes();
    let mut chunks = vec![];
    let (mut start, mut line) = (0, 0);
    loop {
        if text[line..].starts_with(HEADING) {
            chunks.push(&text[start..line]);
            start = line + HEADING.len();
        }

        match memchr::memchr(b'\n', &bytes[line..]) {
            Some(i) => line += i + 1,
            None => break,
        }
    }

    chunks.push(&text[start..]);
    chunks.into_iter()
        .filter(|chunk| !chunk.trim().is_empty())
        .map(Section::from_chunk)
        .collect()
}

/// How body sections are assigned to the Dutch and English descriptions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionStrategy {
    /// The first section is Dutch, the second English; others are ignored.
    #[default]
    Position,
    /// A section is Dutch when its title contains the first word of
    /// `title_nl`, else English when it contains the first word of
    /// `title_en`. Later matches replace earlier ones.
    TitleMatch,
}

/// Section bodies chosen for each language. A body may be empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Descriptions {
    pub nl: Option<String>,
    pub en: Option<String>,
}

impl SectionStrategy {
    pub const ALL: [SectionStrategy; 2] = [SectionStrategy::Position, SectionStrategy::TitleMatch];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionStrategy::Position => "position",
            SectionStrategy::TitleMatch => "title-match",
        }
    }

    pub fn assign(self, sections: &[Section], frontmatter: &Frontmatter) -> Descriptions {
        let mut descriptions = Descriptions::default();
        match self {
            SectionStrategy::Position => {
                let mut bodies = sections.iter().map(|s| s.body.clone());
                descriptions.nl = bodies.next();
                descriptions.en = bodies.next();
            }
            SectionStrategy::TitleMatch => {
                let first_word = |key: &str| frontmatter.text(key)
                    .map(|title| title.split(' ').next().unwrap_or_default().to_string());

                let (nl, en) = (first_word("title_nl"), first_word("title_en"));
                for section in sections {
                    let matches = |word: &Option<String>| word.as_ref()
                        .map_or(false, |w| section.title.contains(w.as_str()));

                    if matches(&nl) {
                        descriptions.nl = Some(section.body.clone());
                    } else if matches(&en) {
                        descriptions.en = Some(section.body.clone());
                    }
                }
            }
        }

        descriptions
    }
}

impl std::str::FromStr for SectionStrategy {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionStrategy::ALL.into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| error! {
                "unknown section strategy",
                "strategy" => s,
                "expected one of" => "position, title-match",
            })
    }
}
