use std::fmt;

use rustc_hash::FxHashSet;

use crate::error::Failure;
use crate::extract::{markdown_file_name, Extractor};
use crate::markdown::Document;
use crate::taxonomy::{Category, Lang};

/// A content problem that would make a build fall back to placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// The file could not be read or parsed; the whole record falls back.
    Unusable(Failure),
    /// The image is listed more than once.
    DuplicateImage,
    /// No `category` key; the record files under the default category.
    MissingCategory,
    /// A `category` label that no category is known by.
    UnknownCategory(String),
    MissingTitle(Lang),
    MissingDescription(Lang),
}

/// The issues found for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub image: String,
    pub file: String,
    pub issues: Vec<Issue>,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lang = |lang: &Lang| lang.pick("Dutch", "English");
        match self {
            Issue::Unusable(failure) => fmt::Display::fmt(failure, f),
            Issue::DuplicateImage => write!(f, "image listed more than once"),
            Issue::MissingCategory => write!(f, "no category declared"),
            Issue::UnknownCategory(label) => write!(f, "unknown category `{label}`"),
            Issue::MissingTitle(l) => write!(f, "no {} title", lang(l)),
            Issue::MissingDescription(l) => write!(f, "no {} description", lang(l)),
        }
    }
}

fn inspect(extractor: &Extractor, image: &str) -> Vec<Issue> {
    let document = match extractor.read_source(image).and_then(|s| Document::parse(&s)) {
        Ok(document) => document,
        Err(failure) => return vec![Issue::Unusable(failure)],
    };

    let mut issues = vec![];
    let fm = &document.frontmatter;
    match fm.text("category") {
        None => issues.push(Issue::MissingCategory),
        Some(label) if Category::lookup(&label).is_none() => issues.push(Issue::UnknownCategory(label)),
        Some(_) => {}
    }

    let descriptions = document.descriptions(extractor.strategy);
    let present = |body: &Option<String>, key: &str| {
        body.as_ref().map_or(false, |s| !s.is_empty()) || fm.text(key).is_some()
    };

    for (lang, title_key, description_key, body) in [
        (Lang::Nl, "title_nl", "description_nl", &descriptions.nl),
        (Lang::En, "title_en", "description_en", &descriptions.en),
    ] {
        if fm.text(title_key).is_none() {
            issues.push(Issue::MissingTitle(lang));
        }

        if !present(body, description_key) {
            issues.push(Issue::MissingDescription(lang));
        }
    }

    issues
}

/// Checks the content of every image without building anything. Only
/// images with at least one issue are reported, in listing order.
pub fn audit<I, S>(extractor: &Extractor, images: I) -> Vec<Finding>
    where I: IntoIterator<Item = S>, S: AsRef<str>
{
    let mut seen = FxHashSet::default();
    images.into_iter()
        .filter_map(|image| {
            let image = image.as_ref();
            let issues = match seen.insert(image.to_string()) {
                true => inspect(extractor, image),
                false => vec![Issue::DuplicateImage],
            };

            (!issues.is_empty()).then(|| Finding {
                image: image.to_string(),
                file: markdown_file_name(image),
                issues,
            })
        })
        .collect()
}
