use std::{fs, io};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Failure;
use crate::markdown::{Document, SectionStrategy};
use crate::taxonomy::{Category, EmbroideryItem, Subcategory};
use crate::util::PathExt;

/// Values used for display fields a content file leaves out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub dimensions: String,
    pub technique: String,
    pub year: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            dimensions: "25x30 cm".into(),
            technique: "Kruissteek".into(),
            year: "2024".into(),
        }
    }
}

/// The markdown file that describes `image`: the stem without whitespace,
/// lowercased, with an `.md` extension. `"23 b.JPEG"` becomes `"23b.md"`.
pub fn markdown_file_name(image: &str) -> String {
    let stem = Path::new(image).without_extension();
    let stem = stem.to_string_lossy();
    let mut name: String = stem.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    name.push_str(".md");
    name
}

/// Builds the record for `image` from the text of its content file.
///
/// Each field falls back from the frontmatter to the matching body section
/// (for descriptions) and finally to a placeholder.
pub fn parse(
    content: &str,
    image: &str,
    strategy: SectionStrategy,
    defaults: &Defaults,
) -> Result<EmbroideryItem, Failure> {
    let document = Document::parse(content)?;
    let fm = &document.frontmatter;
    let descriptions = document.descriptions(strategy);
    let body = |text: Option<String>| text.filter(|s| !s.is_empty());

    let category = Category::from_label(&fm.text("category").unwrap_or_else(|| Category::UNDECLARED.into()));
    let title_nl = fm.text("title_nl").unwrap_or_else(|| format!("Borduurwerk {image}"));
    let description_nl = body(descriptions.nl)
        .or_else(|| fm.text("description_nl"))
        .unwrap_or_else(|| "Beschrijving komt binnenkort...".into());

    Ok(EmbroideryItem {
        image: image.to_string(),
        category,
        subcategory: Subcategory::derive(category, &title_nl, &description_nl),
        title_en: fm.text("title_en").unwrap_or_else(|| format!("Embroidery {image}")),
        description_en: body(descriptions.en)
            .or_else(|| fm.text("description_en"))
            .unwrap_or_else(|| "Description coming soon...".into()),
        dimensions: fm.text("dimensions").unwrap_or_else(|| defaults.dimensions.clone()),
        price: fm.text("price").unwrap_or_default(),
        technique: fm.text("technique").unwrap_or_else(|| defaults.technique.clone()),
        year: fm.text("year").unwrap_or_else(|| defaults.year.clone()),
        tags: fm.list("tags"),
        title_nl,
        description_nl,
    })
}

/// The placeholder record for an image whose content could not be used.
pub fn fallback(image: &str, defaults: &Defaults) -> EmbroideryItem {
    let digits: String = image.chars().filter(|c| c.is_ascii_digit()).collect();
    let number = if digits.is_empty() { image } else { digits.as_str() };

    EmbroideryItem {
        image: image.to_string(),
        category: Category::default(),
        subcategory: Subcategory::Onbekend,
        title_nl: format!("Borduurwerk {number}"),
        title_en: format!("Embroidery {number}"),
        description_nl: "Beschrijving wordt binnenkort toegevoegd...".into(),
        description_en: "Description will be added soon...".into(),
        dimensions: defaults.dimensions.clone(),
        price: String::new(),
        technique: defaults.technique.clone(),
        year: defaults.year.clone(),
        tags: vec![],
    }
}

/// Reads content files from a directory and turns them into records.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    pub content_dir: PathBuf,
    pub strategy: SectionStrategy,
    pub defaults: Defaults,
}

impl Extractor {
    pub fn new<P: AsRef<Path>>(content_dir: P) -> Self {
        Extractor { content_dir: content_dir.as_ref().to_path_buf(), ..Default::default() }
    }

    pub fn with_strategy(mut self, strategy: SectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn path_for(&self, image: &str) -> PathBuf {
        self.content_dir.join(markdown_file_name(image))
    }

    /// Reads the content file for `image` as text.
    pub fn read_source(&self, image: &str) -> Result<String, Failure> {
        let path = self.path_for(image);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Failure::MissingFile(path),
            _ => Failure::ReadFailure { reason: e.to_string(), path },
        })
    }

    pub fn read(&self, image: &str) -> Result<EmbroideryItem, Failure> {
        let content = self.read_source(image)?;
        parse(&content, image, self.strategy, &self.defaults)
    }

    /// Like [`Extractor::read()`], but substitutes [`fallback()`] on failure
    /// after logging it.
    pub fn extract(&self, image: &str) -> EmbroideryItem {
        match self.read(image) {
            Ok(item) => {
                tracing::debug!(image, category = %item.category, "extracted");
                item
            }
            Err(failure) => {
                let file = markdown_file_name(image);
                match &failure {
                    Failure::ReadFailure { reason, .. } => {
                        tracing::error!(image, file, reason = %reason, "{failure}");
                    }
                    _ => tracing::warn!(image, file, "{failure}"),
                }

                fallback(image, &self.defaults)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MILL: &str = "---\n\
        category: \"molens\"\n\
        title_nl: \"Stellingmolen\"\n\
        title_en: \"Post Mill\"\n\
        dimensions: \"40x50 cm\"\n\
        technique: 'Petit point'\n\
        year: 1998\n\
        price: \"€ 250\"\n\
        tags: [molen, 'zaan', \"stelling\"]\n\
        ---\n\
        # Stellingmolen\nEen stellingmolen...\n\n# Post Mill\nA post mill...\n";

    #[test]
    fn markdown_file_names() {
        assert_eq!(markdown_file_name("1.JPEG"), "1.md");
        assert_eq!(markdown_file_name("23 b.JPEG"), "23b.md");
        assert_eq!(markdown_file_name("46A.jpeg"), "46a.md");
        assert_eq!(markdown_file_name("no extension"), "noextension.md");
    }

    #[test]
    fn parse_reads_every_field() {
        let item = parse(MILL, "27.JPEG", SectionStrategy::Position, &Defaults::default()).unwrap();
        assert_eq!(item.image, "27.JPEG");
        assert_eq!(item.category, Category::Molens);
        assert_eq!(item.subcategory, Subcategory::Molentypen);
        assert_eq!(item.title_nl, "Stellingmolen");
        assert_eq!(item.title_en, "Post Mill");
        assert_eq!(item.description_nl, "Een stellingmolen...");
        assert_eq!(item.description_en, "A post mill...");
        assert_eq!(item.dimensions, "40x50 cm");
        assert_eq!(item.technique, "Petit point");
        assert_eq!(item.year, "1998");
        assert_eq!(item.price, "€ 250");
        assert_eq!(item.tags, ["molen", "zaan", "stelling"]);
    }

    #[test]
    fn parse_applies_placeholders() {
        let item = parse("---\ncategory: onbekend\n---\n", "5.JPEG", SectionStrategy::Position, &Defaults::default()).unwrap();
        assert_eq!(item.category, Category::Stadsgezichten);
        assert_eq!(item.title_nl, "Borduurwerk 5.JPEG");
        assert_eq!(item.title_en, "Embroidery 5.JPEG");
        assert_eq!(item.description_nl, "Beschrijving komt binnenkort...");
        assert_eq!(item.description_en, "Description coming soon...");
        assert_eq!(item.dimensions, "25x30 cm");
        assert_eq!(item.technique, "Kruissteek");
        assert_eq!(item.year, "2024");
        assert_eq!(item.price, "");
        assert!(item.tags.is_empty());
    }

    #[test]
    fn descriptions_prefer_sections_over_frontmatter() {
        let content = "---\ndescription_nl: uit frontmatter\ndescription_en: from frontmatter\n---\n# Titel\n\n# Title\nbody\n";
        let item = parse(content, "1.JPEG", SectionStrategy::Position, &Defaults::default()).unwrap();
        assert_eq!(item.description_nl, "uit frontmatter");
        assert_eq!(item.description_en, "body");
    }

    #[test]
    fn strategies_disagree_on_reversed_sections() {
        let content = "---\ntitle_nl: Kaaps Viooltje\ntitle_en: Cape Violet\ncategory: flora\n---\n\
            # Cape Violet\nA violet.\n# Kaaps Viooltje\nEen viooltje.\n";

        let by_position = parse(content, "44.JPEG", SectionStrategy::Position, &Defaults::default()).unwrap();
        assert_eq!(by_position.description_nl, "A violet.");

        let by_title = parse(content, "44.JPEG", SectionStrategy::TitleMatch, &Defaults::default()).unwrap();
        assert_eq!(by_title.description_nl, "Een viooltje.");
        assert_eq!(by_title.description_en, "A violet.");
    }

    #[test]
    fn parse_without_frontmatter_fails() {
        let result = parse("# Molen\nGeen header.", "1.JPEG", SectionStrategy::Position, &Defaults::default());
        assert_eq!(result, Err(Failure::MissingFrontmatter));
    }

    #[test]
    fn fallback_embeds_image_digits() {
        let item = fallback("23 b.JPEG", &Defaults::default());
        assert_eq!(item.category, Category::default());
        assert_eq!(item.subcategory, Subcategory::Onbekend);
        assert_eq!(item.title_nl, "Borduurwerk 23");
        assert_eq!(item.title_en, "Embroidery 23");
        assert!(!item.description_nl.is_empty() && !item.description_en.is_empty());
        assert!(item.tags.is_empty());

        assert_eq!(fallback("cover.JPEG", &Defaults::default()).title_en, "Embroidery cover.JPEG");
    }

    #[test]
    fn extract_recovers_from_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("2.md"), "# No frontmatter\ntext").unwrap();
        std::fs::write(dir.path().join("27.md"), MILL).unwrap();
        let extractor = Extractor::new(dir.path());

        assert!(matches!(extractor.read("1.JPEG"), Err(Failure::MissingFile(_))));
        assert_eq!(extractor.extract("1.JPEG"), fallback("1.JPEG", &Defaults::default()));

        assert_eq!(extractor.read("2.JPEG"), Err(Failure::MissingFrontmatter));
        assert_eq!(extractor.extract("2.JPEG"), fallback("2.JPEG", &Defaults::default()));

        assert_eq!(extractor.extract("27.JPEG").title_en, "Post Mill");
    }

    #[test]
    fn unreadable_files_are_read_failures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("3.md"), [0xff, 0xfe, 0x00]).unwrap();
        std::fs::create_dir(dir.path().join("4.md")).unwrap();
        let extractor = Extractor::new(dir.path());

        assert!(matches!(extractor.read("3.JPEG"), Err(Failure::ReadFailure { .. })));
        assert!(matches!(extractor.read("4.JPEG"), Err(Failure::ReadFailure { .. })));
        assert_eq!(extractor.extract("3.JPEG").title_nl, "Borduurwerk 3");
    }

    #[test]
    fn configured_defaults_apply() {
        let defaults = Defaults { year: "2025".into(), ..Defaults::default() };
        let extractor = Extractor::new("/nonexistent").with_defaults(defaults);
        assert_eq!(extractor.extract("9.JPEG").year, "2025");
    }
}
