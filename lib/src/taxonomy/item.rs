use serde::{Deserialize, Serialize};

use crate::taxonomy::{Category, Lang, Subcategory};

/// One artwork in the gallery, as consumed by the site's scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbroideryItem {
    /// The image file name; unique across the catalog.
    pub image: String,
    pub category: Category,
    pub subcategory: Subcategory,
    #[serde(rename = "titleNL")]
    pub title_nl: String,
    #[serde(rename = "titleEN")]
    pub title_en: String,
    #[serde(rename = "descriptionNL")]
    pub description_nl: String,
    #[serde(rename = "descriptionEN")]
    pub description_en: String,
    pub dimensions: String,
    pub price: String,
    pub technique: String,
    pub year: String,
    pub tags: Vec<String>,
}

impl EmbroideryItem {
    pub fn title(&self, lang: Lang) -> &str {
        lang.pick(&self.title_nl, &self.title_en)
    }

    pub fn description(&self, lang: Lang) -> &str {
        lang.pick(&self.description_nl, &self.description_en)
    }

    /// Titles and descriptions in both languages, lowercased and joined by
    /// spaces.
    pub fn searchable_text(&self) -> String {
        [&self.title_nl, &self.title_en, &self.description_nl, &self.description_en]
            .map(|s| s.as_str())
            .join(" ")
            .to_lowercase()
    }
}

#[cfg(test)] static_assertions::assert_impl_all!(EmbroideryItem: Send, Sync, Clone, Serialize);
