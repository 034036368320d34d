//! Gallery classification: canonical categories, subcategory rule tables and
//! tag enrichment.

mod category;
mod subcategory;
mod item;

pub use category::*;
pub use subcategory::*;
pub use item::*;

use serde::{Deserialize, Serialize};

/// A language the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Nl,
    En,
}

impl Lang {
    #[inline(always)]
    pub fn pick<T>(self, nl: T, en: T) -> T {
        match self {
            Lang::Nl => nl,
            Lang::En => en,
        }
    }
}

/// Adds the tags implied by `item`'s category that one of its titles or
/// descriptions mentions. Existing tags are kept; a candidate already present
/// in any letter case is not added again.
pub fn enrich_tags(item: &mut EmbroideryItem) {
    let fields = [&item.title_nl, &item.title_en, &item.description_nl, &item.description_en]
        .map(|field| field.to_lowercase());

    for candidate in item.category.filter_tags() {
        let present = item.tags.iter().any(|t| t.to_lowercase() == *candidate);
        if !present && fields.iter().any(|field| field.contains(candidate)) {
            item.tags.push(candidate.to_string());
        }
    }
}

/// Files `item` into its final category and subcategory and settles its tags.
///
/// A regional keyword anywhere in the titles or descriptions overrides the
/// declared category. The subcategory is derived from the Dutch title and
/// description. Tags end up unique and in ascending order.
pub fn classify(mut item: EmbroideryItem) -> EmbroideryItem {
    if let Some(regional) = Category::regional(&item.searchable_text()) {
        item.category = regional;
    }

    item.subcategory = Subcategory::derive(item.category, &item.title_nl, &item.description_nl);

    enrich_tags(&mut item);
    item.tags.sort();
    item.tags.dedup();
    item
}
