use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::taxonomy::Lang;

/// A top-level gallery filter bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Zaanse,
    #[default]
    Stadsgezichten,
    Molens,
    Klederdracht,
    Delfts,
    Koninklijk,
    Flora,
}

/// Category labels as they appear in content files, including synonyms and
/// retired labels, and the bucket each one files under.
static LABELS: Lazy<FxHashMap<&'static str, Category>> = Lazy::new(|| {
    use Category::*;

    [
        ("traditioneel", Stadsgezichten),
        ("modern", Stadsgezichten),
        ("zaanse", Zaanse),
        ("stadsgezichten", Stadsgezichten),
        ("landschap", Stadsgezichten),
        ("architectuur", Stadsgezichten),
        ("molens", Molens),
        ("waterbeheer", Molens),
        ("industrie", Molens),
        ("klederdracht", Klederdracht),
        ("merklap", Klederdracht),
        ("delfts", Delfts),
        ("filatelie", Delfts),
        ("koninklijk", Koninklijk),
        ("heraldiek", Koninklijk),
        ("flora", Flora),
        ("transport", Stadsgezichten),
    ].into_iter().collect()
});

/// A keyword rule that moves an item into a regional category no matter
/// which category its content file declares.
pub struct RegionalRule {
    pub keywords: &'static [&'static str],
    pub category: Category,
}

/// Checked in order against the lowercase titles and descriptions.
pub const REGIONAL_RULES: &[RegionalRule] = &[
    RegionalRule { keywords: &["zaanse", "zaan"], category: Category::Zaanse },
];

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Zaanse,
        Category::Stadsgezichten,
        Category::Molens,
        Category::Klederdracht,
        Category::Delfts,
        Category::Koninklijk,
        Category::Flora,
    ];

    /// The label used when a content file declares no category.
    pub const UNDECLARED: &'static str = "traditioneel";

    /// The category `label` files under, if it is a known label. Matching is
    /// exact.
    pub fn lookup(label: &str) -> Option<Category> {
        LABELS.get(label).copied()
    }

    /// The category `label` files under. Unknown labels file under the
    /// default category.
    pub fn from_label(label: &str) -> Category {
        Category::lookup(label).unwrap_or_default()
    }

    /// The regional category forced by `text`, which must be lowercase.
    pub fn regional(text: &str) -> Option<Category> {
        REGIONAL_RULES.iter()
            .find(|rule| rule.keywords.iter().any(|k| text.contains(k)))
            .map(|rule| rule.category)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Zaanse => "zaanse",
            Category::Stadsgezichten => "stadsgezichten",
            Category::Molens => "molens",
            Category::Klederdracht => "klederdracht",
            Category::Delfts => "delfts",
            Category::Koninklijk => "koninklijk",
            Category::Flora => "flora",
        }
    }

    /// Tags implied by the category, added to an item when its text
    /// mentions them.
    pub fn filter_tags(self) -> &'static [&'static str] {
        match self {
            Category::Zaanse => &["zaanse schans", "zaan", "zaanse"],
            Category::Stadsgezichten => &["amsterdam", "stadslandschap", "grachten", "architectuur"],
            Category::Molens => &["molen", "windmolen", "watermolen"],
            Category::Klederdracht => &["traditioneel", "kostuum", "dracht", "merklap", "sampler"],
            Category::Delfts => &["delft", "blauw", "tegel", "postzegel", "filatelie"],
            Category::Koninklijk => &[
                "koning", "koningin", "prins", "prinses", "oranje", "beatrix", "wilhelmina", "juliana",
            ],
            Category::Flora => &["bloem", "plant", "natuur", "korenbloem"],
        }
    }

    /// The gallery filter label.
    pub fn label(self, lang: Lang) -> &'static str {
        let (nl, en) = match self {
            Category::Zaanse => ("Zaanse Taferelen", "Zaan Region"),
            Category::Stadsgezichten => ("Stadsgezichten", "Cityscapes"),
            Category::Molens => ("Molens", "Windmills"),
            Category::Klederdracht => ("Klederdracht", "Traditional Dress"),
            Category::Delfts => ("Delfts Blauw", "Delftware"),
            Category::Koninklijk => ("Koninklijk Huis", "Royal House"),
            Category::Flora => ("Flora & Fauna", "Flora & Fauna"),
        };

        lang.pick(nl, en)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}
