use std::fs;
use std::path::Path;
use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{Chainable, Result};
use crate::extract::Extractor;
use crate::taxonomy::{classify, Category, EmbroideryItem, Subcategory};
use crate::util::is_js_identifier;

/// The global the site's scripts read records from.
pub const DEFAULT_GLOBAL: &str = "EMBROIDERY_DATA";

/// Every record of a build, in the order images were listed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub items: Vec<EmbroideryItem>,
}

impl Catalog {
    /// Extracts and classifies one record per image. Unusable content yields
    /// a fallback record, so the catalog always has one item per image.
    pub fn build<I, S>(extractor: &Extractor, images: I) -> Catalog
        where I: IntoIterator<Item = S>, S: AsRef<str>
    {
        let items = images.into_iter().fold(Vec::new(), |mut items, image| {
            items.push(classify(extractor.extract(image.as_ref())));
            items
        });

        Catalog { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The generated script: a header naming `generated_at`, then `global`
    /// bound on `window` to the records as JSON.
    pub fn render(&self, global: &str, generated_at: DateTime<Utc>) -> Result<String> {
        if !is_js_identifier(global) {
            return err! {
                "invalid global name for generated data",
                "global" => global,
                "help" => "use ASCII letters, digits, `_` or `$`, not starting with a digit",
            };
        }

        let json = serde_json::to_string_pretty(&self.items)
            .chain(error!("failed to serialize catalog records"))?;

        Ok(format!(
            "// Auto-generated embroidery data from markdown files\n\
             // Generated on {}\n\
             \n\
             window.{global} = {json};\n",
            generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        ))
    }

    /// Renders the catalog stamped with the current time and writes it to
    /// `path`, creating missing parent directories.
    pub fn write<P: AsRef<Path>>(&self, path: P, global: &str) -> Result<()> {
        let path = path.as_ref();
        let script = self.render(global, Utc::now())?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).chain_with(|| error! {
                "failed to create output directory",
                "directory" => parent.display(),
            })?;
        }

        fs::write(path, script).chain_with(|| error! {
            "failed to write generated data",
            "file path" => path.display(),
        })
    }

    /// The number of records in each category, in canonical order. Empty
    /// categories are included.
    pub fn summary(&self) -> Vec<(Category, usize)> {
        Category::ALL.into_iter()
            .map(|c| (c, self.items.iter().filter(|i| i.category == c).count()))
            .collect()
    }

    /// The number of records in each subcategory, ordered by category and
    /// then subcategory. Only subcategories holding records are included.
    pub fn subcategory_summary(&self) -> Vec<(Category, Subcategory, usize)> {
        let mut counts: BTreeMap<(Category, Subcategory), usize> = BTreeMap::new();
        for item in &self.items {
            *counts.entry((item.category, item.subcategory)).or_default() += 1;
        }

        counts.into_iter().map(|((c, s), n)| (c, s, n)).collect()
    }
}
