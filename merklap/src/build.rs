use std::path::Path;
use std::time::Instant;

use borduur::{Catalog, Lang};
use borduur::error::Result;

use crate::config::Config;

/// Builds the catalog and writes it to `output`, or to the configured output
/// when none is given.
pub fn run(config: &Config, output: Option<&Path>) -> Result<Catalog> {
    config.settings.validate()?;
    let extractor = config.extractor();
    let output = output.map(Path::to_path_buf).unwrap_or_else(|| config.output());

    let start = Instant::now();
    let catalog = Catalog::build(&extractor, &config.settings.images);
    tracing::info!("extraction time: {}ms", start.elapsed().as_millis());

    catalog.write(&output, &config.settings.global)?;
    tracing::info!(path = %output.display(), "wrote {} records", catalog.len());
    let subcategories = catalog.subcategory_summary();
    for (category, count) in catalog.summary() {
        tracing::info!("{count:>3}  {} / {}", category.label(Lang::Nl), category.label(Lang::En));
        for (_, sub, count) in subcategories.iter().filter(|(c, ..)| *c == category) {
            let nl = sub.label(Lang::Nl).unwrap_or(sub.as_str());
            let en = sub.label(Lang::En).unwrap_or(sub.as_str());
            tracing::info!("     {count:>3}  {nl} / {en}");
        }
    }

    Ok(catalog)
}
