use borduur::err;
use borduur::audit::audit;
use borduur::error::Result;

use crate::config::Config;

/// Logs every content issue; fails if there were any.
pub fn run(config: &Config) -> Result<()> {
    let extractor = config.extractor();
    let findings = audit(&extractor, &config.settings.images);
    for finding in &findings {
        for issue in &finding.issues {
            tracing::warn!(image = %finding.image, file = %finding.file, "{issue}");
        }
    }

    if findings.is_empty() {
        tracing::info!("all {} images have complete content", config.settings.images.len());
        return Ok(());
    }

    err! {
        "content check failed",
        "images with issues" => findings.len(),
        "issues" => findings.iter().map(|f| f.issues.len()).sum::<usize>(),
    }
}
