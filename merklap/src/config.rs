use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use borduur::err;
use borduur::catalog::DEFAULT_GLOBAL;
use borduur::error::Result;
use borduur::extract::{Defaults, Extractor};
use borduur::markdown::SectionStrategy;
use borduur::value::{Format, Json, Toml};

use crate::flags::Merklap;

/// Every image on the site, in gallery order.
pub const IMAGES: &[&str] = &[
    "1.JPEG", "2.JPEG", "3.JPEG", "4.JPEG", "5.JPEG", "6.JPEG", "7.JPEG",
    "10.JPEG", "11.JPEG", "12.JPEG", "13.JPEG", "14.JPEG", "15.JPEG", "19.JPEG",
    "21.JPEG", "22.JPEG", "23.JPEG", "23 b.JPEG", "25.JPEG", "26.JPEG", "27.JPEG",
    "28.JPEG", "29.JPEG", "30.JPEG", "31.JPEG", "32.JPEG", "33.JPEG", "34.JPEG",
    "35.JPEG", "36.JPEG", "37.JPEG", "38.JPEG", "38 b.JPEG", "39.JPEG", "40.JPEG",
    "41.JPEG", "42.JPEG", "43.JPEG", "44.JPEG", "45.JPEG", "46a.JPEG", "46b.JPEG",
    "46c.JPEG", "46d.JPEG", "46e.JPEG", "46f.JPEG", "47.JPEG", "48.JPEG", "49.JPEG",
    "50.JPEG", "51.JPEG", "52.JPEG", "56.JPEG", "57.JPEG", "58.JPEG", "59.JPEG",
];

#[derive(Debug)]
pub struct Config {
    pub root: PathBuf,
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding one markdown file per image.
    pub content: PathBuf,
    /// Where the generated script is written.
    pub output: PathBuf,
    /// The `window` global the records are bound to.
    pub global: String,
    pub sections: SectionStrategy,
    pub defaults: Defaults,
    pub images: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            content: "content/embroideries/text".into(),
            output: "js/embroideryData.js".into(),
            global: DEFAULT_GLOBAL.into(),
            sections: SectionStrategy::default(),
            defaults: Defaults::default(),
            images: IMAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`: JSON if it has a `.json` extension, TOML
    /// otherwise.
    pub fn read(path: &Path) -> Result<Settings> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Json::read(path),
            _ => Toml::read(path),
        }
    }

    /// Fails on settings a build cannot honor.
    pub fn validate(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for image in &self.images {
            if !seen.insert(image.as_str()) {
                return err! {
                    "image listed more than once",
                    "image" => image,
                    "help" => "every image maps to exactly one record",
                };
            }
        }

        Ok(())
    }
}

impl Config {
    /// Loads settings for the site at `root`. An explicit settings file must
    /// exist; the default one is optional.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let default = root.join(crate::CONFIG_FILE);
        let settings = match explicit {
            Some(path) => Settings::read(path)?,
            None if default.is_file() => Settings::read(&default)?,
            None => {
                tracing::debug!(path = %default.display(), "no settings file, using defaults");
                Settings::default()
            }
        };

        Ok(Config { root: root.to_path_buf(), settings })
    }

    /// Applies the global command-line flags on top of the settings file.
    pub fn from_flags(flags: &Merklap) -> Result<Self> {
        let root = flags.root.clone().unwrap_or_else(|| PathBuf::from("."));
        let mut config = Config::discover(&root, flags.config.as_deref())?;
        if let Some(sections) = &flags.sections {
            config.settings.sections = sections.parse()?;
        }

        Ok(config)
    }

    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.root.join(path)
    }

    pub fn output(&self) -> PathBuf {
        self.resolve(&self.settings.output)
    }

    pub fn extractor(&self) -> Extractor {
        Extractor::new(self.resolve(&self.settings.content))
            .with_strategy(self.settings.sections)
            .with_defaults(self.settings.defaults.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn defaults_without_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover(dir.path(), None).unwrap();

        assert_eq!(config.settings, Settings::default());
        assert_eq!(config.settings.images.len(), 56);
        assert_eq!(config.output(), dir.path().join("js/embroideryData.js"));
        assert_eq!(config.extractor().content_dir, dir.path().join("content/embroideries/text"));
    }

    #[test]
    fn reads_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(crate::CONFIG_FILE), "\
            content = \"text\"\n\
            sections = \"title-match\"\n\
            images = [\"1.JPEG\", \"23 b.JPEG\"]\n\
            \n\
            [defaults]\n\
            year = \"2025\"\n").unwrap();

        let config = Config::discover(dir.path(), None).unwrap();
        let extractor = config.extractor();
        assert_eq!(extractor.content_dir, dir.path().join("text"));
        assert_eq!(extractor.strategy, SectionStrategy::TitleMatch);
        assert_eq!(extractor.defaults.year, "2025");
        assert_eq!(extractor.defaults.technique, "Kruissteek");
        assert_eq!(config.settings.images, ["1.JPEG", "23 b.JPEG"]);
        assert_eq!(config.settings.global, DEFAULT_GLOBAL);
    }

    #[test]
    fn reads_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        fs::write(&path, r#"{ "global": "GALLERY", "images": ["7.JPEG"] }"#).unwrap();

        let config = Config::discover(dir.path(), Some(&path)).unwrap();
        assert_eq!(config.settings.global, "GALLERY");
        assert_eq!(config.settings.images, ["7.JPEG"]);
    }

    #[test]
    fn rejects_duplicate_images() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(crate::CONFIG_FILE), "images = [\"1.JPEG\", \"2.JPEG\", \"1.JPEG\"]\n").unwrap();

        let config = Config::discover(dir.path(), None).unwrap();
        let error = config.settings.validate().unwrap_err();
        assert_eq!(error.message(), "image listed more than once");
    }

    #[test]
    fn missing_explicit_settings_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::discover(dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn builtin_images_are_unique() {
        assert!(Settings::default().validate().is_ok());
    }
}
