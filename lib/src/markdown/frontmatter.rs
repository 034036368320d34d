use crate::value::FieldValue;

/// The line that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// Splits `input` into its frontmatter block and the remainder.
///
/// The input must open with a `---` line. The block extends to the first
/// following line that starts with `---`; the remainder begins right after
/// those three characters. Returns `None` when there is no such block.
pub fn split(input: &str) -> Option<(&str, &str)> {
    const PREFIX: &str = "---\n";
    const SUFFIX: &str = "\n---";

    let body = input.strip_prefix(PREFIX)?;
    let end = memchr::memmem::find(body.as_bytes(), SUFFIX.as_bytes())?;
    Some((&body[..end], &body[end + SUFFIX.len()..]))
}

/// Key/value metadata from the header of a content file, in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    entries: Vec<(String, FieldValue)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Frontmatter::default()
    }

    /// Parses a frontmatter block line by line. Each line is split on its
    /// first `:`; lines without one are skipped.
    pub fn parse(block: &str) -> Frontmatter {
        let mut frontmatter = Frontmatter::new();
        for line in block.lines() {
            if let Some((key, value)) = line.split_once(':') {
                frontmatter.insert(key.trim(), FieldValue::parse(value));
            }
        }

        frontmatter
    }

    /// Inserts `value` under `key`. An existing key keeps its position and
    /// has its value replaced.
    pub fn insert<K: Into<String> + AsRef<str>>(&mut self, key: K, value: FieldValue) {
        match self.entries.iter_mut().find(|(k, _)| k.as_str() == key.as_ref()) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.into(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// The non-empty text of `key`, if any.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|v| !v.is_empty())
            .map(|v| v.as_text().into_owned())
    }

    /// The list under `key`, or an empty list when it is absent.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.get(key).map(|v| v.to_list()).unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_requires_leading_delimiter() {
        assert_eq!(split("---\nkey: v\n---\n# T\nbody"), Some(("key: v", "\n# T\nbody")));
        assert_eq!(split("---\n\n---"), Some(("", "")));
        assert_eq!(split("---\n---\n"), None);
        assert_eq!(split("\n---\nkey: v\n---\n"), None);
        assert_eq!(split("# Title\nno header"), None);
        assert_eq!(split("---\nkey: v\nnever closed"), None);
    }

    #[test]
    fn split_stops_at_first_closing_delimiter() {
        let (block, rest) = split("---\na: 1\n---\nb: 2\n---\n").unwrap();
        assert_eq!(block, "a: 1");
        assert_eq!(rest, "\nb: 2\n---\n");
    }

    #[test]
    fn parse_keeps_file_order() {
        let fm = Frontmatter::parse("title_nl: \"Molen\"\nnot a pair\ncategory: molens\ntags: [a, b]");
        assert_eq!(fm.keys().collect::<Vec<_>>(), ["title_nl", "category", "tags"]);
        assert_eq!(fm.text("title_nl").as_deref(), Some("Molen"));
        assert_eq!(fm.list("tags"), ["a", "b"]);
        assert!(fm.list("missing").is_empty());
    }

    #[test]
    fn later_duplicates_overwrite_in_place() {
        let fm = Frontmatter::parse("year: 2020\ncategory: flora\nyear: 2024");
        assert_eq!(fm.len(), 2);
        assert_eq!(fm.keys().collect::<Vec<_>>(), ["year", "category"]);
        assert_eq!(fm.text("year").as_deref(), Some("2024"));
    }

    #[test]
    fn values_split_on_first_colon_only() {
        let fm = Frontmatter::parse("time: 12:30\n : anonymous");
        assert_eq!(fm.text("time").as_deref(), Some("12:30"));
        assert_eq!(fm.text("").as_deref(), Some("anonymous"));
    }

    #[test]
    fn empty_values_read_as_absent() {
        let fm = Frontmatter::parse("price: \"\"\ntags: []");
        assert_eq!(fm.text("price"), None);
        assert_eq!(fm.text("tags"), None);
        assert!(fm.get("price").is_some());
    }
}
