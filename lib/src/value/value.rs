use std::borrow::Cow;

use serde::{Serialize, Deserialize};

/// A single frontmatter value: either plain text or a bracketed list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

/// Removes one matching pair of `open`/`close` characters from the ends of
/// `value`. A lone delimiter that both opens and closes yields `""`.
fn unwrap_pair(value: &str, open: char, close: char) -> Option<&str> {
    if !value.starts_with(open) || !value.ends_with(close) {
        return None;
    }

    let inner = value.get(open.len_utf8()..value.len().saturating_sub(close.len_utf8()));
    Some(inner.unwrap_or(""))
}

impl FieldValue {
    /// Parses the text following a frontmatter key's colon.
    ///
    /// Quotes are stripped first, so `"[a, b]"` is still read as a list. List
    /// items are trimmed, lose every quote character, and are dropped when
    /// empty.
    pub fn parse(raw: &str) -> FieldValue {
        let mut value = raw.trim();
        for quote in ['"', '\''] {
            if let Some(inner) = unwrap_pair(value, quote, quote) {
                value = inner;
                break;
            }
        }

        match unwrap_pair(value, '[', ']') {
            Some(items) => FieldValue::List(items.split(',')
                .map(|item| item.trim().replace(['\'', '"'], ""))
                .filter(|item| !item.is_empty())
                .collect()),
            None => FieldValue::Scalar(value.to_string()),
        }
    }

    /// The value as display text. Lists are joined with `", "`.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Scalar(s) => Cow::Borrowed(s),
            FieldValue::List(items) => Cow::Owned(items.join(", ")),
        }
    }

    /// The value as a list. A non-empty scalar is a one-item list.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            FieldValue::Scalar(s) if s.is_empty() => vec![],
            FieldValue::Scalar(s) => vec![s.clone()],
            FieldValue::List(items) => items.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Scalar(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}
