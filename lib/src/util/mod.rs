mod path_ext;

pub use path_ext::*;

/// Returns `true` if `name` can be used as a JavaScript global binding: a
/// non-empty run of ASCII letters, digits, `_` or `$` not starting with a
/// digit.
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let valid = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$';
    match chars.next() {
        Some(first) if valid(first) && !first.is_ascii_digit() => chars.all(valid),
        _ => false,
    }
}
