//! Plain-text cleanup for free-text feed fields.

use std::sync::LazyLock;

use quick_xml::escape::{resolve_html5_entity, unescape_with};
use regex::{Captures, Regex};

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#?[0-9A-Za-z]+;").expect("valid entity regex"));

/// Removes every `<...>` span, decodes HTML entities and trims the result.
///
/// Pattern-based: this only ever sees a single text field, never
/// document structure.
#[must_use]
pub fn sanitize_text(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let without_tags = TAG_RE.replace_all(raw, "");
    decode_entities(&without_tags).trim().to_string()
}

/// Decodes named (HTML5) and numeric character references.
///
/// Unknown references and stray ampersands are left as written.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let reference = &caps[0];
            unescape_with(reference, resolve_html5_entity)
                .map_or_else(|_| reference.to_string(), std::borrow::Cow::into_owned)
        })
        .into_owned()
}
