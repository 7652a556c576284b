use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::LinkTemplates;

/// Characters escaped in a URI component (everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

impl LinkTemplates {
    /// Detail page for an activity on tweedekamer.nl.
    #[must_use]
    pub fn detail_url(&self, reference_number: &str, kind: &str) -> String {
        if reference_number.is_empty() {
            return self.fallback.clone();
        }

        let id = utf8_percent_encode(reference_number, COMPONENT);
        let kind = kind.to_lowercase();
        if self
            .plenary_markers
            .iter()
            .any(|marker| kind.contains(marker.as_str()))
        {
            format!("{}?id={id}", self.plenary_detail)
        } else {
            format!("{}?id={id}", self.committee_detail)
        }
    }
}
