//! Topic filter for parliamentary activities.

/// Case-insensitive substring matcher over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    keywords: Vec<String>,
}

impl KeywordFilter {
    #[must_use]
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// `true` when `"{subject} {kind}"`, lower-cased, contains any keyword.
    ///
    /// Not tokenized: "gas" matches inside "gaswinning" and "aardgas".
    #[must_use]
    pub fn is_relevant(&self, subject: &str, kind: &str) -> bool {
        let haystack = format!("{subject} {kind}").to_lowercase();
        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }
}
