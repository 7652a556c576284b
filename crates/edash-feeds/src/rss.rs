//! RSS 2.0 item extraction.
//!
//! Items are the `<item>` children of the root's `<channel>` element, kept in
//! document order. The reader is strict about structure: mismatched or
//! unclosed tags fail the whole document, while missing fields inside an item
//! just come back empty.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::FeedError;

/// One `<item>` as written in the feed, before any cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Description,
    PubDate,
}

impl Field {
    fn from_tag(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "link" => Some(Self::Link),
            "description" => Some(Self::Description),
            "pubDate" => Some(Self::PubDate),
            _ => None,
        }
    }
}

impl RawEntry {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Link => &mut self.link,
            Field::Description => &mut self.description,
            Field::PubDate => &mut self.pub_date,
        }
    }
}

/// Depth of an `<item>` element: root, `<channel>`, `<item>`.
const ITEM_DEPTH: usize = 3;

/// Parse an RSS document into raw entries.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] when the reader rejects the markup (for example
/// a mismatched end tag) and [`FeedError::MalformedFeed`] for a document with
/// no root element, unclosed elements at end of input, or undecodable
/// character references.
pub fn parse_rss_items(xml: &str) -> Result<Vec<RawEntry>, FeedError> {
    let mut reader = Reader::from_str(xml);

    let mut entries = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut saw_root = false;
    let mut current: Option<RawEntry> = None;
    // Field being captured and the depth of its element.
    let mut field: Option<(Field, usize)> = None;
    let mut captured: Vec<Field> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                note_root(&stack, &mut saw_root)?;

                if stack.len() == ITEM_DEPTH - 1 && stack[1] == "channel" && name == "item" {
                    current = Some(RawEntry::default());
                    captured.clear();
                } else if stack.len() == ITEM_DEPTH && current.is_some() {
                    if let Some(f) = Field::from_tag(&name).filter(|f| !captured.contains(f)) {
                        captured.push(f);
                        field = Some((f, ITEM_DEPTH + 1));
                    }
                }
                stack.push(name);
            }
            Event::Empty(_) => note_root(&stack, &mut saw_root)?,
            Event::End(_) => {
                let depth = stack.len();
                stack.pop();
                if field.is_some_and(|(_, d)| d == depth) {
                    field = None;
                }
                if depth == ITEM_DEPTH {
                    if let Some(entry) = current.take() {
                        entries.push(entry);
                    }
                }
            }
            Event::Text(e) => {
                if let (Some((f, _)), Some(entry)) = (field, current.as_mut()) {
                    let text = e
                        .unescape()
                        .map_err(|err| FeedError::MalformedFeed(err.to_string()))?;
                    entry.slot(f).push_str(&text);
                }
            }
            Event::CData(e) => {
                if let (Some((f, _)), Some(entry)) = (field, current.as_mut()) {
                    entry.slot(f).push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(FeedError::MalformedFeed(format!(
            "unexpected end of document inside <{open}>"
        )));
    }
    if !saw_root {
        return Err(FeedError::MalformedFeed(
            "document has no root element".to_string(),
        ));
    }

    Ok(entries)
}

/// Records a top-level element, rejecting a second root.
fn note_root(stack: &[String], saw_root: &mut bool) -> Result<(), FeedError> {
    if stack.is_empty() {
        if *saw_root {
            return Err(FeedError::MalformedFeed(
                "more than one root element".to_string(),
            ));
        }
        *saw_root = true;
    }
    Ok(())
}
