use chrono::{DateTime, Utc};
use serde::Serialize;

/// Window label attached to the publications envelope.
pub const LAST_7_DAYS: &str = "last7days";

/// A document from the syndication feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Publication {
    pub title: String,
    pub link: String,
    /// Markup removed, entities decoded.
    pub description: String,
    /// `None` when the feed's date could not be parsed.
    #[serde(rename = "pubDate")]
    pub published_at: Option<DateTime<Utc>>,
}

/// A scheduled parliamentary activity from the OData feed.
///
/// Field names on the wire follow the source's Dutch vocabulary, which is
/// what the dashboard client reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegislativeActivity {
    #[serde(rename = "onderwerp")]
    pub subject: String,
    #[serde(rename = "soort")]
    pub kind: String,
    /// Passed through from the source untouched.
    #[serde(rename = "datum")]
    pub date: serde_json::Value,
    /// Passed through from the source untouched.
    #[serde(rename = "aanvangstijd")]
    pub start_time: serde_json::Value,
    #[serde(rename = "locatie")]
    pub location: String,
    #[serde(rename = "nummer")]
    pub reference_number: String,
    #[serde(rename = "url")]
    pub detail_url: String,
}

/// A capped, ordered collection plus the moment it was produced.
#[derive(Debug, Clone, Serialize)]
pub struct ResultEnvelope<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<&'static str>,
    pub items: Vec<T>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl<T: Serialize> ResultEnvelope<T> {
    /// Wraps `items`, stamping the envelope with the current time.
    #[must_use]
    pub fn completed(items: Vec<T>, range: Option<&'static str>) -> Self {
        Self {
            range,
            items,
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn publication_serializes_with_dashboard_keys() {
        let item = Publication {
            title: "Kamerbrief".to_string(),
            link: "https://example.com/a".to_string(),
            description: "Tekst".to_string(),
            published_at: Some(Utc.with_ymd_and_hms(2024, 3, 4, 9, 30, 0).unwrap()),
        };
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["pubDate"], "2024-03-04T09:30:00Z");
        assert_eq!(json["title"], "Kamerbrief");
    }

    #[test]
    fn missing_publication_date_serializes_as_null() {
        let item = Publication {
            title: String::new(),
            link: String::new(),
            description: String::new(),
            published_at: None,
        };
        let json = serde_json::to_value(&item).expect("serialize");
        assert!(json["pubDate"].is_null());
    }

    #[test]
    fn envelope_omits_range_when_absent() {
        let envelope: ResultEnvelope<Publication> = ResultEnvelope::completed(vec![], None);
        let json = serde_json::to_value(&envelope).expect("serialize");
        assert!(json.get("range").is_none());
        assert!(json["items"].as_array().is_some_and(Vec::is_empty));
        assert!(json["updatedAt"].is_string());
    }

    #[test]
    fn envelope_includes_range_label() {
        let envelope: ResultEnvelope<Publication> =
            ResultEnvelope::completed(vec![], Some(LAST_7_DAYS));
        let json = serde_json::to_value(&envelope).expect("serialize");
        assert_eq!(json["range"], "last7days");
    }

    #[test]
    fn activity_serializes_with_source_vocabulary() {
        let item = LegislativeActivity {
            subject: "Windenergie op zee".to_string(),
            kind: "Commissiedebat".to_string(),
            date: serde_json::json!("2024-03-12T00:00:00+01:00"),
            start_time: serde_json::Value::Null,
            location: String::new(),
            reference_number: "2024A01234".to_string(),
            detail_url: "https://example.com/details?id=2024A01234".to_string(),
        };
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["onderwerp"], "Windenergie op zee");
        assert_eq!(json["soort"], "Commissiedebat");
        assert_eq!(json["datum"], "2024-03-12T00:00:00+01:00");
        assert!(json["aanvangstijd"].is_null());
        assert_eq!(json["nummer"], "2024A01234");
        assert_eq!(json["url"], "https://example.com/details?id=2024A01234");
    }
}
