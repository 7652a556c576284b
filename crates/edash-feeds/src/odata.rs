//! Query building and row mapping for the Tweede Kamer OData `Activiteit` feed.

use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::{Deserialize, Deserializer};

use crate::window::start_of_today_utc;

/// Fields requested with `$select`.
pub const SELECT_FIELDS: &[&str] = &[
    "Onderwerp",
    "Soort",
    "Datum",
    "Aanvangstijd",
    "Locatie",
    "Nummer",
    "Status",
    "Kamer",
];

/// A row of the `value` array, reduced to the fields the dashboard shows.
///
/// Every field is optional; the source leaves many of them `null`. Text
/// fields take a number as its decimal text and treat any other non-string
/// value as absent, so one odd field never costs the whole row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActivityRow {
    #[serde(rename = "Onderwerp", default, deserialize_with = "lenient_text")]
    pub subject: Option<String>,
    #[serde(rename = "Soort", default, deserialize_with = "lenient_text")]
    pub kind: Option<String>,
    #[serde(rename = "Datum", default)]
    pub date: serde_json::Value,
    #[serde(rename = "Aanvangstijd", default)]
    pub start_time: serde_json::Value,
    #[serde(rename = "Locatie", default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(rename = "Nummer", default, deserialize_with = "lenient_text")]
    pub reference_number: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

/// Builds the `$filter` expression: scheduled, non-deleted Tweede Kamer
/// activities dated on or after `since`.
#[must_use]
pub fn scheduled_activities_filter(since: DateTime<Utc>) -> String {
    format!(
        "Verwijderd eq false and Status eq 'Gepland' and Kamer eq 'Tweede Kamer' and Datum ge {}",
        since.format("%Y-%m-%dT%H:%M:%SZ")
    )
}

/// Full request URL for upcoming activities, starting at today's UTC midnight.
///
/// Ordered by date ascending and capped server-side at `top` rows. Rows past
/// the cap are never fetched, even if they would pass the keyword filter.
#[must_use]
pub fn activities_query_url(base: &Url, now: DateTime<Utc>, top: u32) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("$select", &SELECT_FIELDS.join(","));
        pairs.append_pair(
            "$filter",
            &scheduled_activities_filter(start_of_today_utc(now)),
        );
        pairs.append_pair("$orderby", "Datum asc");
        pairs.append_pair("$top", &top.to_string());
    }
    url
}

/// Extracts rows from an OData response body.
///
/// A body that is not an object, or has no `value` array, yields no rows.
/// Entries of the array that are not objects are skipped.
#[must_use]
pub fn parse_activity_rows(body: serde_json::Value) -> Vec<ActivityRow> {
    let serde_json::Value::Object(mut map) = body else {
        return Vec::new();
    };
    let Some(serde_json::Value::Array(values)) = map.remove("value") else {
        return Vec::new();
    };

    let total = values.len();
    let rows: Vec<ActivityRow> = values
        .into_iter()
        .filter_map(|v| serde_json::from_value::<ActivityRow>(v).ok())
        .collect();

    if rows.len() < total {
        tracing::warn!(
            skipped = total - rows.len(),
            total,
            "skipped OData rows that are not objects"
        );
    }
    rows
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn base() -> Url {
        Url::parse("https://gegevensmagazijn.tweedekamer.nl/OData/v4/2.0/Activiteit")
            .expect("valid base")
    }

    #[test]
    fn filter_uses_start_of_today() {
        let since = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        assert_eq!(
            scheduled_activities_filter(since),
            "Verwijderd eq false and Status eq 'Gepland' and Kamer eq 'Tweede Kamer' and Datum ge 2024-03-10T00:00:00Z"
        );
    }

    #[test]
    fn query_url_carries_all_parameters() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 15, 42, 7).unwrap();
        let url = activities_query_url(&base(), now, 200);
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(url.path(), "/OData/v4/2.0/Activiteit");
        assert_eq!(
            pairs,
            vec![
                (
                    "$select".to_string(),
                    "Onderwerp,Soort,Datum,Aanvangstijd,Locatie,Nummer,Status,Kamer".to_string()
                ),
                (
                    "$filter".to_string(),
                    "Verwijderd eq false and Status eq 'Gepland' and Kamer eq 'Tweede Kamer' and Datum ge 2024-03-10T00:00:00Z".to_string()
                ),
                ("$orderby".to_string(), "Datum asc".to_string()),
                ("$top".to_string(), "200".to_string()),
            ]
        );
    }

    #[test]
    fn query_url_is_form_encoded() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let url = activities_query_url(&base(), now, 200);
        let query = url.query().expect("query string");
        assert!(query.starts_with("%24select=Onderwerp%2CSoort"), "got {query}");
        assert!(query.contains("%24orderby=Datum+asc"), "got {query}");
    }

    #[test]
    fn parses_value_array() {
        let body = serde_json::json!({
            "@odata.context": "https://gegevensmagazijn.tweedekamer.nl/OData/v4/2.0/$metadata#Activiteit",
            "value": [
                {
                    "Onderwerp": "Wind op zee",
                    "Soort": "Commissiedebat",
                    "Datum": "2024-03-12T00:00:00+01:00",
                    "Aanvangstijd": "2024-03-12T10:00:00+01:00",
                    "Locatie": "Thorbeckezaal",
                    "Nummer": "2024A01234",
                    "Status": "Gepland",
                    "Kamer": "Tweede Kamer"
                },
                { "Onderwerp": null, "Soort": "Plenair debat", "Nummer": null }
            ]
        });
        let rows = parse_activity_rows(body);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].subject.as_deref(), Some("Wind op zee"));
        assert_eq!(rows[0].date, "2024-03-12T00:00:00+01:00");
        assert_eq!(rows[1].subject, None);
        assert!(rows[1].date.is_null());
        assert_eq!(rows[1].reference_number, None);
    }

    #[test]
    fn missing_or_non_array_value_yields_no_rows() {
        assert!(parse_activity_rows(serde_json::json!({})).is_empty());
        assert!(parse_activity_rows(serde_json::json!({ "value": "nope" })).is_empty());
        assert!(parse_activity_rows(serde_json::json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn non_object_rows_are_skipped() {
        let body = serde_json::json!({
            "value": [
                "not an object",
                [1, 2],
                null,
                { "Onderwerp": "Waterstofnetwerk" }
            ]
        });
        let rows = parse_activity_rows(body);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].subject.as_deref(), Some("Waterstofnetwerk"));
    }

    #[test]
    fn mistyped_text_fields_fall_back_without_dropping_the_row() {
        let body = serde_json::json!({
            "value": [
                { "Onderwerp": "Energieakkoord", "Soort": "Commissiedebat", "Locatie": 12 },
                { "Onderwerp": "Windenergie", "Soort": "Plenair debat", "Nummer": 123 },
                { "Onderwerp": ["lijst"], "Soort": true, "Nummer": { "id": 1 } }
            ]
        });
        let rows = parse_activity_rows(body);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].location.as_deref(), Some("12"));
        assert_eq!(rows[1].reference_number.as_deref(), Some("123"));
        assert_eq!(rows[2].subject, None);
        assert_eq!(rows[2].kind, None);
        assert_eq!(rows[2].reference_number, None);
    }
}
