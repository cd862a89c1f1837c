use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Announcement {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Either a plain date or a date-time, depending on how it was stored.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Announcement {
    pub fn posted_on(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?;
        let day = raw.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

/// Body of `POST /api/announcements/create`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn posted_on_reads_dates_and_datetimes() {
        let mut a: Announcement = serde_json::from_value(json!({
            "id": 1, "title": "Holiday", "content": "Office closed", "date": "2024-12-24T09:30:00"
        }))
        .unwrap();
        assert_eq!(a.posted_on(), NaiveDate::from_ymd_opt(2024, 12, 24));
        a.date = Some("2024-12-25".into());
        assert_eq!(a.posted_on(), NaiveDate::from_ymd_opt(2024, 12, 25));
        a.date = Some("soon".into());
        assert_eq!(a.posted_on(), None);
    }
}
