use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Accepts RFC 3339 or a bare `YYYY-MM-DD` (midnight UTC). Blank input is `None`.
pub fn parse_flexible_datetime(raw: &str) -> anyhow::Result<Option<DateTime<Utc>>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow::anyhow!("invalid date {}", raw))?;
    Ok(Some(midnight.and_utc()))
}

/// Serde adapter for optional date fields sent by HTML forms.
pub fn deserialize_optional_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(value) => parse_flexible_datetime(&value).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn blank_is_none() {
        assert!(parse_flexible_datetime("  ").unwrap().is_none());
    }

    #[test]
    fn accepts_date_and_rfc3339() {
        let d = parse_flexible_datetime("2025-06-30").unwrap().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2025, 6, 30));
        let t = parse_flexible_datetime("2025-06-30T10:00:00+03:00").unwrap().unwrap();
        assert_eq!(t.to_rfc3339(), "2025-06-30T07:00:00+00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_flexible_datetime("next tuesday").is_err());
    }
}
