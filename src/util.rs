use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Monday of the ISO week containing `timestamp` (UTC).
pub fn week_start(timestamp: &DateTime<Utc>) -> NaiveDate {
    let date = timestamp.date_naive();
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// `YYYY-Www` using the ISO week-numbering year.
pub fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}
