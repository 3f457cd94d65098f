//! Normalization for timestamps coming out of the Supabase store.
//!
//! The order tables use `timestamp` (no time zone) columns, so both the
//! direct REST path and the Postgres path hand back naive strings like
//! `2024-03-14 19:00:00.123456`. Values are assumed to be UTC unless they
//! already carry an offset or a trailing `Z`.

use chrono::{DateTime, Utc};

/// Rewrite a raw store timestamp into RFC 3339 form: space separator becomes
/// `T`, fractional seconds are cut to millisecond precision, and a `Z` is
/// appended when no zone marker is present.
pub fn normalize_db_timestamp(raw: &str) -> String {
    let mut value = truncate_subseconds(&raw.trim().replacen(' ', "T", 1));

    if let Some(t_pos) = value.find('T') {
        let time_part = &value[t_pos + 1..];
        // The time part only contains ':' and '.' besides digits, so any
        // '+', '-', or trailing 'Z' there is a zone marker.
        let has_zone =
            time_part.ends_with('Z') || time_part.contains('+') || time_part.contains('-');
        if !has_zone {
            value.push('Z');
        }
    }

    value
}

/// Parse a raw store timestamp, or `None` when it still fails after
/// normalization. Callers drop such records from window counts.
pub fn parse_db_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&normalize_db_timestamp(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn truncate_subseconds(value: &str) -> String {
    let Some(dot) = value.find('.') else {
        return value.to_string();
    };
    let fraction_start = dot + 1;
    let fraction_end = value[fraction_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|i| fraction_start + i)
        .unwrap_or(value.len());

    if fraction_end - fraction_start <= 3 {
        return value.to_string();
    }
    format!("{}{}", &value[..fraction_start + 3], &value[fraction_end..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn space_separator_becomes_t_and_utc_is_assumed() {
        assert_eq!(
            normalize_db_timestamp("2024-03-14 19:00:00"),
            "2024-03-14T19:00:00Z"
        );
        let parsed = parse_db_timestamp("2024-03-14 19:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 14, 19, 0, 0).unwrap());
    }

    #[test]
    fn microseconds_are_cut_to_millis() {
        assert_eq!(
            normalize_db_timestamp("2024-03-14T19:00:00.123456"),
            "2024-03-14T19:00:00.123Z"
        );
        assert_eq!(
            normalize_db_timestamp("2024-03-14 19:00:00.999999Z"),
            "2024-03-14T19:00:00.999Z"
        );
    }

    #[test]
    fn short_fractions_are_left_alone() {
        assert_eq!(
            normalize_db_timestamp("2024-03-14T19:00:00.12"),
            "2024-03-14T19:00:00.12Z"
        );
    }

    #[test]
    fn existing_zone_markers_are_preserved() {
        assert_eq!(
            normalize_db_timestamp("2024-03-14T19:00:00Z"),
            "2024-03-14T19:00:00Z"
        );
        assert_eq!(
            normalize_db_timestamp("2024-03-14 19:00:00+05:30"),
            "2024-03-14T19:00:00+05:30"
        );
        assert_eq!(
            normalize_db_timestamp("2024-03-14T19:00:00.123456-04:00"),
            "2024-03-14T19:00:00.123-04:00"
        );
    }

    #[test]
    fn naive_store_timestamps_are_read_as_utc_not_local() {
        // Pins the assumption that the store writes UTC into its
        // timestamp-without-zone columns. If the schema ever moves to
        // timestamptz this starts failing loudly instead of rebucketing
        // records silently.
        let parsed = parse_db_timestamp("2024-03-14 18:30:00").unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_710_441_000_000);
    }

    #[test]
    fn garbage_is_none_not_a_panic() {
        assert!(parse_db_timestamp("").is_none());
        assert!(parse_db_timestamp("not a timestamp").is_none());
        assert!(parse_db_timestamp("2024-03-14").is_none());
        assert!(parse_db_timestamp("2024-13-99 25:61:61").is_none());
    }
}
