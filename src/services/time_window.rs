//! IST day-window boundaries for the dashboard's today/yesterday counters.
//!
//! The business day runs on India Standard Time (UTC+5:30, fixed offset, no
//! daylight saving) while every stored timestamp is UTC. The window is
//! recomputed from "now" on each request; boundaries near midnight go stale
//! within milliseconds and must never be cached across requests.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// UTC instants marking the start of the current and previous IST calendar
/// day, plus the reference "now" the window was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub now_utc: DateTime<Utc>,
    pub today_start_utc: DateTime<Utc>,
    pub yesterday_start_utc: DateTime<Utc>,
}

/// Which counter a record's event time lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBucket {
    Today,
    Yesterday,
    Outside,
}

impl TimeWindow {
    /// Compute the window for a reference instant.
    ///
    /// `today_start_utc` is the UTC instant at which the IST calendar day
    /// containing `reference` began; `yesterday_start_utc` is exactly 24h
    /// earlier.
    pub fn compute(reference: DateTime<Utc>) -> Self {
        let ist = FixedOffset::east_opt(IST_OFFSET_SECS).unwrap();
        let ist_day = reference.with_timezone(&ist).date_naive();
        let today_start_utc = ist
            .from_local_datetime(&ist_day.and_hms_opt(0, 0, 0).unwrap())
            .unwrap()
            .with_timezone(&Utc);

        Self {
            now_utc: reference,
            today_start_utc,
            yesterday_start_utc: today_start_utc - Duration::hours(24),
        }
    }

    pub fn now_utc_millis(&self) -> i64 {
        self.now_utc.timestamp_millis()
    }

    /// Bucket an event time. Both day windows are start-inclusive: an instant
    /// exactly at IST midnight belongs to the new day.
    pub fn classify(&self, event_time: DateTime<Utc>) -> DayBucket {
        if event_time >= self.today_start_utc && event_time <= self.now_utc {
            DayBucket::Today
        } else if event_time >= self.yesterday_start_utc && event_time < self.today_start_utc {
            DayBucket::Yesterday
        } else {
            DayBucket::Outside
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse::<DateTime<Utc>>().unwrap()
    }

    #[test]
    fn boundaries_for_early_ist_morning() {
        // 02:00 UTC is 07:30 IST, so the IST day began at 18:30 UTC the
        // previous evening.
        let window = TimeWindow::compute(utc("2024-03-15T02:00:00Z"));
        assert_eq!(window.today_start_utc, utc("2024-03-14T18:30:00Z"));
        assert_eq!(window.yesterday_start_utc, utc("2024-03-13T18:30:00Z"));
        assert_eq!(window.now_utc, utc("2024-03-15T02:00:00Z"));
    }

    #[test]
    fn yesterday_is_exactly_24h_before_today() {
        let instants = [
            "2024-03-15T02:00:00Z",
            "2024-03-14T18:29:59.999Z",
            "2024-03-14T18:30:00Z",
            "2024-12-31T23:59:59Z",
            "2024-01-01T00:00:00Z",
        ];
        for s in instants {
            let window = TimeWindow::compute(utc(s));
            assert_eq!(
                window.today_start_utc - window.yesterday_start_utc,
                Duration::hours(24),
                "at {s}"
            );
            assert!(window.today_start_utc <= window.now_utc, "at {s}");
        }
    }

    #[test]
    fn instant_at_ist_midnight_starts_the_new_day() {
        // 18:30 UTC is exactly IST midnight.
        let window = TimeWindow::compute(utc("2024-03-14T18:30:00Z"));
        assert_eq!(window.today_start_utc, utc("2024-03-14T18:30:00Z"));
        assert_eq!(window.classify(utc("2024-03-14T18:30:00Z")), DayBucket::Today);
    }

    #[test]
    fn boundary_jumps_24h_across_ist_midnight() {
        let before = TimeWindow::compute(utc("2024-03-14T18:29:59.999Z"));
        let after = TimeWindow::compute(utc("2024-03-14T18:30:00Z"));
        assert_eq!(
            after.today_start_utc - before.today_start_utc,
            Duration::hours(24)
        );

        // One millisecond that does not cross midnight leaves the window alone.
        let a = TimeWindow::compute(utc("2024-03-15T02:00:00Z"));
        let b = TimeWindow::compute(utc("2024-03-15T02:00:00.001Z"));
        assert_eq!(a.today_start_utc, b.today_start_utc);
        assert_eq!(a.yesterday_start_utc, b.yesterday_start_utc);
    }

    #[test]
    fn classify_concrete_scenario() {
        let window = TimeWindow::compute(utc("2024-03-15T02:00:00Z"));
        assert_eq!(window.classify(utc("2024-03-14T19:00:00Z")), DayBucket::Today);
        assert_eq!(
            window.classify(utc("2024-03-14T10:00:00Z")),
            DayBucket::Yesterday
        );
        assert_eq!(
            window.classify(utc("2024-03-12T10:00:00Z")),
            DayBucket::Outside
        );
    }

    #[test]
    fn future_instants_are_outside() {
        let window = TimeWindow::compute(utc("2024-03-15T02:00:00Z"));
        assert_eq!(
            window.classify(utc("2024-03-15T02:00:00.001Z")),
            DayBucket::Outside
        );
    }
}
