use chrono::{DateTime, Duration as ChronoDuration, Utc};

/// Human readable length of a round, e.g. `4h 05m` or `52 minutes`.
#[must_use]
pub fn format_round_duration(td: ChronoDuration) -> String {
    let minutes = td.num_minutes().max(0);

    const HOUR: i64 = 60;

    if minutes >= HOUR {
        let hours = minutes / HOUR;
        let rest = minutes % HOUR;
        format!("{hours}h {rest:02}m")
    } else if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{minutes} minutes")
    }
}

/// Whole minutes from `now` until `then`, floored. Negative once `then` has passed.
#[must_use]
pub fn minutes_until(now: DateTime<Utc>, then: DateTime<Utc>) -> i64 {
    (then - now).num_seconds().div_euclid(60)
}
