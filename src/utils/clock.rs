use chrono::{Datelike, Utc};

/// The current calendar year in UTC.
///
/// Every year-dependent rule (birth year upper bound, approximate age,
/// minimum-age threshold) reads the year through here so a single call sees
/// one consistent value.
pub fn current_year() -> i32 {
    Utc::now().year()
}
