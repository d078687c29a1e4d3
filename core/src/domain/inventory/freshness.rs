use chrono::{DateTime, Utc};

use crate::domain::inventory::entities::FreshnessStatus;

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Upper bound (inclusive) of days remaining for `EXPIRING`.
pub const EXPIRING_MAX_DAYS: i64 = 2;
/// Upper bound (inclusive) of days remaining for `USE_SOON`.
pub const USE_SOON_MAX_DAYS: i64 = 5;

/// Whole days until `expiration`, rounded up.
pub fn days_remaining(expiration: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (expiration - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

pub fn classify(expiration: Option<DateTime<Utc>>, now: DateTime<Utc>) -> FreshnessStatus {
    let Some(expiration) = expiration else {
        return FreshnessStatus::Fresh;
    };

    match days_remaining(expiration, now) {
        days if days < 0 => FreshnessStatus::Expired,
        days if days <= EXPIRING_MAX_DAYS => FreshnessStatus::Expiring,
        days if days <= USE_SOON_MAX_DAYS => FreshnessStatus::UseSoon,
        _ => FreshnessStatus::Fresh,
    }
}
