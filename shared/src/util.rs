//! Small shared utilities: timestamps and ID generation.

/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current UTC date as an ISO `YYYY-MM-DD` string (joined_date column).
pub fn today_iso() -> String {
    chrono::Utc::now().date_naive().to_string()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
///
/// Used for both account and member_record primary keys.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflake_ids_are_positive_and_time_ordered() {
        let a = snowflake_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = snowflake_id();
        assert!(a > 0);
        assert!(b > a);
    }

    #[test]
    fn today_iso_is_a_date() {
        let d = today_iso();
        assert_eq!(d.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&d, "%Y-%m-%d").is_ok());
    }
}
