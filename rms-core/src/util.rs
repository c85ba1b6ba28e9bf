//! Small shared utilities

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> Timestamp {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_monotonic_enough() {
        let a = now_millis();
        let b = now_millis();
        assert!(b >= a);
        // Sanity: after 2020-01-01 in milliseconds.
        assert!(a > 1_577_836_800_000);
    }
}
