use chrono::Utc;

/// Unix epoch milliseconds, the timestamp format of every response envelope.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}
