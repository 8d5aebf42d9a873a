/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// 当前 UTC 时间，ISO-8601 格式 (毫秒精度, `Z` 后缀)
///
/// Matches the `Date.toISOString()` strings the stored documents carry,
/// e.g. `2023-06-01T12:00:00.000Z`.
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
