/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a random UUID (v4) string for use as a resource ID.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Trim a free-text field and collapse blank input to `None`.
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uuid_is_unique() {
        let a = new_uuid();
        let b = new_uuid();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text(None), None);
        assert_eq!(normalize_text(Some("   ".into())), None);
        assert_eq!(
            normalize_text(Some("  extra napkins ".into())),
            Some("extra napkins".to_string())
        );
    }
}
