//! Configuration helpers for toolforge

use std::env;

/// Default tool store endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://api.localhost/v1";

/// Get the tool store base URL from environment variable or fallback
///
/// Priority:
/// 1. TOOLFORGE_BASE_URL environment variable
/// 2. fallback parameter
/// 3. [`DEFAULT_BASE_URL`]
pub fn get_base_url(fallback: Option<&str>) -> String {
    if let Ok(url) = env::var("TOOLFORGE_BASE_URL") {
        return url;
    }

    fallback.unwrap_or(DEFAULT_BASE_URL).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_base_url_with_fallback() {
        unsafe { env::remove_var("TOOLFORGE_BASE_URL") };

        let url = get_base_url(Some("http://custom:8080/v1"));
        assert_eq!(url, "http://custom:8080/v1");
    }

    #[test]
    fn test_get_base_url_default() {
        unsafe { env::remove_var("TOOLFORGE_BASE_URL") };

        let url = get_base_url(None);
        assert_eq!(url, DEFAULT_BASE_URL);
    }
}
