pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Base URL of the astrology service, baked in at build time.
///
/// Set `DIAASTRO_API_URL` when building for production
/// (e.g. `DIAASTRO_API_URL=https://api.diaastro.in trunk build --release`).
pub fn get_backend_url() -> &'static str {
    resolve_backend_url(option_env!("DIAASTRO_API_URL"))
}

fn resolve_backend_url(configured: Option<&'static str>) -> &'static str {
    match configured {
        Some(url) if !url.trim().is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_BACKEND_URL,
    }
}

pub const WHATSAPP_NUMBER: &str = "918625815099";
pub const DISPLAY_PHONE: &str = "+91 8625815099";
pub const TEL_LINK: &str = "tel:+918625815099";
pub const CONTACT_EMAIL: &str = "ruchi.bhardwaj@diaastro.in";
pub const DOMAIN: &str = "diaastro.in";

pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_localhost_when_unset() {
        assert_eq!(resolve_backend_url(None), "http://localhost:5000");
    }

    #[test]
    fn blank_value_counts_as_unset() {
        assert_eq!(resolve_backend_url(Some("  ")), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn trailing_slash_is_dropped() {
        assert_eq!(
            resolve_backend_url(Some("https://api.diaastro.in/")),
            "https://api.diaastro.in"
        );
    }
}
