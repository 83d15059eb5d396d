//! Frontend configuration module
//!
//! Base URLs for the REST backend and the poster CDN, overridable at build
//! time through environment variables.

/// Frontend configuration for URLs and external links
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// REST API base URL
    pub api_base_url: String,
    /// Poster CDN base URL (width segment and path are appended)
    pub poster_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("CINELOG_API_URL")
                .unwrap_or("/api")
                .to_string(),
            poster_base_url: option_env!("CINELOG_POSTER_URL")
                .unwrap_or("https://image.tmdb.org/t/p")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the REST API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Build a poster image URL for the given TMDB path at the given width,
    /// falling back to a placeholder when the film has no poster.
    pub fn poster_url(&self, path: &str, width: u32) -> String {
        if path.is_empty() {
            return format!(
                "https://via.placeholder.com/{}x{}?text=Cinelog",
                width,
                width * 3 / 2
            );
        }
        format!("{}/w{}{}", self.poster_base_url, width, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_base_is_relative() {
        let config = FrontendConfig::new();
        assert!(!config.api_base_url().is_empty());
    }

    #[test]
    fn poster_url_appends_width_and_path() {
        let config = FrontendConfig::new();
        let url = config.poster_url("/abc.jpg", 500);
        assert!(url.ends_with("/w500/abc.jpg"));
        assert!(url.starts_with("http"));
    }

    #[test]
    fn missing_poster_falls_back_to_placeholder() {
        let config = FrontendConfig::new();
        let url = config.poster_url("", 200);
        assert!(url.contains("placeholder"));
        assert!(url.contains("200x300"));
    }
}
