//! Resolution of backend image locators into absolute URLs.
//!
//! Locators from the backend are either absolute `http(s)` URLs or paths
//! relative to the asset server. Anything that cannot be turned into a
//! valid URL resolves to a placeholder instead of failing the view.

use reqwest::Url;

/// Placeholder shown for a cluster tile without a usable thumbnail.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://placehold.co/200x200/111/444?text=Thumb";

/// Placeholder shown for an image tile whose locator is missing or broken.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x600/111/444?text=Image";

/// Which placeholder to use when a locator cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Thumbnail,
    Image,
}

impl Placeholder {
    pub fn url(self) -> &'static str {
        match self {
            Placeholder::Thumbnail => PLACEHOLDER_THUMBNAIL,
            Placeholder::Image => PLACEHOLDER_IMAGE,
        }
    }
}

/// A locator after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The locator formed a valid absolute URL
    Url(String),
    /// The locator was empty or invalid; the placeholder URL is carried
    Placeholder(&'static str),
}

impl Resolved {
    pub fn as_str(&self) -> &str {
        match self {
            Resolved::Url(url) => url,
            Resolved::Placeholder(url) => url,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Resolved::Placeholder(_))
    }
}

/// Resolve `locator` against `asset_base`.
pub fn resolve(asset_base: &str, locator: &str, fallback: Placeholder) -> Resolved {
    let locator = locator.trim();
    if locator.is_empty() {
        return Resolved::Placeholder(fallback.url());
    }

    let lower = locator.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        locator.to_string()
    } else {
        format!(
            "{}/{}",
            asset_base.trim_end_matches('/'),
            locator.trim_start_matches('/')
        )
    };

    match Url::parse(&candidate) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Resolved::Url(url.to_string())
        }
        _ => {
            tracing::debug!(locator, "unresolvable locator, using placeholder");
            Resolved::Placeholder(fallback.url())
        }
    }
}
