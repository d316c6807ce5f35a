use serde::{Deserialize, Serialize};

/// A single image returned by search or by a cluster page.
///
/// Sequences of results keep the backend's order (relevance or recency);
/// the client never re-sorts them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageResult {
    /// URL or backend-relative path of the image
    #[serde(alias = "url", alias = "filepath", alias = "src")]
    pub locator: String,
    /// Optional human-readable caption
    #[serde(default, alias = "title", skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageResult {
    /// Create a result without a caption.
    pub fn new(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            caption: None,
        }
    }

    /// Attach a caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Caption to show on a tile; falls back to the 1-based position.
    pub fn display_caption(&self, index: usize) -> String {
        match self.caption.as_deref().map(str::trim) {
            Some(caption) if !caption.is_empty() => caption.to_string(),
            _ => format!("Image {}", index + 1),
        }
    }
}

/// One page of a cluster's images.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterPage {
    /// Images on this page, in backend order
    pub items: Vec<ImageResult>,
    /// Total number of images in the cluster as reported by the backend
    pub total: usize,
}

impl ClusterPage {
    pub fn new(items: Vec<ImageResult>, total: usize) -> Self {
        Self { items, total }
    }
}
