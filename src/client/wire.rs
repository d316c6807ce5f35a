//! Response bodies as the backend sends them.
//!
//! The backend is loose about shapes: search may return a bare array or an
//! object wrapping `results`, images may be bare path strings or objects,
//! and cluster pages name their list `filepaths` or `items`.

use serde::Deserialize;
use serde_json::Value;

use crate::models::{ClusterPage, ImageResult};

/// An image object with every locator key the backend has been seen to use.
/// Each key is read independently so that two of them present at once, or
/// one of them null, still decodes.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireImageObject {
    url: Option<Value>,
    src: Option<Value>,
    filepath: Option<Value>,
    locator: Option<Value>,
    caption: Option<Value>,
    title: Option<Value>,
}

/// First field holding a non-blank string.
fn first_text(fields: &[&Option<Value>]) -> Option<String> {
    fields
        .iter()
        .filter_map(|field| match field {
            Some(Value::String(text)) => Some(text.as_str()),
            _ => None,
        })
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

impl WireImageObject {
    fn into_result(self) -> ImageResult {
        let locator =
            first_text(&[&self.url, &self.src, &self.filepath, &self.locator]).unwrap_or_default();
        let caption = first_text(&[&self.caption, &self.title]);
        ImageResult { locator, caption }
    }
}

/// One entry of an image list. Anything that is neither a path nor an
/// object (null, numbers) decodes as an image without a locator, which
/// renders as a placeholder.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WireImage {
    Path(String),
    Object(WireImageObject),
    Other(Value),
}

impl From<WireImage> for ImageResult {
    fn from(wire: WireImage) -> Self {
        match wire {
            WireImage::Path(locator) => ImageResult::new(locator),
            WireImage::Object(object) => object.into_result(),
            WireImage::Other(value) => {
                tracing::debug!(%value, "image entry without a locator");
                ImageResult::new("")
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WireSearchResponse {
    List(Vec<WireImage>),
    Wrapped { results: Vec<WireImage> },
}

impl WireSearchResponse {
    pub(crate) fn into_results(self) -> Vec<ImageResult> {
        let items = match self {
            WireSearchResponse::List(items) => items,
            WireSearchResponse::Wrapped { results } => results,
        };
        items.into_iter().map(ImageResult::from).collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireClusterPage {
    #[serde(alias = "items", alias = "images")]
    pub filepaths: Vec<WireImage>,
    pub total: usize,
}

impl From<WireClusterPage> for ClusterPage {
    fn from(wire: WireClusterPage) -> Self {
        ClusterPage::new(
            wire.filepaths.into_iter().map(ImageResult::from).collect(),
            wire.total,
        )
    }
}
