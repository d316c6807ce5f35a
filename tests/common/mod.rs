//! Common test utilities for integration tests.
//!
//! - [`FakeGallery`]: an in-memory [`ImageApi`] that answers immediately
//!   and logs every call
//! - [`test_app`]: an `App` whose open/copy hooks never touch the desktop
//! - key helpers and [`settle`] to pump spawned results into the app
//!
//! # Example
//!
//! ```ignore
//! let gallery = Arc::new(FakeGallery::new().with_cluster(3, 64));
//! let mut app = test_app(gallery.clone());
//! app.start();
//! settle(&mut app, 1).await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pixora::app::App;
use pixora::config::ExplorerConfig;
use pixora::traits::ImageApi;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_ASSET_BASE: &str = "http://assets.test";

/// Build an app over `api` with desktop hooks stubbed out.
pub fn test_app(api: Arc<dyn ImageApi>) -> App {
    let config = ExplorerConfig::default()
        .with_api_base_url("http://api.test")
        .with_asset_base_url(TEST_ASSET_BASE);
    let mut app = App::new(api, config);
    app.open_handler = |_| Ok(());
    app.copy_handler = |_| Ok(());
    app
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Type `text` into the focused field.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

/// Receive `count` results from spawned calls and apply them, in arrival
/// order. Panics if they do not arrive within a second.
pub async fn settle(app: &mut App, count: usize) {
    let mut rx = app.message_rx.take().expect("receiver already taken");
    for _ in 0..count {
        let msg = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("timed out waiting for app message")
            .expect("message channel closed");
        app.handle_message(msg);
    }
    app.message_rx = Some(rx);
}
