//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which UI component has focus
//! - [`AppMessage`] - Results of spawned API calls
//!
//! `App` wraps an [`ExplorerState`] with the input state of the filter bar
//! and the tile selection. It runs the commands the explorer returns on the
//! tokio runtime and feeds the results back through `handle_message`.

mod actions;
mod handlers;
mod keys;
mod messages;
mod navigation;
mod types;

pub use actions::execute;
pub use messages::AppMessage;
pub use types::Focus;

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::clipboard::{self, DesktopError};
use crate::config::ExplorerConfig;
use crate::locator::{self, Placeholder, Resolved};
use crate::models::FilterDraft;
use crate::state::{ExplorerState, ViewMode};
use crate::traits::ImageApi;

/// Hook used to open a URL; swapped out in tests.
pub type UrlHandler = fn(&str) -> Result<(), DesktopError>;

/// Main application state
pub struct App {
    /// View state machine
    pub explorer: ExplorerState,
    /// Current focus
    pub focus: Focus,
    /// Raw query text
    pub query: String,
    /// Raw filter values
    pub filters: FilterDraft,
    /// Selected tile in the grid
    pub selected: usize,
    /// Selection to restore when returning to the overview
    pub overview_selected: usize,
    /// Tiles per grid row (calculated during render)
    pub grid_columns: usize,
    /// Raw locators that failed to open; rendered as placeholders
    pub broken_locators: HashSet<String>,
    /// One-line feedback shown in the footer until the next key press
    pub status_note: Option<String>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Whether the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Tick counter for the spinner
    pub tick_count: u64,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Receiver for async messages
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (cloned into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub config: ExplorerConfig,
    pub open_handler: UrlHandler,
    pub copy_handler: UrlHandler,
    api: Arc<dyn ImageApi>,
}

impl App {
    pub fn new(api: Arc<dyn ImageApi>, config: ExplorerConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            explorer: ExplorerState::new(),
            focus: Focus::default(),
            query: String::new(),
            filters: FilterDraft::default(),
            selected: 0,
            overview_selected: 0,
            grid_columns: 1,
            broken_locators: HashSet::new(),
            status_note: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            message_rx: Some(message_rx),
            message_tx,
            config,
            open_handler: clipboard::open_url,
            copy_handler: clipboard::copy_text,
            api,
        }
    }

    /// Load the cluster list. Called once when the main loop starts.
    pub fn start(&mut self) {
        let command = self.explorer.load_clusters();
        self.dispatch(command);
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations. Only redraws while something is loading.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.explorer.is_busy() {
            self.mark_dirty();
        }
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Number of tiles in the current mode.
    pub fn tile_count(&self) -> usize {
        match self.explorer.mode() {
            ViewMode::Overview => self.explorer.clusters().len(),
            mode => mode.images().len(),
        }
    }

    /// Raw locator of the selected tile and the placeholder kind for it.
    pub fn selected_locator(&self) -> Option<(&str, Placeholder)> {
        match self.explorer.mode() {
            ViewMode::Overview => self
                .explorer
                .clusters()
                .get(self.selected)
                .map(|c| (c.thumbnail.as_str(), Placeholder::Thumbnail)),
            mode => mode
                .images()
                .get(self.selected)
                .map(|i| (i.locator.as_str(), Placeholder::Image)),
        }
    }

    /// Resolve a locator, honouring locators already known to be broken.
    pub fn resolve_locator(&self, raw: &str, fallback: Placeholder) -> Resolved {
        if self.broken_locators.contains(raw) {
            return Resolved::Placeholder(fallback.url());
        }
        locator::resolve(self.config.asset_base(), raw, fallback)
    }

    /// Whether the spinner should show.
    pub fn is_loading(&self) -> bool {
        self.explorer.is_busy()
    }
}
