//! Search results and cluster browsing as image tiles.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::spinner;
use super::layout::GridLayout;
use super::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_HEADER};
use super::tiles::{render_tiles, Tile};
use crate::app::{App, Focus};
use crate::locator::{Placeholder, Resolved};
use crate::models::ImageResult;
use crate::state::ViewMode;

pub const NO_SEARCH_RESULTS: &str = "No relevant images found matching your search criteria.";
pub const NO_CLUSTER_IMAGES: &str = "No images found in this cluster.";

/// Map images to tiles, keeping backend order.
pub fn image_tiles<F>(images: &[ImageResult], resolve: F) -> Vec<Tile>
where
    F: Fn(&str, Placeholder) -> Resolved,
{
    images
        .iter()
        .enumerate()
        .map(|(index, image)| Tile {
            title: image.display_caption(index),
            detail: format!("#{}", index + 1),
            image: resolve(&image.locator, Placeholder::Image),
        })
        .collect()
}

/// Heading, empty-state text and the paging line for the current mode.
struct Section {
    title: String,
    loading: bool,
    empty_message: &'static str,
    paging: Option<String>,
}

fn section_for(mode: &ViewMode) -> Option<Section> {
    match mode {
        ViewMode::Overview => None,
        ViewMode::SearchResults(results) => Some(Section {
            title: "Search Results".to_string(),
            loading: results.loading,
            empty_message: NO_SEARCH_RESULTS,
            paging: None,
        }),
        ViewMode::ClusterBrowse(browse) => Some(Section {
            title: format!("Cluster {} ({} images)", browse.cluster_id, browse.total),
            loading: browse.is_loading(),
            empty_message: NO_CLUSTER_IMAGES,
            paging: if browse.is_loading() && !browse.images.is_empty() {
                Some("Loading...".to_string())
            } else if browse.has_more() {
                Some(format!(
                    "Load More ({} / {})  [m]",
                    browse.images.len(),
                    browse.total
                ))
            } else {
                None
            },
        }),
    }
}

pub fn render_image_grid(frame: &mut Frame, area: Rect, app: &mut App) {
    let Some(section) = section_for(app.explorer.mode()) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Section title
            Constraint::Min(1),    // Grid
            Constraint::Length(if section.paging.is_some() { 1 } else { 0 }),
        ])
        .split(area);

    let mut title = vec![Span::styled(
        section.title,
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if section.loading {
        title.push(Span::styled(
            format!("  {} Loading...", spinner(app.tick_count)),
            Style::default().fg(COLOR_ACTIVE),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), chunks[0]);

    let grid = GridLayout::fit(chunks[1]);
    app.grid_columns = grid.columns;

    let images = app.explorer.images();
    if images.is_empty() {
        if !section.loading && app.explorer.error().is_none() {
            frame.render_widget(
                Paragraph::new(Span::styled(section.empty_message, Style::default().fg(COLOR_DIM))),
                chunks[1],
            );
        }
    } else {
        let tiles = image_tiles(images, |raw, fallback| app.resolve_locator(raw, fallback));
        render_tiles(
            frame,
            chunks[1],
            &grid,
            &tiles,
            app.selected,
            app.focus == Focus::Results,
        );
    }

    if let Some(paging) = section.paging {
        frame.render_widget(
            Paragraph::new(Span::styled(paging, Style::default().fg(COLOR_ACTIVE))),
            chunks[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::{resolve, PLACEHOLDER_IMAGE};
    use crate::models::SearchFilters;
    use crate::state::{ClusterBrowse, SearchResults};

    #[test]
    fn test_image_tiles_keep_order_and_caption_fallback() {
        let images = vec![
            ImageResult::new("b.jpg").with_caption("Bridge"),
            ImageResult::new(""),
        ];
        let tiles = image_tiles(&images, |raw, fb| resolve("http://a.test", raw, fb));

        assert_eq!(tiles[0].title, "Bridge");
        assert_eq!(tiles[0].image.as_str(), "http://a.test/b.jpg");
        assert_eq!(tiles[1].title, "Image 2");
        assert_eq!(tiles[1].image.as_str(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_section_for_browse_shows_load_more() {
        let mut browse = ClusterBrowse::new(3);
        browse.images = vec![ImageResult::new("a.jpg"); 20];
        browse.total = 64;
        let section = section_for(&ViewMode::ClusterBrowse(browse)).unwrap();
        assert_eq!(section.title, "Cluster 3 (64 images)");
        assert_eq!(section.paging.as_deref(), Some("Load More (20 / 64)  [m]"));
    }

    #[test]
    fn test_section_for_complete_browse_has_no_paging() {
        let mut browse = ClusterBrowse::new(3);
        browse.images = vec![ImageResult::new("a.jpg"); 2];
        browse.total = 2;
        assert!(section_for(&ViewMode::ClusterBrowse(browse)).unwrap().paging.is_none());
    }

    #[test]
    fn test_section_for_search() {
        let results = SearchResults::pending(SearchFilters::query("cats"));
        let section = section_for(&ViewMode::SearchResults(results)).unwrap();
        assert!(section.loading);
        assert_eq!(section.empty_message, NO_SEARCH_RESULTS);
    }
}
