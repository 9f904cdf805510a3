use std::cell::RefCell;
use std::rc::Rc;

use ratatui::text::{Line, Span};
use ratatui::style::{Modifier, Style};

use scrollspy_core::{
    AppConfig, NavBinding, ScrollBehavior, ScrollEvents, ScrollSource, ScrollTracker,
};

use crate::theme::Theme;
use crate::viewport::DocViewport;

/// One navigable section of the document.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub items: Vec<String>,
}

impl Section {
    /// Rendered height in lines: title, items, trailing blank.
    pub fn line_count(&self) -> usize {
        1 + self.items.len() + 1
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// Active theme
    pub theme: Theme,
    /// Sections shown in the tab bar and the document
    pub sections: Vec<Section>,
    /// Top line offset of each section within the flattened document
    pub section_tops: Vec<f64>,
    /// Pre-rendered document lines
    pub doc_lines: Vec<Line<'static>>,
    /// Scroll state over the document
    pub viewport: DocViewport,
    /// Scroll event stream of the viewport
    pub events: Rc<RefCell<ScrollEvents>>,
    /// Navigation binding tracking the active section
    pub nav: NavBinding,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Last offset delivered on the event stream
    last_emitted_offset: f64,
}

impl App {
    pub fn new(sections: Vec<Section>, config: AppConfig) -> Self {
        let theme = Theme::default();
        let section_tops = section_tops(&sections);
        let doc_lines = flatten_document(&sections, &theme);

        let mut viewport = DocViewport::new(config.ui.scroll.clone());
        viewport.set_content_extent(doc_lines.len() as f64);

        let events = Rc::new(RefCell::new(ScrollEvents::new()));
        let tracker = ScrollTracker::with_targets(&section_tops, config.ui.offset_top);
        let nav = NavBinding::attach(Rc::clone(&events), tracker);

        Self {
            config,
            theme,
            sections,
            section_tops,
            doc_lines,
            viewport,
            events,
            nav,
            should_quit: false,
            pending_key: None,
            last_emitted_offset: 0.0,
        }
    }

    /// Advance any glide and publish the new offset on the event stream.
    /// Called once per main-loop iteration.
    pub fn tick(&mut self) {
        self.viewport.update();
        self.pump_scroll();
    }

    /// Emit a scroll event if the offset moved since the last emission.
    pub fn pump_scroll(&mut self) {
        let measurement = self.viewport.measure();
        if (measurement.offset - self.last_emitted_offset).abs() > f64::EPSILON {
            self.last_emitted_offset = measurement.offset;
            self.events.borrow_mut().emit(&measurement);
        }
    }

    /// Index of the section the tab bar should highlight.
    pub fn active_section(&self) -> usize {
        self.nav.hit_target_index(&self.viewport)
    }

    /// Navigate to a section. Out-of-range indices are ignored by the
    /// tracker, so callers can pass raw user input.
    pub fn go_to_section(&mut self, index: usize) {
        tracing::debug!(index, "navigate to section");
        self.nav
            .scroll_to(&mut self.viewport, index, ScrollBehavior::Smooth);
    }

    pub fn next_section(&mut self) {
        let next = self.active_section() + 1;
        if next < self.sections.len() {
            self.go_to_section(next);
        }
    }

    pub fn prev_section(&mut self) {
        let current = self.active_section();
        if current > 0 {
            self.go_to_section(current - 1);
        }
    }

    /// Scroll the document by a line delta, bypassing section navigation.
    pub fn scroll_by(&mut self, delta: f64) {
        self.viewport.scroll_by(delta);
    }

    pub fn jump_to_top(&mut self) {
        self.viewport.scroll_by(-self.viewport.target_offset());
    }

    pub fn jump_to_bottom(&mut self) {
        let delta = self.viewport.max_scroll() - self.viewport.target_offset();
        self.viewport.scroll_by(delta);
    }

    pub fn toggle_smooth(&mut self) {
        let enabled = !self.viewport.smooth_enabled();
        self.viewport.set_smooth(enabled);
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

/// Top line offset of each section when the document is flattened.
pub fn section_tops(sections: &[Section]) -> Vec<f64> {
    let mut tops = Vec::with_capacity(sections.len());
    let mut line = 0usize;
    for section in sections {
        tops.push(line as f64);
        line += section.line_count();
    }
    tops
}

/// Flatten sections into styled document lines.
fn flatten_document(sections: &[Section], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in sections {
        lines.push(Line::from(Span::styled(
            section.title.clone(),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )));
        for item in &section.items {
            lines.push(Line::from(vec![
                Span::styled("  ▪ ", Style::default().fg(theme.bullet)),
                Span::styled(item.clone(), Style::default().fg(theme.fg)),
            ]));
        }
        lines.push(Line::default());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(n: usize, items: usize) -> Vec<Section> {
        (0..n)
            .map(|i| Section {
                title: format!("Section {i}"),
                items: (0..items).map(|j| format!("Item {j}")).collect(),
            })
            .collect()
    }

    #[test]
    fn test_section_tops_are_cumulative() {
        // Each section renders as 1 title + 3 items + 1 blank = 5 lines
        let tops = section_tops(&sections(4, 3));
        assert_eq!(tops, vec![0.0, 5.0, 10.0, 15.0]);
    }

    #[test]
    fn test_app_tracks_scrolling_through_the_event_stream() {
        let mut app = App::new(sections(4, 3), AppConfig::default());
        app.viewport.set_viewport_extent(6.0);
        // Smooth glides get in the way of a deterministic test
        app.viewport.set_smooth(false);
        assert_eq!(app.active_section(), 0);

        app.scroll_by(5.0);
        app.tick();
        assert_eq!(app.active_section(), 1);

        app.scroll_by(-5.0);
        app.tick();
        assert_eq!(app.active_section(), 0);
    }

    #[test]
    fn test_go_to_section_scrolls_and_highlights() {
        let mut app = App::new(sections(4, 3), AppConfig::default());
        app.viewport.set_viewport_extent(6.0);
        app.viewport.set_smooth(false);

        app.go_to_section(2);
        app.tick();
        assert_eq!(app.viewport.scroll_offset(), 10.0);
        // An instantaneous jump fires a single scroll event, so the natural
        // index advances only one step and catches up on later events
        assert_eq!(app.active_section(), 1);

        app.scroll_by(0.5);
        app.tick();
        assert_eq!(app.active_section(), 2);
    }

    #[test]
    fn test_last_section_highlight_sticks_at_bottom() {
        // Last section too short to ever cross its threshold naturally
        let mut app = App::new(sections(4, 3), AppConfig::default());
        app.viewport.set_viewport_extent(12.0);
        app.viewport.set_smooth(false);

        app.go_to_section(3);
        app.tick();
        // max_scroll = 20 - 12 = 8, well short of threshold 15
        assert_eq!(app.viewport.scroll_offset(), 8.0);
        assert_eq!(app.active_section(), 3);

        // Scrolling away from the bottom hands authority back to tracking
        app.scroll_by(-4.0);
        app.tick();
        assert!(app.active_section() < 3);
    }

    #[test]
    fn test_content_fitting_viewport_still_selects_target() {
        let mut app = App::new(sections(2, 1), AppConfig::default());
        app.viewport.set_viewport_extent(30.0);
        app.viewport.set_smooth(false);

        app.go_to_section(1);
        app.tick();
        // No scroll event can fire, the override alone selects the tab
        assert_eq!(app.active_section(), 1);
    }

    #[test]
    fn test_next_prev_clamp_at_the_ends() {
        let mut app = App::new(sections(2, 1), AppConfig::default());
        app.viewport.set_viewport_extent(3.0);
        app.viewport.set_smooth(false);

        app.prev_section();
        app.tick();
        assert_eq!(app.active_section(), 0);

        app.next_section();
        app.tick();
        assert_eq!(app.active_section(), 1);

        app.next_section();
        app.tick();
        assert_eq!(app.active_section(), 1);
    }

    #[test]
    fn test_empty_document_is_inert() {
        let mut app = App::new(Vec::new(), AppConfig::default());
        app.viewport.set_viewport_extent(10.0);
        app.go_to_section(3);
        app.tick();
        assert_eq!(app.active_section(), 0);
        assert!(!app.should_quit);
    }
}
