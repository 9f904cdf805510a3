use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use scrollspy_core::ScrollSource;

use crate::app::App;

/// Scrollable document body.
pub struct DocumentWidget;

impl DocumentWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let offset = app.viewport.scroll_offset().round() as u16;

        let paragraph = Paragraph::new(app.doc_lines.clone())
            .style(Style::default().bg(app.theme.bg))
            .scroll((offset, 0));
        frame.render_widget(paragraph, area);

        if app.viewport.max_scroll() > 0.0 {
            let mut state = ScrollbarState::new(app.viewport.max_scroll().round() as usize)
                .position(offset as usize);
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(app.theme.fg_dim))
                .thumb_style(Style::default().fg(app.theme.accent));
            frame.render_stateful_widget(scrollbar, area, &mut state);
        }
    }
}
