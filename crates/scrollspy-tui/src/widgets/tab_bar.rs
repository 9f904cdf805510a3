use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::app::App;

/// Fixed tab bar mirroring the active section.
pub struct TabBarWidget;

impl TabBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let titles: Vec<Line> = app
            .sections
            .iter()
            .map(|section| Line::from(section.title.clone()))
            .collect();

        let tabs = Tabs::new(titles)
            .select(app.active_section())
            .style(
                Style::default()
                    .fg(app.theme.tab_inactive)
                    .bg(app.theme.bg_panel),
            )
            .highlight_style(
                Style::default()
                    .fg(app.theme.tab_active)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(app.theme.fg_dim)),
            );

        frame.render_widget(tabs, area);
    }
}
