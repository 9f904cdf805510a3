use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use scrollspy_core::ScrollSource;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let total = app.sections.len();
        let active = if total == 0 { 0 } else { app.active_section() + 1 };
        let motion = if app.viewport.smooth_enabled() {
            "smooth"
        } else {
            "instant"
        };

        let mut status_text = format!(
            " Section {}/{} | line {:.0} | {}",
            active,
            total,
            app.viewport.scroll_offset(),
            motion
        );
        if app.nav.at_bottom() {
            status_text.push_str(" | BOTTOM");
        }

        let help_hint = " q:quit Tab/h/l:tabs 1-9:jump j/k:scroll gg/G:ends s:smooth ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg).bg(app.theme.bg_highlight),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.bg_highlight),
            ),
            Span::styled(
                help_hint,
                Style::default()
                    .fg(app.theme.hint)
                    .bg(app.theme.bg_highlight),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
