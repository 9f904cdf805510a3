use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use scrollspy_core::{AppConfig, ScrollSource};
use scrollspy_tui::{
    app::{App, Section},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    widgets::{DocumentWidget, StatusBarWidget, TabBarWidget},
};

pub fn run(config: AppConfig) -> Result<()> {
    let sections = demo_sections(config.demo.sections, config.demo.items_per_section);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("scrollspy")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.scroll.animation_fps);
    let mut app = App::new(sections, config);

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        // Advance glides and publish scroll events before drawing
        app.tick();

        terminal.draw(|frame| render(frame, app))?;

        if let Some(event) = event_handler.next(app.viewport.is_gliding())? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app);
                    apply_action(app, action);
                }
                AppEvent::MouseScroll(delta) => app.scroll_by(delta as f64),
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar
            Constraint::Min(1),    // document
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    // The document area is the scroll source's visible extent
    app.viewport.set_viewport_extent(chunks[1].height as f64);

    TabBarWidget::render(frame, chunks[0], app);
    DocumentWidget::render(frame, chunks[1], app);
    StatusBarWidget::render(frame, chunks[2], app);
}

fn apply_action(app: &mut App, action: Action) {
    // Any action other than the first 'g' breaks the 'gg' sequence
    if action != Action::PendingG {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::NextSection => app.next_section(),
        Action::PrevSection => app.prev_section(),
        Action::GoToSection(index) => app.go_to_section(index),
        Action::ScrollDown => app.scroll_by(1.0),
        Action::ScrollUp => app.scroll_by(-1.0),
        Action::ScrollHalfPageDown => app.scroll_by(half_page(app)),
        Action::ScrollHalfPageUp => app.scroll_by(-half_page(app)),
        Action::ScrollPageDown => app.scroll_by(app.viewport.viewport_extent()),
        Action::ScrollPageUp => app.scroll_by(-app.viewport.viewport_extent()),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => app.pending_key = Some('g'),
        Action::ToggleSmooth => app.toggle_smooth(),
        Action::None => {}
    }
}

fn half_page(app: &App) -> f64 {
    (app.viewport.viewport_extent() / 2.0).max(1.0)
}

/// Generated demo content, one tab per section.
fn demo_sections(sections: usize, items_per_section: usize) -> Vec<Section> {
    (0..sections)
        .map(|section| Section {
            title: format!("Section {section}"),
            items: (0..items_per_section)
                .map(|item| format!("Item {item}"))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_sections_shape() {
        let sections = demo_sections(3, 2);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, "Section 0");
        assert_eq!(sections[2].items, vec!["Item 0", "Item 1"]);
    }

    #[test]
    fn test_actions_drive_the_app() {
        let mut app = App::new(demo_sections(3, 2), AppConfig::default());
        app.viewport.set_viewport_extent(4.0);
        app.viewport.set_smooth(false);

        apply_action(&mut app, Action::GoToSection(1));
        app.tick();
        assert_eq!(app.viewport.scroll_offset(), 4.0);

        apply_action(&mut app, Action::JumpToTop);
        app.tick();
        assert_eq!(app.viewport.scroll_offset(), 0.0);

        apply_action(&mut app, Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_pending_g_survives_only_one_action() {
        let mut app = App::new(demo_sections(2, 1), AppConfig::default());
        apply_action(&mut app, Action::PendingG);
        assert_eq!(app.pending_key, Some('g'));

        apply_action(&mut app, Action::ScrollDown);
        assert_eq!(app.pending_key, None);
    }
}
