use ratatui::style::Color;

/// Color palette for the demo UI
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,

    // Foreground colors
    pub fg: Color,
    pub fg_dim: Color,

    // Semantic colors
    pub accent: Color,
    pub title: Color,
    pub bullet: Color,
    pub tab_active: Color,
    pub tab_inactive: Color,
    pub hint: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Nord-ish dark palette
        Self {
            bg: Color::Rgb(0x2e, 0x34, 0x40),
            bg_panel: Color::Rgb(0x3b, 0x42, 0x52),
            bg_highlight: Color::Rgb(0x43, 0x4c, 0x5e),
            fg: Color::Rgb(0xd8, 0xde, 0xe9),
            fg_dim: Color::Rgb(0x4c, 0x56, 0x6a),
            accent: Color::Rgb(0x88, 0xc0, 0xd0),
            title: Color::Rgb(0x81, 0xa1, 0xc1),
            bullet: Color::Rgb(0xa3, 0xbe, 0x8c),
            tab_active: Color::Rgb(0xeb, 0xcb, 0x8b),
            tab_inactive: Color::Rgb(0x61, 0x6e, 0x88),
            hint: Color::Rgb(0x61, 0x6e, 0x88),
            warning: Color::Rgb(0xd0, 0x87, 0x70),
        }
    }
}
