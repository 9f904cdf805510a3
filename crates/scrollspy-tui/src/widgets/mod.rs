mod document;
mod status_bar;
mod tab_bar;

pub use document::DocumentWidget;
pub use status_bar::StatusBarWidget;
pub use tab_bar::TabBarWidget;
