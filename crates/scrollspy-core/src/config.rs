use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Uniform adjustment subtracted from every section threshold,
    /// compensating for fixed chrome above the scrollable area
    #[serde(default)]
    pub offset_top: f64,
    /// Scroll behavior configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            offset_top: 0.0,
            scroll: ScrollConfig::default(),
        }
    }
}

/// Smooth scrolling configuration for the demo viewport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Glide duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Animation frame rate while a glide is active
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            animation_fps: default_animation_fps(),
            easing: EasingType::default(),
        }
    }
}

/// Easing curve for smooth scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// No interpolation, jump at the end
    None,
    /// Constant speed
    Linear,
    /// Cubic ease-out
    #[default]
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Number of generated sections
    #[serde(default = "default_sections")]
    pub sections: usize,
    /// Items per generated section
    #[serde(default = "default_items")]
    pub items_per_section: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            items_per_section: default_items(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_duration() -> u64 {
    150
}

fn default_animation_fps() -> u32 {
    60
}

fn default_sections() -> usize {
    10
}

fn default_items() -> usize {
    5
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/scrollspy/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("scrollspy")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.offset_top, 0.0);
        assert!(config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.scroll.easing, EasingType::Cubic);
        assert_eq!(config.demo.sections, 10);
        assert_eq!(config.demo.items_per_section, 5);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            offset_top = 3.0

            [ui.scroll]
            smooth_enabled = false
            easing = "linear"
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.offset_top, 3.0);
        assert!(!config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.scroll.easing, EasingType::Linear);
        // Untouched sections keep their defaults
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.demo.sections, 10);
    }
}
