//! # Config
//! This module contains submodules that contain structs for configuring the window and the app around it
//!
//! Everything is read once at startup from a [ron] file, and every struct is `#[serde(default)]`, so a config file only has to mention what it changes
use std::fs;
use std::path::Path;

use color_eyre::eyre::{self, WrapErr};
use color_eyre::{Help, SectionExt};
use serde::{Deserialize, Serialize};

use crate::config::tracing_config::TracingConfig;
use crate::config::window_config::WindowConfig;

pub mod gui_config;
pub mod tracing_config;
pub mod window_config;

/// Default location of the config file, relative to the working directory
pub const BASE_CONFIG_PATH: &str = "config.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub tracing: TracingConfig,
}

impl AppConfig {
    /// Reads and deserialises the config at `path`
    pub fn load_from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read config file at {path:?}"))?;
        Self::from_ron(&data)
    }

    /// Deserialises a config from a RON string
    pub fn from_ron(data: &str) -> eyre::Result<Self> {
        ron::from_str::<AppConfig>(data)
            .wrap_err("failed to deserialise config")
            .with_section(|| data.to_owned().header("Config Data"))
    }

    /// Tries [load_from_file](Self::load_from_file), falling back to the default config if that fails
    ///
    /// Logging isn't set up yet when this runs (its config lives in here), so the problem is printed straight to stderr
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(report) => {
                let report =
                    report.wrap_err("using default config (could not load config from file)");
                eprintln!("problem loading config: {:?}", report);
                AppConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::gui_config::{FontRole, FontSource, FontSpec};
    use super::tracing_config::LogLevel;
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let config = AppConfig::from_ron("()").expect("empty config should parse");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = AppConfig::from_ron(
            r#"(
                window: (
                    title: "Demo",
                    gui: (
                        viewports: false,
                        fonts: [(role: Heading, size_pixels: 30.0, source: File("fonts/heading.ttf"))],
                    ),
                ),
                tracing: (default_level: Trace),
            )"#,
        )
        .expect("partial config should parse");

        assert_eq!(config.window.title, "Demo");
        assert_eq!(config.window.size, [1280, 720]);
        assert!(config.window.gui.docking);
        assert!(!config.window.gui.viewports);
        assert_eq!(
            config.window.gui.fonts,
            vec![FontSpec::new(
                FontRole::Heading,
                30.0,
                FontSource::File("fonts/heading.ttf".into())
            )]
        );
        assert_eq!(config.tracing.default_level, LogLevel::Trace);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let report = AppConfig::from_ron("(window: 5)").unwrap_err();
        assert_eq!(report.to_string(), "failed to deserialise config");
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let config = AppConfig::load_or_default("this/path/does/not/exist.ron");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn clear_colour_is_premultiplied() {
        let config = WindowConfig {
            clear_colour: [1.0, 0.5, 0.0, 0.5].into(),
            ..WindowConfig::default()
        };
        assert_eq!(config.premultiplied_clear_colour(), [0.5, 0.25, 0.0, 0.5]);
    }
}
