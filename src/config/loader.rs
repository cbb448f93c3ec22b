use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{ColorMode, Palette, Settings};
use crate::term::{Color, Style};

/// Why a settings file could not be turned into [`Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but reading it failed.
    #[error("cannot read settings '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown values for known keys.
    #[error("settings '{path}' are not valid TOML: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A palette entry names a color or style missing from the escape table.
    #[error("invalid settings: {message}")]
    ValidationError { message: String },
}

impl Settings {
    /// `argsplit/config.toml` under the platform config directory, or under
    /// `.` when the platform has none.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("argsplit")
            .join("config.toml")
    }

    /// Loads settings from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Read, parse and validate `path`. A missing file means "all defaults".
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        settings.validate()?;
        tracing::debug!(path = %path.display(), ?settings, "loaded config");
        Ok(settings)
    }

    /// Every palette entry must resolve against the escape table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.palette.resolve().map(|_| ())
    }
}

/// Palette with names resolved against the escape-code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPalette {
    pub command: Color,
    pub flags: Color,
    pub options: Color,
    pub positional: Color,
    pub style: Style,
}

impl Palette {
    pub fn resolve(&self) -> Result<ResolvedPalette, ConfigError> {
        let color = |section: &str, name: &str| {
            name.parse::<Color>()
                .map_err(|e| ConfigError::ValidationError {
                    message: format!("palette.{section}: {e}"),
                })
        };

        Ok(ResolvedPalette {
            command: color("command", &self.command)?,
            flags: color("flags", &self.flags)?,
            options: color("options", &self.options)?,
            positional: color("positional", &self.positional)?,
            style: self
                .style
                .parse::<Style>()
                .map_err(|e| ConfigError::ValidationError {
                    message: format!("palette.style: {e}"),
                })?,
        })
    }
}

impl ColorMode {
    /// Whether to emit escape codes to a stream whose terminal status is
    /// `is_terminal`.
    pub fn applies_to(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal,
        }
    }

    /// For the report on stdout.
    pub fn enabled(self) -> bool {
        self.applies_to(std::io::stdout().is_terminal())
    }

    /// For diagnostics on stderr.
    pub fn enabled_on_stderr(self) -> bool {
        self.applies_to(std::io::stderr().is_terminal())
    }
}
