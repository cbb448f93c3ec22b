use serde::{Deserialize, Serialize};

/// Root settings for the `argsplit` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Report format.
    pub format: OutputFormat,
    /// When to emit ANSI colors.
    pub color: ColorMode,
    /// Print the command name without leading directories.
    pub strip_command: bool,
    /// Fail when tokens are left unconsumed.
    pub strict: bool,
    /// Colors used by the text report.
    pub palette: Palette,
}

/// How the classification is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Color policy for the text report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Color names per report section. Names come from the terminal color table
/// (`normal`, `black`, `red`, `green`, `yellow`, `blue`, `magenta`, `cyan`,
/// `white`); `style` is one of `normal`, `bold`, `reverse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub command: String,
    pub flags: String,
    pub options: String,
    pub positional: String,
    pub style: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            command: "white".to_string(),
            flags: "green".to_string(),
            options: "cyan".to_string(),
            positional: "yellow".to_string(),
            style: "bold".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: ColorMode::default(),
            strip_command: false,
            strict: false,
            palette: Palette::default(),
        }
    }
}
