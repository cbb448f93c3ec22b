mod loader;
mod types;

pub use loader::{ConfigError, ResolvedPalette};
pub use types::{ColorMode, OutputFormat, Palette, Settings};
