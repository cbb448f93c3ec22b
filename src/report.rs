//! Report rendering for the `argsplit` binary.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::args::{Arguments, CommandForm};
use crate::config::{OutputFormat, ResolvedPalette, Settings};
use crate::error::ArgsError;
use crate::term::{paint, Color, Style};

/// Serializable view of a classification. Options are key-sorted so output
/// is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<'a> {
    pub command: &'a str,
    pub flags: Vec<String>,
    pub options: BTreeMap<&'a str, Option<&'a str>>,
    pub positional: &'a [String],
}

impl<'a> Report<'a> {
    pub fn new(args: &'a Arguments, settings: &Settings) -> Self {
        let form = if settings.strip_command {
            CommandForm::Stripped
        } else {
            CommandForm::Full
        };

        Self {
            command: args.command_as(form),
            flags: args.flags().iter().map(char::to_string).collect(),
            options: args
                .options()
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_deref()))
                .collect(),
            positional: args.positional(),
        }
    }
}

/// One line per category. `palette` is `None` for plain output.
pub fn render_text(report: &Report<'_>, palette: Option<&ResolvedPalette>) -> String {
    let colorize = |text: &str, color: fn(&ResolvedPalette) -> Color| match palette {
        Some(palette) => paint(text, color(palette), palette.style),
        None => text.to_string(),
    };

    let flags = report
        .flags
        .iter()
        .map(|f| colorize(&format!("-{f}"), |p| p.flags))
        .collect::<Vec<_>>()
        .join(" ");

    let options = report
        .options
        .iter()
        .map(|(name, value)| {
            let token = match value {
                Some(value) => format!("--{name}={value}"),
                None => format!("--{name}"),
            };
            colorize(&token, |p| p.options)
        })
        .collect::<Vec<_>>()
        .join(" ");

    let positional = report
        .positional
        .iter()
        .enumerate()
        .map(|(i, arg)| format!("[{i}] {}", colorize(arg, |p| p.positional)))
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str(&format!("command:    {}\n", colorize(report.command, |p| p.command)));
    out.push_str(&format!("flags:      {flags}\n"));
    out.push_str(&format!("options:    {options}\n"));
    out.push_str(&format!("positional: {positional}\n"));
    out
}

/// Pretty-printed JSON.
pub fn render_json(report: &Report<'_>) -> Result<String, ArgsError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render per `settings`. Text output always resolves the palette, so a bad
/// color name fails here even when color is off. Color is applied only when
/// the color mode allows it.
pub fn render(args: &Arguments, settings: &Settings) -> Result<String, ArgsError> {
    let report = Report::new(args, settings);

    match settings.format {
        OutputFormat::Json => {
            let mut json = render_json(&report)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            let palette = settings.palette.resolve()?;
            let palette = settings.color.enabled().then_some(palette);
            Ok(render_text(&report, palette.as_ref()))
        }
    }
}

/// Unconsumed-token message for strict mode.
pub fn render_unconsumed(tokens: &[String], color: bool) -> String {
    let message = format!("unexpected arguments: {}", tokens.join(" "));
    if color {
        paint(&message, Color::Red, Style::Bold)
    } else {
        message
    }
}
