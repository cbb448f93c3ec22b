//! VT100 output sink: SGR colors and cursor movement.
//!
//! Stateless apart from the wrapped writer. Every write is flushed
//! immediately. The sink takes `&mut self`; share it behind a mutex if more
//! than one thread writes.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crossterm::cursor::{Hide, MoveDown, MoveLeft, MoveRight, MoveTo, MoveUp, Show};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::error::ArgsError;

const ESC: &str = "\x1b[";

/// Foreground colors from the VT100 table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Normal,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Normal,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// SGR parameter.
    pub fn code(self) -> u8 {
        match self {
            Color::Normal => 0,
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Normal => "normal",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

impl FromStr for Color {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ArgsError::UnknownColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Normal,
    Bold,
    Reverse,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Normal, Style::Bold, Style::Reverse];

    /// SGR parameter.
    pub fn code(self) -> u8 {
        match self {
            Style::Normal => 0,
            Style::Bold => 1,
            Style::Reverse => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::Normal => "normal",
            Style::Bold => "bold",
            Style::Reverse => "reverse",
        }
    }
}

impl FromStr for Style {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| ArgsError::UnknownStyle(s.to_string()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wrap `text` in a color/style escape and a trailing reset.
pub fn paint(text: &str, color: Color, style: Style) -> String {
    format!(
        "{ESC}{};{}m{text}{ESC}{};{}m",
        style.code(),
        color.code(),
        Style::Normal.code(),
        Color::Normal.code()
    )
}

/// Escape-writing sink over any [`Write`].
pub struct Terminal<W: Write> {
    out: W,
}

impl Terminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    pub fn write_color(&mut self, text: &str, color: Color, style: Style) -> io::Result<()> {
        self.write(&paint(text, color, style))
    }

    /// Move to 1-based `row`, `col`.
    pub fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(col.saturating_sub(1), row.saturating_sub(1)))?;
        self.out.flush()
    }

    pub fn move_up(&mut self, lines: u16) -> io::Result<()> {
        queue!(self.out, MoveUp(lines))?;
        self.out.flush()
    }

    pub fn move_down(&mut self, lines: u16) -> io::Result<()> {
        queue!(self.out, MoveDown(lines))?;
        self.out.flush()
    }

    pub fn move_forward(&mut self, chars: u16) -> io::Result<()> {
        queue!(self.out, MoveRight(chars))?;
        self.out.flush()
    }

    pub fn move_back(&mut self, chars: u16) -> io::Result<()> {
        queue!(self.out, MoveLeft(chars))?;
        self.out.flush()
    }

    /// Erase the current line and return to column 1.
    pub fn clear_line(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::CurrentLine))?;
        self.write("\r")
    }

    /// Erase from the cursor to end of line.
    pub fn clear_eol(&mut self) -> io::Result<()> {
        self.write(&format!("{ESC}0K"))
    }

    /// SCO save, paired with [`Terminal::restore`].
    pub fn save(&mut self) -> io::Result<()> {
        self.write(&format!("{ESC}s"))
    }

    pub fn restore(&mut self) -> io::Result<()> {
        self.write(&format!("{ESC}u"))
    }

    /// Hide the cursor.
    pub fn conceal(&mut self) -> io::Result<()> {
        queue!(self.out, Hide)?;
        self.out.flush()
    }

    /// Show the cursor.
    pub fn reveal(&mut self) -> io::Result<()> {
        queue!(self.out, Show)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted(op: impl FnOnce(&mut Terminal<Vec<u8>>) -> io::Result<()>) -> String {
        let mut term = Terminal::new(Vec::new());
        op(&mut term).unwrap();
        String::from_utf8(term.into_inner()).unwrap()
    }

    #[test]
    fn paint_wraps_and_resets() {
        assert_eq!(paint("hi", Color::Red, Style::Bold), "\x1b[1;31mhi\x1b[0;0m");
        assert_eq!(paint("x", Color::Normal, Style::Normal), "\x1b[0;0mx\x1b[0;0m");
    }

    #[test]
    fn color_table() {
        let codes: Vec<u8> = Color::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec![0, 30, 31, 32, 33, 34, 35, 36, 37]);
    }

    #[test]
    fn names_round_trip() {
        for color in Color::ALL {
            assert_eq!(color.name().parse::<Color>().unwrap(), color);
        }
        for style in Style::ALL {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn unknown_names_rejected() {
        assert!(matches!("purple".parse::<Color>(), Err(ArgsError::UnknownColor(n)) if n == "purple"));
        assert!(matches!("italic".parse::<Style>(), Err(ArgsError::UnknownStyle(n)) if n == "italic"));
    }

    #[test]
    fn write_color_emits_painted_text() {
        let out = emitted(|t| t.write_color("ok", Color::Green, Style::Normal));
        assert_eq!(out, "\x1b[0;32mok\x1b[0;0m");
    }

    #[test]
    fn cursor_sequences() {
        assert_eq!(emitted(|t| t.move_to(3, 7)), "\x1b[3;7H");
        assert_eq!(emitted(|t| t.move_up(2)), "\x1b[2A");
        assert_eq!(emitted(|t| t.move_down(4)), "\x1b[4B");
        assert_eq!(emitted(|t| t.move_forward(5)), "\x1b[5C");
        assert_eq!(emitted(|t| t.move_back(6)), "\x1b[6D");
        assert_eq!(emitted(|t| t.clear_line()), "\x1b[2K\r");
        assert_eq!(emitted(|t| t.clear_eol()), "\x1b[0K");
        assert_eq!(emitted(|t| t.save()), "\x1b[s");
        assert_eq!(emitted(|t| t.restore()), "\x1b[u");
        assert_eq!(emitted(|t| t.conceal()), "\x1b[?25l");
        assert_eq!(emitted(|t| t.reveal()), "\x1b[?25h");
    }
}
