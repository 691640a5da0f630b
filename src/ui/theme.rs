use crossterm::queue;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use std::io::{self, Write};

pub struct Theme {
    pub tree: Color, // Green
}

pub const DEFAULT_THEME: Theme = Theme { tree: Color::Green };

/// Writer that switches the foreground color on creation and resets it when
/// dropped, so the terminal is restored on every exit path.
///
/// With `color == None` it is a plain pass-through.
pub struct ForegroundGuard<'w, W: Write> {
    out: &'w mut W,
    active: bool,
}

impl<'w, W: Write> ForegroundGuard<'w, W> {
    pub fn new(out: &'w mut W, color: Option<Color>) -> io::Result<Self> {
        if let Some(color) = color {
            queue!(out, SetForegroundColor(color))?;
        }
        Ok(Self {
            out,
            active: color.is_some(),
        })
    }
}

impl<W: Write> Write for ForegroundGuard<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for ForegroundGuard<'_, W> {
    fn drop(&mut self) {
        if self.active {
            // Nothing to report to from a destructor.
            let _ = queue!(self.out, ResetColor);
            let _ = self.out.flush();
        }
    }
}
