//! Writes classified lines to an output stream.

use std::io::{self, Write};

use fb_sequence::{FizzBuzz, Line};

use crate::style::Style;

/// Line writer over any `Write`. Counts the lines it has formatted so a
/// failed run can still report how far it got. With a buffered writer a
/// formatted line is not necessarily delivered.
pub struct Printer<W: Write> {
    writer: W,
    style: Style,
    lines: usize,
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W, style: Style) -> Self {
        Self {
            writer,
            style,
            lines: 0,
        }
    }

    /// Write one newline-terminated line.
    pub fn write_line(&mut self, line: &Line) -> io::Result<()> {
        writeln!(
            self.writer,
            "{}{}{}",
            self.style.class_start(&line.class),
            line,
            self.style.class_end(&line.class)
        )?;
        self.lines += 1;
        Ok(())
    }

    /// Write every line of `seq` in order.
    pub fn write_all(&mut self, seq: &FizzBuzz) -> io::Result<()> {
        for line in seq {
            self.write_line(&line)?;
        }
        Ok(())
    }

    pub fn lines_formatted(&self) -> usize {
        self.lines
    }

    /// Flush the underlying writer and return the line count.
    pub fn flush(&mut self) -> io::Result<usize> {
        self.writer.flush()?;
        Ok(self.lines)
    }
}

/// Print the whole sequence through `printer` and flush it.
///
/// On error the printer still reports how many lines it formatted.
pub fn write_sequence<W: Write>(seq: &FizzBuzz, printer: &mut Printer<W>) -> io::Result<usize> {
    printer.write_all(seq)?;
    printer.flush()
}
