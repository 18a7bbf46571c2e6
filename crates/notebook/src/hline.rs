//! Horizontal separator lines for console output.

use std::io::{self, Write};

/// The box-drawing character used for lines (U+2500).
pub const HLINE: char = '\u{2500}';

/// Returns a horizontal line of `length` characters.
#[must_use]
pub fn hline(length: usize) -> String {
    std::iter::repeat_n(HLINE, length).collect()
}

/// Writes a horizontal line of `length` characters followed by a newline.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_hline<W: Write + ?Sized>(writer: &mut W, length: usize) -> io::Result<()> {
    writeln!(writer, "{}", hline(length))
}

/// Prints a horizontal line of `length` characters to standard output.
///
/// # Errors
///
/// Returns an error if standard output cannot be written.
pub fn print_hline(length: usize) -> io::Result<()> {
    write_hline(&mut io::stdout().lock(), length)
}
