use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use super::size::format_size;

pub const BRANCH: &str = "├──── ";
pub const LAST_BRANCH: &str = "└──── ";
pub const PIPE: &str = "│     ";
pub const BLANK: &str = "      ";

/// Write the indentation and connector for an entry.
///
/// `ancestor_has_more` holds one flag per ancestor level, true when that
/// ancestor still has siblings below it.
pub fn write_prefix<W: Write>(
    writer: &mut W,
    ancestor_has_more: &[bool],
    is_last: bool,
) -> io::Result<()> {
    for &has_more in ancestor_has_more {
        if has_more {
            writer.write_all(PIPE.as_bytes())?;
        } else {
            writer.write_all(BLANK.as_bytes())?;
        }
    }

    if is_last {
        writer.write_all(LAST_BRANCH.as_bytes())
    } else {
        writer.write_all(BRANCH.as_bytes())
    }
}

/// Write `[ <size>] <name>` and end the line. Only the label is emphasized.
pub fn write_label<W: WriteColor>(
    writer: &mut W,
    size_bytes: u64,
    name: &str,
    emphasize: bool,
) -> io::Result<()> {
    if emphasize {
        writer.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
    }
    write!(writer, "[ {}] {}", format_size(size_bytes), name)?;
    if emphasize {
        writer.reset()?;
    }
    writeln!(writer)
}
