// Output routing: a file on disk, or banner-wrapped text on a stream

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub const BANNER_START: &str = "--- EXTRACTED TEXT ---";
pub const BANNER_END: &str = "--- END OF EXTRACTED TEXT ---";

/// Write `text` to `output_path` as UTF-8, replacing any existing file.
pub fn write_output_file(output_path: impl AsRef<Path>, text: &str) -> Result<()> {
    let output_path = output_path.as_ref();
    fs::write(output_path, text)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;
    Ok(())
}

/// Write `text` between the start and end banners, each surrounded by a
/// blank line.
pub fn write_banner_text<W: Write>(mut writer: W, text: &str) -> io::Result<()> {
    writeln!(writer, "\n{BANNER_START}\n")?;
    writeln!(writer, "{text}")?;
    writeln!(writer, "\n{BANNER_END}\n")?;
    writer.flush()
}
