//! Grayscale matrix export.

use skypath_core::GrayscaleMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default artifact name for the rescaled matrix.
pub const DEFAULT_GRAYSCALE_FILE: &str = "grayscaleMap.dat";

/// Write one row per line with values separated by single spaces.
pub fn write_grayscale<W: Write>(map: &GrayscaleMap, mut writer: W) -> std::io::Result<()> {
    for row in map.rows() {
        for (idx, value) in row.iter().enumerate() {
            if idx > 0 {
                writer.write_all(b" ")?;
            }
            write!(writer, "{}", value)?;
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

pub fn export_grayscale(map: &GrayscaleMap, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)?;
    write_grayscale(map, BufWriter::new(file))?;
    tracing::info!(
        path = %path.display(),
        rows = map.height(),
        cols = map.width(),
        "wrote grayscale map"
    );
    Ok(())
}
