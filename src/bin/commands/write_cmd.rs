use anyhow::{Context, Result};
use nailfile::{save, Point2D};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

pub fn cmd_write(input: PathBuf, output: PathBuf) -> Result<()> {
    let text = if input.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read points from stdin")?;
        buf
    } else {
        fs::read_to_string(&input)
            .with_context(|| format!("Failed to read points file: {}", input.display()))?
    };

    let points: Vec<Point2D> = serde_json::from_str(&text)
        .with_context(|| format!("Invalid points JSON in {}", input.display()))?;

    let report = save(&output, &points)
        .with_context(|| format!("Failed to write NAIL file: {}", output.display()))?;

    if report.has_overflow() {
        eprintln!(
            "Warning: {} coordinate(s) were outside the 16-bit range and wrapped",
            report.overflowed_coordinates
        );
    }
    println!(
        "Written '{}' ({} nails, {} bytes).",
        output.display(),
        report.points_written,
        report.bytes_written
    );
    Ok(())
}
