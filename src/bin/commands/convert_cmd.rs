use anyhow::{Context, Result};
use nailfile::{load, save, DecodeOptions};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Default output path: the input path with `_custom` appended
fn custom_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push("_custom");
    PathBuf::from(name)
}

pub fn cmd_convert(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    println!("Reading {}", input.display());

    let decoded = load(&input, &DecodeOptions::default())
        .with_context(|| format!("Failed to read NAIL file: {}", input.display()))?;

    println!("read() returned {}", decoded.status);
    for point in &decoded.points {
        println!("{}", point);
    }
    println!("Total Nails: {}", decoded.points.len());

    let out_path = output.unwrap_or_else(|| custom_path(&input));
    save(&out_path, &decoded.points)
        .with_context(|| format!("Failed to write NAIL file: {}", out_path.display()))?;
    println!("Written '{}'.", out_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_path() {
        let path = Path::new("/tmp/pins.nail");
        assert_eq!(custom_path(path), PathBuf::from("/tmp/pins.nail_custom"));
    }
}
