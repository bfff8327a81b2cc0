use anyhow::{Context, Result};
use nailfile::validation::{validate_file, ValidationLevel};
use serde_json::json;
use std::path::PathBuf;

pub fn cmd_validate(input: PathBuf, level_str: String, json_output: bool) -> Result<()> {
    // Parse validation level
    let level = match level_str.to_lowercase().as_str() {
        "standard" => ValidationLevel::Standard,
        "strict" => ValidationLevel::Strict,
        _ => {
            anyhow::bail!(
                "Invalid validation level: '{}'. Must be: standard or strict",
                level_str
            );
        }
    };

    let report = validate_file(&input, level)
        .with_context(|| format!("Validation failed: {}", input.display()))?;

    if json_output {
        let output = json!({
            "file": input.display().to_string(),
            "validation_level": level_str,
            "is_valid": report.is_valid(),
            "errors": report.errors,
            "warnings": report.warnings,
            "info": report.info,
            "magic": report.magic,
            "layout": report.layout,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Validating: {}", input.display());
        println!("Level:      {}", level_str);
        println!();
        println!("Size:           {} bytes", report.layout.file_size);
        println!("Entry blocks:   {}", report.layout.entry_blocks);
        println!("Total entries:  {}", report.layout.total_entries);
        println!("Groups of 4:    {}", report.layout.full_groups);
        println!("Single pairs:   {}", report.layout.remainder);
        println!("Trailing bytes: {}", report.layout.trailing_bytes);

        for msg in &report.info {
            println!("  INFO: {}", msg);
        }
        for msg in &report.warnings {
            println!("  WARNING: {}", msg);
        }
        for msg in &report.errors {
            println!("  ERROR: {}", msg);
        }
        println!();
        if report.is_valid() {
            println!("✓ VALID");
        } else {
            println!("✗ INVALID ({} errors)", report.errors.len());
        }
    }

    if !report.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}
