use anyhow::{Context, Result};
use nailfile::{load, DecodeOptions};
use serde_json::json;
use std::path::PathBuf;

pub fn cmd_read(input: PathBuf, json_output: bool, strict: bool, raw: bool) -> Result<()> {
    let mut options = DecodeOptions::new().keep_raw(raw);
    if strict {
        options = options.strict();
    }

    let decoded = load(&input, &options)
        .with_context(|| format!("Failed to read NAIL file: {}", input.display()))?;

    if json_output {
        let mut output = json!({
            "file": input.display().to_string(),
            "status": decoded.status,
            "count": decoded.points.len(),
            "trailing_bytes": decoded.trailing_bytes(),
            "points": decoded.points,
        });

        if let Some(raw_data) = &decoded.raw {
            let records: Vec<Vec<[i16; 2]>> = raw_data
                .records
                .iter()
                .map(|r| r.pairs.iter().map(|p| [p.x.get(), p.y.get()]).collect())
                .collect();
            let singles: Vec<[i16; 2]> = raw_data
                .singles
                .iter()
                .map(|p| [p.x.get(), p.y.get()])
                .collect();
            output["raw"] = json!({ "records": records, "singles": singles });
        }

        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Reading {}", input.display());
    println!("read() returned {}", decoded.status);
    for point in &decoded.points {
        println!("{}", point);
    }
    println!("Total Nails: {}", decoded.points.len());

    if decoded.is_truncated() {
        eprintln!(
            "Warning: {} trailing byte(s) were ignored",
            decoded.trailing_bytes()
        );
    }

    if let Some(raw_data) = &decoded.raw {
        println!();
        println!("Raw records:");
        for (i, record) in raw_data.records.iter().enumerate() {
            let values: Vec<String> = record
                .pairs
                .iter()
                .map(|p| format!("({}, {})", p.x.get(), p.y.get()))
                .collect();
            println!("  [{}] {}", i, values.join(" "));
        }
        for pair in &raw_data.singles {
            println!("  single ({}, {})", pair.x.get(), pair.y.get());
        }
    }

    Ok(())
}
