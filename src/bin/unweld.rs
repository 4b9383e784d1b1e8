//! Provides the `unweld-cli` tool for flattening OBJ geometry.
//!
//! Usage: `unweld-cli <model.obj> [output.json]`
//!
//! Parses the model and reports face-vertex and triangle counts. If an
//! output path is given, the flattened geometry is written there as JSON.
//!
//! # Examples
//! ```text
//! unweld-cli flag.obj flag.json
//! ```

use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <model.obj> [output.json]", args[0]);
        eprintln!("  Flattens OBJ geometry into unindexed vertex arrays.");
        eprintln!("  With an output path, writes the arrays as JSON.");
        process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let output = args.get(2).map(PathBuf::from);

    if !input.exists() {
        eprintln!("Error: file not found: {}", input.display());
        process::exit(1);
    }

    let geometry = match unweld::obj::parse_path(&input) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    eprintln!(
        "{}: {} face-vertices, {} triangles",
        input.display(),
        geometry.face_vertex_count,
        geometry.triangle_count()
    );

    if let Some(output) = output {
        if let Err(e) = write_json(&geometry, &output) {
            eprintln!("Error: failed to write {}: {}", output.display(), e);
            process::exit(1);
        }
        eprintln!("Saved {}", output.display());
    }
}

fn write_json(
    geometry: &unweld::ParsedGeometry,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(geometry)?;
    std::fs::write(path, json)?;
    Ok(())
}
