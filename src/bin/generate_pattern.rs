//! Pattern generator binary — writes pattern or configuration files.
//!
//! Usage: cargo run --bin generate_pattern -- [OPTIONS]
//!
//! Options:
//!   --pattern <NAME>  Pattern to generate (default: logo); --list to enumerate
//!   --size <N>        Grid side length (default: 5)
//!   --out <PATH>      Output file (default: pattern.json)
//!   --full            Export a full configuration instead of a bare pattern
//!   --list            List available pattern names and exit

use std::path::PathBuf;

use logocube::cube::CubeStore;
use logocube::io::{export_full_config, export_pattern};
use logocube::pattern::Pattern;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();

    if has_flag(&args, "--list") {
        println!("Available patterns:");
        for pattern in Pattern::ALL {
            println!("  {}", pattern.name());
        }
        return;
    }

    let pattern_name = parse_str_arg(&args, "--pattern").unwrap_or_else(|| "logo".to_string());
    let size = parse_i32_arg(&args, "--size").unwrap_or(5);
    let out = PathBuf::from(
        parse_str_arg(&args, "--out").unwrap_or_else(|| "pattern.json".to_string()),
    );
    let full = has_flag(&args, "--full");

    let Some(pattern) = Pattern::from_name(&pattern_name) else {
        eprintln!("Unknown pattern '{}'; try --list", pattern_name);
        std::process::exit(1);
    };

    let mut store = CubeStore::new(size);
    store.apply_pattern(pattern);

    let json = if full {
        serde_json::to_string_pretty(&export_full_config(&store))
    } else {
        serde_json::to_string_pretty(&export_pattern(&store))
    };

    let json = match json {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to serialize pattern: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = std::fs::write(&out, &json) {
        eprintln!("Failed to write {}: {}", out.display(), e);
        std::process::exit(1);
    }

    println!("=== Logocube Pattern Generator ===");
    println!("Pattern: {}", store.pattern_name());
    println!("Size:    {0}x{0}x{0}", size);
    println!("Cubes:   {}", store.cube_count());
    println!("Format:  {}", if full { "full configuration" } else { "pattern" });
    println!("Output:  {}", out.display());
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

fn parse_str_arg(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_i32_arg(args: &[String], name: &str) -> Option<i32> {
    parse_str_arg(args, name).and_then(|v| v.parse().ok())
}
