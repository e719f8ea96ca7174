// src/main.rs

use std::io::Read;

use color_eyre::eyre::Result;
use tracing::info;

use privscan_rs::core::scanner::run_scan;
use privscan_rs::{logging, report};

/// Thin driver around the scanner library: reads text from a file argument
/// or stdin, runs one scan, and prints the report to stdout. File-type
/// handling and document text extraction live with the caller; this binary
/// only ever consumes a plain string.
fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    let mut as_json = false;
    let mut path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            _ => path = Some(arg),
        }
    }

    let text = match &path {
        Some(p) => {
            info!(path = %p, "Reading input file.");
            std::fs::read_to_string(p)?
        }
        None => {
            info!("Reading input from stdin.");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let scan_report = run_scan(&text);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&scan_report)?);
    } else {
        print!("{}", report::render(&scan_report));
    }

    Ok(())
}
