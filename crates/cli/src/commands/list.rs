//! `envkit list`: show the variables supplied by `*.env` files.
//!
//! Values are hidden unless `--values` is passed, since overlay files commonly
//! hold credentials.

use anyhow::Result;
use envkit_config::EnvOverlay;
use serde::Serialize;
use std::path::Path;

use crate::args::OutputFormat;

const HIDDEN: &str = "<hidden>";

#[derive(Debug, Serialize)]
struct ListedEntry<'a> {
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
    file: &'a Path,
}

fn listed_entries(overlay: &EnvOverlay, show_values: bool) -> Vec<ListedEntry<'_>> {
    overlay
        .sorted_entries()
        .into_iter()
        .map(|(key, entry)| ListedEntry {
            key,
            value: show_values.then_some(entry.value.as_str()),
            file: &entry.file,
        })
        .collect()
}

fn render_text(entries: &[ListedEntry<'_>]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}={}\t{}",
                entry.key,
                entry.value.unwrap_or(HIDDEN),
                entry.file.display()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run(overlay: &EnvOverlay, show_values: bool, output: OutputFormat) -> Result<()> {
    let entries = listed_entries(overlay, show_values);
    match output {
        OutputFormat::Text => {
            if entries.is_empty() {
                eprintln!("No *.env overlay entries loaded.");
            } else {
                println!("{}", render_text(&entries));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }
    Ok(())
}
