//! Line-oriented file persistence
//!
//! The durable mirror of the frontier: a queued-links file (overwritten on
//! every pipeline run), an append-only crawled-links file with per-page
//! timings, and an optional ranked tally file. All files are UTF-8, one
//! record per line, human-readable.

use std::collections::{HashMap, HashSet};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Overwrites a file with one item per line
pub fn save_set(set: &HashSet<String>, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    for item in set {
        writeln!(file, "{}", item)?;
    }
    Ok(())
}

/// Appends one newline-terminated record to a file, creating it if needed
pub fn append_line(text: &str, path: &Path) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", text)?;
    Ok(())
}

/// Loads a file into a set of trimmed, non-empty lines
///
/// A missing file loads as the empty set; the crawler treats that the same
/// as an exhausted frontier.
pub fn load_set(path: &Path) -> std::io::Result<HashSet<String>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashSet::new()),
        Err(e) => return Err(e),
    };

    let reader = BufReader::new(file);
    let mut set = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            set.insert(trimmed.to_string());
        }
    }
    Ok(set)
}

/// Overwrites a file with `name (count)` lines, ranked by descending count
/// then case-insensitive ascending name
pub fn save_ranked_tally(tally: &HashMap<String, u64>, path: &Path) -> std::io::Result<()> {
    let mut entries: Vec<(&String, &u64)> = tally.iter().collect();
    entries.sort_by(|a, b| {
        b.1.cmp(a.1)
            .then_with(|| a.0.to_lowercase().cmp(&b.0.to_lowercase()))
    });

    let mut file = File::create(path)?;
    for (name, count) in entries {
        writeln!(file, "{} ({})", name, count)?;
    }
    Ok(())
}

/// Formats the append-only record for a successfully fetched page
pub fn timing_record(url: &str, elapsed_ms: u64) -> String {
    format!("{} ({}ms)", url, elapsed_ms)
}
