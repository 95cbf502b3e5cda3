//! Settings file persistence.
//!
//! One comma-separated line. Inside the custom charset, `,` is written as
//! `|,`, `|` as `||`, and line breaks as `|n` / `|r`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::Settings;

const FIELDS: usize = 11;

pub fn save_to(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{},{}\n",
        settings.mode,
        settings.length,
        settings.uppercase,
        settings.lowercase,
        settings.numbers,
        settings.symbols,
        escape(&settings.custom_charset),
        settings.word_count,
        settings.append_number,
        settings.theme,
        settings.show_details,
    );

    file.write_all(data.as_bytes())?;
    info!(path = %path.display(), "saved settings");
    Ok(())
}

pub fn load_from(path: &Path) -> std::io::Result<Settings> {
    let defaults = Settings::default();

    if !path.exists() {
        save_to(&defaults, path)?;
        return Ok(defaults);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        save_to(&defaults, path)?;
        return Ok(defaults);
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        warn!(
            path = %path.display(),
            fields = parts.len(),
            "malformed settings file, restoring defaults"
        );
        save_to(&defaults, path)?;
        return Ok(defaults);
    }

    Ok(Settings {
        mode: parts[0].parse().unwrap_or(defaults.mode),
        length: parts[1].parse().unwrap_or(defaults.length),
        uppercase: parts[2].parse().unwrap_or(defaults.uppercase),
        lowercase: parts[3].parse().unwrap_or(defaults.lowercase),
        numbers: parts[4].parse().unwrap_or(defaults.numbers),
        symbols: parts[5].parse().unwrap_or(defaults.symbols),
        custom_charset: parts[6].clone(),
        word_count: parts[7].parse().unwrap_or(defaults.word_count),
        append_number: parts[8].parse().unwrap_or(defaults.append_number),
        theme: parts[9].parse().unwrap_or(defaults.theme),
        show_details: parts[10].parse().unwrap_or(defaults.show_details),
    })
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/passgauge/settings", home))
}

fn escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            '\n' => "|n".to_string(),
            '\r' => "|r".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(match c {
                'n' => '\n',
                'r' => '\r',
                other => other,
            });
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}
