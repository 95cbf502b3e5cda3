//! JSON and CSV export of a generated credential and its strength.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use serde::Serialize;
use tracing::info;
use zeroize::Zeroize;

use crate::Result;
use crate::pass::{Mode, StrengthReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthSummary {
    pub rating: String,
    pub entropy: String,
    pub character_types: String,
}

/// One exported credential.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record<'a> {
    pub password: &'a str,
    pub length: usize,
    pub mode: Mode,
    pub timestamp: String,
    pub strength: StrengthSummary,
}

impl<'a> Record<'a> {
    pub fn new(password: &'a str, mode: Mode, report: &StrengthReport, at: DateTime<Utc>) -> Self {
        Self {
            password,
            length: password.chars().count(),
            mode,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            strength: StrengthSummary {
                rating: report.rating().to_string(),
                entropy: report.entropy_display(),
                character_types: report.character_types(),
            },
        }
    }
}

pub fn to_json(record: &Record<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Header plus one row, every cell double-quoted. Quotes inside cells are kept as is.
pub fn to_csv(record: &Record<'_>) -> String {
    let header = [
        "Password",
        "Length",
        "Mode",
        "Strength",
        "Entropy",
        "Character Types",
        "Timestamp",
    ]
    .map(String::from);
    let row = [
        record.password.to_string(),
        record.length.to_string(),
        record.mode.to_string(),
        record.strength.rating.clone(),
        record.strength.entropy.clone(),
        record.strength.character_types.clone(),
        record.timestamp.clone(),
    ];

    [header, row]
        .iter()
        .map(|cells| {
            cells
                .iter()
                .map(|cell| format!("\"{cell}\""))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn file_name(format: Format, millis: i64) -> String {
    format!("password-{}.{}", millis, format.extension())
}

pub fn render(format: Format, record: &Record<'_>) -> Result<String> {
    match format {
        Format::Json => to_json(record),
        Format::Csv => Ok(to_csv(record)),
    }
}

/// Write `record` into `dir`, named after `at`. Returns the written path.
pub fn write(dir: &Path, format: Format, record: &Record<'_>, at: DateTime<Utc>) -> Result<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    let path = dir.join(file_name(format, at.timestamp_millis()));

    let mut contents = render(format, record)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;
    let written = file.write_all(contents.as_bytes());
    contents.zeroize();
    written?;

    info!(path = %path.display(), format = format.extension(), "exported credential");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::strength::score_from_password;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 15).unwrap()
    }

    fn record(password: &str) -> Record<'_> {
        let report = score_from_password(password, Some(88));
        Record::new(password, Mode::Password, &report, fixed_time())
    }

    #[test]
    fn json_schema() {
        let json = to_json(&record("Ab3!Ab3!Ab3!")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["password"], "Ab3!Ab3!Ab3!");
        assert_eq!(value["length"], 12);
        assert_eq!(value["mode"], "password");
        assert_eq!(value["timestamp"], "2024-05-01T12:30:15.000Z");
        assert_eq!(value["strength"]["rating"], "Strong");
        assert_eq!(value["strength"]["entropy"], "77.51 bits");
        assert_eq!(
            value["strength"]["characterTypes"],
            "Uppercase, Lowercase, Numbers, Symbols"
        );
        assert!(json.contains("\n  \"password\""));
    }

    #[test]
    fn csv_layout() {
        let csv = to_csv(&record("abcdef"));
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#""Password","Length","Mode","Strength","Entropy","Character Types","Timestamp""#
        );
        assert_eq!(
            lines[1],
            r#""abcdef","6","password","Weak","38.76 bits","Lowercase","2024-05-01T12:30:15.000Z""#
        );
    }

    #[test]
    fn writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), Format::Csv, &record("abcdef"), fixed_time()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("password-{}.csv", fixed_time().timestamp_millis())
        );
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("\"Password\""));
    }
}
