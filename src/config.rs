use std::path::Path;

use anyhow::{Context, Result, bail};
use cadence_calendar::CalendarDate;
use cadence_recurrence::{Task, parse_date};
use serde::Deserialize;
use tracing::debug;

/// Top-level cadence configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CadenceConfig {
    /// Reference clock settings.
    #[serde(default)]
    pub clock: ClockToml,

    /// Tasks listed by `cadence agenda`.
    #[serde(default)]
    pub tasks: Vec<TaskToml>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockToml {
    /// Fixed reference date (YYYYMMDD) used instead of today.
    pub today: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskToml {
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub repeat: String,
}

impl From<TaskToml> for Task {
    fn from(t: TaskToml) -> Self {
        Task {
            title: t.title,
            date: t.date,
            comment: t.comment,
            repeat: t.repeat,
        }
    }
}

impl CadenceConfig {
    /// Reference date: the configured clock if set, otherwise today in UTC.
    pub fn today(&self) -> Result<CalendarDate> {
        match &self.clock.today {
            Some(today) => parse_date(today).context("invalid [clock].today in config"),
            None => CalendarDate::today_utc().context("system clock outside 0..=9999"),
        }
    }
}

/// Load the config at `path`.
///
/// A missing file yields the default config unless `required` is set.
pub fn load(path: &Path, required: bool) -> Result<CadenceConfig> {
    if !path.exists() {
        if required {
            bail!("config file not found: {}", path.display());
        }
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CadenceConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_clock_and_tasks() {
        let file = write_config(
            r#"
[clock]
today = "20240104"

[[tasks]]
title = "Water plants"
date = "20240101"
repeat = "d 3"

[[tasks]]
title = "Dentist"
date = "20240301"
comment = "bring card"
"#,
        );
        let config = load(file.path(), true).unwrap();
        assert_eq!(config.today().unwrap().to_string(), "20240104");
        assert_eq!(config.tasks.len(), 2);
        assert_eq!(config.tasks[0].repeat, "d 3");
        assert_eq!(config.tasks[1].repeat, "");
        assert_eq!(config.tasks[1].comment, "bring card");
    }

    #[test]
    fn missing_optional_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("cadence.toml"), false).unwrap();
        assert!(config.clock.today.is_none());
        assert!(config.tasks.is_empty());
        assert!(config.today().is_ok());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("cadence.toml"), true).unwrap_err();
        assert!(err.to_string().starts_with("config file not found"));
    }

    #[test]
    fn unknown_fields_rejected() {
        let file = write_config("[clock]\nnow = \"20240101\"\n");
        assert!(load(file.path(), true).is_err());
    }

    #[test]
    fn invalid_clock_date() {
        let file = write_config("[clock]\ntoday = \"2024-01-01\"\n");
        let config = load(file.path(), true).unwrap();
        let err = config.today().unwrap_err();
        assert_eq!(err.to_string(), "invalid [clock].today in config");
    }

    #[test]
    fn task_conversion_keeps_fields() {
        let task = Task::from(TaskToml {
            title: "Pay rent".to_string(),
            date: "20240101".to_string(),
            comment: String::new(),
            repeat: "m 1".to_string(),
        });
        assert_eq!(task.title, "Pay rent");
        assert_eq!(task.repeat, "m 1");
    }
}
