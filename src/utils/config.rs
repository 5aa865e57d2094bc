use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{anyhow, bail, Context, Result};
use simplelog::LevelFilter;
use crate::models::{ClassificationScheme, Subject};

// Runtime settings, read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub scheme: ClassificationScheme,
    pub subjects_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

// Descriptive scheme, no subjects file, info logging.
impl Default for Settings {
    fn default() -> Self {
        Settings {
            scheme: ClassificationScheme::default(),
            subjects_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

// Reads a variable, treating unset and blank the same way.
fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Settings {
    // Builds settings from the environment. Call `dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(scheme) = optional_var("GRADE_SCHEME") {
            settings.scheme = scheme.parse().context("Invalid GRADE_SCHEME")?;
        }
        if let Some(level) = optional_var("LOG_LEVEL") {
            settings.log_level = level
                .parse::<LevelFilter>()
                .map_err(|_| anyhow!("Invalid LOG_LEVEL '{}'", level))?;
        }
        settings.subjects_file = optional_var("SUBJECTS_FILE").map(PathBuf::from);

        Ok(settings)
    }
}

// Reads the initial subject list from a JSON array. The file is never written back.
pub fn load_subjects(path: &Path) -> Result<Vec<Subject>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read subjects file {}", path.display()))?;
    let subjects: Vec<Subject> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse subjects file {}", path.display()))?;

    // Ids must be unique for edits and removals to target a single entry.
    let mut seen = HashSet::new();
    for subject in &subjects {
        if !seen.insert(subject.id) {
            bail!("Subject id {} appears more than once in {}", subject.id, path.display());
        }
    }
    Ok(subjects)
}
