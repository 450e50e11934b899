use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use services::{Clock, LessonIdPolicy, ServicesConfig};

use crate::cli::GlobalArgs;

pub const DEFAULT_DB_URL: &str = "sqlite://course.sqlite3";

#[derive(Debug)]
pub enum ConfigError {
    InvalidDbUrl { raw: String },
    Io(std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw:?}"),
            ConfigError::Io(err) => write!(f, "cannot prepare database file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

/// Settings resolved from flags, environment, and defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_url: String,
    pub lesson_policy: LessonIdPolicy,
    pub form_delay: Duration,
}

impl AppConfig {
    pub fn from_args(args: &GlobalArgs) -> Result<Self, ConfigError> {
        Ok(Self {
            db_url: normalize_sqlite_url(&args.db)?,
            lesson_policy: if args.strict_lessons {
                LessonIdPolicy::Strict
            } else {
                LessonIdPolicy::Permissive
            },
            form_delay: Duration::from_millis(args.form_delay_ms),
        })
    }

    #[must_use]
    pub fn services_config(&self) -> ServicesConfig {
        ServicesConfig {
            clock: Clock::System,
            lesson_policy: self.lesson_policy,
            form_delay: self.form_delay,
        }
    }
}

/// Turn `course.db`, `sqlite:course.db` or `sqlite://course.db` into an
/// absolute `sqlite://` URL. In-memory URLs pass through.
pub fn normalize_sqlite_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidDbUrl {
            raw: raw.to_owned(),
        });
    }
    if trimmed == "sqlite::memory:" {
        return Ok(trimmed.to_owned());
    }

    let rest = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);
    let (path_str, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    if path_str.is_empty() {
        return Err(ConfigError::InvalidDbUrl {
            raw: raw.to_owned(),
        });
    }

    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    Ok(match query {
        Some(query) => format!("sqlite://{}?{query}", absolute.display()),
        None => format!("sqlite://{}", absolute.display()),
    })
}

/// Create the database file (and its directory) so `SQLite` can open it.
pub fn prepare_sqlite_file(db_url: &str) -> Result<(), ConfigError> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ConfigError::InvalidDbUrl {
            raw: db_url.to_owned(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ConfigError::InvalidDbUrl {
            raw: db_url.to_owned(),
        });
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_become_absolute() {
        let url = normalize_sqlite_url("data/course.sqlite3").unwrap();
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/course.sqlite3"), "{url}");

        let prefixed = normalize_sqlite_url("sqlite:data/course.sqlite3").unwrap();
        assert_eq!(prefixed, url);
    }

    #[test]
    fn absolute_urls_keep_query() {
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/c.db?mode=rwc").unwrap(),
            "sqlite:///tmp/c.db?mode=rwc"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
    }

    #[test]
    fn blank_urls_are_rejected() {
        assert!(matches!(
            normalize_sqlite_url("  "),
            Err(ConfigError::InvalidDbUrl { .. })
        ));
        assert!(matches!(
            normalize_sqlite_url("sqlite://"),
            Err(ConfigError::InvalidDbUrl { .. })
        ));
    }

    #[test]
    fn prepare_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("course-app-{}", std::process::id()));
        let file = dir.join("nested").join("progress.sqlite3");
        let url = format!("sqlite://{}", file.display());

        prepare_sqlite_file(&url).unwrap();
        assert!(file.exists());
        prepare_sqlite_file(&url).unwrap();

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn config_maps_flags() {
        let args = GlobalArgs {
            db: "sqlite::memory:".to_owned(),
            strict_lessons: true,
            form_delay_ms: 0,
            verbose: false,
        };
        let config = AppConfig::from_args(&args).unwrap();
        assert_eq!(config.lesson_policy, LessonIdPolicy::Strict);
        assert!(config.services_config().form_delay.is_zero());
    }
}
