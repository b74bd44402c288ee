use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Working hours per week used for the hourly-cost conversion.
    #[serde(default = "default_hours_per_week")]
    pub hours_per_week: u32,
    /// Working weeks per month used for the hourly-cost conversion.
    #[serde(default = "default_weeks_per_month")]
    pub weeks_per_month: u32,
    /// Trailing window (days) for `dashboard` when --window is not given.
    #[serde(default = "default_window_days")]
    pub default_window_days: i64,
    /// Lookback (months) for `trends` when --months is not given.
    #[serde(default = "default_lookback_months")]
    pub default_lookback_months: u32,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_hours_per_week() -> u32 {
    40
}
fn default_weeks_per_month() -> u32 {
    4
}
fn default_window_days() -> i64 {
    30
}
fn default_lookback_months() -> u32 {
    6
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            hours_per_week: default_hours_per_week(),
            weeks_per_month: default_weeks_per_month(),
            default_window_days: default_window_days(),
            default_lookback_months: default_lookback_months(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("aipulse")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".aipulse")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("aipulse.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("aipulse.sqlite")
    }

    /// Monthly working hours used as the salary → hourly-cost divisor.
    pub fn hours_per_month(&self) -> f64 {
        (self.hours_per_week * self.weeks_per_month) as f64
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`. A missing file is the normal
    /// first-run case; a file that exists but cannot be read or parsed
    /// is reported before falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warning(format!(
                    "Cannot read config file {}: {}. Using defaults.",
                    path.display(),
                    e
                ));
                return Config::default();
            }
        };

        match serde_yaml::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Ignoring malformed config file {}: {}. Using defaults.",
                    path.display(),
                    e
                ));
                Config::default()
            }
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("Config serialization error: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_conf(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("{}_aipulse.conf", name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = env::temp_dir().join("no_such_aipulse.conf");
        fs::remove_file(&path).ok();

        let cfg = Config::load_from(&path);
        assert_eq!(cfg.hours_per_week, 40);
        assert_eq!(cfg.default_window_days, 30);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = temp_conf("malformed", "database: [not, closed\n  ::::");

        let cfg = Config::load_from(&path);
        assert_eq!(cfg.hours_per_month(), 160.0);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn valid_file_overrides_defaults() {
        let path = temp_conf(
            "valid",
            "database: /tmp/elsewhere.sqlite\ndefault_window_days: 7\n",
        );

        let cfg = Config::load_from(&path);
        assert_eq!(cfg.database, "/tmp/elsewhere.sqlite");
        assert_eq!(cfg.default_window_days, 7);
        // untouched fields keep their serde defaults
        assert_eq!(cfg.default_lookback_months, 6);

        fs::remove_file(&path).ok();
    }
}
