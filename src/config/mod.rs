use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_scoop_cadence")]
    pub scoop_cadence_hours: i64,
    #[serde(default = "default_clean_cadence")]
    pub clean_cadence_days: i64,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
    #[serde(default = "default_notify_delay")]
    pub notify_delay_secs: u64,
}

fn default_scoop_cadence() -> i64 {
    48
}
fn default_clean_cadence() -> i64 {
    21
}
fn default_notifications() -> bool {
    true
}
fn default_notify_delay() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            scoop_cadence_hours: default_scoop_cadence(),
            clean_cadence_days: default_clean_cadence(),
            notifications: default_notifications(),
            notify_delay_secs: default_notify_delay(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rlitterbox")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rlitterbox")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rlitterbox.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rlitterbox.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed file is reported and treated as absent: configuration
    /// trouble must never keep the tracker from starting.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Malformed config file {} ({}); using defaults.",
                        path.display(),
                        e
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Could not read config file {} ({}); using defaults.",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    /// Report config keys missing from the file on disk (they would be
    /// filled by serde defaults on load).
    pub fn missing_fields() -> Vec<&'static str> {
        let expected = [
            "database",
            "scoop_cadence_hours",
            "clean_cadence_days",
            "notifications",
            "notify_delay_secs",
        ];

        let path = Self::config_file();
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return expected.to_vec(),
        };

        let value: serde_yaml::Value = match serde_yaml::from_str(&content) {
            Ok(v) => v,
            Err(_) => return expected.to_vec(),
        };

        expected
            .into_iter()
            .filter(|k| value.get(k).is_none())
            .collect()
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
                .map_err(|e| io::Error::other(e.to_string()))?;
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
