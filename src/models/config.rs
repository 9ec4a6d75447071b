use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::GrabError;

use super::problem::ExampleMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub example_mode: ExampleMode,
    #[serde(default)]
    pub linked_list: bool,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub problems_grabbed: u32,
    #[serde(default)]
    pub last_grabbed_at: Option<String>,
    #[serde(default)]
    pub last_problem: Option<String>,
}

impl UserConfig {
    pub fn record_grab(&mut self, problem: &str) {
        self.problems_grabbed += 1;
        self.last_grabbed_at = Some(chrono::Local::now().to_rfc3339());
        self.last_problem = Some(problem.to_string());
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("leetgrab").join("config.json"))
}

pub fn load_config() -> UserConfig {
    let Some(path) = get_config_path() else {
        return UserConfig::default();
    };
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Unreadable config, using defaults");
            UserConfig::default()
        }
    }
}

fn parse_config(contents: &str) -> UserConfig {
    serde_json::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid config, using defaults");
        UserConfig::default()
    })
}

pub fn save_config(config: &UserConfig) -> Result<(), GrabError> {
    let path = get_config_path()
        .ok_or_else(|| GrabError::Config("could not determine home directory".to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = UserConfig::default();
        assert_eq!(cfg.example_mode, ExampleMode::MarkerScan);
        assert!(!cfg.linked_list);
        assert_eq!(cfg.problems_grabbed, 0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let cfg = parse_config(r#"{"example_mode": "positional"}"#);
        assert_eq!(cfg.example_mode, ExampleMode::Positional);
        assert!(!cfg.linked_list);
        assert!(cfg.output_dir.is_none());
    }

    #[test]
    fn test_garbage_config_falls_back() {
        assert_eq!(parse_config("not json"), UserConfig::default());
    }

    #[test]
    fn test_record_grab() {
        let mut cfg = UserConfig::default();
        cfg.record_grab("E_389_Find_the_Difference");
        cfg.record_grab("E_389_Find_the_Difference");
        assert_eq!(cfg.problems_grabbed, 2);
        assert!(cfg.last_grabbed_at.is_some());
        assert_eq!(cfg.last_problem.as_deref(), Some("E_389_Find_the_Difference"));
    }
}
