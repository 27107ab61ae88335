//! Application configuration
//!
//! Persists the data directory and dataset file names through confy and
//! provides a platform-specific default directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

pub const APP_NAME: &str = "courtside";
const CONFIG_NAME: &str = "config";

/// File names of the four startup datasets, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetFiles {
    #[serde(default = "default_advanced_file")]
    pub advanced: String,
    #[serde(default = "default_line_series_file")]
    pub line_series: String,
    #[serde(default = "default_box_score_file")]
    pub box_score: String,
    #[serde(default = "default_team_lookup_file")]
    pub team_lookup: String,
}

fn default_advanced_file() -> String {
    "advanced.csv".to_string()
}

fn default_line_series_file() -> String {
    "line_graph_data.csv".to_string()
}

fn default_box_score_file() -> String {
    "all_nba.csv".to_string()
}

fn default_team_lookup_file() -> String {
    "teamlookup.json".to_string()
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            advanced: default_advanced_file(),
            line_series: default_line_series_file(),
            box_score: default_box_score_file(),
            team_lookup: default_team_lookup_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the dataset files.
    #[serde(default = "default_data_directory")]
    pub data_directory: String,
    #[serde(default)]
    pub datasets: DatasetFiles,
}

fn default_data_directory() -> String {
    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_default()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            datasets: DatasetFiles::default(),
        }
    }
}

impl AppConfig {
    pub fn advanced_path(&self) -> PathBuf {
        PathBuf::from(&self.data_directory).join(&self.datasets.advanced)
    }

    pub fn line_series_path(&self) -> PathBuf {
        PathBuf::from(&self.data_directory).join(&self.datasets.line_series)
    }

    pub fn box_score_path(&self) -> PathBuf {
        PathBuf::from(&self.data_directory).join(&self.datasets.box_score)
    }

    pub fn team_lookup_path(&self) -> PathBuf {
        PathBuf::from(&self.data_directory).join(&self.datasets.team_lookup)
    }
}

/// Extension trait for AppConfig persistence
pub trait AppConfigExt {
    fn load() -> Self;
    fn save(self) -> Result<(), ConfigError>;
}

impl AppConfigExt for AppConfig {
    fn load() -> Self {
        confy::load(APP_NAME, CONFIG_NAME).unwrap_or_default()
    }

    fn save(self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_paths_join_data_directory() {
        let config = AppConfig {
            data_directory: "/tmp/courtside".to_string(),
            datasets: DatasetFiles::default(),
        };
        assert_eq!(
            config.advanced_path(),
            PathBuf::from("/tmp/courtside/advanced.csv")
        );
        assert_eq!(
            config.team_lookup_path(),
            PathBuf::from("/tmp/courtside/teamlookup.json")
        );
    }

    #[test]
    fn default_files_match_dashboard_inputs() {
        let files = DatasetFiles::default();
        assert_eq!(files.line_series, "line_graph_data.csv");
        assert_eq!(files.box_score, "all_nba.csv");
    }
}
